//! End-to-end conversations against a fresh runtime: raw text in, reply
//! text out, with session state inspected between turns.

use balcao_agent::AgentRuntime;
use balcao_core::config::ReplyStyle;
use balcao_core::domain::payment::{PaymentMethod, PaymentStatus};
use balcao_core::payment::PaymentRequest;
use balcao_core::sessions::SessionId;
use rand::rngs::mock::StepRng;
use rust_decimal::Decimal;

fn runtime() -> AgentRuntime {
    AgentRuntime::new(ReplyStyle::Plain)
}

fn session(name: &str) -> SessionId {
    SessionId(name.to_owned())
}

#[test]
fn add_then_view_enumerates_the_line_with_unit_price_as_subtotal() {
    let mut agent = runtime();
    let user = session("u1");

    let added = agent.handle_message(&user, "adicionar 1 carrinho");
    assert!(added.contains("iPhone 15 Pro adicionado ao carrinho"), "{added}");

    let state = agent.session(&user).unwrap();
    assert_eq!(state.cart.lines().len(), 1);
    assert_eq!(state.cart.lines()[0].quantity, 1);

    let view = agent.handle_message(&user, "carrinho");
    assert!(view.contains("iPhone 15 Pro x1 - R$ 1299.99"), "{view}");
    assert!(view.contains("TOTAL: R$ 1299.99"), "{view}");
}

#[test]
fn checkout_confirms_total_and_empties_the_cart() {
    let mut agent = runtime();
    let user = session("u2");

    agent.handle_message(&user, "adicionar 3 carrinho");
    agent.handle_message(&user, "adicionar 3 carrinho");

    let confirmation = agent.handle_message(&user, "finalizar");
    assert!(confirmation.contains("COMPRA FINALIZADA"), "{confirmation}");
    assert!(confirmation.contains("R$ 599.98"), "{confirmation}");

    let state = agent.session(&user).unwrap();
    assert!(state.cart.is_empty());
    assert_eq!(state.orders.len(), 1);
    assert_eq!(state.orders[0].total, Decimal::new(599_98, 2));

    let again = agent.handle_message(&user, "finalizar");
    assert!(again.contains("carrinho está vazio"), "{again}");
    assert_eq!(agent.session(&user).unwrap().orders.len(), 1);
}

#[test]
fn cancel_of_unknown_subscription_reports_not_found_and_changes_nothing() {
    let mut agent = runtime();
    let user = session("u3");

    let reply = agent.handle_message(&user, "cancelar 9");
    assert!(reply.contains("Assinatura não encontrada"), "{reply}");
    assert!(agent.session(&user).unwrap().subscriptions.is_empty());
}

#[test]
fn subscription_lifecycle_over_the_text_surface() {
    let mut agent = runtime();
    let user = session("u4");

    let hired = agent.handle_message(&user, "contratar 2");
    assert!(hired.contains("ASSINATURA CONTRATADA"), "{hired}");
    assert!(hired.contains("WhatsApp Pro"), "{hired}");
    assert!(hired.contains("R$ 89.90"), "{hired}");

    let conflict = agent.handle_message(&user, "contratar 1");
    assert!(conflict.contains("já possui uma assinatura ativa"), "{conflict}");

    let listed = agent.handle_message(&user, "minhas assinaturas");
    assert!(listed.contains("WhatsApp Pro"), "{listed}");

    let cancelled = agent.handle_message(&user, "cancelar 2");
    assert!(cancelled.contains("cancelada com sucesso"), "{cancelled}");

    let empty = agent.handle_message(&user, "minhas assinaturas");
    assert!(empty.contains("não possui assinaturas ativas"), "{empty}");
}

#[test]
fn greeting_precedence_and_fallback_echo() {
    let mut agent = runtime();
    let user = session("u5");

    let greeting = agent.handle_message(&user, "Olá! quero ver o carrinho");
    assert!(greeting.contains("Bem-vindo"), "{greeting}");

    let fallback = agent.handle_message(&user, "xyzzy");
    assert!(fallback.contains("'xyzzy'"), "{fallback}");
}

#[test]
fn sessions_do_not_share_carts() {
    let mut agent = runtime();
    let alice = session("alice");
    let bob = session("bob");

    agent.handle_message(&alice, "adicionar 5 carrinho");

    let bob_view = agent.handle_message(&bob, "carrinho");
    assert!(bob_view.contains("carrinho está vazio"), "{bob_view}");

    let alice_view = agent.handle_message(&alice, "carrinho");
    assert!(alice_view.contains("Fone Bluetooth"), "{alice_view}");
}

#[test]
fn search_and_category_flow() {
    let mut agent = runtime();
    let user = session("u6");

    let found = agent.handle_message(&user, "buscar nike");
    assert!(found.contains("Nike Air Max"), "{found}");

    let missing_term = agent.handle_message(&user, "buscar");
    assert!(missing_term.contains("Por favor, informe"), "{missing_term}");

    let category = agent.handle_message(&user, "categoria roupas");
    assert!(category.contains("Camiseta Premium"), "{category}");
    assert!(category.contains("Jaqueta Jeans"), "{category}");

    let none = agent.handle_message(&user, "buscar geladeira");
    assert!(none.contains("Nenhum produto encontrado"), "{none}");
}

#[test]
fn price_and_stock_answers_come_from_the_catalog() {
    let mut agent = runtime();
    let user = session("u7");

    let price = agent.handle_message(&user, "preço 4");
    assert!(price.contains("Camiseta Premium: R$ 79.99"), "{price}");

    let stock = agent.handle_message(&user, "estoque 8");
    assert!(stock.contains("16 unidades"), "{stock}");

    let unknown = agent.handle_message(&user, "preço 42");
    assert!(unknown.contains("Produto não encontrado"), "{unknown}");
}

#[test]
fn payment_interface_renders_an_instant_transfer() {
    let agent = runtime();
    let request = PaymentRequest {
        method: PaymentMethod::InstantTransfer,
        amount: Decimal::new(100_00, 2),
        card_number: None,
    };

    let attempt = agent.simulate_payment(&request, &mut StepRng::new(0, 0)).unwrap();
    assert_eq!(attempt.status, PaymentStatus::Approved);
    assert_eq!(attempt.final_amount, Decimal::new(95_00, 2));

    let rendered = agent.render_payment(&attempt);
    assert!(rendered.contains("Pagamento aprovado"), "{rendered}");
    assert!(rendered.contains("PIX"), "{rendered}");
}

#[test]
fn card_payment_without_number_is_invalid_input() {
    let agent = runtime();
    let request = PaymentRequest {
        method: PaymentMethod::Card,
        amount: Decimal::TEN,
        card_number: None,
    };
    assert!(agent.simulate_payment(&request, &mut StepRng::new(0, 0)).is_err());
}
