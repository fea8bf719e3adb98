//! Ordered keyword classification. The rule table is evaluated top to
//! bottom with early exit, so more specific phrasings must be listed before
//! the general keywords they contain ("limpar carrinho" before "carrinho",
//! "minhas assinaturas" before "assinatura").

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    ListProducts,
    ListSubscriptions,
    HirePlan,
    CancelSubscription,
    ListPlans,
    Search,
    AddToCart,
    ClearCart,
    ViewCart,
    Checkout,
    ListByCategory,
    GetPrice,
    GetStock,
    ExplainService,
    ApiInfo,
    SupportInfo,
    PaymentInfo,
    GeneralFallback,
}

/// Substring predicates over the normalized message.
#[derive(Clone, Copy, Debug)]
pub enum Predicate {
    Contains(&'static str),
    AnyOf(&'static [&'static str]),
    /// Every listed substring must be present.
    AllOf(&'static [&'static str]),
    /// The first substring plus any one of the second set.
    WithAny(&'static str, &'static [&'static str]),
}

impl Predicate {
    fn matches(&self, message: &str) -> bool {
        match self {
            Self::Contains(needle) => message.contains(needle),
            Self::AnyOf(needles) => needles.iter().any(|needle| message.contains(needle)),
            Self::AllOf(needles) => needles.iter().all(|needle| message.contains(needle)),
            Self::WithAny(needle, any) => {
                message.contains(needle) && any.iter().any(|other| message.contains(other))
            }
        }
    }
}

/// The dispatch table. Keywords are written in normalized form (lowercase,
/// diacritics folded), matching the pipeline every message goes through.
const RULES: &[(Predicate, Intent)] = &[
    (Predicate::AnyOf(&["ola", "oi", "bom dia", "boa tarde", "hey"]), Intent::Greeting),
    (Predicate::AnyOf(&["produtos", "catalogo"]), Intent::ListProducts),
    (Predicate::AnyOf(&["minhas assinaturas", "meus planos"]), Intent::ListSubscriptions),
    (Predicate::AnyOf(&["contratar", "assinar"]), Intent::HirePlan),
    (Predicate::Contains("cancelar"), Intent::CancelSubscription),
    (Predicate::AnyOf(&["planos", "assinatura", "precos"]), Intent::ListPlans),
    (Predicate::AnyOf(&["buscar", "procurar"]), Intent::Search),
    (Predicate::AllOf(&["adicionar", "carrinho"]), Intent::AddToCart),
    (Predicate::AllOf(&["limpar", "carrinho"]), Intent::ClearCart),
    (Predicate::Contains("carrinho"), Intent::ViewCart),
    (Predicate::AnyOf(&["finalizar", "comprar"]), Intent::Checkout),
    (Predicate::Contains("categoria"), Intent::ListByCategory),
    (Predicate::Contains("preco"), Intent::GetPrice),
    (Predicate::Contains("estoque"), Intent::GetStock),
    (Predicate::WithAny("ia", &["como", "funciona"]), Intent::ExplainService),
    (Predicate::Contains("api"), Intent::ApiInfo),
    (Predicate::AnyOf(&["suporte", "ajuda"]), Intent::SupportInfo),
    (Predicate::Contains("pagamento"), Intent::PaymentInfo),
];

/// First matching rule wins; later rules are never evaluated.
pub fn classify(normalized_message: &str) -> Intent {
    RULES
        .iter()
        .find(|(predicate, _)| predicate.matches(normalized_message))
        .map(|(_, intent)| *intent)
        .unwrap_or(Intent::GeneralFallback)
}

#[cfg(test)]
mod tests {
    use balcao_core::text::normalize;

    use super::{classify, Intent};

    fn classify_raw(message: &str) -> Intent {
        classify(&normalize(message))
    }

    #[test]
    fn greeting_outranks_every_later_keyword() {
        assert_eq!(classify_raw("ola"), Intent::Greeting);
        assert_eq!(classify_raw("Olá, quero ver o carrinho"), Intent::Greeting);
        assert_eq!(classify_raw("bom dia, produtos por favor"), Intent::Greeting);
    }

    #[test]
    fn accented_and_plain_spellings_classify_identically() {
        assert_eq!(classify_raw("catálogo"), classify_raw("catalogo"));
        assert_eq!(classify_raw("preço 3"), classify_raw("preco 3"));
    }

    #[test]
    fn cart_rules_resolve_specific_before_general() {
        assert_eq!(classify_raw("adicionar 1 carrinho"), Intent::AddToCart);
        assert_eq!(classify_raw("limpar carrinho"), Intent::ClearCart);
        assert_eq!(classify_raw("carrinho"), Intent::ViewCart);
    }

    #[test]
    fn subscription_rules_resolve_specific_before_general() {
        assert_eq!(classify_raw("minhas assinaturas"), Intent::ListSubscriptions);
        assert_eq!(classify_raw("meus planos"), Intent::ListSubscriptions);
        assert_eq!(classify_raw("assinatura"), Intent::ListPlans);
        assert_eq!(classify_raw("planos"), Intent::ListPlans);
        assert_eq!(classify_raw("contratar 2"), Intent::HirePlan);
        assert_eq!(classify_raw("cancelar 2"), Intent::CancelSubscription);
    }

    #[test]
    fn plural_precos_lists_plans_but_singular_queries_price() {
        assert_eq!(classify_raw("preços"), Intent::ListPlans);
        assert_eq!(classify_raw("preço 1"), Intent::GetPrice);
    }

    #[test]
    fn remaining_table_rows_fire() {
        assert_eq!(classify_raw("buscar nike"), Intent::Search);
        assert_eq!(classify_raw("finalizar"), Intent::Checkout);
        assert_eq!(classify_raw("comprar agora"), Intent::Checkout);
        assert_eq!(classify_raw("categoria roupas"), Intent::ListByCategory);
        assert_eq!(classify_raw("estoque 5"), Intent::GetStock);
        assert_eq!(classify_raw("como funciona a ia"), Intent::ExplainService);
        assert_eq!(classify_raw("tem api?"), Intent::ApiInfo);
        assert_eq!(classify_raw("preciso de suporte"), Intent::SupportInfo);
        assert_eq!(classify_raw("formas de pagamento"), Intent::PaymentInfo);
    }

    #[test]
    fn unmatched_text_falls_through() {
        assert_eq!(classify_raw("qual a previsao do tempo"), Intent::GeneralFallback);
        assert_eq!(classify_raw(""), Intent::GeneralFallback);
    }
}
