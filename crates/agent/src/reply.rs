//! Pure rendering of engine outcomes into PT-BR reply text. Presentation
//! style (emoji or plain markers) is the only thing that varies; there is
//! one engine behind both.

use balcao_core::cart::CartView;
use balcao_core::catalog::Catalog;
use balcao_core::config::ReplyStyle;
use balcao_core::domain::order::Order;
use balcao_core::domain::payment::{PaymentAttempt, PaymentPayload, PaymentStatus};
use balcao_core::domain::plan::{BillingPeriod, Plan};
use balcao_core::domain::product::Product;
use balcao_core::domain::subscription::Subscription;
use balcao_core::errors::{EngineError, Entity};

#[derive(Clone, Copy, Debug)]
pub struct Formatter {
    style: ReplyStyle,
}

impl Formatter {
    pub fn new(style: ReplyStyle) -> Self {
        Self { style }
    }

    fn tag(&self, emoji: &str, plain: &str) -> String {
        match self.style {
            ReplyStyle::Emoji => emoji.to_owned(),
            ReplyStyle::Plain => plain.to_owned(),
        }
    }

    pub fn greeting(&self) -> String {
        format!(
            "{} Olá! Bem-vindo à nossa loja virtual! Sou seu assistente pessoal de compras. Posso ajudar com:\n\n• Ver catálogo de produtos\n• Buscar itens específicos\n• Gerenciar seu carrinho\n• Contratar planos de assinatura\n• Consultar preços e estoque\n• Finalizar pedidos\n\nO que gostaria de fazer hoje?",
            self.tag("🛍️", ">>")
        )
    }

    /// Catalog grouped by category, categories in first-seen order.
    pub fn product_catalog(&self, catalog: &Catalog) -> String {
        let mut groups: Vec<(&str, Vec<&Product>)> = Vec::new();
        for product in catalog.products() {
            match groups.iter_mut().find(|(category, _)| *category == product.category) {
                Some((_, members)) => members.push(product),
                None => groups.push((&product.category, vec![product])),
            }
        }

        let mut out = format!("{} CATÁLOGO DE PRODUTOS\n\n", self.tag("🛍️", "**"));
        for (category, members) in groups {
            out.push_str(&format!("{} {}\n", self.tag("📂", ">>"), category.to_uppercase()));
            for product in members {
                out.push_str(&format!("   {}\n", product_line(product)));
            }
            out.push('\n');
        }
        out
    }

    pub fn search_results(&self, term: &str, products: &[&Product]) -> String {
        if products.is_empty() {
            return format!(
                "{} Nenhum produto encontrado para '{term}'",
                self.tag("❌", "!!")
            );
        }
        let lines: Vec<String> = products.iter().map(|product| product_line(product)).collect();
        format!(
            "{} Produtos encontrados para '{term}':\n{}",
            self.tag("🔍", ">>"),
            lines.join("\n")
        )
    }

    pub fn category_results(&self, category: &str, products: &[&Product]) -> String {
        if products.is_empty() {
            return format!(
                "{} Nenhum produto encontrado na categoria '{category}'",
                self.tag("❌", "!!")
            );
        }
        let lines: Vec<String> = products.iter().map(|product| product_line(product)).collect();
        format!(
            "{} Produtos da categoria '{category}':\n{}",
            self.tag("📂", ">>"),
            lines.join("\n")
        )
    }

    pub fn price(&self, product: &Product) -> String {
        format!("{} {}: R$ {:.2}", self.tag("💰", ">>"), product.name, product.unit_price)
    }

    pub fn stock(&self, product: &Product) -> String {
        format!(
            "{} {}: {} unidades disponíveis",
            self.tag("📦", ">>"),
            product.name,
            product.stock
        )
    }

    pub fn added_to_cart(&self, product: &Product) -> String {
        format!("{} {} adicionado ao carrinho!", self.tag("✅", "OK"), product.name)
    }

    pub fn cart(&self, view: &CartView<'_>) -> String {
        if view.lines.is_empty() {
            return format!(
                "{} Seu carrinho está vazio.\n\n{} Dica: digite 'produtos' para ver nosso catálogo!",
                self.tag("🛒", ">>"),
                self.tag("💡", "--")
            );
        }

        let mut out = format!("{} SEU CARRINHO DE COMPRAS\n\n", self.tag("🛒", "**"));
        for line in &view.lines {
            out.push_str(&format!(
                "• {} x{} - R$ {:.2}\n",
                line.product.name, line.quantity, line.subtotal
            ));
        }
        out.push_str(&format!("\n{} TOTAL: R$ {:.2}\n\n", self.tag("💰", "**"), view.total));
        out.push_str(&format!(
            "{} Digite 'finalizar' para concluir a compra ou 'limpar carrinho' para esvaziar.",
            self.tag("💡", "--")
        ));
        out
    }

    pub fn cart_cleared(&self, had_items: bool) -> String {
        if had_items {
            format!("{} Carrinho limpo com sucesso!", self.tag("🗑️", "OK"))
        } else {
            format!("{} Seu carrinho já está vazio.", self.tag("🛒", ">>"))
        }
    }

    pub fn order_confirmed(&self, order: &Order) -> String {
        format!(
            "{} COMPRA FINALIZADA COM SUCESSO!\n\nTotal pago: R$ {:.2}\nPedido registrado em: {}\n\nObrigado pela preferência! {}",
            self.tag("✅", "**"),
            order.total,
            order.placed_at.format("%d/%m/%Y %H:%M"),
            self.tag("🎉", "")
        )
        .trim_end()
        .to_owned()
    }

    /// Plan listing split monthly first, then annual, mirroring the sales
    /// pitch of the original platform.
    pub fn plan_catalog(&self, catalog: &Catalog) -> String {
        let mut out = format!("{} PLANOS DE ASSINATURA DISPONÍVEIS\n\n", self.tag("💎", "**"));

        out.push_str(&format!("{} PLANOS MENSAIS:\n", self.tag("📅", ">>")));
        for plan in catalog.plans().iter().filter(|plan| plan.billing_period == BillingPeriod::Monthly)
        {
            out.push_str(&plan_block(plan, "mês"));
        }

        out.push_str(&format!(
            "{} PLANOS ANUAIS (economia de 2 meses):\n",
            self.tag("🎯", ">>")
        ));
        for plan in catalog.plans().iter().filter(|plan| plan.billing_period == BillingPeriod::Annual)
        {
            out.push_str(&plan_block(plan, "ano"));
        }

        out.push_str(&format!(
            "{} Digite 'contratar [ID]' para assinar um plano!",
            self.tag("💡", "--")
        ));
        out
    }

    pub fn subscriptions(&self, active: &[&Subscription]) -> String {
        if active.is_empty() {
            return format!(
                "{} Você não possui assinaturas ativas.\n\n{} Digite 'planos' para ver nossas opções!",
                self.tag("📋", ">>"),
                self.tag("💡", "--")
            );
        }

        let mut out = format!("{} SUAS ASSINATURAS ATIVAS\n\n", self.tag("📋", "**"));
        for subscription in active {
            out.push_str(&format!(
                "{} {}\n{} R$ {:.2}\n{} Válido até: {}\n\n",
                self.tag("🤖", "-"),
                subscription.plan_name,
                self.tag("💰", " "),
                subscription.paid_amount,
                self.tag("📅", " "),
                subscription.ends_at.format("%d/%m/%Y")
            ));
        }
        out.trim_end().to_owned()
    }

    pub fn hired(&self, subscription: &Subscription) -> String {
        format!(
            "{} ASSINATURA CONTRATADA COM SUCESSO!\n\n{} Plano: {}\n{} Valor: R$ {:.2}\n{} Válido até: {}\n\n{} Sua IA já está ativa! Acesse o painel para começar a usar.",
            self.tag("✅", "**"),
            self.tag("📋", "-"),
            subscription.plan_name,
            self.tag("💰", "-"),
            subscription.paid_amount,
            self.tag("📅", "-"),
            subscription.ends_at.format("%d/%m/%Y"),
            self.tag("🚀", ">>")
        )
    }

    pub fn cancelled(&self, subscription: &Subscription) -> String {
        format!(
            "{} Assinatura '{}' cancelada com sucesso.\n\n{} Você receberá um email de confirmação em breve.",
            self.tag("✅", "OK"),
            subscription.plan_name,
            self.tag("📧", "--")
        )
    }

    pub fn payment(&self, attempt: &PaymentAttempt) -> String {
        let status = match attempt.status {
            PaymentStatus::Approved => format!("{} Pagamento aprovado", self.tag("✅", "OK")),
            PaymentStatus::Pending => format!("{} Pagamento pendente", self.tag("⏳", "--")),
            PaymentStatus::Declined => format!("{} Pagamento recusado", self.tag("❌", "!!")),
        };

        let mut out = format!("{status}\nValor: R$ {:.2}\n", attempt.final_amount);
        if let Some(reference) = &attempt.reference {
            out.push_str(&format!("Código: {reference}\n"));
        }
        if let Some(expires_at) = attempt.expires_at {
            out.push_str(&format!("Vencimento: {}\n", expires_at.format("%d/%m/%Y %H:%M")));
        }

        match &attempt.payload {
            PaymentPayload::InstantTransfer { qr_code } => {
                out.push_str(&format!("QR Code: {qr_code}\n"));
            }
            PaymentPayload::Card { authorization, brand } => {
                out.push_str(&format!(
                    "Autorização: {authorization}\nBandeira: {}\n",
                    brand.label()
                ));
            }
            PaymentPayload::Voucher { typeable_line } => {
                out.push_str(&format!("Linha digitável: {typeable_line}\n"));
            }
            PaymentPayload::RedirectWallet { redirect_url } => {
                out.push_str(&format!("Acesse: {redirect_url}\n"));
            }
            PaymentPayload::Declined { reason } => {
                out.push_str(&format!("Motivo: {reason}\n"));
            }
        }

        out.push_str(&attempt.instructions);
        out
    }

    pub fn explain_service(&self) -> String {
        format!(
            "{} NOSSA TECNOLOGIA DE IA\n\nOferecemos soluções de inteligência artificial de última geração:\n\n• Processamento de Linguagem Natural - compreende e responde em português\n• Machine Learning Avançado - aprende com suas interações\n• API Robusta - integração fácil com seus sistemas\n• Personalização Total - IA treinada para seu negócio\n\n{} Transforme seu negócio com IA inteligente!",
            self.tag("🧠", "**"),
            self.tag("💡", "--")
        )
    }

    pub fn api_info(&self) -> String {
        format!(
            "{} API DE IA\n\nNossa API permite integrar IA em qualquer sistema:\n\n• Endpoints REST simples\n• Documentação completa\n• SDKs para Python, JavaScript, PHP\n• Autenticação segura\n\n{} Disponível nos planos Pro e Enterprise!",
            self.tag("🔌", "**"),
            self.tag("💎", "--")
        )
    }

    pub fn support_info(&self) -> String {
        format!(
            "{} SUPORTE TÉCNICO\n\n• Email: suporte@ia-platform.com\n• Chat: disponível no painel\n• Telefone: (11) 9999-9999\n\nHorários:\n• Básico: Seg-Sex 9h-18h\n• Pro: Seg-Sex 8h-20h\n• Enterprise: 24/7",
            self.tag("🎧", "**")
        )
    }

    pub fn payment_info(&self) -> String {
        format!(
            "{} FORMAS DE PAGAMENTO\n\n• Cartão de crédito (Visa, Master, Amex)\n• PIX (desconto de 5%)\n• Boleto bancário\n• Carteira digital\n\nCobrança:\n• Mensais: todo dia 15\n• Anuais: data da contratação\n• Renovação automática",
            self.tag("💳", "**")
        )
    }

    /// Every error kind gets a distinct, actionable reply.
    pub fn error(&self, error: &EngineError) -> String {
        let bad = self.tag("❌", "!!");
        match error {
            EngineError::NotFound(Entity::Product) => {
                format!("{bad} Produto não encontrado. Use o ID correto do produto.")
            }
            EngineError::NotFound(Entity::Plan) => {
                format!(
                    "{bad} Por favor, especifique um ID de plano válido. Digite 'planos' para ver as opções."
                )
            }
            EngineError::NotFound(Entity::Subscription) => {
                format!(
                    "{bad} Assinatura não encontrada. Digite 'minhas assinaturas' para ver seus planos ativos."
                )
            }
            EngineError::InvalidInput(expected) => {
                format!("{bad} Por favor, informe {expected}.")
            }
            EngineError::ValidationFailure => {
                format!("{bad} Número do cartão inválido. Confira os dígitos e tente novamente.")
            }
            EngineError::Declined(reason) => {
                format!("{bad} Pagamento recusado: {reason}.")
            }
            EngineError::EmptyCart => {
                format!(
                    "{bad} Seu carrinho está vazio. Adicione produtos antes de finalizar a compra."
                )
            }
            EngineError::Conflict => {
                format!(
                    "{bad} Você já possui uma assinatura ativa. Cancele a atual antes de contratar outra."
                )
            }
        }
    }
}

fn product_line(product: &Product) -> String {
    format!("ID: {} - {} - R$ {:.2}", product.id.0, product.name, product.unit_price)
}

fn plan_block(plan: &Plan, per: &str) -> String {
    format!(
        "ID: {} - {} - R$ {:.2}/{per}\n   Recursos: {}\n\n",
        plan.id.0,
        plan.name,
        plan.price,
        plan.features.join(", ")
    )
}
