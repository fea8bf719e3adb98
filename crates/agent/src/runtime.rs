use chrono::Utc;
use rand::Rng;

use balcao_core::catalog::{self, Catalog};
use balcao_core::config::ReplyStyle;
use balcao_core::domain::payment::PaymentAttempt;
use balcao_core::domain::plan::PlanId;
use balcao_core::domain::product::ProductId;
use balcao_core::errors::{EngineError, EngineResult, Entity};
use balcao_core::payment::{self, PaymentRequest};
use balcao_core::sessions::{SessionId, SessionState, SessionStore};
use balcao_core::subscriptions;
use balcao_core::text::normalize;

use crate::extract::{extract_id, term_after_keyword};
use crate::intent::{classify, Intent};
use crate::knowledge;
use crate::reply::Formatter;

/// Exit keywords the transport checks before invoking the engine; the
/// engine itself never sees them as intents.
pub const EXIT_KEYWORDS: [&str; 3] = ["sair", "quit", "exit"];

pub fn is_exit(message: &str) -> bool {
    EXIT_KEYWORDS.contains(&normalize(message).as_str())
}

/// One inbound text line in, one reply out. Holds the process-wide catalog
/// and the per-session state store; all mutation is keyed by session.
pub struct AgentRuntime {
    catalog: Catalog,
    formatter: Formatter,
    sessions: SessionStore,
}

impl AgentRuntime {
    pub fn new(style: ReplyStyle) -> Self {
        Self::with_catalog(catalog::seed(), style)
    }

    pub fn with_catalog(catalog: Catalog, style: ReplyStyle) -> Self {
        Self { catalog, formatter: Formatter::new(style), sessions: SessionStore::new() }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn session(&self, session_id: &SessionId) -> Option<&SessionState> {
        self.sessions.state(session_id)
    }

    pub fn handle_message(&mut self, session_id: &SessionId, message: &str) -> String {
        let normalized = normalize(message);
        let intent = classify(&normalized);
        tracing::debug!(session = %session_id.0, ?intent, "message classified");

        let reply = self.dispatch(session_id, message, &normalized, intent);
        match reply {
            Ok(text) => text,
            Err(error) => {
                tracing::info!(session = %session_id.0, ?intent, %error, "operation refused");
                self.formatter.error(&error)
            }
        }
    }

    /// Direct payment entry point, independent of the message loop. The
    /// random source is injected by the caller.
    pub fn simulate_payment(
        &self,
        request: &PaymentRequest,
        rng: &mut impl Rng,
    ) -> EngineResult<PaymentAttempt> {
        let attempt = payment::simulate(request, Utc::now(), rng)?;
        tracing::debug!(method = ?attempt.method, status = ?attempt.status, "payment simulated");
        Ok(attempt)
    }

    pub fn render_payment(&self, attempt: &PaymentAttempt) -> String {
        self.formatter.payment(attempt)
    }

    fn dispatch(
        &mut self,
        session_id: &SessionId,
        original: &str,
        normalized: &str,
        intent: Intent,
    ) -> EngineResult<String> {
        let formatter = self.formatter;
        match intent {
            Intent::Greeting => Ok(formatter.greeting()),
            Intent::ListProducts => Ok(formatter.product_catalog(&self.catalog)),
            Intent::ListPlans => Ok(formatter.plan_catalog(&self.catalog)),
            Intent::ExplainService => Ok(formatter.explain_service()),
            Intent::ApiInfo => Ok(formatter.api_info()),
            Intent::SupportInfo => Ok(formatter.support_info()),
            Intent::PaymentInfo => Ok(formatter.payment_info()),

            Intent::Search => {
                let term = term_after_keyword(normalized, "buscar")
                    .or_else(|| term_after_keyword(normalized, "procurar"))
                    .ok_or(EngineError::InvalidInput("o que deseja buscar"))?;
                let products = self.catalog.search(&term);
                Ok(formatter.search_results(&term, &products))
            }
            Intent::ListByCategory => {
                let category = term_after_keyword(normalized, "categoria").ok_or(
                    EngineError::InvalidInput(
                        "uma categoria (eletrônicos, roupas, calçados, acessórios)",
                    ),
                )?;
                let products = self.catalog.products_in_category(&category);
                Ok(formatter.category_results(&category, &products))
            }
            Intent::GetPrice => {
                let product = self.require_product(normalized)?;
                Ok(formatter.price(product))
            }
            Intent::GetStock => {
                let product = self.require_product(normalized)?;
                Ok(formatter.stock(product))
            }

            Intent::AddToCart => {
                let id = extract_id(normalized)
                    .ok_or(EngineError::InvalidInput("o ID do produto"))?;
                let state = self.sessions.state_mut(session_id);
                let product = state.cart.add_item(&self.catalog, &ProductId(id))?;
                Ok(formatter.added_to_cart(product))
            }
            Intent::ViewCart => {
                let state = self.sessions.state_mut(session_id);
                Ok(formatter.cart(&state.cart.view(&self.catalog)))
            }
            Intent::ClearCart => {
                let state = self.sessions.state_mut(session_id);
                Ok(formatter.cart_cleared(state.cart.clear()))
            }
            Intent::Checkout => {
                let state = self.sessions.state_mut(session_id);
                let order = state.cart.checkout(&self.catalog, &mut state.orders, Utc::now())?;
                tracing::info!(session = %session_id.0, total = %order.total, "order placed");
                Ok(formatter.order_confirmed(&order))
            }

            Intent::HirePlan => {
                let id = extract_id(normalized)
                    .ok_or(EngineError::NotFound(Entity::Plan))?;
                let plan = self
                    .catalog
                    .plan(&PlanId(id))
                    .ok_or(EngineError::NotFound(Entity::Plan))?;
                let state = self.sessions.state_mut(session_id);
                let subscription =
                    subscriptions::hire(&mut state.subscriptions, plan, Utc::now())?;
                tracing::info!(session = %session_id.0, plan = %plan.id.0, "plan hired");
                Ok(formatter.hired(&subscription))
            }
            Intent::ListSubscriptions => {
                let state = self.sessions.state_mut(session_id);
                Ok(formatter.subscriptions(&subscriptions::active(&state.subscriptions)))
            }
            Intent::CancelSubscription => {
                let id = extract_id(normalized)
                    .ok_or(EngineError::NotFound(Entity::Subscription))?;
                let state = self.sessions.state_mut(session_id);
                let subscription = subscriptions::cancel(&mut state.subscriptions, &PlanId(id))?;
                Ok(formatter.cancelled(&subscription))
            }

            Intent::GeneralFallback => Ok(knowledge::fallback(original, normalized, Utc::now())),
        }
    }

    fn require_product(&self, normalized: &str) -> EngineResult<&balcao_core::Product> {
        let id = extract_id(normalized).ok_or(EngineError::InvalidInput("o ID do produto"))?;
        self.catalog
            .product(&ProductId(id))
            .ok_or(EngineError::NotFound(Entity::Product))
    }
}

#[cfg(test)]
mod tests {
    use super::is_exit;

    #[test]
    fn exit_keywords_match_case_insensitively() {
        assert!(is_exit("sair"));
        assert!(is_exit("  SAIR  "));
        assert!(is_exit("Exit"));
        assert!(!is_exit("quero sair da loja"));
    }
}
