//! Domain engine for the balcao conversational store: immutable catalog,
//! per-session carts and subscriptions, and the four-branch payment
//! simulator. Synchronous and allocation-light; transports live elsewhere.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod errors;
pub mod payment;
pub mod sessions;
pub mod subscriptions;
pub mod text;

pub use cart::{Cart, CartView, CartViewLine};
pub use catalog::Catalog;
pub use config::{AppConfig, LoadOptions, LogFormat, ReplyStyle};
pub use domain::order::{Order, OrderLine};
pub use domain::payment::{
    CardBrand, PaymentAttempt, PaymentMethod, PaymentPayload, PaymentStatus,
};
pub use domain::plan::{BillingPeriod, Plan, PlanId};
pub use domain::product::{Product, ProductId};
pub use domain::subscription::{Subscription, SubscriptionStatus};
pub use errors::{EngineError, EngineResult, Entity};
pub use payment::PaymentRequest;
pub use sessions::{SessionId, SessionState, SessionStore};
