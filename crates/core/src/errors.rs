use thiserror::Error;

/// What a `NotFound` failure was looking for, so replies can point the user
/// at the right recovery command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entity {
    Product,
    Plan,
    Subscription,
}

/// Discriminated failure set for every core operation. All variants are
/// expected business conditions; none should abort the conversation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("{0:?} not found")]
    NotFound(Entity),
    #[error("missing required input: {0}")]
    InvalidInput(&'static str),
    #[error("card number failed validation")]
    ValidationFailure,
    #[error("payment declined: {0}")]
    Declined(String),
    #[error("cart is empty")]
    EmptyCart,
    #[error("an active subscription already exists")]
    Conflict,
}

pub type EngineResult<T> = Result<T, EngineError>;
