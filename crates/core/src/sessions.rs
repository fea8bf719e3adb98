use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::domain::order::Order;
use crate::domain::subscription::Subscription;

/// Opaque caller-supplied conversation scope.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

/// Everything the engine mutates on behalf of one conversation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub cart: Cart,
    pub subscriptions: Vec<Subscription>,
    pub orders: Vec<Order>,
}

/// Per-session state, keyed by the caller's identifier. One conversation
/// never observes another's cart or subscriptions; the engine assumes
/// exclusive access to a session for the duration of one operation.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<SessionId, SessionState>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state_mut(&mut self, session_id: &SessionId) -> &mut SessionState {
        self.sessions.entry(session_id.clone()).or_default()
    }

    pub fn state(&self, session_id: &SessionId) -> Option<&SessionState> {
        self.sessions.get(session_id)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::seed;
    use crate::domain::product::ProductId;

    use super::{SessionId, SessionStore};

    #[test]
    fn sessions_are_isolated() {
        let catalog = seed();
        let mut store = SessionStore::new();
        let alice = SessionId("alice".to_owned());
        let bob = SessionId("bob".to_owned());

        store
            .state_mut(&alice)
            .cart
            .add_item(&catalog, &ProductId("1".to_owned()))
            .unwrap();

        assert!(!store.state_mut(&alice).cart.is_empty());
        assert!(store.state_mut(&bob).cart.is_empty());
        assert!(store.state(&SessionId("carol".to_owned())).is_none());
    }
}
