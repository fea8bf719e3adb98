//! Conversational layer of balcao: turns a freeform text line into one of
//! the engine's operations and renders the outcome back as text.
//!
//! The pipeline is deliberately small and deterministic:
//! 1. **Normalization** (`balcao_core::text`) - lowercase + diacritic fold,
//!    applied once before any matching
//! 2. **Classification** (`intent`) - ordered keyword rules, first hit wins
//! 3. **Extraction** (`extract`) - numeric id or trailing term, when needed
//! 4. **Dispatch** (`runtime`) - cart/subscription/payment operations on
//!    session-keyed state
//! 5. **Rendering** (`reply`) - PT-BR reply text, emoji or plain
//!
//! Messages no rule claims fall through to the `knowledge` table.
//!
//! There is no statistical model anywhere: classification is substring
//! matching, so behavior is fully reproducible from the rule table.

pub mod extract;
pub mod intent;
pub mod knowledge;
pub mod reply;
pub mod runtime;

pub use intent::{classify, Intent};
pub use reply::Formatter;
pub use runtime::{is_exit, AgentRuntime, EXIT_KEYWORDS};
