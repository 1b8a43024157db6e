//! Interactive chat session with the alt.f assistant.
//!
//! Split in two layers: `view` is the pure state machine (transcript,
//! request lifecycle, open/disposed flags) and `session` is the REPL runner
//! that drives it against the HTTP client.

/// Slash command parsing and autocomplete.
pub mod command;
mod session;
mod transcript;
mod ui;
mod view;

pub use session::{ChatSession, SessionConfig};
pub use transcript::{FALLBACK_MESSAGE, Message, Role, Transcript, WELCOME_MESSAGE};
pub use view::{Completion, RequestState, SessionView};
