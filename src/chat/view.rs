//! The chat session view-model.
//!
//! `SessionView` owns the transcript and the request lifecycle and nothing
//! else: no I/O, no rendering, no persistence. The runner feeds it user
//! input and request outcomes; tests drive it directly.

use anyhow::Result;

use crate::api::Outbound;
use crate::flags;

use super::transcript::{FALLBACK_MESSAGE, Message, Transcript};

/// Outbound request lifecycle. At most one request is in flight at a time;
/// a submit while `Pending` is rejected, not queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
}

/// What applying a request outcome did to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Reply appended.
    Reply,
    /// Reply appended and it matched the profile completion marker; the
    /// caller should latch the persisted flag.
    ReplyWithCompletionMarker,
    /// Failure collapsed into the fixed fallback entry.
    Fallback,
    /// The view was disposed; the outcome was discarded untouched.
    Discarded,
}

/// State machine behind the chat session.
#[derive(Debug)]
pub struct SessionView {
    transcript: Transcript,
    state: RequestState,
    open: bool,
    disposed: bool,
}

impl SessionView {
    /// A fresh, open view with the welcome entry in the transcript.
    pub fn new() -> Self {
        Self {
            transcript: Transcript::with_welcome(),
            state: RequestState::Idle,
            open: true,
            disposed: false,
        }
    }

    /// Accepts a submit, or rejects it without side effects.
    ///
    /// Rejected when the trimmed text is empty, a request is already in
    /// flight, or the view is disposed. On acceptance the user entry is
    /// appended immediately (optimistic append), the state moves to
    /// `Pending`, and the payload for the single outbound request is
    /// returned. `skip_profile` is whatever the caller read from the
    /// persisted latch at submit time.
    pub fn begin_submit(&mut self, text: &str, skip_profile: bool) -> Option<Outbound> {
        if self.disposed || self.state == RequestState::Pending {
            return None;
        }

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        self.transcript.push(Message::user(trimmed));
        self.state = RequestState::Pending;

        Some(Outbound {
            message: trimmed.to_string(),
            skip_profile,
        })
    }

    /// Applies the outcome of the in-flight request.
    ///
    /// Every failure kind (connect error, non-2xx, malformed body) collapses
    /// into the same fallback entry; no error state survives the append. A
    /// disposed view discards the outcome entirely, so a response resolving
    /// after teardown never touches the transcript. The state always returns
    /// to `Idle`, leaving the view ready for the next submit.
    pub fn complete(&mut self, outcome: Result<String>) -> Completion {
        if self.disposed {
            return Completion::Discarded;
        }

        self.state = RequestState::Idle;

        match outcome {
            Ok(content) => {
                let matched = flags::matches_completion_marker(&content);
                self.transcript.push(Message::assistant(content));
                if matched {
                    Completion::ReplyWithCompletionMarker
                } else {
                    Completion::Reply
                }
            }
            Err(_) => {
                self.transcript.push(Message::assistant(FALLBACK_MESSAGE));
                Completion::Fallback
            }
        }
    }

    /// Flips visibility. Touches neither the transcript nor the request
    /// state; an in-flight request keeps going while the view is closed.
    pub const fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    pub const fn is_open(&self) -> bool {
        self.open
    }

    pub const fn state(&self) -> RequestState {
        self.state
    }

    pub const fn is_pending(&self) -> bool {
        matches!(self.state, RequestState::Pending)
    }

    /// Marks the view dead. Later `begin_submit`/`complete` calls are no-ops.
    pub const fn dispose(&mut self) {
        self.disposed = true;
    }

    pub const fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }
}

impl Default for SessionView {
    fn default() -> Self {
        Self::new()
    }
}
