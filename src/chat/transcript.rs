/// Greeting seeding every new transcript, same wording as the website widget.
pub const WELCOME_MESSAGE: &str = "Welcome to alt.f. Ask me anything about our workspaces. \nI'm in beta, so forgive me if I fumble a little.";

/// The single user-facing entry every request failure collapses into.
pub const FALLBACK_MESSAGE: &str = "Oops! There was an error. Please try again.";

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Speaker tag shown in the transcript.
    pub const fn label(self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Assistant => "Rahi",
        }
    }
}

/// One transcript entry. Never mutated after creation, never deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Ordered, append-only message list; insertion order is display order.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Creates a transcript seeded with the welcome entry.
    pub fn with_welcome() -> Self {
        Self {
            messages: vec![Message::assistant(WELCOME_MESSAGE)],
        }
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub const fn len(&self) -> usize {
        self.messages.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_welcome_seeds_assistant_greeting() {
        let transcript = Transcript::with_welcome();

        assert_eq!(transcript.len(), 1);
        let first = &transcript.messages()[0];
        assert_eq!(first.role, Role::Assistant);
        assert!(first.content.starts_with("Welcome to alt.f"));
    }

    #[test]
    fn test_push_preserves_insertion_order() {
        let mut transcript = Transcript::default();
        transcript.push(Message::user("first"));
        transcript.push(Message::assistant("second"));
        transcript.push(Message::user("third"));

        let contents: Vec<_> = transcript
            .messages()
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, ["first", "second", "third"]);
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::User.label(), "You");
        assert_eq!(Role::Assistant.label(), "Rahi");
    }
}
