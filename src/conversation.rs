use serde::{Deserialize, Serialize};

/// Number of messages a [`Conversation`] retains by default.
pub const DEFAULT_HISTORY_CAP: usize = 20;

/// Originator of a [`Message`], serialized lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        };
        f.write_str(label)
    }
}

/// A single role-tagged entry in the transcript. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Ordered transcript of one chat session.
///
/// Index 0 is permanently reserved for the session's system prompt. The
/// transcript grows only by appends; once the cap is exceeded the oldest
/// non-system entry is evicted so the prompt and the recent tail survive.
///
/// # Examples
///
/// ```
/// use parlour::{Conversation, Role};
///
/// let mut convo = Conversation::new("You are terse.", 3);
/// convo.push_user("hi");
/// convo.push_assistant("hello");
/// convo.push_user("still there?");
/// let snap = convo.snapshot();
/// assert_eq!(snap.len(), 3);
/// assert_eq!(snap[0].role, Role::System);
/// assert_eq!(snap[2].content, "still there?");
/// ```
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
    cap: usize,
}

impl Conversation {
    /// Create a transcript pre-populated with `system_prompt`, retaining at
    /// most `cap` messages. A cap below 1 is raised to 1 so the prompt itself
    /// always fits.
    pub fn new(system_prompt: impl Into<String>, cap: usize) -> Self {
        Self {
            messages: vec![Message::system(system_prompt)],
            cap: cap.max(1),
        }
    }

    /// Append a user message.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.push(Message::user(content));
    }

    /// Append an assistant message.
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.push(Message::assistant(content));
    }

    /// Append a system note after the tail. The pinned prompt at index 0 is
    /// untouched.
    pub fn push_system(&mut self, content: impl Into<String>) {
        self.push(Message::system(content));
    }

    fn push(&mut self, message: Message) {
        self.messages.push(message);
        self.trim();
    }

    /// Evict the earliest non-pinned entry until the cap holds.
    fn trim(&mut self) {
        while self.messages.len() > self.cap {
            self.messages.remove(1);
        }
    }

    /// The full ordered transcript, ready for transmission.
    pub fn snapshot(&self) -> &[Message] {
        &self.messages
    }

    /// Number of messages currently retained, pinned prompt included.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always false: the pinned prompt is present from construction on.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
