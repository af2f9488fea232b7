use crate::client::ChatClient;
use crate::conversation::{Conversation, Role};
use crate::profile::UserProfile;
use crate::render::Renderer;

/// Greeting rendered once when the session opens. Display-only; it is not
/// part of the transcript sent to the endpoint.
pub const GREETING: &str = "👋 Hello! How can I help you today?";

/// Placeholder shown while a request is in flight.
pub const THINKING: &str = "…thinking";

/// Text the placeholder becomes when the request fails.
pub const ERROR_REPLY: &str = "Error: could not get a response.";

/// System prompt used when none is supplied.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful beauty advisor. \
Only answer questions about skincare, makeup, haircare, fragrance, product \
usage, ingredients, and personalized routines or recommendations. If a \
question is unrelated to beauty, politely say you can only help with beauty \
topics; for health or medical concerns, suggest consulting a qualified \
professional. Keep responses friendly and concise.";

/// One chat session: transcript, user profile, display surface and client.
///
/// Owns all mutable session state for its lifetime (no globals) and drives
/// the whole submission flow. At most one request is outstanding at a time;
/// the input gate is busy from the moment a request is sent until it
/// settles, success or failure.
///
/// # Examples
///
/// ```no_run
/// use parlour::{ChatSession, ConsoleRenderer, HttpChatClient};
/// use parlour::{DEFAULT_HISTORY_CAP, DEFAULT_SYSTEM_PROMPT};
///
/// # async fn example() {
/// let client = HttpChatClient::new("http://localhost:8787/");
/// let mut session = ChatSession::new(
///     DEFAULT_SYSTEM_PROMPT,
///     DEFAULT_HISTORY_CAP,
///     Box::new(client),
///     Box::new(ConsoleRenderer::stdout()),
/// );
/// session.submit("My name is Avery. What cleanser should I use?").await;
/// # }
/// ```
pub struct ChatSession {
    conversation: Conversation,
    profile: UserProfile,
    client: Box<dyn ChatClient>,
    renderer: Box<dyn Renderer>,
    busy: bool,
}

impl ChatSession {
    /// Open a session: pin the system prompt and render the greeting.
    pub fn new(
        system_prompt: impl Into<String>,
        history_cap: usize,
        client: Box<dyn ChatClient>,
        mut renderer: Box<dyn Renderer>,
    ) -> Self {
        renderer.render(Role::Assistant, GREETING);
        Self {
            conversation: Conversation::new(system_prompt, history_cap),
            profile: UserProfile::default(),
            client,
            renderer,
            busy: false,
        }
    }

    /// The session transcript.
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// What the session knows about the user.
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// True while a request is outstanding.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Handle one submission end to end.
    ///
    /// Empty or whitespace-only input is a silent no-op. Otherwise the text
    /// is checked for a self-introduction, appended as a user message and
    /// rendered, a thinking placeholder goes up, and the full transcript is
    /// sent. On success the placeholder becomes the reply and the reply
    /// joins the transcript; on failure the placeholder becomes
    /// [`ERROR_REPLY`] and nothing is appended. Both paths release the input
    /// gate.
    pub async fn submit(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        if self.busy {
            tracing::warn!("submission ignored while a request is outstanding");
            return;
        }

        if let Some(note) = self.profile.observe(text) {
            self.conversation.push_system(note);
            if let Some(name) = self.profile.name() {
                self.renderer.set_title(name);
            }
        }
        self.conversation.push_user(text);
        self.renderer.render(Role::User, text);
        let placeholder = self.renderer.render(Role::Assistant, THINKING);

        self.busy = true;
        match self.client.complete(self.conversation.snapshot()).await {
            Ok(reply) => {
                self.renderer.update(placeholder, &reply);
                self.conversation.push_assistant(reply);
            }
            Err(e) => {
                tracing::error!(error = %e, "completion failed");
                self.renderer.update(placeholder, ERROR_REPLY);
            }
        }
        self.busy = false;
    }
}
