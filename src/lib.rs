//! Session-scoped chat engine over an OpenAI-compatible completion endpoint.
//!
//! This crate exposes the building blocks of one chat session: a
//! [`Conversation`] transcript with a pinned system prompt and a bounded
//! history, a [`UserProfile`] that heuristically picks the user's name out of
//! what they type, a [`Renderer`] seam for the display surface, a
//! [`ChatClient`] for the network call, and a [`ChatSession`] controller that
//! wires the flow together. The `parlour` binary is a thin line-oriented
//! shell over [`ChatSession`].
//!
//! ```no_run
//! use parlour::{ChatSession, ConsoleRenderer, HttpChatClient};
//! use parlour::{DEFAULT_HISTORY_CAP, DEFAULT_SYSTEM_PROMPT};
//!
//! # async fn example() {
//! let client = HttpChatClient::new("http://localhost:8787/");
//! let mut session = ChatSession::new(
//!     DEFAULT_SYSTEM_PROMPT,
//!     DEFAULT_HISTORY_CAP,
//!     Box::new(client),
//!     Box::new(ConsoleRenderer::stdout()),
//! );
//! session.submit("What moisturizer goes with retinol?").await;
//! # }
//! ```

pub mod args;
mod client;
mod conversation;
pub mod logger;
mod profile;
mod render;
mod session;

pub use client::{
    ChatClient, ClientError, DEFAULT_ENDPOINT, DEFAULT_MODEL, FALLBACK_REPLY, HttpChatClient,
};
pub use conversation::{Conversation, DEFAULT_HISTORY_CAP, Message, Role};
pub use profile::UserProfile;
pub use render::{ConsoleRenderer, DisplayHandle, LoggingRenderer, Renderer};
pub use session::{ChatSession, DEFAULT_SYSTEM_PROMPT, ERROR_REPLY, GREETING, THINKING};
