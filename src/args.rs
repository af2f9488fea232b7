use clap::Parser;

use crate::client::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use crate::conversation::DEFAULT_HISTORY_CAP;

/// Command line arguments for the parlour binary.
#[derive(Parser, Clone)]
pub struct Args {
    /// Chat-completions endpoint to POST transcripts to.
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
    /// Model name sent with every request.
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,
    /// System prompt pinned at the start of the transcript.
    #[arg(long = "system-prompt")]
    pub system_prompt: Option<String>,
    /// Maximum number of messages retained, system prompt included.
    #[arg(long = "history-cap", default_value_t = DEFAULT_HISTORY_CAP)]
    pub history_cap: usize,
}
