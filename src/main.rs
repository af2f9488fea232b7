use clap::Parser;
use parlour::args::Args;
use parlour::{
    ChatSession, ConsoleRenderer, DEFAULT_SYSTEM_PROMPT, HttpChatClient, logger,
};
use tokio::io::{AsyncBufReadExt, BufReader, stdin};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init();
    let args = Args::parse();

    let client = HttpChatClient::with_model(&args.endpoint, &args.model);
    let prompt = args
        .system_prompt
        .as_deref()
        .unwrap_or(DEFAULT_SYSTEM_PROMPT);
    let mut session = ChatSession::new(
        prompt,
        args.history_cap,
        Box::new(client),
        Box::new(ConsoleRenderer::stdout()),
    );

    // One line, one submission. EOF ends the session.
    let mut lines = BufReader::new(stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        session.submit(&line).await;
    }
    Ok(())
}
