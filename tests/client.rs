use httpmock::prelude::*;
use parlour::{ChatClient, ClientError, FALLBACK_REPLY, HttpChatClient, Message};

#[tokio::test]
async fn posts_the_transcript_and_extracts_the_reply() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/chat")
                .header("content-type", "application/json")
                .json_body(serde_json::json!({
                    "model": "gpt-4o",
                    "messages": [
                        {"role": "system", "content": "You are terse."},
                        {"role": "user", "content": "hi"},
                    ],
                }));
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"choices":[{"message":{"content":"Try our cleanser."}}]}"#);
        })
        .await;

    let client = HttpChatClient::new(server.url("/chat"));
    let messages = vec![Message::system("You are terse."), Message::user("hi")];
    let reply = client.complete(&messages).await?;

    assert_eq!(reply, "Try our cleanser.");
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn missing_choices_substitute_the_fallback() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat");
            then.status(200)
                .header("content-type", "application/json")
                .body("{}");
        })
        .await;

    let client = HttpChatClient::new(server.url("/chat"));
    let reply = client.complete(&[Message::user("hi")]).await.unwrap();
    assert_eq!(reply, FALLBACK_REPLY);
}

#[tokio::test]
async fn error_status_carries_status_and_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat");
            then.status(500).body("server error");
        })
        .await;

    let client = HttpChatClient::new(server.url("/chat"));
    let err = client.complete(&[Message::user("hi")]).await.unwrap_err();
    match err {
        ClientError::Api { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "server error");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    // Nothing listens on the discard port.
    let client = HttpChatClient::new("http://127.0.0.1:9/");
    let err = client.complete(&[Message::user("hi")]).await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
}

#[tokio::test]
async fn unparseable_success_body_is_a_transport_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat");
            then.status(200).body("not json");
        })
        .await;

    let client = HttpChatClient::new(server.url("/chat"));
    let err = client.complete(&[Message::user("hi")]).await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
}
