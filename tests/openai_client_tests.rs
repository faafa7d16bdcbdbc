use httpmock::prelude::*;
use review_agent::error::ReviewAgentError;
use review_agent::openai::{ChatMessage, OpenAiClient};

fn client_for(server: &MockServer) -> OpenAiClient {
    OpenAiClient::new(
        server.base_url(),
        "test-key".to_string(),
        "gpt-4o".to_string(),
        0.2,
        1500,
    )
    .unwrap()
}

#[test]
fn test_validate_key_success() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/models")
            .header("authorization", "Bearer test-key");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"object":"list","data":[]}"#);
    });

    let client = client_for(&server);
    client.validate_key().unwrap();
    mock.assert();
}

#[test]
fn test_validate_key_unauthorized() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/models");
        then.status(401)
            .header("content-type", "application/json")
            .body(r#"{"error":{"message":"Incorrect API key provided"}}"#);
    });

    let client = client_for(&server);
    let result = client.validate_key();
    assert!(matches!(result, Err(ReviewAgentError::ApiAuth(_))));
}

#[test]
fn test_validate_key_server_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/models");
        then.status(500);
    });

    let client = client_for(&server);
    let result = client.validate_key();
    match result {
        Err(ReviewAgentError::Api(message)) => assert!(message.contains("500")),
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[test]
fn test_chat_returns_trimmed_content() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/chat/completions")
            .header("authorization", "Bearer test-key")
            .json_body_partial(r#"{"model":"gpt-4o","max_tokens":1500}"#);
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{"choices":[{"message":{"role":"assistant","content":"  Looks good.  "}}]}"#,
            );
    });

    let client = client_for(&server);
    let messages = [
        ChatMessage::system("You are a reviewer."),
        ChatMessage::user("fn main() {}"),
    ];
    let answer = client.chat(&messages).unwrap();

    assert_eq!(answer, "Looks good.");
    mock.assert();
}

#[test]
fn test_chat_sends_messages_in_order() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions").json_body_partial(
            r#"{"messages":[{"role":"system","content":"sys"},{"role":"user","content":"usr"}]}"#,
        );
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"choices":[{"message":{"role":"assistant","content":"ok"}}]}"#);
    });

    let client = client_for(&server);
    let messages = [ChatMessage::system("sys"), ChatMessage::user("usr")];
    client.chat(&messages).unwrap();
    mock.assert();
}

#[test]
fn test_chat_unauthorized() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(401);
    });

    let client = client_for(&server);
    let result = client.chat(&[ChatMessage::user("hi")]);
    assert!(matches!(result, Err(ReviewAgentError::ApiAuth(_))));
}

#[test]
fn test_chat_surfaces_error_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(429)
            .header("content-type", "application/json")
            .body(r#"{"error":{"message":"Rate limit reached"}}"#);
    });

    let client = client_for(&server);
    let result = client.chat(&[ChatMessage::user("hi")]);
    match result {
        Err(ReviewAgentError::Api(message)) => {
            assert!(message.contains("429"));
            assert!(message.contains("Rate limit reached"));
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[test]
fn test_chat_without_choices_is_an_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"choices":[]}"#);
    });

    let client = client_for(&server);
    let result = client.chat(&[ChatMessage::user("hi")]);
    match result {
        Err(ReviewAgentError::Api(message)) => {
            assert!(message.contains("no completion choice"))
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}
