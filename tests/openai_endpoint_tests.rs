//! Wire-format tests for the OpenAI endpoint against a mock server.

use stockhand::error::StockhandError;
use stockhand::provider::openai::OpenAiEndpoint;
use stockhand::provider::{ChatEndpoint, EndpointRequest};
use stockhand::tools::definitions;
use stockhand::types::{ChatMessage, ToolCall};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request() -> EndpointRequest {
    EndpointRequest {
        messages: vec![ChatMessage::user("How much milk is left?")],
        tools: definitions(),
    }
}

#[tokio::test]
async fn free_text_reply_parses() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_string_contains("tool_choice"))
        .and(body_string_contains("place_order"))
        .and(body_string_contains("gpt-4o"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [
                {"message": {"role": "assistant", "content": "Plenty of milk."}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let endpoint = OpenAiEndpoint::new("gpt-4o", "test-key", Some(server.uri()));
    let response = endpoint.complete(&request()).await.unwrap();

    assert_eq!(response.text, "Plenty of milk.");
    assert!(response.tool_calls.is_empty());
}

#[tokio::test]
async fn tool_call_reply_parses_string_encoded_arguments() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [
                {"message": {
                    "role": "assistant",
                    "content": null,
                    "tool_calls": [
                        {
                            "id": "call_abc",
                            "type": "function",
                            "function": {
                                "name": "place_order",
                                "arguments": "{\"item\": \"milk\", \"qty\": 2}"
                            }
                        }
                    ]
                }}
            ]
        })))
        .mount(&server)
        .await;

    let endpoint = OpenAiEndpoint::new("gpt-4o", "test-key", Some(server.uri()));
    let response = endpoint.complete(&request()).await.unwrap();

    assert_eq!(response.text, "");
    assert_eq!(response.tool_calls.len(), 1);
    let call = &response.tool_calls[0];
    assert_eq!(call.id, "call_abc");
    assert_eq!(call.name, "place_order");
    assert_eq!(call.arguments["item"], "milk");
    assert_eq!(call.arguments["qty"], 2);
}

#[tokio::test]
async fn history_with_tool_round_serializes() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains("tool_call_id"))
        .and(body_string_contains("Ordered 2 x milk."))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [
                {"message": {"role": "assistant", "content": "Done."}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let call = ToolCall {
        id: "call_abc".to_string(),
        name: "place_order".to_string(),
        arguments: serde_json::json!({"item": "milk", "qty": 2}),
    };
    let req = EndpointRequest {
        messages: vec![
            ChatMessage::system("You are a counter agent."),
            ChatMessage::user("order two milks"),
            ChatMessage::assistant_with_calls("", vec![call]),
            ChatMessage::tool_result("call_abc", "Ordered 2 x milk.", false),
        ],
        tools: definitions(),
    };

    let endpoint = OpenAiEndpoint::new("gpt-4o", "test-key", Some(server.uri()));
    let response = endpoint.complete(&req).await.unwrap();
    assert_eq!(response.text, "Done.");
}

#[tokio::test]
async fn unauthorized_maps_to_authentication_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid key"))
        .mount(&server)
        .await;

    let endpoint = OpenAiEndpoint::new("gpt-4o", "bad-key", Some(server.uri()));
    let err = endpoint.complete(&request()).await.unwrap_err();
    assert!(matches!(err, StockhandError::Authentication(_)));
}

#[tokio::test]
async fn rate_limit_maps_with_retry_after() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_json(serde_json::json!({"error": {"retry_after": 1.5}})),
        )
        .mount(&server)
        .await;

    let endpoint = OpenAiEndpoint::new("gpt-4o", "test-key", Some(server.uri()));
    let err = endpoint.complete(&request()).await.unwrap_err();
    assert!(matches!(
        err,
        StockhandError::RateLimited {
            retry_after_ms: Some(1500)
        }
    ));
}

#[tokio::test]
async fn empty_choices_is_an_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": []
        })))
        .mount(&server)
        .await;

    let endpoint = OpenAiEndpoint::new("gpt-4o", "test-key", Some(server.uri()));
    let err = endpoint.complete(&request()).await.unwrap_err();
    assert!(matches!(err, StockhandError::Api { status: 200, .. }));
}
