use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

pub const TEST_API_KEY: &str = "AIza-test-key-0000";
pub const TEXT_MODEL: &str = "gemini-2.5-flash";
pub const IMAGE_MODEL: &str = "imagen-4.0-generate-001";

/// 启动 Gemini mock 服务器，文本与图像接口均返回固定内容
pub async fn setup_gemini_mock(reply: &str, image_base64: &str) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/v1beta/models/{}:generateContent", TEXT_MODEL)))
        .and(query_param("key", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(generate_content_response(reply)))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("/v1beta/models/{}:predict", IMAGE_MODEL)))
        .and(query_param("key", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "predictions": [
                {"bytesBase64Encoded": image_base64, "mimeType": "image/png"}
            ]
        })))
        .mount(&mock_server)
        .await;

    mock_server
}

/// 所有请求都返回 `status` 错误
pub async fn setup_failing_gemini_mock(status: u16) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(status).set_body_json(serde_json::json!({
            "error": {
                "code": status,
                "message": "Resource has been exhausted",
                "status": "RESOURCE_EXHAUSTED"
            }
        })))
        .mount(&mock_server)
        .await;

    mock_server
}

pub fn generate_content_response(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }],
        "usageMetadata": {"promptTokenCount": 42, "candidatesTokenCount": 17, "totalTokenCount": 59},
        "modelVersion": TEXT_MODEL
    })
}
