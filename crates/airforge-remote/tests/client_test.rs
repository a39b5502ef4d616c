use airforge_core::{BaseImage, BuildRequest, PythonVersion};
use airforge_remote::client::{BuildClient, DispatchError};
use airforge_remote::transport::{HttpResponse, HttpTransport, TransportError};
use mockall::mock;

mock! {
    Transport {}

    impl HttpTransport for Transport {
        async fn post_json(
            &self,
            url: &str,
            body: &serde_json::Value,
        ) -> Result<HttpResponse, TransportError>;
    }
}

const ENDPOINT: &str = "http://172.17.0.1:8081/build-and-push";

fn request() -> BuildRequest {
    BuildRequest {
        airflow_version: "2.9.3".to_owned(),
        python_version: PythonVersion::Py310,
        base_image: BaseImage::Slim,
        extras: vec!["postgres".to_owned(), "redis".to_owned()],
        apt_deps: vec!["vim".to_owned()],
        pip_deps: vec![],
        custom_config: None,
    }
}

fn ok_response(body: &str) -> HttpResponse {
    HttpResponse {
        status: 200,
        body: body.to_owned(),
    }
}

// ── Success Tests ──

#[tokio::test]
async fn dispatch_success_returns_message_and_tag() {
    let mut mock = MockTransport::new();

    mock.expect_post_json()
        .withf(|url, _| url == ENDPOINT)
        .times(1)
        .returning(|_, _| Ok(ok_response(r#"{"message":"ok","image_tag":"x:1"}"#)));

    let client = BuildClient::with_transport(ENDPOINT, mock);
    let result = client.dispatch(&request()).await.unwrap();

    assert_eq!(result.message, "ok");
    assert_eq!(result.image_tag.as_deref(), Some("x:1"));
}

#[tokio::test]
async fn dispatch_success_without_image_tag() {
    let mut mock = MockTransport::new();

    mock.expect_post_json()
        .returning(|_, _| Ok(ok_response(r#"{"message":"built"}"#)));

    let client = BuildClient::with_transport(ENDPOINT, mock);
    let result = client.dispatch(&request()).await.unwrap();

    assert_eq!(result.message, "built");
    assert!(result.image_tag.is_none());
}

#[tokio::test]
async fn dispatch_posts_the_six_wire_fields() {
    let mut mock = MockTransport::new();

    mock.expect_post_json()
        .withf(|_, body| {
            let obj = body.as_object().unwrap();
            obj.len() == 6
                && obj["airflow_version"] == "2.9.3"
                && obj["python_version"] == "3.10"
                && obj["base_image"] == "slim"
                && obj["extras"] == serde_json::json!(["postgres", "redis"])
                && obj["apt_deps"] == serde_json::json!(["vim"])
                && obj["pip_deps"] == serde_json::json!([])
        })
        .returning(|_, _| Ok(ok_response(r#"{"message":"ok"}"#)));

    let client = BuildClient::with_transport(ENDPOINT, mock);
    client.dispatch(&request()).await.unwrap();
}

#[tokio::test]
async fn dispatch_does_not_transmit_custom_config() {
    let mut mock = MockTransport::new();

    mock.expect_post_json()
        .withf(|_, body| body.get("custom_config").is_none())
        .returning(|_, _| Ok(ok_response(r#"{"message":"ok"}"#)));

    let client = BuildClient::with_transport(ENDPOINT, mock);
    let mut req = request();
    req.custom_config = Some("[core]\n".to_owned());
    client.dispatch(&req).await.unwrap();
}

#[tokio::test]
async fn dispatch_accepts_any_2xx_status() {
    let mut mock = MockTransport::new();

    mock.expect_post_json().returning(|_, _| {
        Ok(HttpResponse {
            status: 202,
            body: r#"{"message":"accepted"}"#.to_owned(),
        })
    });

    let client = BuildClient::with_transport(ENDPOINT, mock);
    let result = client.dispatch(&request()).await.unwrap();

    assert_eq!(result.message, "accepted");
}

// ── Failure Tests ──

#[tokio::test]
async fn dispatch_server_error_surfaces_status_and_body() {
    let mut mock = MockTransport::new();

    // times(1): a failed dispatch is never retried
    mock.expect_post_json().times(1).returning(|_, _| {
        Ok(HttpResponse {
            status: 500,
            body: "Docker build failed".to_owned(),
        })
    });

    let client = BuildClient::with_transport(ENDPOINT, mock);
    let err = client.dispatch(&request()).await.unwrap_err();

    match err {
        DispatchError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "Docker build failed");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn dispatch_not_found_is_a_status_error() {
    let mut mock = MockTransport::new();

    mock.expect_post_json().returning(|_, _| {
        Ok(HttpResponse {
            status: 404,
            body: "404 page not found".to_owned(),
        })
    });

    let client = BuildClient::with_transport(ENDPOINT, mock);
    let err = client.dispatch(&request()).await.unwrap_err();

    assert!(matches!(err, DispatchError::Status { status: 404, .. }));
}

/// A real reqwest error without touching the network: sending to a
/// relative URL fails inside the request builder.
async fn reqwest_error() -> reqwest::Error {
    reqwest::Client::new()
        .post("not-a-url")
        .send()
        .await
        .unwrap_err()
}

#[tokio::test]
async fn dispatch_transport_failure_surfaces_cause() {
    let source = reqwest_error().await;
    let mut mock = MockTransport::new();

    mock.expect_post_json()
        .times(1)
        .return_once(move |_, _| Err(TransportError::Request { source }));

    let client = BuildClient::with_transport(ENDPOINT, mock);
    let err = client.dispatch(&request()).await.unwrap_err();

    assert!(matches!(err, DispatchError::Transport { .. }));
}

#[tokio::test]
async fn dispatch_non_json_success_body_is_invalid_response() {
    let mut mock = MockTransport::new();

    mock.expect_post_json()
        .returning(|_, _| Ok(ok_response("<html>proxy error</html>")));

    let client = BuildClient::with_transport(ENDPOINT, mock);
    let err = client.dispatch(&request()).await.unwrap_err();

    assert!(matches!(err, DispatchError::InvalidResponse { .. }));
}

#[tokio::test]
async fn dispatch_missing_message_field_is_invalid_response() {
    let mut mock = MockTransport::new();

    mock.expect_post_json()
        .returning(|_, _| Ok(ok_response(r#"{"image_tag":"x:1"}"#)));

    let client = BuildClient::with_transport(ENDPOINT, mock);
    let err = client.dispatch(&request()).await.unwrap_err();

    assert!(matches!(err, DispatchError::InvalidResponse { .. }));
}
