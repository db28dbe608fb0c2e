use mandrill_transport::{MailTransport, SendError};
use serde_json::json;

use crate::helpers::{
    test_credentials, test_envelope, test_message, TestTransport, RAW_MESSAGE,
};

#[tokio::test]
async fn posts_to_the_send_raw_endpoint() {
    let app = TestTransport::new(200, r#"[{"_id": "abc123"}]"#);
    let mut message = test_message();

    app.transport
        .send(&mut message, &test_envelope())
        .await
        .expect("Send should succeed");

    let request = app.client.single_request();
    assert_eq!(
        request.url,
        "https://mandrillapp.com/api/1.0/messages/send-raw.json"
    );
}

#[tokio::test]
async fn host_and_port_overrides_reach_the_url() {
    let credentials = test_credentials()
        .with_host("mandrill.test".to_string())
        .with_port(8443);
    let app = TestTransport::with_credentials(200, "[]", credentials);
    let mut message = test_message();

    app.transport
        .send(&mut message, &test_envelope())
        .await
        .expect("Send should succeed");

    let request = app.client.single_request();
    assert_eq!(
        request.url,
        "https://mandrill.test:8443/api/1.0/messages/send-raw.json"
    );
}

#[tokio::test]
async fn payload_carries_key_envelope_and_raw_message() {
    let app = TestTransport::new(200, r#"[{"_id": "abc123"}]"#);
    let mut message = test_message();

    app.transport
        .send(&mut message, &test_envelope())
        .await
        .expect("Send should succeed");

    let request = app.client.single_request();
    assert_eq!(
        request.body,
        json!({
            "key": "test-key",
            "to": ["first@example.com", "second@example.com"],
            "from_email": "from@example.com",
            "raw_message": RAW_MESSAGE,
        })
    );
}

#[tokio::test]
async fn success_assigns_the_provider_message_id() {
    let app = TestTransport::new(200, r#"[{"_id": "abc123"}]"#);
    let mut message = test_message();

    let response = app
        .transport
        .send(&mut message, &test_envelope())
        .await
        .expect("Send should succeed");

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(message.message_id(), Some("abc123"));
    assert_eq!(app.client.request_count(), 1);
}

#[tokio::test]
async fn success_without_an_id_leaves_the_message_id_unset() {
    let app = TestTransport::new(200, "[]");
    let mut message = test_message();

    app.transport
        .send(&mut message, &test_envelope())
        .await
        .expect("Send should succeed");

    assert!(message.message_id().is_none());
}

#[tokio::test]
async fn provider_errors_are_descriptive() {
    let app = TestTransport::new(
        500,
        r#"{"status": "error", "message": "Invalid key", "code": 12}"#,
    );
    let mut message = test_message();

    let error = app
        .transport
        .send(&mut message, &test_envelope())
        .await
        .expect_err("Send should fail");

    assert_eq!(
        error.to_string(),
        "Unable to send an email: Invalid key (code 12)."
    );
    assert!(matches!(error, SendError::Api { .. }));
    assert_eq!(error.response().unwrap().status().as_u16(), 500);
    assert!(message.message_id().is_none());
}

#[tokio::test]
async fn unparseable_error_bodies_do_not_panic() {
    let app = TestTransport::new(500, "<html>internal server error</html>");
    let mut message = test_message();

    let error = app
        .transport
        .send(&mut message, &test_envelope())
        .await
        .expect_err("Send should fail");

    assert_eq!(error.to_string(), "Unable to send an email (code unknown).");
    assert!(matches!(error, SendError::Unknown { .. }));
}

#[tokio::test]
async fn unrecognized_error_bodies_still_surface_a_code() {
    let app = TestTransport::new(503, r#"{"code": 7}"#);
    let mut message = test_message();

    let error = app
        .transport
        .send(&mut message, &test_envelope())
        .await
        .expect_err("Send should fail");

    assert_eq!(error.to_string(), "Unable to send an email (code 7).");
}

#[tokio::test]
async fn identity_string_is_stable_and_sends_nothing() {
    let app = TestTransport::new(200, "[]");

    let first = app.transport.to_string();
    let second = app.transport.to_string();

    assert_eq!(first, "mandrill+https://mandrillapp.com");
    assert_eq!(first, second);
    assert_eq!(app.client.request_count(), 0);
}
