use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use pretty_assertions::assert_eq;
use relay_core_contact_contracts::{ContactSendMessageError, MockContactService};
use relay_core_contact_impl::{ContactServiceConfig, ContactServiceImpl};
use relay_email_contracts::{Email, EmailBody, MockEmailService};
use relay_models::{
    contact::{ContactMessageValidationError, ContactSubmission},
    email_address::EmailMessageId,
};
use relay_templates_impl::TemplateServiceImpl;
use serde_json::json;

mod common;

fn body() -> serde_json::Value {
    json!({
        "nama": "Ada",
        "waktu_pengiriman": "2024-01-01",
        "email_pengirim": "ada@example.com",
        "perihal": "Hello",
        "pesan": "Hi\nthere",
    })
}

fn submission() -> ContactSubmission {
    ContactSubmission {
        name: Some("Ada".into()),
        sent_at: Some("2024-01-01".into()),
        email: Some("ada@example.com".into()),
        subject: Some("Hello".into()),
        content: Some("Hi\nthere".into()),
    }
}

fn contact_service(
    email: MockEmailService,
) -> ContactServiceImpl<MockEmailService, TemplateServiceImpl> {
    let config = ContactServiceConfig {
        recipient: Some(Arc::new(
            "Portfolio Owner <owner@example.com>".parse().unwrap(),
        )),
        subject_prefix: "Pesan Baru dari Portfolio - ".into(),
    };
    ContactServiceImpl::new(email, TemplateServiceImpl::new().unwrap(), config)
}

#[tokio::test]
async fn ok() {
    // Arrange
    let contact = MockContactService::new()
        .with_send_message(submission(), Ok(EmailMessageId::from("abc123")));
    let router = common::contact_router(contact);

    // Act
    let response = common::post_json(router, "/api/send-email", body().to_string()).await;

    // Assert
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "success": true,
            "message": "Email berhasil dikirim",
            "data": {"messageId": "abc123"},
        })
    );
}

#[tokio::test]
async fn ok_forwards_reply_to_and_subject() {
    // Arrange
    let mut email = MockEmailService::new();
    email
        .expect_send()
        .once()
        .withf(|email: &Email| {
            email.reply_to.as_ref().map(|x| x.email()) == Some("ada@example.com")
                && email.subject.contains("Hello")
                && email.recipient.email() == "owner@example.com"
                && matches!(&email.body, EmailBody::Alternative { html, text }
                    if html.contains("Hi<br>there") && text.contains("Hi\nthere"))
        })
        .return_once(|_| Box::pin(std::future::ready(anyhow::Ok(EmailMessageId::from("abc123")))));
    let router = common::contact_router(contact_service(email));

    // Act
    let response = common::post_json(router, "/api/send-email", body().to_string()).await;

    // Assert
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["messageId"], "abc123");
}

#[tokio::test]
async fn missing_fields() {
    for field in ["nama", "email_pengirim", "perihal", "pesan"] {
        for value in [None, Some("")] {
            // Arrange
            let mut body = body();
            match value {
                Some(value) => body[field] = value.into(),
                None => {
                    body.as_object_mut().unwrap().remove(field);
                }
            }
            // no expectations, any send would panic
            let router = common::contact_router(contact_service(MockEmailService::new()));

            // Act
            let response = common::post_json(router, "/api/send-email", body.to_string()).await;

            // Assert
            assert_eq!(response.status, StatusCode::BAD_REQUEST, "{field}: {value:?}");
            assert_eq!(
                response.body,
                json!({"success": false, "message": "Semua field harus diisi"})
            );
        }
    }
}

#[tokio::test]
async fn missing_sent_at_is_accepted() {
    // Arrange
    let mut body = body();
    body.as_object_mut().unwrap().remove("waktu_pengiriman");

    let contact = MockContactService::new().with_send_message(
        ContactSubmission {
            sent_at: None,
            ..submission()
        },
        Ok(EmailMessageId::from("abc123")),
    );
    let router = common::contact_router(contact);

    // Act
    let response = common::post_json(router, "/api/send-email", body.to_string()).await;

    // Assert
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn invalid_email() {
    for address in [
        "ada",
        "ada@example",
        "ada example@x.com",
        "@example.com",
        "ada@example.com.",
        "a(b)@example.com",
    ] {
        // Arrange
        let mut body = body();
        body["email_pengirim"] = address.into();
        let router = common::contact_router(contact_service(MockEmailService::new()));

        // Act
        let response = common::post_json(router, "/api/send-email", body.to_string()).await;

        // Assert
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{address}");
        assert_eq!(
            response.body,
            json!({"success": false, "message": "Format email tidak valid"})
        );
    }
}

#[tokio::test]
async fn validation_error_from_service() {
    // Arrange
    let contact = MockContactService::new().with_send_message(
        submission(),
        Err(ContactMessageValidationError::InvalidEmail.into()),
    );
    let router = common::contact_router(contact);

    // Act
    let response = common::post_json(router, "/api/send-email", body().to_string()).await;

    // Assert
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Format email tidak valid");
}

#[tokio::test]
async fn transport_error() {
    // Arrange
    let mut email = MockEmailService::new();
    email
        .expect_send()
        .once()
        .return_once(|_| Box::pin(std::future::ready(Err(anyhow::anyhow!("SMTP down")))));
    let router = common::contact_router(contact_service(email));

    // Act
    let response = common::post_json(router, "/api/send-email", body().to_string()).await;

    // Assert
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["message"], "Gagal mengirim email");
    assert!(response.body["error"]
        .as_str()
        .unwrap()
        .contains("SMTP down"));
}

#[tokio::test]
async fn unexpected_error() {
    // Arrange
    let contact = MockContactService::new().with_send_message(
        submission(),
        Err(ContactSendMessageError::Other(anyhow::anyhow!("boom"))),
    );
    let router = common::contact_router(contact);

    // Act
    let response = common::post_json(router, "/api/send-email", body().to_string()).await;

    // Assert
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.body,
        json!({"success": false, "message": "Internal server error"})
    );
}

#[tokio::test]
async fn malformed_json() {
    for body in ["{", r#""text""#, r#"{"nama": 42}"#] {
        // Arrange
        let router = common::contact_router(MockContactService::new());

        // Act
        let response = common::post_json(router, "/api/send-email", body).await;

        // Assert
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(response.body["success"], false);
        assert_eq!(response.body["message"], "Invalid request body");
        assert!(response.body["error"].is_string());
    }
}

#[tokio::test]
async fn repeated_requests_are_sent_twice() {
    // Arrange
    let mut email = MockEmailService::new();
    email
        .expect_send()
        .times(2)
        .returning(|_| Box::pin(std::future::ready(anyhow::Ok(EmailMessageId::from("abc123")))));
    let router = common::contact_router(contact_service(email));

    // Act
    let first = common::post_json(router.clone(), "/api/send-email", body().to_string()).await;
    let second = common::post_json(router, "/api/send-email", body().to_string()).await;

    // Assert
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(second.status, StatusCode::OK);
}

#[tokio::test]
async fn cors() {
    // Arrange
    let router = common::contact_router(MockContactService::new());
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/send-email")
        .header(header::ORIGIN, "https://portfolio.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    // Act
    let response = common::send(router, request).await;

    // Assert
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn handler_panic() {
    // Arrange
    // no expectation set, the mock panics when called
    let router = common::contact_router(MockContactService::new());

    // Act
    let response = common::post_json(router, "/api/send-email", body().to_string()).await;

    // Assert
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.body,
        json!({"success": false, "message": "Internal server error"})
    );
}
