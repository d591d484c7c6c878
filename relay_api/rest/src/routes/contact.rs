use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use relay_core_contact_contracts::{ContactSendMessageError, ContactService};
use relay_models::contact::ContactMessageValidationError;

use super::{error, internal_server_error};
use crate::models::{
    contact::{ApiContactMessage, ApiSentEmail},
    ApiResponse,
};

pub fn router(service: Arc<impl ContactService>) -> Router<()> {
    Router::new()
        .route("/api/send-email", routing::post(send_email))
        .with_state(service)
}

async fn send_email(
    service: State<Arc<impl ContactService>>,
    message: Result<Json<ApiContactMessage>, JsonRejection>,
) -> Response {
    let Json(message) = match message {
        Ok(message) => message,
        Err(rejection) => {
            return error(
                StatusCode::BAD_REQUEST,
                ApiResponse::failure("Invalid request body").with_error(rejection.body_text()),
            )
        }
    };

    match service.send_message(message.into()).await {
        Ok(message_id) => Json(
            ApiResponse::success("Email berhasil dikirim").with_data(ApiSentEmail { message_id }),
        )
        .into_response(),
        Err(ContactSendMessageError::Validation(ContactMessageValidationError::MissingFields)) => {
            error(
                StatusCode::BAD_REQUEST,
                ApiResponse::failure("Semua field harus diisi"),
            )
        }
        Err(ContactSendMessageError::Validation(ContactMessageValidationError::InvalidEmail)) => {
            error(
                StatusCode::BAD_REQUEST,
                ApiResponse::failure("Format email tidak valid"),
            )
        }
        Err(ContactSendMessageError::Send(err)) => error(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiResponse::failure("Gagal mengirim email").with_error(format_args!("{err:#}")),
        ),
        Err(ContactSendMessageError::Other(err)) => internal_server_error(err),
    }
}
