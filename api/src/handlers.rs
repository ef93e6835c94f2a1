use anyhow::Context;
use axum::{
    body::to_bytes,
    extract::{Request, State},
    http::{header, Method},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::answers::mock_answers;
use crate::auth::authorize;
use crate::config::Settings;
use crate::error::HandlerError;
use crate::hackrx_request::HackRxRequest;
use crate::hackrx_response::{HackRxResponse, StatusMessage};

const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Answers a run request: method check, bearer auth, body parse, shape
/// validation, then one mock answer per question.
pub async fn hackrx_run(
    State(settings): State<Arc<Settings>>,
    request: Request,
) -> Result<Response, HandlerError> {
    let (parts, body) = request.into_parts();

    if parts.method != Method::POST {
        log::warn!("Rejected {} request to {}", parts.method, parts.uri.path());
        return Err(HandlerError::MethodNotAllowed);
    }

    authorize(&parts.headers, &settings.bearer_token)?;

    let bytes = to_bytes(body, MAX_BODY_BYTES)
        .await
        .context("Failed to read request body")?;
    let payload: serde_json::Value =
        serde_json::from_slice(&bytes).context("Invalid JSON body")?;

    let request = HackRxRequest::from_json(payload).map_err(|err| {
        log::warn!("Rejected run payload: {}", err);
        err
    })?;

    let answers = mock_answers(&request);
    log::info!("Answered {} questions", answers.len());

    Ok((
        [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
        Json(HackRxResponse { answers }),
    )
        .into_response())
}

pub async fn status() -> Json<StatusMessage> {
    Json(StatusMessage {
        message: "Policynth API is running".to_string(),
    })
}
