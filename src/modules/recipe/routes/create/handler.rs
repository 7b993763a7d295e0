use super::{
    service::service,
    types::{request, response},
};
use crate::types::Context;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    body: Result<Json<request::Body>, JsonRejection>,
) -> response::Response {
    let Json(body) = body.map_err(|rejection| {
        tracing::warn!("Rejected recipe body: {}", rejection.body_text());
        response::Error::from(rejection)
    })?;

    service(ctx, request::Payload { body }).await
}
