use super::{
    service::service,
    types::{request, response},
};
use crate::types::Context;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    Path(id): Path<String>,
    body: Result<Json<request::Body>, JsonRejection>,
) -> response::Response {
    let Json(body) = body.map_err(|rejection| {
        tracing::warn!("Rejected body for recipe {}: {}", id, rejection.body_text());
        response::Error::from(rejection)
    })?;

    service(ctx, request::Payload { id, body }).await
}
