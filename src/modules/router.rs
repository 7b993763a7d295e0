use super::{chef, recipe};
use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .nest("/chefs", chef::routes::get_router())
        .nest("/recipes", recipe::routes::get_router())
}
