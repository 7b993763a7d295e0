use super::types::{request, response};
use crate::{modules::recipe::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut db = ctx.db_conn.lock().await;

    repository::delete_by_id(&mut db, &payload.id)
        .map(|_| response::Success::RecipeDeleted)
        .map_err(|_| response::Error::RecipeNotFound)
}
