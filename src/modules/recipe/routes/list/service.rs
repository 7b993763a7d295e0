use super::types::response;
use crate::{modules::recipe::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Response {
    let db = ctx.db_conn.lock().await;

    Ok(response::Success::Recipes(repository::find_many(&db)))
}
