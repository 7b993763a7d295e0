use super::types::{request, response};
use crate::{modules::recipe::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut db = ctx.db_conn.lock().await;

    repository::create(
        &mut db,
        repository::CreateRecipePayload {
            name: payload.body.name,
            keywords: payload.body.keywords,
            ingredients: payload.body.ingredients,
            instructions: payload.body.instructions,
            chef_id: payload.body.chef_id,
        },
    )
    .map(response::Success::RecipeCreated)
    .map_err(|repository::ChefNotFound(chef_id)| response::Error::ChefNotFound(chef_id))
}
