use super::types::{request, response};
use crate::{modules::recipe::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut db = ctx.db_conn.lock().await;

    repository::update_by_id(
        &mut db,
        &payload.id,
        repository::UpdateRecipePayload {
            name: payload.body.name,
            keywords: payload.body.keywords,
            ingredients: payload.body.ingredients,
            instructions: payload.body.instructions,
            chef_id: payload.body.chef_id,
        },
    )
    .map(response::Success::RecipeUpdated)
    .map_err(|err| match err {
        repository::Error::RecipeNotFound => response::Error::RecipeNotFound,
        repository::Error::ChefNotFound(chef_id) => response::Error::ChefNotFound(chef_id),
    })
}
