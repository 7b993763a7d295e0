use crate::{modules::chef, utils::database::Database};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub keywords: Vec<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub published_at: DateTime<Utc>,
    pub chef_id: String,
}

pub struct CreateRecipePayload {
    pub name: String,
    pub keywords: Vec<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub chef_id: String,
}

pub struct UpdateRecipePayload {
    pub name: String,
    pub keywords: Vec<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub chef_id: String,
}

/// The only way a create can fail.
#[derive(Debug, PartialEq)]
pub struct ChefNotFound(pub String);

#[derive(Debug, PartialEq)]
pub enum Error {
    ChefNotFound(String),
    RecipeNotFound,
}

impl From<ChefNotFound> for Error {
    fn from(ChefNotFound(chef_id): ChefNotFound) -> Self {
        Self::ChefNotFound(chef_id)
    }
}

fn ensure_chef_exists(db: &Database, chef_id: &str) -> Result<(), ChefNotFound> {
    match chef::repository::find_by_id(db, chef_id) {
        Some(_) => Ok(()),
        None => {
            tracing::warn!("Chef with ID {} not found", chef_id);
            Err(ChefNotFound(chef_id.to_string()))
        }
    }
}

fn position_by_id(db: &Database, id: &str) -> Result<usize, Error> {
    db.recipes
        .iter()
        .position(|recipe| recipe.id == id)
        .ok_or_else(|| {
            tracing::warn!("Recipe with ID {} not found", id);
            Error::RecipeNotFound
        })
}

pub fn find_many(db: &Database) -> Vec<Recipe> {
    db.recipes.clone()
}

pub fn create(db: &mut Database, payload: CreateRecipePayload) -> Result<Recipe, ChefNotFound> {
    ensure_chef_exists(db, &payload.chef_id)?;

    let recipe = Recipe {
        id: Ulid::new().to_string(),
        name: payload.name,
        keywords: payload.keywords,
        ingredients: payload.ingredients,
        instructions: payload.instructions,
        published_at: Utc::now(),
        chef_id: payload.chef_id,
    };

    db.recipes.push(recipe.clone());
    chef::repository::attach_recipe(db, &recipe.chef_id, &recipe.id);

    tracing::info!("Recipe {} created for chef {}", recipe.id, recipe.chef_id);

    Ok(recipe)
}

/// Replaces every mutable field of the first recipe matching `id`. The id and
/// publication time are kept; a change of chef moves the reference across.
pub fn update_by_id(
    db: &mut Database,
    id: &str,
    payload: UpdateRecipePayload,
) -> Result<Recipe, Error> {
    let index = position_by_id(db, id)?;
    ensure_chef_exists(db, &payload.chef_id)?;

    let recipe = &mut db.recipes[index];
    let previous_chef_id = std::mem::replace(&mut recipe.chef_id, payload.chef_id);
    recipe.name = payload.name;
    recipe.keywords = payload.keywords;
    recipe.ingredients = payload.ingredients;
    recipe.instructions = payload.instructions;
    let recipe = recipe.clone();

    if previous_chef_id != recipe.chef_id {
        chef::repository::detach_recipe(db, &previous_chef_id, id);
        chef::repository::attach_recipe(db, &recipe.chef_id, id);
        tracing::info!(
            "Recipe {} moved from chef {} to chef {}",
            id,
            previous_chef_id,
            recipe.chef_id
        );
    }

    tracing::info!("Recipe {} updated", id);

    Ok(recipe)
}

pub fn delete_by_id(db: &mut Database, id: &str) -> Result<Recipe, Error> {
    let index = position_by_id(db, id)?;
    let recipe = db.recipes.remove(index);

    chef::repository::detach_recipe(db, &recipe.chef_id, &recipe.id);

    tracing::info!("Recipe {} deleted", id);

    Ok(recipe)
}
