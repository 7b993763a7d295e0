use crate::modules::{
    chef::{self, repository::Chef},
    recipe::repository::Recipe,
};
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

/// The in-memory recipe and chef collections, kept in insertion order.
#[derive(Default, Debug)]
pub struct Database {
    pub recipes: Vec<Recipe>,
    pub chefs: Vec<Chef>,
}

#[derive(Clone, Default)]
pub struct DatabaseConnection {
    pub store: Arc<Mutex<Database>>,
}

impl DatabaseConnection {
    /// Every read and mutation holds this lock for its whole duration, so the
    /// two collections are never observed half-updated.
    pub async fn lock(&self) -> MutexGuard<'_, Database> {
        self.store.lock().await
    }
}

pub fn connect() -> DatabaseConnection {
    tracing::debug!("Initialising in-memory store");
    DatabaseConnection::default()
}

pub async fn seed(db_conn: &DatabaseConnection) {
    let mut db = db_conn.lock().await;

    chef::repository::create(
        &mut db,
        chef::repository::CreateChefPayload {
            id: String::from("1"),
            name: String::from("Chef 1"),
            country: String::from("Country 1"),
            years_of_experience: 1,
        },
    );

    db.recipes.push(Recipe {
        id: String::from("1"),
        name: String::from("Recipe 1"),
        keywords: vec![String::from("keyword 1"), String::from("keyword 2")],
        ingredients: vec![String::from("ingredient 1"), String::from("ingredient 2")],
        instructions: vec![
            String::from("instruction 1"),
            String::from("instruction 2"),
        ],
        published_at: Utc::now(),
        chef_id: String::from("1"),
    });
    chef::repository::attach_recipe(&mut db, "1", "1");

    tracing::info!(
        "Seeded store with {} chef(s) and {} recipe(s)",
        db.chefs.len(),
        db.recipes.len()
    );
}
