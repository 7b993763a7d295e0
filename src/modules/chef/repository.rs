use crate::{modules::recipe::repository::Recipe, utils::database::Database};
use serde::{Deserialize, Serialize};

/// A chef as held in the store. Recipes are referenced by id and resolved
/// against the recipe collection when the chef is rendered.
#[derive(Clone, Debug, PartialEq)]
pub struct Chef {
    pub id: String,
    pub name: String,
    pub country: String,
    pub years_of_experience: i32,
    pub recipe_ids: Vec<String>,
}

impl Chef {
    pub fn with_recipes(self, recipes: &[Recipe]) -> ChefWithRecipes {
        ChefWithRecipes {
            recipes: self
                .recipe_ids
                .iter()
                .filter_map(|recipe_id| {
                    recipes
                        .iter()
                        .find(|recipe| &recipe.id == recipe_id && recipe.chef_id == self.id)
                })
                .cloned()
                .collect::<Vec<_>>(),
            id: self.id,
            name: self.name,
            country: self.country,
            years_of_experience: self.years_of_experience,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ChefWithRecipes {
    pub id: String,
    pub name: String,
    pub country: String,
    pub years_of_experience: i32,
    pub recipes: Vec<Recipe>,
}

pub struct CreateChefPayload {
    pub id: String,
    pub name: String,
    pub country: String,
    pub years_of_experience: i32,
}

pub fn create(db: &mut Database, payload: CreateChefPayload) -> Chef {
    let chef = Chef {
        id: payload.id,
        name: payload.name,
        country: payload.country,
        years_of_experience: payload.years_of_experience,
        recipe_ids: vec![],
    };

    db.chefs.push(chef.clone());
    tracing::debug!("Chef {} added to the store", chef.id);

    chef
}

pub fn find_by_id<'a>(db: &'a Database, id: &str) -> Option<&'a Chef> {
    db.chefs.iter().find(|chef| chef.id == id)
}

fn find_by_id_mut<'a>(db: &'a mut Database, id: &str) -> Option<&'a mut Chef> {
    db.chefs.iter_mut().find(|chef| chef.id == id)
}

pub fn find_many(db: &Database) -> Vec<ChefWithRecipes> {
    db.chefs
        .iter()
        .map(|chef| chef.clone().with_recipes(&db.recipes))
        .collect()
}

/// Appends a recipe reference to a chef. A missing chef is logged and skipped.
pub fn attach_recipe(db: &mut Database, chef_id: &str, recipe_id: &str) {
    match find_by_id_mut(db, chef_id) {
        Some(chef) => chef.recipe_ids.push(recipe_id.to_string()),
        None => tracing::warn!(
            "Chef {} not found, recipe {} left unattached",
            chef_id,
            recipe_id
        ),
    }
}

/// Removes the first reference to `recipe_id` from a chef. A missing chef or
/// reference is not an error.
pub fn detach_recipe(db: &mut Database, chef_id: &str, recipe_id: &str) {
    let Some(chef) = find_by_id_mut(db, chef_id) else {
        tracing::debug!("Chef {} no longer exists, nothing to detach", chef_id);
        return;
    };

    if let Some(index) = chef.recipe_ids.iter().position(|id| id == recipe_id) {
        chef.recipe_ids.remove(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn chef_payload(id: &str) -> CreateChefPayload {
        CreateChefPayload {
            id: id.to_string(),
            name: format!("Chef {id}"),
            country: String::from("Italy"),
            years_of_experience: 7,
        }
    }

    fn recipe(id: &str, chef_id: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: format!("Recipe {id}"),
            keywords: vec![],
            ingredients: vec![],
            instructions: vec![],
            published_at: Utc::now(),
            chef_id: chef_id.to_string(),
        }
    }

    #[test]
    fn created_chef_starts_without_recipes() {
        let mut db = Database::default();
        let chef = create(&mut db, chef_payload("c1"));

        assert!(chef.recipe_ids.is_empty());
        assert_eq!(find_by_id(&db, "c1"), Some(&chef));
        assert_eq!(find_by_id(&db, "c2"), None);
    }

    #[test]
    fn find_by_id_returns_first_match() {
        let mut db = Database::default();
        create(&mut db, chef_payload("dup"));
        create(
            &mut db,
            CreateChefPayload {
                name: String::from("Second"),
                ..chef_payload("dup")
            },
        );

        assert_eq!(find_by_id(&db, "dup").map(|chef| chef.name.as_str()), Some("Chef dup"));
    }

    #[test]
    fn attach_and_detach_recipe_references() {
        let mut db = Database::default();
        create(&mut db, chef_payload("c1"));

        attach_recipe(&mut db, "c1", "r1");
        attach_recipe(&mut db, "c1", "r2");
        attach_recipe(&mut db, "missing", "r3");

        detach_recipe(&mut db, "c1", "r1");
        detach_recipe(&mut db, "missing", "r2");

        assert_eq!(find_by_id(&db, "c1").unwrap().recipe_ids, vec!["r2"]);
        assert_eq!(db.chefs.len(), 1);
    }

    #[test]
    fn find_many_embeds_current_recipes() {
        let mut db = Database::default();
        create(&mut db, chef_payload("c1"));
        create(&mut db, chef_payload("c2"));
        db.recipes.push(recipe("r1", "c1"));
        attach_recipe(&mut db, "c1", "r1");
        db.recipes[0].name = String::from("Renamed");

        let chefs = find_many(&db);

        assert_eq!(chefs.len(), 2);
        assert_eq!(chefs[0].recipes.len(), 1);
        assert_eq!(chefs[0].recipes[0].name, "Renamed");
        assert!(chefs[1].recipes.is_empty());
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let chef = Chef {
            id: String::from("c1"),
            name: String::from("Chef"),
            country: String::from("Peru"),
            years_of_experience: 3,
            recipe_ids: vec![],
        }
        .with_recipes(&[]);

        let value = serde_json::to_value(chef).unwrap();

        assert_eq!(value["yearsOfExperience"], 3);
        assert_eq!(value["recipes"], serde_json::json!([]));
    }
}
