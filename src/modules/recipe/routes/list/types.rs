pub mod response {
    use crate::modules::recipe::repository::Recipe;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use std::convert::Infallible;

    pub enum Success {
        Recipes(Vec<Recipe>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Recipes(recipes) => (StatusCode::OK, Json(json!(recipes))).into_response(),
            }
        }
    }

    pub type Response = Result<Success, Infallible>;
}
