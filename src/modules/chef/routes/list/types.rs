pub mod response {
    use crate::modules::chef::repository::ChefWithRecipes;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use std::convert::Infallible;

    pub enum Success {
        Chefs(Vec<ChefWithRecipes>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Chefs(chefs) => (StatusCode::OK, Json(json!(chefs))).into_response(),
            }
        }
    }

    pub type Response = Result<Success, Infallible>;
}
