pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        RecipeDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RecipeDeleted => (
                    StatusCode::OK,
                    Json(json!({ "message": "Recipe deleted" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        RecipeNotFound,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RecipeNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Recipe not found" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
