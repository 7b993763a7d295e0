pub mod request {
    use serde::Deserialize;

    /// `id` and `publishedAt` may be sent but are always assigned by the server.
    #[derive(Deserialize, Default)]
    #[serde(default, rename_all = "camelCase")]
    pub struct Body {
        pub name: String,
        pub keywords: Vec<String>,
        pub ingredients: Vec<String>,
        pub instructions: Vec<String>,
        pub chef_id: String,
    }

    pub struct Payload {
        pub body: Body,
    }
}

pub mod response {
    use crate::modules::recipe::repository::Recipe;
    use axum::{
        extract::{rejection::JsonRejection, Json},
        http::StatusCode,
        response::IntoResponse,
    };
    use serde_json::json;

    pub enum Success {
        RecipeCreated(Recipe),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RecipeCreated(recipe) => (StatusCode::OK, Json(json!(recipe))).into_response(),
            }
        }
    }

    pub enum Error {
        MalformedRequest(String),
        ChefNotFound(String),
        Rejected(JsonRejection),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MalformedRequest(reason) => {
                    (StatusCode::BAD_REQUEST, Json(json!({ "error": reason }))).into_response()
                }
                Self::ChefNotFound(chef_id) => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": format!("Chef with ID {} not found", chef_id) })),
                )
                    .into_response(),
                Self::Rejected(rejection) => rejection.into_response(),
            }
        }
    }

    /// Bodies that could not be read at all (size limit, broken stream) keep
    /// axum's own status; everything else is a malformed request.
    impl From<JsonRejection> for Error {
        fn from(rejection: JsonRejection) -> Self {
            match rejection {
                JsonRejection::BytesRejection(_) => Self::Rejected(rejection),
                rejection => Self::MalformedRequest(rejection.body_text()),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
