use crate::{
    modules,
    types::{Config, Context, ToContext},
};
use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors, trace};

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

impl App {
    pub async fn new(config: Config) -> Self {
        let ctx: Arc<Context> = Arc::new(config.to_context().await);

        let router = Router::new()
            .merge(modules::get_router())
            .with_state(ctx.clone())
            .layer(DefaultBodyLimit::max(1024 * 1024))
            .layer(trace::TraceLayer::new_for_http())
            .layer(
                cors::CorsLayer::new()
                    .allow_methods([
                        Method::OPTIONS,
                        Method::GET,
                        Method::POST,
                        Method::PUT,
                        Method::DELETE,
                    ])
                    .allow_headers([header::CONTENT_TYPE])
                    .allow_origin(cors::Any),
            );

        Self { ctx, router }
    }

    pub fn context(&self) -> Arc<Context> {
        self.ctx.clone()
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub async fn serve(self) -> std::io::Result<()> {
        let listener =
            TcpListener::bind(format!("{}:{}", self.ctx.app.host, self.ctx.app.port)).await?;

        tracing::info!(
            "App is running on {} ({:?})",
            self.ctx.app.url,
            self.ctx.app.environment
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(err) => {
            tracing::error!("Failed to listen for the shutdown signal: {}", err);
            std::future::pending::<()>().await
        }
    }
}
