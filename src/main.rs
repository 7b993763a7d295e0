use recipes_backend_rs::{app::App, types::Config};
use tracing_subscriber::prelude::*;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    let app = App::new(Config::default()).await;

    if let Err(err) = app.serve().await {
        tracing::error!("Server stopped with an error: {}", err);
        std::process::exit(1);
    }
}
