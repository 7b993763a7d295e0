pub use crate::utils::database;
use async_trait::async_trait;
use std::env;

#[derive(Clone, Debug, PartialEq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
    pub url: String,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub db_conn: database::DatabaseConnection,
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub seed: bool,
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
    pub url: String,
}

#[derive(Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub app: AppConfig,
}

fn parse_flag(raw: &str) -> bool {
    !matches!(raw.trim().to_lowercase().as_str(), "false" | "0" | "no" | "off")
}

impl Default for Config {
    fn default() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let environment =
            AppEnvironment::from(env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()));
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u32>()
            .expect("Invalid PORT number");
        let url = env::var("URL").unwrap_or_else(|_| format!("http://{}:{}", host, port));
        let seed = env::var("DATABASE_SEED")
            .map(|raw| parse_flag(&raw))
            .unwrap_or(environment == AppEnvironment::Development);

        Self {
            database: DatabaseConfig { seed },
            app: AppConfig {
                host,
                environment,
                port,
                url,
            },
        }
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Context;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Context {
        let db_conn = database::connect();

        if self.database.seed {
            database::seed(&db_conn).await;
        }

        Context {
            app: AppContext {
                host: self.app.host,
                environment: self.app.environment,
                port: self.app.port,
                url: self.app.url,
            },
            db_conn,
        }
    }
}
