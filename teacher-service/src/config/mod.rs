use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

pub const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017/teachers_db";
pub const DEFAULT_DATABASE: &str = "teachers_db";
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &["http://localhost:3000", "http://localhost:9002"];

#[derive(Debug, Clone, Deserialize)]
pub struct TeacherConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
    pub cors: CorsConfig,
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    pub uri: Secret<String>,
    pub database: String,
}

impl MongoConfig {
    /// The connection string, or `None` when it was configured empty.
    pub fn uri(&self) -> Option<&str> {
        let uri = self.uri.expose_secret().trim();
        (!uri.is_empty()).then_some(uri)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|o| o.to_string())
                .collect(),
        }
    }
}

impl TeacherConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;

        let allowed_origins = match env::var("CORS_ALLOWED_ORIGINS") {
            Ok(raw) => parse_origins(&raw),
            Err(_) => CorsConfig::default().allowed_origins,
        };

        Ok(TeacherConfig {
            common: common_config,
            mongodb: MongoConfig {
                uri: Secret::new(env_or("MONGO_URI", DEFAULT_MONGO_URI)),
                database: env_or("MONGO_DATABASE", DEFAULT_DATABASE),
            },
            cors: CorsConfig { allowed_origins },
            log_level: env_or("LOG_LEVEL", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}
