//! Startup configuration.
//!
//! Every option can come from a CLI flag or from the environment (a `.env` file
//! is read first when present):
//!
//! - `HOST`, `PORT` - bind address (default `0.0.0.0:3000`)
//! - `MONGODB_URI` - full connection string, wins over the Atlas settings below
//! - `DB_USERNAME`, `DB_PASSWORD`, `DB_CLUSTER` - Atlas credentials and host
//! - `DB_NAME` - database name (default `savvy-pulse`)
//! - `ACCESS_TOKEN_SECRET` - HS256 secret for access tokens (required)
//! - `TOKEN_TTL_SECS` - access token lifetime (default one hour)
//! - `IN_MEMORY_STORE` - serve from an ephemeral in-process store

use clap::Parser;
use thiserror::Error;

use crate::jwt::jwt_helper::{DEFAULT_TOKEN_TTL_SECS, MAX_TOKEN_TTL_SECS};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CLUSTER: &str = "cluster0.4w0vbzl.mongodb.net";
pub const DEFAULT_DB_NAME: &str = "savvy-pulse";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("ACCESS_TOKEN_SECRET must not be empty")]
    MissingSecret,

    #[error("no database configured: set MONGODB_URI or DB_USERNAME and DB_PASSWORD")]
    MissingDatabase,

    #[error("TOKEN_TTL_SECS must be between 1 and {max}, got {got}")]
    InvalidTokenTtl { got: u64, max: u64 },
}

/// SavvyPulse - REST backend for products, users, orders and the blog feed.
#[derive(Parser, Debug, Clone)]
#[command(name = "savvy-pulse")]
#[command(author, version, about, long_about = None)]
pub struct AppConfig {
    /// Address to bind the HTTP server to.
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Full MongoDB connection string.
    #[arg(long, env = "MONGODB_URI", hide_env_values = true)]
    pub mongodb_uri: Option<String>,

    /// Atlas database user, ignored when MONGODB_URI is set.
    #[arg(long, env = "DB_USERNAME")]
    pub db_username: Option<String>,

    /// Password for DB_USERNAME.
    #[arg(long, env = "DB_PASSWORD", hide_env_values = true)]
    pub db_password: Option<String>,

    /// Atlas cluster host used with DB_USERNAME and DB_PASSWORD.
    #[arg(long, env = "DB_CLUSTER", default_value = DEFAULT_CLUSTER)]
    pub db_cluster: String,

    /// Database holding the categories, products, users, blog and orders collections.
    #[arg(long, env = "DB_NAME", default_value = DEFAULT_DB_NAME)]
    pub db_name: String,

    /// Secret used to sign and verify access tokens.
    #[arg(long, env = "ACCESS_TOKEN_SECRET", hide_env_values = true)]
    pub access_token_secret: String,

    /// Access token lifetime in seconds.
    #[arg(long, env = "TOKEN_TTL_SECS", default_value_t = DEFAULT_TOKEN_TTL_SECS)]
    pub token_ttl_secs: u64,

    /// Keep all data in process memory instead of MongoDB.
    #[arg(long, env = "IN_MEMORY_STORE")]
    pub in_memory_store: bool,

    /// Debug-level logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.access_token_secret.trim().is_empty() {
            return Err(ConfigError::MissingSecret);
        }
        if self.token_ttl_secs == 0 || self.token_ttl_secs > MAX_TOKEN_TTL_SECS {
            return Err(ConfigError::InvalidTokenTtl {
                got: self.token_ttl_secs,
                max: MAX_TOKEN_TTL_SECS,
            });
        }
        if !self.in_memory_store {
            self.mongo_uri()?;
        }
        Ok(())
    }

    /// Connection string: `MONGODB_URI` as given, else an Atlas SRV URI built
    /// from the percent-encoded credentials.
    pub fn mongo_uri(&self) -> Result<String, ConfigError> {
        if let Some(uri) = self.mongodb_uri.as_deref().filter(|u| !u.is_empty()) {
            return Ok(uri.to_string());
        }

        match (self.db_username.as_deref(), self.db_password.as_deref()) {
            (Some(user), Some(password)) if !user.is_empty() => Ok(format!(
                "mongodb+srv://{}:{}@{}/?retryWrites=true&w=majority",
                urlencoding::encode(user),
                urlencoding::encode(password),
                self.db_cluster
            )),
            _ => Err(ConfigError::MissingDatabase),
        }
    }
}
