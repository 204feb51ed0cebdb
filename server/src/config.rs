//! Startup configuration.
//!
//! Every setting can come from a flag or an environment variable; flags win.
//! `main` loads a `.env` file into the environment before parsing.

use clap::{Args, Parser};

use crate::auth::DEFAULT_API_KEY;

/// Todo HTTP service backed by MongoDB.
#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Shared secret expected in the X-API-KEY header
    #[arg(long, env = "API_KEY", default_value = DEFAULT_API_KEY, hide_env_values = true)]
    pub api_key: String,

    #[command(flatten)]
    pub mongo: MongoConfig,
}

impl Config {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Args)]
pub struct MongoConfig {
    /// MongoDB host
    #[arg(id = "mongo_host", long = "mongo-host", env = "MONGO_HOST", default_value = "localhost")]
    pub host: String,

    /// MongoDB port
    #[arg(id = "mongo_port", long = "mongo-port", env = "MONGO_PORT", default_value_t = 27017)]
    pub port: u16,

    /// MongoDB user
    #[arg(id = "mongo_user", long = "mongo-user", env = "MONGO_USER")]
    pub user: String,

    /// MongoDB password
    #[arg(id = "mongo_pass", long = "mongo-pass", env = "MONGO_PASS", hide_env_values = true)]
    pub pass: String,

    /// Database holding the todos collection
    #[arg(id = "mongo_name", long = "mongo-name", env = "MONGO_NAME")]
    pub name: String,
}

impl MongoConfig {
    pub fn connection_string(&self) -> String {
        format!(
            "mongodb://{}:{}@{}:{}/{}",
            self.user, self.pass, self.host, self.port, self.name
        )
    }
}
