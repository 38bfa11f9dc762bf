//! stock-config - 配置加载库
//!
//! 加载顺序（后者覆盖前者）：
//! 1. 代码内默认值
//! 2. `{config_dir}/default.toml`
//! 3. `{config_dir}/{APP_ENV}.toml`
//! 4. `APP_` 前缀环境变量，`__` 表示嵌套，例如 `APP_DATABASE__HOST`
//! 5. 部署变量 `DEPLOY_PORT`、`API_HISTORY_PORT`

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::Secret;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] figment::Error),
}

/// 监听端口环境变量
pub const DEPLOY_PORT_ENV: &str = "DEPLOY_PORT";

/// 历史服务端口环境变量
pub const HISTORY_PORT_ENV: &str = "API_HISTORY_PORT";

/// 数据库配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: Secret<String>,
    pub max_connections: u32,
    /// `disable` / `prefer` / `require`
    pub ssl_mode: String,
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "db".to_string(),
            port: 5432,
            name: "mydatabase".to_string(),
            user: "myuser".to_string(),
            password: Secret::new("mypassword".to_string()),
            max_connections: 10,
            ssl_mode: "prefer".to_string(),
            run_migrations: false,
        }
    }
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// 遥测配置
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// 历史服务地址
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub host: String,
    pub port: u16,
    pub timeout_secs: u64,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 8002,
            timeout_secs: 5,
        }
    }
}

impl HistoryConfig {
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// 各服务自己的默认值
#[derive(Debug, Clone, Copy)]
pub struct ServiceDefaults {
    pub app_name: &'static str,
    pub port: u16,
}

/// 应用配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app_name: String,
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

fn default_app_env() -> String {
    "development".to_string()
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    pub fn load(config_dir: &str, defaults: ServiceDefaults) -> Result<Self, ConfigError> {
        Self::figment(config_dir, defaults)
            .extract()
            .map_err(ConfigError::from)
    }

    fn figment(config_dir: &str, defaults: ServiceDefaults) -> Figment {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| default_app_env());

        Figment::new()
            .merge(Serialized::default("app_name", defaults.app_name))
            .merge(Serialized::default("app_env", &env))
            .merge(Serialized::default("server.port", defaults.port))
            .merge(Toml::file(format!("{}/default.toml", config_dir)))
            .merge(Toml::file(format!("{}/{}.toml", config_dir, env)))
            .merge(Env::prefixed("APP_").split("__"))
            .merge(
                Env::raw()
                    .only(&[DEPLOY_PORT_ENV])
                    .map(|_| "server.port".into()),
            )
            .merge(
                Env::raw()
                    .only(&[HISTORY_PORT_ENV])
                    .map(|_| "history.port".into()),
            )
    }

    /// 是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }
}
