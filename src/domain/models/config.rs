use serde::{Deserialize, Serialize};

/// Main configuration structure for Spotlight
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// HTTP API server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Client-side list cache configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// API client configuration (viewer side)
    #[serde(default)]
    pub client: ClientConfig,

    /// External rewards/profile API configuration
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Fan-out limits for the aggregator
    #[serde(default)]
    pub aggregator: AggregatorConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the user list served by `/api/users` comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectorySource {
    /// Static featured-user dataset
    #[default]
    Mock,
    /// Aggregated from the external rewards API
    Rewards,
}

impl std::str::FromStr for DirectorySource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mock" => Ok(Self::Mock),
            "rewards" => Ok(Self::Rewards),
            other => Err(format!("unknown source '{other}', expected 'mock' or 'rewards'")),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub source: DirectorySource,

    #[serde(default = "default_true")]
    pub enable_cors: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    3000
}

const fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            source: DirectorySource::default(),
            enable_cors: default_true(),
        }
    }
}

/// Backing store for the list cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    Memory,
    /// JSON file that survives between runs
    #[default]
    File,
}

/// List cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CacheConfig {
    /// Validity window in milliseconds
    #[serde(default = "default_ttl_ms")]
    pub ttl_ms: u64,

    /// Fixed key the envelope is stored under
    #[serde(default = "default_cache_key")]
    pub key: String,

    #[serde(default)]
    pub store: StoreKind,

    /// Path of the file store
    #[serde(default = "default_store_path")]
    pub path: Option<String>,
}

const fn default_ttl_ms() -> u64 {
    120_000
}

fn default_cache_key() -> String {
    "spotlight:users".to_string()
}

#[allow(clippy::unnecessary_wraps)]
fn default_store_path() -> Option<String> {
    Some(".spotlight/store.json".to_string())
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_ms: default_ttl_ms(),
            key: default_cache_key(),
            store: StoreKind::default(),
            path: default_store_path(),
        }
    }
}

/// Viewer-side API client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ClientConfig {
    /// Base URL of the Spotlight API
    #[serde(default = "default_client_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_client_base_url() -> String {
    "http://127.0.0.1:3000".to_string()
}

const fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_client_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// External rewards/profile API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct UpstreamConfig {
    #[serde(default = "default_upstream_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_upstream_base_url() -> String {
    "https://api.warpcast.com/v1".to_string()
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_upstream_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Aggregator fan-out configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AggregatorConfig {
    /// Maximum lookups in flight at once (1-64)
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,

    /// Deadline for a single profile lookup
    #[serde(default = "default_timeout_ms")]
    pub lookup_timeout_ms: u64,

    /// Upper bound on winners looked up per request
    #[serde(default = "default_max_winners")]
    pub max_winners: usize,
}

const fn default_max_concurrency() -> usize {
    8
}

const fn default_max_winners() -> usize {
    50
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            max_concurrency: default_max_concurrency(),
            lookup_timeout_ms: default_timeout_ms(),
            max_winners: default_max_winners(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files; stderr only when unset
    #[serde(default)]
    pub log_dir: Option<String>,

    /// Rotation for file output: daily, hourly or never
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_rotation(),
        }
    }
}
