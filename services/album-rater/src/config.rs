//!
//! src/config.rs
//!
//! Builds the single configuration object for a run from the environment
//! (and .env). Built once in main and handed to each client.
//!

use url::Url;
use std::time;
use crate::errors::RaterError;

/// Constants for HTTP Config
pub const HTTP_POOL_MAX_IDLE: usize = 4;
pub const HTTP_POOL_IDLE_TIMEOUT: u64 = 90000;
pub const HTTP_MAX_REDIRECTS: u8 = 4;

/// Environment variable names read from the process env or .env
pub const ACCESS_VAR: &str = "ACCESS";
pub const ALBUM_VAR: &str  = "ALBUM";
pub const STORE_VAR: &str  = "MONGO";

/// Wrapper over a lookup to return an invalid enviroment var error
fn env_check<F>(lookup: &F, s: &str) -> Result<String, RaterError>
where
    F: Fn(&str) -> Option<String>
{
    match lookup(s) {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(RaterError::Config(format!("{s} was not set"))),
    }
}

/// Ensures that url is http or https
fn ensure_http(url: &Url) -> Result<(), String> {
    match url.scheme() {
        "https" | "http" => Ok(()),
        other => Err(format!("URL must be http(s), got {other}: {url}"))
    }
}

fn endpoint<F>(lookup: &F, name: &str) -> Result<Url, RaterError>
where
    F: Fn(&str) -> Option<String>
{
    let raw = env_check(lookup, name)?;
    let url = Url::parse(&raw)
        .map_err(|e| RaterError::Config(format!("{name} invalid {e}")))?;
    ensure_http(&url).map_err(RaterError::Config)?;
    Ok(url)
}

///
/// The three collaborators a transaction talks to
///
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    pub access_url: Url,    // hands out bearer tokens
    pub album_url: Url,     // resolves an album id to metadata
    pub store_url: Url      // persists the rating
}

fn build_endpoints<F>(lookup: &F) -> Result<EndpointConfig, RaterError>
where
    F: Fn(&str) -> Option<String>
{
    let access_url = endpoint(lookup, ACCESS_VAR)?;
    let album_url  = endpoint(lookup, ALBUM_VAR)?;
    let store_url  = endpoint(lookup, STORE_VAR)?;

    Ok( EndpointConfig { access_url, album_url, store_url } )
}

///
/// Configuration for the shared http client. Calls are never timed out.
///
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub pool_max_idle_per_host: usize,
    pub pool_idle_timeout: time::Duration,
    pub max_redirects: u8,
    pub user_agent: String
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            pool_max_idle_per_host: HTTP_POOL_MAX_IDLE,
            pool_idle_timeout: time::Duration::from_millis(HTTP_POOL_IDLE_TIMEOUT),
            max_redirects: HTTP_MAX_REDIRECTS,
            user_agent: format!("album-rater/{}", env!("CARGO_PKG_VERSION"))
        }
    }
}

///
/// Configuration for Logger
///

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json
}

impl LogFormat {
    pub fn parse(s: &str) -> Option<LogFormat> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Some(LogFormat::Pretty),
            "json"   => Some(LogFormat::Json),
            _ => None
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter_directives: String,
    pub format: LogFormat,
    pub include_file_line: bool,
    pub include_target: bool
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter_directives: "warn,album_rater=info".to_string(),
            format: LogFormat::Pretty,
            include_file_line: false,
            include_target: true
        }
    }
}

fn build_logging<F>(lookup: &F) -> Result<LoggingConfig, RaterError>
where
    F: Fn(&str) -> Option<String>
{
    let mut logging = LoggingConfig::default();
    if let Some(raw) = lookup("LOG_FORMAT") {
        logging.format = LogFormat::parse(&raw).ok_or_else(||
            RaterError::Config(format!("LOG_FORMAT invalid: {raw}"))
        )?;
    }
    Ok(logging)
}

///
/// AppConfig which holds everything the clients and logger need
///
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub endpoints: EndpointConfig,
    pub http: HttpConfig,
    pub logging: LoggingConfig
}

///
/// Builds the config from an arbitrary variable lookup
///
pub fn build_config<F>(lookup: F) -> Result<AppConfig, RaterError>
where
    F: Fn(&str) -> Option<String>
{
    let endpoints = build_endpoints(&lookup)?;
    let http      = HttpConfig::default();
    let logging   = build_logging(&lookup)?;

    Ok( AppConfig { endpoints, http, logging } )
}

///
/// Return all environment variables to caller at program start.
///
pub fn load_config() -> Result<AppConfig, RaterError> {
    dotenvy::dotenv().ok();
    build_config(|name| std::env::var(name).ok())
}
