use lazy_static::lazy_static;
use log::LevelFilter;
use std::str::FromStr;
use web_sys::window;

lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_lookup(get_env_var);
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub backend_url: String,
    pub app_name: String,
    pub debug_mode: bool,
    /// Record shown on page load; the backend has no list endpoint.
    pub initial_video_id: i64,
    /// Record the backend is asked to resolve YouTube links into.
    pub metadata_lookup_id: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            app_name: "Video Manager".to_string(),
            debug_mode: false,
            initial_video_id: 1,
            metadata_lookup_id: 1,
        }
    }
}

impl AppConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            backend_url: lookup("BACKEND_URL").unwrap_or(defaults.backend_url),
            app_name: lookup("APP_NAME").unwrap_or(defaults.app_name),
            debug_mode: parse_or("DEBUG_MODE", lookup("DEBUG_MODE"), defaults.debug_mode),
            initial_video_id: parse_or(
                "INITIAL_VIDEO_ID",
                lookup("INITIAL_VIDEO_ID"),
                defaults.initial_video_id,
            ),
            metadata_lookup_id: parse_or(
                "METADATA_LOOKUP_ID",
                lookup("METADATA_LOOKUP_ID"),
                defaults.metadata_lookup_id,
            ),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.debug_mode {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            log::warn!(
                "Environment variable '{}' has invalid value '{}'",
                key, value
            );
            default
        }),
        None => default,
    }
}

pub fn get_env_var(key: &str) -> Option<String> {
    let window = window()?;

    // Get the ENV_CONFIG object
    let env_config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;

    // Check if env_config is undefined
    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - environment variables not loaded");
        return None;
    }

    let value = js_sys::Reflect::get(&env_config, &key.into()).ok()?;

    if !value.is_undefined() {
        value.as_string()
    } else {
        log::debug!("Environment variable '{}' is undefined", key);
        None
    }
}
