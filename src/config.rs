use std::env;
use std::path::Path;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DASHBOARD_URL: &str = "http://127.0.0.1:8080";

/// The dashboard is single-region; this is not configurable.
pub const REGION: &str = "us-east-1";

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_access_key_id() -> String {
    env::var("ACCESS_KEY_ID").unwrap_or_default()
}

pub fn get_secret_access_key() -> String {
    env::var("SECRET_ACCESS_KEY").unwrap_or_default()
}

pub fn get_dashboard_url() -> String {
    sanitize_base_url(&env::var("DASHBOARD_URL").unwrap_or_default())
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_DASHBOARD_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
