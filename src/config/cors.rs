use std::env;

/// CORS policy configuration.
///
/// `ALLOWED_ORIGINS` is a comma-separated origin list; the default `*`
/// allows cross-origin calls from anywhere, which is the current
/// (placeholder) deployment posture.
#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self { allowed_origins }
    }

    pub fn allow_any(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}
