//! Runtime configuration from environment variables.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Address the HTTP listener binds to.
    pub listen_addr: String,
    /// Directory served for the browser front-end.
    pub static_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        // Only meaningful when the env vars are unset, as in CI.
        if std::env::var("LISTEN_ADDR").is_err() {
            assert_eq!(Config::default().listen_addr, "0.0.0.0:3000");
        }
        if std::env::var("STATIC_DIR").is_err() {
            assert_eq!(Config::default().static_dir, "public");
        }
    }
}
