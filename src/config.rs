use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,
    pub base_path: String,

    // Preferences
    pub preferences_file: String,

    // Simulated submissions
    pub submit_delay_ms: u64,
    pub simulate_submit_failure: bool,

    // Wizard
    pub wizard_reset_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Server
            port: match std::env::var("PORT") {
                Ok(port) => port.parse().context("PORT must be a valid port number")?,
                Err(_) => 8080,
            },
            base_path: normalize_base_path(&std::env::var("BASE_PATH").unwrap_or_default()),

            // Preferences
            preferences_file: std::env::var("PREFERENCES_FILE")
                .unwrap_or_else(|_| "data/preferences.json".to_string()),

            // Simulated submissions
            submit_delay_ms: std::env::var("SUBMIT_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1500),
            simulate_submit_failure: std::env::var("SIMULATE_SUBMIT_FAILURE")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),

            // Wizard
            wizard_reset_delay_ms: std::env::var("WIZARD_RESET_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
        })
    }
}

/// "/newcode-agency/" -> "/newcode-agency", "" -> "", "site" -> "/site"
fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 6] = [
        "PORT",
        "BASE_PATH",
        "PREFERENCES_FILE",
        "SUBMIT_DELAY_MS",
        "SIMULATE_SUBMIT_FAILURE",
        "WIZARD_RESET_DELAY_MS",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env().expect("defaults load");

        assert_eq!(config.port, 8080);
        assert_eq!(config.base_path, "");
        assert_eq!(config.preferences_file, "data/preferences.json");
        assert_eq!(config.submit_delay_ms, 1500);
        assert!(!config.simulate_submit_failure);
        assert_eq!(config.wizard_reset_delay_ms, 300);
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        std::env::set_var("PORT", "3000");
        std::env::set_var("BASE_PATH", "/newcode-agency/");
        std::env::set_var("SUBMIT_DELAY_MS", "0");
        std::env::set_var("SIMULATE_SUBMIT_FAILURE", "true");

        let config = Config::from_env().expect("overrides load");
        clear_env();

        assert_eq!(config.port, 3000);
        assert_eq!(config.base_path, "/newcode-agency");
        assert_eq!(config.submit_delay_ms, 0);
        assert!(config.simulate_submit_failure);
    }

    #[test]
    #[serial]
    fn test_bad_numbers_fall_back() {
        clear_env();
        std::env::set_var("SUBMIT_DELAY_MS", "soon");
        std::env::set_var("WIZARD_RESET_DELAY_MS", "-1");

        let config = Config::from_env().expect("falls back");
        clear_env();

        assert_eq!(config.submit_delay_ms, 1500);
        assert_eq!(config.wizard_reset_delay_ms, 300);
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_an_error() {
        clear_env();
        std::env::set_var("PORT", "eighty");

        let result = Config::from_env();
        clear_env();

        assert!(result.is_err());
    }

    #[test]
    fn test_normalize_base_path() {
        assert_eq!(normalize_base_path(""), "");
        assert_eq!(normalize_base_path("/"), "");
        assert_eq!(normalize_base_path("site"), "/site");
        assert_eq!(normalize_base_path("/newcode-agency/"), "/newcode-agency");
    }
}
