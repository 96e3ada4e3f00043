use std::path::PathBuf;

pub const REPORT_DIR_VAR: &str = "CONDUCT_REPORT_DIR";
pub const LOG_VAR: &str = "CONDUCT_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory that receives exported reports.
    pub report_dir: PathBuf,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            report_dir: PathBuf::from("."),
            log_filter: "warn".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            report_dir: non_empty(REPORT_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.report_dir),
            log_filter: non_empty(LOG_VAR).unwrap_or(defaults.log_filter),
        }
    }
}
