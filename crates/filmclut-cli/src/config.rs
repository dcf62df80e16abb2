//! Runtime configuration for the command-line front end.

/// Default `tracing` filter directive.
const DEFAULT_LOG_FILTER: &str = "info";
/// Default Hald level for generated identity CLUTs.
pub const DEFAULT_IDENTITY_LEVEL: u32 = 8;

/// Environment-driven settings that are not worth a flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
    /// Worker threads for the rayon pool. `None` leaves rayon's default.
    pub threads: Option<usize>,
}

impl CliConfig {
    /// Build from explicit values, as read from `FILMCLUT_LOG` / `FILMCLUT_THREADS`.
    fn from_vars(log: Option<String>, threads: Option<String>) -> Self {
        Self {
            log_filter: log
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            threads: threads
                .and_then(|s| s.trim().parse::<usize>().ok())
                .filter(|&n| n > 0),
        }
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self::from_vars(
            std::env::var("FILMCLUT_LOG").ok(),
            std::env::var("FILMCLUT_THREADS").ok(),
        )
    }
}
