//! Configuration for the dashboard process.

use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Relative path the dataset is expected at
pub const DEFAULT_DATA_PATH: &str = "medical.csv";

/// Address the HTTP listener binds to
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8050";

/// Process configuration, constructed once in `main`
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path to the source CSV dataset
    pub data_path: PathBuf,
    /// Address the HTTP listener binds to
    pub bind_addr: SocketAddr,
    /// Maximum number of rows sampled when inferring the CSV schema
    pub schema_infer_rows: usize,
    /// Whether verbose logging was requested on the command line
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            // The literal is a valid socket address, so this cannot fail
            bind_addr: DEFAULT_BIND_ADDR.parse().expect("valid default bind address"),
            schema_infer_rows: 1000,
            debug: false,
        }
    }
}

impl AppConfig {
    /// Build a configuration from command-line arguments.
    ///
    /// The only supported switch is `--debug`, which raises the default log
    /// filter from `info` to `debug`. Anything else is ignored.
    #[must_use]
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Self {
        let mut config = Self::default();
        for arg in args {
            if arg == "--debug" {
                config.debug = true;
            }
        }
        config
    }
}

impl fmt::Display for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dataset {} served on {} (debug: {})",
            self.data_path.display(),
            self.bind_addr,
            self.debug
        )
    }
}
