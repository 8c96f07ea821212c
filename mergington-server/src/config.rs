use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
/// Relative to the working directory; set `STATIC_DIR` when running elsewhere.
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone, Parser)]
#[command(name = "mergington-server", about = "Mergington High School activities API")]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    #[arg(long, env = "BIND_ADDRESS", default_value = DEFAULT_BIND_ADDRESS)]
    pub bind_address: String,

    /// Directory served under /static
    #[arg(long, env = "STATIC_DIR", default_value = DEFAULT_STATIC_DIR)]
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "mergington-server",
            "--bind-address",
            "127.0.0.1:9000",
            "--static-dir",
            "/srv/www",
        ])
        .unwrap();

        assert_eq!(config.bind_address, "127.0.0.1:9000");
        assert_eq!(config.static_dir, PathBuf::from("/srv/www"));
    }

    #[test]
    fn test_default_static_dir_is_relative() {
        let config = ServerConfig::default();
        assert!(config.static_dir.is_relative());
        assert_eq!(config.static_dir, PathBuf::from("static"));
    }
}
