//! Server configuration.

use std::path::PathBuf;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Directory to serve (e.g., the web app root containing `icons/`)
    pub root: PathBuf,
    /// Address to listen on (e.g., "0.0.0.0:8000")
    pub listen_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            listen_addr: "0.0.0.0:8000".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_local_dev_server() {
        let config = ServerConfig::default();
        assert_eq!(config.root, PathBuf::from("."));
        assert_eq!(config.listen_addr, "0.0.0.0:8000");
    }
}
