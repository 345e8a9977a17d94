// Configuration module entry point
// Loads layered configuration and builds the shared application state

mod state;
mod types;

use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

// Re-export public types
pub use state::AppState;
pub use types::Config;

/// Default config file name (without extension)
pub const DEFAULT_CONFIG_PATH: &str = "config";

impl Config {
    /// Load configuration from specified file path (without extension)
    ///
    /// Sources, lowest priority first: built-in defaults, the optional config
    /// file, then `FILESERVER_*` environment variables (`__` separates nested
    /// keys, e.g. `FILESERVER_SERVER__PORT=9000`).
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive", true)?
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("FILESERVER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    /// Resolve the root directory to an absolute, canonical path.
    ///
    /// Falls back to the working directory when `root` is not configured.
    pub fn root_dir(&self) -> io::Result<PathBuf> {
        let root = match &self.root {
            Some(path) => PathBuf::from(path),
            None => std::env::current_dir()?,
        };
        let root = root.canonicalize()?;
        if !root.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Root path is not a directory: {}", root.display()),
            ));
        }
        Ok(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn missing_config(dir: &TempDir) -> String {
        dir.path().join("absent").to_string_lossy().into_owned()
    }

    #[test]
    fn test_defaults_without_file() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::load_from(&missing_config(&dir)).unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8000);
        assert!(cfg.server.workers.is_none());
        assert!(cfg.root.is_none());
        assert!(cfg.logging.access_log);
        assert_eq!(cfg.logging.access_log_format, "combined");
        assert!(cfg.performance.keep_alive);
        assert_eq!(cfg.socket_addr().unwrap().port(), 8000);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(
            &path,
            "root = \"/srv/data\"\n[server]\nport = 9100\nworkers = 2\n[logging]\naccess_log = false\n",
        )
        .unwrap();

        let base = dir.path().join("custom");
        let cfg = Config::load_from(&base.to_string_lossy()).unwrap();
        assert_eq!(cfg.server.port, 9100);
        assert_eq!(cfg.server.workers, Some(2));
        assert_eq!(cfg.root.as_deref(), Some("/srv/data"));
        assert!(!cfg.logging.access_log);
        // Untouched keys keep their defaults
        assert_eq!(cfg.server.host, "127.0.0.1");
    }

    #[test]
    fn test_invalid_host_rejected() {
        let dir = TempDir::new().unwrap();
        let mut cfg = Config::load_from(&missing_config(&dir)).unwrap();
        cfg.server.host = "not an address".to_string();
        assert!(cfg.socket_addr().is_err());
    }

    #[test]
    fn test_root_dir_canonicalized() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("served")).unwrap();
        let mut cfg = Config::load_from(&missing_config(&dir)).unwrap();
        cfg.root = Some(
            dir.path()
                .join("served")
                .join("..")
                .join("served")
                .to_string_lossy()
                .into_owned(),
        );

        let root = cfg.root_dir().unwrap();
        assert!(root.is_absolute());
        assert_eq!(root, dir.path().join("served").canonicalize().unwrap());
    }

    #[test]
    fn test_root_dir_must_be_directory() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "x").unwrap();
        let mut cfg = Config::load_from(&missing_config(&dir)).unwrap();

        cfg.root = Some(file.to_string_lossy().into_owned());
        assert!(cfg.root_dir().is_err());

        cfg.root = Some(dir.path().join("missing").to_string_lossy().into_owned());
        assert!(cfg.root_dir().is_err());
    }
}
