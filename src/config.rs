//! Remote registry for the MI CLI
//!
//! This module owns the set of named remote servers the CLI can talk to and
//! which one of them is current. It is the only source of truth for where
//! requests are sent.
//!
//! ## Configuration File
//!
//! The registry lives in `~/.wso2mi/mi_cli_config.yaml`, or at the path given by
//! `MI_CLI_CONFIG_PATH`. The key names are stable and shared with older
//! releases of the tool, so they must not be renamed.
//!
//! ```yaml
//! servers:
//!   default:
//!     server_address: localhost
//!     server_port: "9164"
//!     access_token: ""
//!   staging:
//!     server_address: 192.168.1.15
//!     server_port: "9164"
//!     access_token: eyJ4NXQiOiJ...
//! current_server: staging
//! ```
//!
//! ## Invariants
//!
//! - `current_server` always names an entry of `servers`
//! - the `default` entry can never be removed
//! - every mutation is followed by an explicit [`RemoteConfig::persist`]

use crate::constants::{
    CONFIG_DIR, CONFIG_FILE, CONFIG_PATH_ENV, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_REMOTE_NAME,
    HTTPS_SCHEME, MANAGEMENT_CONTEXT,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::{env, fs, io};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised by registry operations and config file handling
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("remote '{0}' already exists")]
    AlreadyExists(String),
    #[error("remote '{0}' does not exist")]
    NotFound(String),
    #[error("the 'default' remote cannot be removed")]
    IsDefault,
    #[error("no current remote is selected")]
    NoCurrent,
    #[error("invalid configuration: {0}")]
    Invalid(String),
    #[error("config file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("config file is not valid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// One configured server endpoint
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Remote {
    /// Host name or address of the management endpoint
    #[serde(rename = "server_address")]
    pub host: String,
    /// Port of the management endpoint, kept as text like the file stores it
    #[serde(rename = "server_port")]
    pub port: String,
    /// Bearer token obtained by `remote login`, empty when logged out
    #[serde(default)]
    pub access_token: String,
}

impl Remote {
    pub fn new(host: impl Into<String>, port: impl Into<String>) -> Self {
        Remote {
            host: host.into(),
            port: port.into(),
            access_token: String::new(),
        }
    }

    pub fn has_token(&self) -> bool {
        !self.access_token.is_empty()
    }
}

/// Named remotes plus a pointer to the current one
///
/// Built once at process start by [`RemoteConfig::open`] and passed by
/// reference to every command that needs it.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct RemoteConfig {
    #[serde(rename = "servers", default)]
    pub remotes: BTreeMap<String, Remote>,
    #[serde(rename = "current_server", default)]
    pub current: String,
}

impl RemoteConfig {
    /// Fresh registry holding only the built-in `default` remote
    pub fn seeded() -> Self {
        let mut remotes = BTreeMap::new();
        remotes.insert(
            DEFAULT_REMOTE_NAME.to_string(),
            Remote::new(DEFAULT_HOST, DEFAULT_PORT),
        );
        RemoteConfig {
            remotes,
            current: DEFAULT_REMOTE_NAME.to_string(),
        }
    }

    /// Load the registry from `path`, seeding and writing a default one when
    /// the file does not exist yet
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or written, is not valid
    /// YAML, or fails [`RemoteConfig::validate`].
    pub fn open(path: &Path) -> Result<Self, RemoteError> {
        if !path.exists() {
            info!(path = %path.display(), "config file not found, creating default");
            let cfg = RemoteConfig::seeded();
            cfg.persist(path)?;
            return Ok(cfg);
        }
        let mut cfg = RemoteConfig::default();
        cfg.load(path)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Replace the in-memory state with the contents of `path`
    ///
    /// State is cleared before parsing, so a failed load leaves an empty
    /// registry with no current remote rather than a mix of old and new.
    pub fn load(&mut self, path: &Path) -> Result<(), RemoteError> {
        self.remotes.clear();
        self.current.clear();
        let data = fs::read_to_string(path)?;
        let parsed: RemoteConfig = serde_yaml::from_str(&data)?;
        debug!(path = %path.display(), remotes = parsed.remotes.len(), "loaded config");
        *self = parsed;
        Ok(())
    }

    /// Serialize the registry and replace `path` with it
    ///
    /// The YAML is written to a temporary file in the same directory and
    /// renamed over the target, so readers never observe a truncated file.
    pub fn persist(&self, path: &Path) -> Result<(), RemoteError> {
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;
        let data = serde_yaml::to_string(self)?;
        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(data.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| e.error)?;
        debug!(path = %path.display(), "persisted config");
        Ok(())
    }

    /// Check the invariants a loaded file must satisfy
    pub fn validate(&self) -> Result<(), RemoteError> {
        if !self.remotes.contains_key(DEFAULT_REMOTE_NAME) {
            return Err(RemoteError::Invalid(format!(
                "the '{DEFAULT_REMOTE_NAME}' remote is missing"
            )));
        }
        for (name, remote) in &self.remotes {
            check_address(name, &remote.host, &remote.port)?;
        }
        if self.current.is_empty() {
            return Err(RemoteError::NoCurrent);
        }
        if !self.remotes.contains_key(&self.current) {
            return Err(RemoteError::Invalid(format!(
                "current_server '{}' is not a configured remote",
                self.current
            )));
        }
        Ok(())
    }

    pub fn add(&mut self, name: &str, host: &str, port: &str) -> Result<(), RemoteError> {
        if name.trim().is_empty() {
            return Err(RemoteError::Invalid("remote name must not be blank".into()));
        }
        check_address(name, host, port)?;
        if self.remotes.contains_key(name) {
            return Err(RemoteError::AlreadyExists(name.to_string()));
        }
        self.remotes.insert(name.to_string(), Remote::new(host, port));
        info!(remote = name, host, port, "added remote");
        Ok(())
    }

    /// Point an existing remote at a new host/port
    ///
    /// The stored token survives only if the address is unchanged; a token is
    /// only valid against the server that issued it.
    pub fn update(&mut self, name: &str, host: &str, port: &str) -> Result<(), RemoteError> {
        let remote = self
            .remotes
            .get_mut(name)
            .ok_or_else(|| RemoteError::NotFound(name.to_string()))?;
        check_address(name, host, port)?;
        if remote.host != host || remote.port != port {
            remote.access_token.clear();
        }
        remote.host = host.to_string();
        remote.port = port.to_string();
        info!(remote = name, host, port, "updated remote");
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Result<(), RemoteError> {
        if name == DEFAULT_REMOTE_NAME {
            return Err(RemoteError::IsDefault);
        }
        if self.remotes.remove(name).is_none() {
            return Err(RemoteError::NotFound(name.to_string()));
        }
        if self.current == name {
            self.current = DEFAULT_REMOTE_NAME.to_string();
        }
        info!(remote = name, current = %self.current, "removed remote");
        Ok(())
    }

    pub fn select(&mut self, name: &str) -> Result<(), RemoteError> {
        if !self.remotes.contains_key(name) {
            return Err(RemoteError::NotFound(name.to_string()));
        }
        self.current = name.to_string();
        info!(remote = name, "selected remote");
        Ok(())
    }

    /// Overwrite the access token of `name`; unknown names are ignored
    pub fn set_token(&mut self, name: &str, token: &str) {
        if let Some(remote) = self.remotes.get_mut(name) {
            remote.access_token = token.to_string();
        }
    }

    pub fn current_remote(&self) -> Result<&Remote, RemoteError> {
        if self.current.is_empty() {
            return Err(RemoteError::NoCurrent);
        }
        self.remotes
            .get(&self.current)
            .ok_or_else(|| RemoteError::NotFound(self.current.clone()))
    }

    /// `https://<host>:<port>/management/` for the current remote
    pub fn base_url(&self) -> Result<String, RemoteError> {
        let remote = self.current_remote()?;
        Ok(format!(
            "{HTTPS_SCHEME}://{}:{}/{MANAGEMENT_CONTEXT}/",
            remote.host, remote.port
        ))
    }
}

/// Location of the config file, honouring `MI_CLI_CONFIG_PATH`
/// Entries with a blank host or port would make the file unloadable
fn check_address(name: &str, host: &str, port: &str) -> Result<(), RemoteError> {
    if host.trim().is_empty() {
        return Err(RemoteError::Invalid(format!(
            "remote '{name}' has a blank server_address"
        )));
    }
    if port.trim().is_empty() {
        return Err(RemoteError::Invalid(format!(
            "remote '{name}' has a blank server_port"
        )));
    }
    Ok(())
}

pub fn config_path() -> PathBuf {
    env::var(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let mut p = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            p.push(CONFIG_DIR);
            p.push(CONFIG_FILE);
            p
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn add_rejects_duplicate_names() {
        let mut cfg = RemoteConfig::seeded();
        cfg.add("test", "192.168.1.15", "9164").unwrap();
        let err = cfg.add("test", "10.0.0.1", "9443").unwrap_err();
        assert!(matches!(err, RemoteError::AlreadyExists(ref n) if n == "test"));
        assert_eq!(cfg.remotes.len(), 2);
        assert_eq!(cfg.remotes["test"].host, "192.168.1.15");
    }

    #[test]
    fn default_remote_cannot_be_removed() {
        let mut cfg = RemoteConfig::seeded();
        assert!(matches!(cfg.remove("default"), Err(RemoteError::IsDefault)));

        cfg.add("other", "h", "1").unwrap();
        cfg.select("other").unwrap();
        assert!(matches!(cfg.remove("default"), Err(RemoteError::IsDefault)));
        assert!(cfg.remotes.contains_key("default"));
    }

    #[test]
    fn removing_current_resets_to_default() {
        let mut cfg = RemoteConfig::seeded();
        cfg.add("a", "h1", "1").unwrap();
        cfg.add("b", "h2", "2").unwrap();
        cfg.select("a").unwrap();

        cfg.remove("b").unwrap();
        assert_eq!(cfg.current, "a");

        cfg.remove("a").unwrap();
        assert_eq!(cfg.current, "default");
    }

    #[test]
    fn missing_names_are_reported() {
        let mut cfg = RemoteConfig::seeded();
        assert!(matches!(cfg.remove("nope"), Err(RemoteError::NotFound(_))));
        assert!(matches!(cfg.select("nope"), Err(RemoteError::NotFound(_))));
        assert!(matches!(
            cfg.update("nope", "h", "1"),
            Err(RemoteError::NotFound(_))
        ));
        assert_eq!(cfg.current, "default");
    }

    #[test]
    fn update_keeps_token_only_for_same_address() {
        let mut cfg = RemoteConfig::seeded();
        cfg.add("a", "h1", "1").unwrap();
        cfg.set_token("a", "tok");

        cfg.update("a", "h1", "1").unwrap();
        assert_eq!(cfg.remotes["a"].access_token, "tok");

        cfg.update("a", "h2", "1").unwrap();
        assert_eq!(cfg.remotes["a"].access_token, "");
        assert_eq!(cfg.remotes["a"].host, "h2");
    }

    #[test]
    fn blank_addresses_are_rejected_before_persisting() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mi_cli_config.yaml");
        let mut cfg = RemoteConfig::open(&path).unwrap();

        assert!(matches!(cfg.add("x", "", "9164"), Err(RemoteError::Invalid(_))));
        assert!(matches!(cfg.add("y", "h", " "), Err(RemoteError::Invalid(_))));
        assert!(matches!(cfg.add("  ", "h", "1"), Err(RemoteError::Invalid(_))));
        assert_eq!(cfg.remotes.len(), 1);

        cfg.add("z", "h", "1").unwrap();
        assert!(matches!(cfg.update("z", "h", ""), Err(RemoteError::Invalid(_))));
        assert!(matches!(cfg.update("z", "\t", "1"), Err(RemoteError::Invalid(_))));
        assert_eq!(cfg.remotes["z"], Remote::new("h", "1"));

        cfg.persist(&path).unwrap();
        let reopened = RemoteConfig::open(&path).unwrap();
        assert_eq!(reopened, cfg);
    }

    #[test]
    fn set_token_ignores_unknown_remote() {
        let mut cfg = RemoteConfig::seeded();
        cfg.set_token("ghost", "tok");
        assert_eq!(cfg.remotes.len(), 1);
        cfg.set_token("default", "tok");
        assert!(cfg.remotes["default"].has_token());
    }

    #[test]
    fn base_url_follows_current_remote() {
        let mut cfg = RemoteConfig::seeded();
        assert_eq!(cfg.base_url().unwrap(), "https://localhost:9164/management/");

        cfg.add("test", "192.168.1.15", "9164").unwrap();
        cfg.select("test").unwrap();
        assert_eq!(
            cfg.base_url().unwrap(),
            "https://192.168.1.15:9164/management/"
        );
    }

    #[test]
    fn base_url_requires_current() {
        let cfg = RemoteConfig::default();
        assert!(matches!(cfg.base_url(), Err(RemoteError::NoCurrent)));
    }

    #[test]
    fn persist_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let mut cfg = RemoteConfig::seeded();
        cfg.add("x", "h", "p").unwrap();
        cfg.add("y", "h2", "p2").unwrap();
        cfg.update("y", "h3", "p3").unwrap();
        cfg.select("x").unwrap();
        cfg.persist(&path).unwrap();

        let mut loaded = RemoteConfig::seeded();
        loaded.load(&path).unwrap();
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn persisted_file_uses_stable_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        RemoteConfig::seeded().persist(&path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("servers:"));
        assert!(text.contains("server_address: localhost"));
        assert!(text.contains("server_port:"));
        assert!(text.contains("9164"));
        assert!(text.contains("access_token:"));
        assert!(text.contains("current_server: default"));
    }

    #[test]
    fn open_seeds_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");

        let cfg = RemoteConfig::open(&path).unwrap();
        assert!(path.exists());
        assert_eq!(cfg, RemoteConfig::seeded());
    }

    #[test]
    fn open_reads_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(
            &path,
            r#"servers:
  default:
    server_address: localhost
    server_port: "9164"
    access_token: ""
  prod:
    server_address: mi.example.com
    server_port: "9443"
    access_token: abc
current_server: prod
"#,
        )
        .unwrap();

        let cfg = RemoteConfig::open(&path).unwrap();
        assert_eq!(cfg.current, "prod");
        assert_eq!(cfg.current_remote().unwrap().access_token, "abc");
        assert_eq!(cfg.base_url().unwrap(), "https://mi.example.com:9443/management/");
    }

    #[test]
    fn failed_load_leaves_registry_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "servers: [not, a, map]\n").unwrap();

        let mut cfg = RemoteConfig::seeded();
        assert!(matches!(cfg.load(&path), Err(RemoteError::Yaml(_))));
        assert!(cfg.remotes.is_empty());
        assert!(cfg.current.is_empty());
    }

    #[test]
    fn validate_rejects_broken_files() {
        let mut cfg = RemoteConfig::seeded();
        cfg.current = "ghost".into();
        assert!(matches!(cfg.validate(), Err(RemoteError::Invalid(_))));

        let mut cfg = RemoteConfig::seeded();
        cfg.remotes.get_mut("default").unwrap().host = "  ".into();
        assert!(matches!(cfg.validate(), Err(RemoteError::Invalid(_))));

        let mut cfg = RemoteConfig::seeded();
        cfg.current.clear();
        assert!(matches!(cfg.validate(), Err(RemoteError::NoCurrent)));

        let mut cfg = RemoteConfig::seeded();
        cfg.remotes.clear();
        assert!(matches!(cfg.validate(), Err(RemoteError::Invalid(_))));
    }
}
