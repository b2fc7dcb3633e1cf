//! Registered connections: the list of monitored endpoints, persisted as JSON.
//! Stored under the XDG config dir: $XDG_CONFIG_HOME/healthdeck/connections.json
//! (fallback ~/.config/healthdeck/connections.json)

use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use thiserror::Error;

pub const DEFAULT_HEALTH_PORT: u16 = 8002;
pub const DEFAULT_POLL_FREQUENCY_SECONDS: u64 = 1;
pub const DEFAULT_CACHE_SIZE: usize = 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub display_name: String,
    pub server_address: String,
    pub health_port: u16,
    pub poll_frequency_in_seconds: u64,
    pub cache_size: usize,
}

impl Connection {
    /// Two entries name the same endpoint when both the display name and the
    /// address match. Adding a colliding entry replaces the old one.
    pub fn same_identity(&self, other: &Connection) -> bool {
        self.display_name == other.display_name && self.server_address == other.server_address
    }

    pub fn health_url(&self) -> String {
        format!("http://{}:{}/", self.server_address, self.health_port)
    }

    /// Bounds enforced at the add dialog, not silently clamped anywhere. A
    /// Connection that already made it into the registry is taken as-is.
    pub fn validate(&self) -> Result<(), InvalidConnection> {
        if self.display_name.trim().is_empty() {
            return Err(InvalidConnection::EmptyName);
        }
        if self.server_address.trim().is_empty() {
            return Err(InvalidConnection::EmptyAddress);
        }
        if self.health_port == 0 {
            return Err(InvalidConnection::PortOutOfRange);
        }
        if !(1..=3600).contains(&self.poll_frequency_in_seconds) {
            return Err(InvalidConnection::FrequencyOutOfRange);
        }
        if !(1..=1000).contains(&self.cache_size) {
            return Err(InvalidConnection::CacheSizeOutOfRange);
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidConnection {
    #[error("display name must not be empty")]
    EmptyName,
    #[error("server address must not be empty")]
    EmptyAddress,
    #[error("health port must be between 1 and 65535")]
    PortOutOfRange,
    #[error("poll frequency must be between 1 and 3600 seconds")]
    FrequencyOutOfRange,
    #[error("cache size must be between 1 and 1000 samples")]
    CacheSizeOutOfRange,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConnectionsFile {
    #[serde(default)]
    pub connections: Vec<Connection>,
    #[serde(default)]
    pub version: u32,
}

impl ConnectionsFile {
    /// Replace-or-append keyed by connection identity; the list ends with at
    /// most one entry per identity.
    pub fn add(&mut self, connection: Connection) {
        self.connections.retain(|c| !c.same_identity(&connection));
        self.connections.push(connection);
    }

    /// Remove the entry with the same identity, if any.
    pub fn remove(&mut self, connection: &Connection) {
        self.connections.retain(|c| !c.same_identity(connection));
    }
}

pub fn config_dir() -> PathBuf {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("healthdeck")
    } else {
        dirs_next::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("healthdeck")
    }
}

pub fn connections_path() -> PathBuf {
    config_dir().join("connections.json")
}

/// Lenient load: a missing or unreadable file is an empty registry.
pub fn load_connections() -> ConnectionsFile {
    let path = connections_path();
    match fs::read_to_string(&path) {
        Ok(s) => serde_json::from_str(&s).unwrap_or_default(),
        Err(_) => ConnectionsFile::default(),
    }
}

/// Whole-file replace; there are no partial updates.
pub fn save_connections(c: &ConnectionsFile) -> std::io::Result<()> {
    let path = connections_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let data = serde_json::to_vec_pretty(c).expect("serialize connections");
    fs::write(path, data)
}
