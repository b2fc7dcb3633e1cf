//! Registry semantics (identity-keyed add/remove, validation bounds) and
//! persistence round-trips through an isolated config dir.

use std::fs;
use std::sync::Mutex;

use healthdeck::connections::{
    connections_path, load_connections, save_connections, Connection, ConnectionsFile,
    InvalidConnection,
};

// Global lock to serialize tests that mutate process-wide environment variables.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn conn(name: &str, address: &str) -> Connection {
    Connection {
        display_name: name.into(),
        server_address: address.into(),
        health_port: 8002,
        poll_frequency_in_seconds: 5,
        cache_size: 60,
    }
}

#[test]
fn add_replaces_on_identity_collision() {
    let mut file = ConnectionsFile::default();
    file.add(conn("web", "10.0.0.1"));

    let mut replacement = conn("web", "10.0.0.1");
    replacement.poll_frequency_in_seconds = 30;
    file.add(replacement.clone());

    assert_eq!(file.connections.len(), 1);
    assert_eq!(file.connections[0], replacement);
}

#[test]
fn identity_is_the_name_address_pair() {
    let mut file = ConnectionsFile::default();
    file.add(conn("web", "10.0.0.1"));
    file.add(conn("web", "10.0.0.2"));
    file.add(conn("db", "10.0.0.1"));
    assert_eq!(file.connections.len(), 3);

    file.remove(&conn("web", "10.0.0.2"));
    assert_eq!(file.connections.len(), 2);
    assert!(file
        .connections
        .iter()
        .all(|c| !(c.display_name == "web" && c.server_address == "10.0.0.2")));
}

#[test]
fn remove_of_absent_identity_is_a_noop() {
    let mut file = ConnectionsFile::default();
    file.add(conn("web", "10.0.0.1"));
    file.remove(&conn("ghost", "10.9.9.9"));
    assert_eq!(file.connections.len(), 1);
}

#[test]
fn validation_bounds() {
    assert!(conn("web", "10.0.0.1").validate().is_ok());

    let mut c = conn("", "10.0.0.1");
    assert_eq!(c.validate(), Err(InvalidConnection::EmptyName));

    c = conn("web", "  ");
    assert_eq!(c.validate(), Err(InvalidConnection::EmptyAddress));

    c = conn("web", "10.0.0.1");
    c.health_port = 0;
    assert_eq!(c.validate(), Err(InvalidConnection::PortOutOfRange));

    c = conn("web", "10.0.0.1");
    c.poll_frequency_in_seconds = 0;
    assert_eq!(c.validate(), Err(InvalidConnection::FrequencyOutOfRange));
    c.poll_frequency_in_seconds = 3601;
    assert_eq!(c.validate(), Err(InvalidConnection::FrequencyOutOfRange));
    c.poll_frequency_in_seconds = 3600;
    assert!(c.validate().is_ok());

    c = conn("web", "10.0.0.1");
    c.cache_size = 0;
    assert_eq!(c.validate(), Err(InvalidConnection::CacheSizeOutOfRange));
    c.cache_size = 1001;
    assert_eq!(c.validate(), Err(InvalidConnection::CacheSizeOutOfRange));
    c.cache_size = 1000;
    assert!(c.validate().is_ok());
}

#[test]
fn health_url_shape() {
    assert_eq!(conn("web", "10.0.0.1").health_url(), "http://10.0.0.1:8002/");
}

#[test]
fn save_then_load_round_trips() {
    let _guard = ENV_LOCK.lock().unwrap();
    let td = tempfile::tempdir().unwrap();
    std::env::set_var("XDG_CONFIG_HOME", td.path());

    let mut file = ConnectionsFile::default();
    file.add(conn("web", "10.0.0.1"));
    file.add(conn("db", "10.0.0.2"));
    save_connections(&file).unwrap();

    let loaded = load_connections();
    assert_eq!(loaded.connections, file.connections);

    // wire format uses camelCase keys
    let raw = fs::read_to_string(connections_path()).unwrap();
    assert!(raw.contains("displayName"));
    assert!(raw.contains("pollFrequencyInSeconds"));
    assert!(raw.contains("cacheSize"));
}

#[test]
fn missing_or_corrupt_file_loads_as_empty() {
    let _guard = ENV_LOCK.lock().unwrap();
    let td = tempfile::tempdir().unwrap();
    std::env::set_var("XDG_CONFIG_HOME", td.path());

    assert!(load_connections().connections.is_empty());

    fs::create_dir_all(connections_path().parent().unwrap()).unwrap();
    fs::write(connections_path(), "{ not json").unwrap();
    assert!(load_connections().connections.is_empty());
}
