//! healthdeck core: heartbeat-driven polling of remote health endpoints,
//! bounded per-connection history, and chart projection. The binary wires
//! this into the TUI shell in `app`.

pub mod app;
pub mod chart;
pub mod connections;
pub mod heartbeat;
pub mod history;
pub mod poller;
pub mod types;
pub mod ui;
