//! healthdeck agent: collects local machine health and serves it as JSON for
//! dashboards to poll. The binary in main.rs binds the HTTP listener.

pub mod health;
pub mod http;
pub mod sampler;
pub mod state;
pub mod types;
