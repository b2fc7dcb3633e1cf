//! Entry point for the healthdeck agent: binds the HTTP listener and serves
//! local machine health at the root path.

use std::env;
use std::net::SocketAddr;

use axum::{routing::get, Router};
use sysinfo::{Components, CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};
use tracing::info;

use healthdeck_agent::http::health_handler;
use healthdeck_agent::sampler::{spawn_cpu_sampler, SAMPLE_PERIOD};
use healthdeck_agent::state::AppState;

const DEFAULT_PORT: u16 = 8002;

fn parse_port<I: IntoIterator<Item = String>>(args: I, default_port: u16) -> u16 {
    let mut it = args.into_iter();
    let _ = it.next(); // program name
    let mut from_args: Option<String> = None;
    while let Some(a) = it.next() {
        match a.as_str() {
            "--port" | "-p" => from_args = it.next(),
            _ if a.starts_with("--port=") => {
                if let Some((_, v)) = a.split_once('=') {
                    from_args = Some(v.to_string());
                }
            }
            _ => {}
        }
    }
    from_args
        .or_else(|| env::var("HEALTHDECK_AGENT_PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(default_port)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let port = parse_port(env::args(), DEFAULT_PORT);

    let refresh_kind = RefreshKind::nothing()
        .with_cpu(CpuRefreshKind::everything())
        .with_memory(MemoryRefreshKind::everything());
    let mut sys = System::new_with_specifics(refresh_kind);
    sys.refresh_memory();

    let mut components = Components::new();
    components.refresh(true);

    let state = AppState::new(sys, components);
    spawn_cpu_sampler(state.clone(), SAMPLE_PERIOD);

    let app = Router::new()
        .route("/", get(health_handler))
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("healthdeck agent listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
