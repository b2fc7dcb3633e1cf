//! Entry point for the healthdeck TUI. Parses args and runs the App.

use std::env;

use healthdeck::app::App;
use healthdeck::connections::{self, Connection, ConnectionsFile};

struct ParsedArgs {
    demo: bool,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<ParsedArgs, String> {
    let mut it = args.into_iter();
    let prog = it.next().unwrap_or_else(|| "healthdeck".into());
    let mut demo = false;

    for arg in it {
        match arg.as_str() {
            "-h" | "--help" => {
                return Err(format!("Usage: {prog} [--demo]"));
            }
            "--demo" => {
                demo = true;
            }
            _ => {
                return Err(format!("Unexpected argument. Usage: {prog} [--demo]"));
            }
        }
    }
    Ok(ParsedArgs { demo })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let parsed = match parse_args(env::args()) {
        Ok(v) => v,
        Err(msg) => {
            eprintln!("{msg}");
            return Ok(());
        }
    };

    if parsed.demo {
        return run_demo_mode().await;
    }

    let registry = connections::load_connections();
    let mut app = App::new(registry, true);
    app.run().await
}

// --- Demo Mode ---

/// Spawn a local agent and watch it, without touching the saved registry.
async fn run_demo_mode() -> anyhow::Result<()> {
    let port = 8031;
    let child = spawn_demo_agent(port)?;

    let mut registry = ConnectionsFile::default();
    registry.add(Connection {
        display_name: "demo".into(),
        server_address: "127.0.0.1".into(),
        health_port: port,
        poll_frequency_in_seconds: 1,
        cache_size: 60,
    });

    let mut app = App::new(registry, false);
    tokio::select! {
        res = app.run() => { drop(child); res }
        _ = tokio::signal::ctrl_c() => {
            // Drop child (kills agent) then return
            drop(child);
            Ok(())
        }
    }
}

struct DemoGuard(std::sync::Arc<std::sync::Mutex<Option<std::process::Child>>>);
impl Drop for DemoGuard {
    fn drop(&mut self) {
        if let Some(mut ch) = self.0.lock().unwrap().take() {
            let _ = ch.kill();
        }
    }
}

fn spawn_demo_agent(port: u16) -> anyhow::Result<DemoGuard> {
    let candidate = find_agent_executable();
    let mut cmd = std::process::Command::new(candidate);
    cmd.arg("--port").arg(port.to_string());
    let child = cmd.spawn()?;
    // Give the agent a brief moment to start
    std::thread::sleep(std::time::Duration::from_millis(300));
    Ok(DemoGuard(std::sync::Arc::new(std::sync::Mutex::new(Some(
        child,
    )))))
}

fn find_agent_executable() -> std::path::PathBuf {
    let self_exe = std::env::current_exe().ok();
    if let Some(exe) = self_exe {
        if let Some(parent) = exe.parent() {
            #[cfg(windows)]
            let name = "healthdeck_agent.exe";
            #[cfg(not(windows))]
            let name = "healthdeck_agent";
            let candidate = parent.join(name);
            if candidate.exists() {
                return candidate;
            }
        }
    }
    // Fallback to relying on PATH
    std::path::PathBuf::from("healthdeck_agent")
}
