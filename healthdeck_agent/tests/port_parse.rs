//! Unit test for the port parsing logic in `main.rs`. The parser lives in
//! the binary, so a minimal copy is kept in sync here.

use std::env;
use std::sync::Mutex;

static ENV_LOCK: Mutex<()> = Mutex::new(());

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

#[test]
fn port_long_short_and_assign() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::remove_var("HEALTHDECK_AGENT_PORT");

    assert_eq!(
        parse_port(vec!["agent".into(), "--port".into(), "9001".into()], 8002),
        9001
    );
    assert_eq!(
        parse_port(vec!["agent".into(), "-p".into(), "9002".into()], 8002),
        9002
    );
    assert_eq!(
        parse_port(vec!["agent".into(), "--port=9003".into()], 8002),
        9003
    );
    assert_eq!(parse_port(vec!["agent".into()], 8002), 8002);
}

#[test]
fn env_fallback_and_arg_precedence() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var("HEALTHDECK_AGENT_PORT", "9100");

    assert_eq!(parse_port(vec!["agent".into()], 8002), 9100);
    assert_eq!(
        parse_port(vec!["agent".into(), "--port".into(), "9001".into()], 8002),
        9001
    );

    env::set_var("HEALTHDECK_AGENT_PORT", "not-a-port");
    assert_eq!(parse_port(vec!["agent".into()], 8002), 8002);

    env::remove_var("HEALTHDECK_AGENT_PORT");
}
