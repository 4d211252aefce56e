//! Binary entrypoint: read one console log, write one JSON object to stdout.
//!
//! Usage: `log-engine [--overview] [PATH]`. Without PATH (or with `-`) the log
//! is read from stdin. Invalid UTF-8 is replaced, never rejected. Diagnostics
//! go to stderr (`RUST_LOG`, default `warn`) so stdout stays pure JSON.

use log_engine::{summarize, Engine, EngineError};
use std::io::{self, Read, Write};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::registry()
    .with(fmt::layer().with_target(false).with_writer(io::stderr))
    .with(filter)
    .init();

  if let Err(e) = run_binary() {
    let _ = writeln!(io::stderr(), "log-engine error: {}", e);
    std::process::exit(1);
  }
}

fn run_binary() -> Result<(), EngineError> {
  let mut overview = false;
  let mut path: Option<String> = None;
  for arg in std::env::args().skip(1) {
    match arg.as_str() {
      "--overview" => overview = true,
      _ if path.is_none() => path = Some(arg),
      _ => return Err(EngineError::Usage(format!("unexpected argument: {}", arg))),
    }
  }

  let (bytes, identifier) = match path.as_deref() {
    None | Some("-") => {
      let mut buf = Vec::new();
      io::stdin().lock().read_to_end(&mut buf)?;
      (buf, "stdin".to_string())
    }
    Some(p) => (std::fs::read(p)?, p.to_string()),
  };
  let raw = String::from_utf8_lossy(&bytes);

  let report = Engine::with_defaults().extract(&raw, &identifier);
  let json = if overview {
    serde_json::to_vec(&summarize(&report))?
  } else {
    serde_json::to_vec(&report)?
  };

  let mut out = io::stdout().lock();
  out.write_all(&json)?;
  writeln!(out)?;
  Ok(())
}
