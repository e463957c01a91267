//! `event-window-cli` — print a sample event.
//!
//! ## Usage
//!
//! ```sh
//! # Sample event rendered in UTC
//! event-window-cli
//!
//! # Render in another zone
//! EVENT_WINDOW_TZ=America/New_York event-window-cli
//!
//! # Show debug logs on stderr
//! RUST_LOG=event_window=debug event-window-cli
//! ```

use std::env::{self, VarError};

use anyhow::{bail, Context, Result};
use event_window::{Clock, Event, FormatOptions, SystemClock};
use tracing_subscriber::EnvFilter;

/// Environment variable naming the IANA zone used for display.
const TIMEZONE_ENV: &str = "EVENT_WINDOW_TZ";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("event_window=info,event_window_cli=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = format_options_from_env()?;

    let now = SystemClock.now_epoch();
    let event = Event::new("Test", now, now);
    tracing::debug!(start = event.start(), end = event.end(), "sample event built");

    println!("{}", event.format_with(&options));
    Ok(())
}

/// Unset or empty means UTC; anything else must name an IANA zone.
fn format_options_from_env() -> Result<FormatOptions> {
    match env::var(TIMEZONE_ENV) {
        Ok(name) if name.is_empty() => Ok(FormatOptions::default()),
        Ok(name) => FormatOptions::from_timezone(&name)
            .with_context(|| format!("Failed to read {TIMEZONE_ENV}")),
        Err(VarError::NotPresent) => Ok(FormatOptions::default()),
        Err(VarError::NotUnicode(raw)) => {
            bail!("Failed to read {TIMEZONE_ENV}: not valid UTF-8 ({raw:?})")
        }
    }
}
