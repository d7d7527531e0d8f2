// SPDX-License-Identifier: MPL-2.0
use std::io::BufRead;
use std::path::PathBuf;

use story_toaster::cli::{self, Command};
use story_toaster::config::{self, DEFAULT_LOG_FILTER};
use story_toaster::domain::toasts::ExpiryInterval;
use story_toaster::notifications::{QueueSnapshot, ToastProvider};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
story-toaster: interactive notification queue

USAGE:
  story-toaster [--config PATH] [--interval-ms N] [--no-auto-remove]

COMMANDS (stdin):
  add [--id N] <error|warning|info|success> <message...>
  remove <index>
  reset
  list
  quit
";

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_active(snapshot: &QueueSnapshot) {
    if snapshot.active.is_empty() {
        println!("(no active notifications)");
        return;
    }
    for (index, notification) in snapshot.active.iter().enumerate() {
        println!("{index}: {notification}");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }
    let config_path: Option<PathBuf> = args.opt_value_from_str("--config")?;
    let interval_ms: Option<u64> = args.opt_value_from_str("--interval-ms")?;
    let no_auto_remove = args.contains("--no-auto-remove");

    let mut settings = match &config_path {
        Some(path) => config::load_from_path(path)?,
        None => config::load()?,
    };
    if interval_ms.is_some() {
        settings.auto_remove_interval_ms = interval_ms;
    }
    if no_auto_remove {
        settings.auto_remove = Some(false);
    }

    let queue_config = settings.queue_config();
    tracing::info!(
        auto_remove_ms = ?queue_config.auto_remove_interval().map(ExpiryInterval::as_millis),
        "starting toaster"
    );

    let provider = ToastProvider::mount(queue_config);
    let toasts = provider.context();

    // Display layer: re-render the active list on every change.
    let mut state_rx = toasts.subscribe();
    let display = tokio::spawn(async move {
        while state_rx.changed().await.is_ok() {
            let snapshot = state_rx.borrow_and_update().clone();
            print_active(&snapshot);
        }
    });

    // Plain thread: a blocked stdin read must not hold up runtime shutdown.
    let (line_tx, mut line_rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    while let Some(line) = line_rx.recv().await {
        if line.trim().is_empty() {
            continue;
        }
        let command = match cli::parse_line(&line) {
            Ok(command) => command,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };

        let outcome = match command {
            Command::Add(notification) => toasts.add_toast(notification).await.map(|added| {
                if !added {
                    println!("(duplicate ignored)");
                }
            }),
            Command::Remove(index) => toasts.remove_toast(index).await.map(|_| ()),
            Command::Reset => toasts.reset_toasts().await,
            Command::List => {
                print_active(&toasts.state());
                Ok(())
            }
            Command::Quit => break,
        };
        if let Err(err) = outcome {
            eprintln!("{err}");
        }
    }

    provider.unmount().await;
    display.abort();
    Ok(())
}
