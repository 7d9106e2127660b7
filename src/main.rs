mod builtins;
mod config;
mod errors;
mod history;
mod input;
mod parser;
mod shell;
mod signals;
mod utils;

use std::io;
use std::sync::mpsc;

use anyhow::Context;

use crate::config::Config;
use crate::shell::Shell;
use crate::signals::{InterruptNotifier, Interrupted};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::from_env();
    // one slot: the reader never gets more than a line ahead of the loop
    let (sender, events) = mpsc::sync_channel(1);
    let interrupted = Interrupted::new();
    signals::forward_interrupts(InterruptNotifier::new(interrupted.clone(), sender.clone()))
        .context("failed to install interrupt handler")?;
    input::spawn_stdin_reader(sender).context("failed to start input reader")?;

    let mut shell = Shell::new(&config);
    shell
        .run(&events, &interrupted, &mut io::stdout(), &mut io::stderr())
        .context("shell error")?;
    log::debug!(
        "session ended with {} history entries",
        shell.history().entries().len()
    );
    Ok(())
}
