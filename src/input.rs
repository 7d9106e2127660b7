//! Events feeding the shell loop.
//!
//! Terminal input and interrupt wake-ups arrive on one bounded channel, so
//! the reader can run at most one line ahead of the loop.

use std::io::{self, BufRead};
use std::sync::mpsc::SyncSender;
use std::thread::{self, JoinHandle};

use log::debug;

#[derive(Debug)]
pub enum Event {
    /// One raw line, including its terminator if there was one.
    Line(String),
    EndOfInput,
    ReadFailed(io::Error),
    Interrupt,
}

/// Reads stdin on a dedicated thread until end of input or a read error.
pub fn spawn_stdin_reader(sender: SyncSender<Event>) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || forward_lines(io::stdin().lock(), &sender))
}

/// Sends every line of `reader`, then exactly one terminal event.
///
/// Stops early once the receiving side is gone.
pub fn forward_lines<R: BufRead>(mut reader: R, sender: &SyncSender<Event>) {
    loop {
        let mut line = String::new();
        let event = match reader.read_line(&mut line) {
            Ok(0) => {
                debug!("end of input");
                let _ = sender.send(Event::EndOfInput);
                return;
            }
            Ok(_) => Event::Line(line),
            Err(err) => {
                let _ = sender.send(Event::ReadFailed(err));
                return;
            }
        };

        if sender.send(event).is_err() {
            return;
        }
    }
}
