//! Interrupt (Ctrl+C) handling.
//!
//! The handler never touches shell state itself. It raises a shared flag,
//! which the loop checks before every dispatch and after every child, and
//! posts [`Event::Interrupt`] to wake a loop blocked waiting for input.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::SyncSender;
use std::sync::Arc;

use log::debug;

use crate::input::Event;

/// Set once an interrupt has been delivered. Never cleared.
#[derive(Debug, Clone, Default)]
pub struct Interrupted(Arc<AtomicBool>);

impl Interrupted {
    pub fn new() -> Self {
        Interrupted::default()
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

pub struct InterruptNotifier {
    interrupted: Interrupted,
    waker: SyncSender<Event>,
}

impl InterruptNotifier {
    pub fn new(interrupted: Interrupted, waker: SyncSender<Event>) -> Self {
        InterruptNotifier {
            interrupted,
            waker,
        }
    }

    /// Raises the flag, then wakes the loop if the event slot is free.
    ///
    /// A full slot means the loop is about to receive anyway and will see
    /// the flag first.
    pub fn notify(&self) {
        self.interrupted.0.store(true, Ordering::SeqCst);
        let _ = self.waker.try_send(Event::Interrupt);
    }
}

/// Installs the process-wide SIGINT handler. Can only be done once per process.
pub fn forward_interrupts(notifier: InterruptNotifier) -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(move || {
        debug!("interrupt received");
        notifier.notify();
    })
}
