//! Ctrl-C handling for terminal prompts
//!
//! Key-driven prompts (selections, confirmations, text fields) read the terminal in raw
//! mode and report Ctrl-C as an interrupted read, which becomes [`Error::Interrupted`].
//! The terminal also raises SIGINT for it, so a handler must be installed or the process
//! is killed before the error can propagate.
//!
//! Masked input is read line by line and keeps reading through the signal. The handler
//! records the interrupt and the masked prompt turns it into [`Error::Interrupted`] once
//! the line is complete.

use crate::error::{Error, Result};
use std::sync::atomic::{AtomicBool, Ordering};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Installs the process-wide SIGINT handler. Fails when called a second time.
pub fn install_handler() -> Result<()> {
    ctrlc::set_handler(record)?;
    log::debug!("Interrupt handler installed");
    Ok(())
}

/// Marks an interrupt as pending
pub fn record() {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

pub fn is_pending() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

/// Consumes a pending interrupt, returning [`Error::Interrupted`] if there was one
pub fn check() -> Result<()> {
    if INTERRUPTED.swap(false, Ordering::SeqCst) {
        log::debug!("Pending interrupt consumed");
        Err(Error::Interrupted)
    } else {
        Ok(())
    }
}
