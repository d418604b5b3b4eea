//! SIGINT handling; kept in its own test binary since the handler can be installed once
//! per process.

use devconf::error::Error;
use devconf::interrupt;
use std::process::Command;
use std::thread;
use std::time::{Duration, Instant};
use test_log::test;

#[cfg(unix)]
#[test]
fn sigint_becomes_a_pending_interrupt() {
    interrupt::install_handler().unwrap();
    assert!(matches!(interrupt::install_handler(), Err(Error::SignalHandlerError(_))));

    let status = Command::new("kill")
        .args(["-INT", &std::process::id().to_string()])
        .status()
        .unwrap();
    assert!(status.success());

    let deadline = Instant::now() + Duration::from_secs(5);
    while !interrupt::is_pending() {
        assert!(Instant::now() < deadline, "SIGINT was not recorded");
        thread::sleep(Duration::from_millis(10));
    }

    assert!(matches!(interrupt::check(), Err(Error::Interrupted)));
    assert!(interrupt::check().is_ok());
}
