//! Browser console logging behind the `log` facade.

use crate::error::{LandingError, Result};
use log::Level;
use std::sync::atomic::{AtomicBool, Ordering};

static INSTALLED: AtomicBool = AtomicBool::new(false);

/// Install the console logger. Safe to call more than once; only the first
/// call installs anything.
pub fn init(level: Level) -> Result<()> {
    if INSTALLED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    console_log::init_with_level(level).map_err(|e| {
        INSTALLED.store(false, Ordering::SeqCst);
        LandingError::Logger(e.to_string())
    })
}

/// One-line banner logged once the app is mounted.
pub fn banner() -> String {
    format!(
        "Paylloom landing v{} | payment infrastructure for modern marketplaces",
        env!("CARGO_PKG_VERSION")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_carries_version() {
        assert!(banner().contains(env!("CARGO_PKG_VERSION")));
        assert!(banner().starts_with("Paylloom landing v"));
    }
}
