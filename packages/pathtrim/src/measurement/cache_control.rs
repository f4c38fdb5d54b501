//! Width-cache enable switch
//!
//! Turning the switch off does not clear existing caches; measurers simply
//! stop consulting and populating their width caches until it is turned
//! back on. Size caches ignore the switch.

use std::sync::atomic::{AtomicBool, Ordering};

/// Shared on/off switch for width caching
#[derive(Debug)]
pub struct CacheControl {
    enabled: AtomicBool,
}

impl CacheControl {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
        }
    }

    /// Flip width caching on or off for every measurer sharing this control
    pub fn set_enabled(&self, enabled: bool) {
        let previous = self.enabled.swap(enabled, Ordering::Relaxed);
        if previous != enabled {
            log::debug!("Width cache {}", if enabled { "enabled" } else { "disabled" });
        }
    }

    #[inline(always)]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }
}

impl Default for CacheControl {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_enabled() {
        assert!(CacheControl::default().is_enabled());
    }

    #[test]
    fn test_toggle() {
        let control = CacheControl::default();
        control.set_enabled(false);
        assert!(!control.is_enabled());
        control.set_enabled(false);
        assert!(!control.is_enabled());
        control.set_enabled(true);
        assert!(control.is_enabled());
    }
}
