//! Build-time configuration.
//!
//! Values are baked in at compile time through `option_env!`, so a
//! `PAYLLOOM_FADE_THRESHOLD=0.05 trunk build` produces a bundle with that
//! threshold. Anything invalid is reported and the defaults are used.

use crate::error::{LandingError, Result};
use log::Level;
use std::str::FromStr;

/// Fraction of a section that must be on screen before it fades in.
pub const DEFAULT_FADE_THRESHOLD: f64 = 0.07;

/// Class added to a section once it has been seen.
pub const VISIBLE_CLASS: &str = "pl2-visible";

pub const CONTACT_EMAIL: &str = "hello@paylloom.com";

/// Destinations owned by other parts of the product. Rendered as links only.
pub mod routes {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const SIGNUP: &str = "/signup";
    pub const LEGAL: &str = "/legal";
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandingConfig {
    pub fade_threshold: f64,
    pub visible_class: &'static str,
    pub log_level: Level,
    pub contact_email: &'static str,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            fade_threshold: DEFAULT_FADE_THRESHOLD,
            visible_class: VISIBLE_CLASS,
            log_level: Level::Info,
            contact_email: CONTACT_EMAIL,
        }
    }
}

impl LandingConfig {
    /// Config from the overrides captured at compile time.
    pub fn from_env() -> Result<Self> {
        Self::from_parts(
            option_env!("PAYLLOOM_FADE_THRESHOLD"),
            option_env!("PAYLLOOM_LOG_LEVEL"),
        )
    }

    /// Apply optional string overrides on top of the defaults.
    pub fn from_parts(threshold: Option<&str>, level: Option<&str>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = threshold.map(str::trim).filter(|s| !s.is_empty()) {
            let value = raw
                .parse::<f64>()
                .map_err(|_| LandingError::UnparsableThreshold(raw.to_string()))?;
            config.fade_threshold = validate_threshold(value)?;
        }

        if let Some(raw) = level.map(str::trim).filter(|s| !s.is_empty()) {
            config.log_level =
                Level::from_str(raw).map_err(|_| LandingError::InvalidLogLevel(raw.to_string()))?;
        }

        Ok(config)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }
}

/// An intersection ratio of 0 would fire for elements that merely touch the
/// viewport edge, and anything above 1 never fires.
pub fn validate_threshold(value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(value)
    } else {
        Err(LandingError::InvalidThreshold(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_without_overrides() {
        let config = LandingConfig::from_parts(None, None).unwrap();
        assert_eq!(config, LandingConfig::default());
        assert_eq!(config.fade_threshold, 0.07);
        assert_eq!(config.visible_class, "pl2-visible");
    }

    #[test]
    fn blank_overrides_are_ignored() {
        let config = LandingConfig::from_parts(Some("  "), Some("")).unwrap();
        assert_eq!(config, LandingConfig::default());
    }

    #[test]
    fn threshold_override_is_applied() {
        let config = LandingConfig::from_parts(Some("0.05"), None).unwrap();
        assert_eq!(config.fade_threshold, 0.05);
    }

    #[test]
    fn threshold_out_of_range_is_rejected() {
        assert_eq!(
            LandingConfig::from_parts(Some("0"), None),
            Err(LandingError::InvalidThreshold(0.0))
        );
        assert_eq!(
            LandingConfig::from_parts(Some("1.2"), None),
            Err(LandingError::InvalidThreshold(1.2))
        );
        assert!(validate_threshold(f64::NAN).is_err());
        assert_eq!(validate_threshold(1.0), Ok(1.0));
    }

    #[test]
    fn threshold_garbage_is_rejected() {
        assert_eq!(
            LandingConfig::from_parts(Some("seven percent"), None),
            Err(LandingError::UnparsableThreshold("seven percent".into()))
        );
    }

    #[test]
    fn log_level_override() {
        let config = LandingConfig::from_parts(None, Some("debug")).unwrap();
        assert_eq!(config.log_level, Level::Debug);
        assert_eq!(
            LandingConfig::from_parts(None, Some("chatty")),
            Err(LandingError::InvalidLogLevel("chatty".into()))
        );
    }

    #[test]
    fn mailto_uses_contact_address() {
        assert_eq!(LandingConfig::default().mailto(), "mailto:hello@paylloom.com");
    }
}
