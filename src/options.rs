//! Configuration options for the rate-limiting combinators.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::Result;

/// Options accepted by [`Throttle`](crate::Throttle).
///
/// Both edges are enabled by default. Deserializes from the familiar
/// `{"leading": false}` style maps; unknown keys are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrottleOptions {
    /// Invoke on the leading edge of the window (default: true)
    #[serde(default)]
    pub leading: Option<bool>,

    /// Invoke on the trailing edge of the window (default: true)
    #[serde(default)]
    pub trailing: Option<bool>,
}

impl ThrottleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON object
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builder pattern: enable/disable the leading call
    pub fn leading(mut self, leading: bool) -> Self {
        self.leading = Some(leading);
        self
    }

    /// Builder pattern: enable/disable the trailing call
    pub fn trailing(mut self, trailing: bool) -> Self {
        self.trailing = Some(trailing);
        self
    }

    pub fn is_leading(&self) -> bool {
        self.leading.unwrap_or(true)
    }

    pub fn is_trailing(&self) -> bool {
        self.trailing.unwrap_or(true)
    }
}

/// Options accepted by [`Debounce`](crate::Debounce).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebounceOptions {
    /// Invoke on the leading edge instead of the trailing one (default: false)
    #[serde(default)]
    pub immediate: Option<bool>,
}

impl DebounceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON object
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builder pattern: fire on the leading edge
    pub fn immediate(mut self, immediate: bool) -> Self {
        self.immediate = Some(immediate);
        self
    }

    pub fn is_immediate(&self) -> bool {
        self.immediate.unwrap_or(false)
    }
}

/// Internal configuration derived from ThrottleOptions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrottleConfig {
    pub wait: Duration,
    pub leading: bool,
    pub trailing: bool,
}

impl ThrottleConfig {
    pub fn new(wait: Duration, opts: ThrottleOptions) -> Self {
        Self {
            wait,
            leading: opts.is_leading(),
            trailing: opts.is_trailing(),
        }
    }
}

/// Internal configuration derived from DebounceOptions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceConfig {
    pub wait: Duration,
    pub immediate: bool,
}

impl DebounceConfig {
    pub fn new(wait: Duration, opts: DebounceOptions) -> Self {
        Self {
            wait,
            immediate: opts.is_immediate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throttle_defaults() {
        let config = ThrottleConfig::new(Duration::from_millis(100), ThrottleOptions::new());
        assert!(config.leading);
        assert!(config.trailing);
    }

    #[test]
    fn test_throttle_from_json() {
        let opts = ThrottleOptions::from_json(r#"{"leading": false, "other": 1}"#).unwrap();
        assert_eq!(opts, ThrottleOptions::new().leading(false));
        assert!(opts.is_trailing());
    }

    #[test]
    fn test_debounce_builder() {
        let config = DebounceConfig::new(Duration::from_millis(32), DebounceOptions::new().immediate(true));
        assert!(config.immediate);
        assert!(!DebounceOptions::default().is_immediate());
    }

    #[test]
    fn test_malformed_json() {
        assert!(DebounceOptions::from_json("{\"immediate\": 3}").is_err());
    }
}
