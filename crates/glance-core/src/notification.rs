//! Notification severity levels.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a notification banner.
///
/// Maps one-to-one onto the CSS class applied to the banner region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    /// The CSS class name attached to the banner for this severity.
    pub fn as_css_class(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css_class())
    }
}

impl FromStr for Severity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Self::Info),
            "success" => Ok(Self::Success),
            "error" => Ok(Self::Error),
            other => Err(CoreError::InvalidSeverity(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_class_mapping() {
        assert_eq!(Severity::Info.as_css_class(), "info");
        assert_eq!(Severity::Success.as_css_class(), "success");
        assert_eq!(Severity::Error.as_css_class(), "error");
    }

    #[test]
    fn test_default_is_info() {
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("warning".parse::<Severity>().is_err());
        assert_eq!("success".parse::<Severity>().unwrap(), Severity::Success);
    }
}
