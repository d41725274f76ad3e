//! User settings for FinanceFlow
//!
//! Manages user preferences such as the listing length, audit logging and
//! the optional pinned accounting period.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

use super::paths::FinancePaths;
use crate::error::FinanceError;
use crate::models::Period;

/// User settings for FinanceFlow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Number of transactions shown in listings and search results
    #[serde(default = "default_listing_limit")]
    pub listing_limit: usize,

    /// Whether mutations are recorded in the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,

    /// Pin every view to a fixed month ("2026-01") instead of the current one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_override: Option<String>,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_listing_limit() -> usize {
    8
}

fn default_audit_enabled() -> bool {
    true
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            listing_limit: default_listing_limit(),
            audit_enabled: default_audit_enabled(),
            period_override: None,
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// The pinned period, if one is configured
    pub fn pinned_period(&self) -> Result<Option<Period>, FinanceError> {
        self.period_override
            .as_deref()
            .map(|s| {
                Period::parse(s).map_err(|e| {
                    FinanceError::Config(format!("Invalid period_override: {}", e))
                })
            })
            .transpose()
    }

    /// Check values serde can't: the date format must render a plain date
    pub fn validate(&self) -> Result<(), FinanceError> {
        let invalid = || {
            FinanceError::Config(format!(
                "Invalid date_format '{}': it must format a calendar date",
                self.date_format
            ))
        };

        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(invalid());
        }

        // Time-of-day fields parse fine but fail when given only a date
        let sample = NaiveDate::from_ymd_opt(2026, 1, 15).ok_or_else(invalid)?;
        let mut rendered = String::new();
        write!(rendered, "{}", sample.format(&self.date_format)).map_err(|_| invalid())?;

        Ok(())
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FinancePaths) -> Result<Self, FinanceError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FinanceError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FinanceError::Config(format!("Failed to parse settings file: {}", e))
            })?;
            settings.validate()?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinancePaths) -> Result<(), FinanceError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            FinanceError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            FinanceError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.listing_limit, 8);
        assert!(settings.audit_enabled);
        assert!(settings.period_override.is_none());
        assert_eq!(settings.pinned_period().unwrap(), None);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            listing_limit: 20,
            period_override: Some("2026-01".into()),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.listing_limit, 20);
        assert_eq!(
            loaded.pinned_period().unwrap(),
            Some(Period::monthly(2026, 1).unwrap())
        );
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"audit_enabled": false}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(!loaded.audit_enabled);
        assert_eq!(loaded.listing_limit, 8);
    }

    #[test]
    fn test_date_format_must_render_a_date() {
        assert!(Settings::default().validate().is_ok());

        for format in ["%d/%m/%Y", "%e %b %Y", "%A"] {
            let settings = Settings {
                date_format: format.into(),
                ..Settings::default()
            };
            assert!(settings.validate().is_ok(), "{}", format);
        }

        for format in ["%H:%M", "%Q", "%Y-%m-%d %S"] {
            let settings = Settings {
                date_format: format.into(),
                ..Settings::default()
            };
            assert!(
                matches!(settings.validate(), Err(FinanceError::Config(_))),
                "{}",
                format
            );
        }
    }

    #[test]
    fn test_load_rejects_unusable_date_format() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format": "%H:%M"}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(err.to_string().contains("date_format"));
    }

    #[test]
    fn test_invalid_override_is_config_error() {
        let settings = Settings {
            period_override: Some("soon".into()),
            ..Settings::default()
        };
        assert!(matches!(
            settings.pinned_period(),
            Err(FinanceError::Config(_))
        ));
    }
}
