//! Configuration validation for neardup.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::*;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for SignerConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.k == 0 {
            errors.push(ConfigError {
                field: "signer.k".to_string(),
                message: "shingle width k must be at least 1".to_string(),
            });
        }

        if self.permutations == 0 {
            errors.push(ConfigError {
                field: "signer.permutations".to_string(),
                message: "permutation count must be at least 1".to_string(),
            });
        }

        errors
    }
}

impl Validatable for IndexConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.permutations == 0 {
            errors.push(ConfigError {
                field: "index.permutations".to_string(),
                message: "permutation count must be at least 1".to_string(),
            });
        }

        // Unspecified bands default to permutations, so only an explicit,
        // non-dividing band count is a validation failure.
        let bands = self.resolved_bands();
        if bands == 0 {
            errors.push(ConfigError {
                field: "index.bands".to_string(),
                message: "band count must be at least 1".to_string(),
            });
        } else if self.permutations % bands != 0 {
            errors.push(ConfigError {
                field: "index.bands".to_string(),
                message: format!(
                    "bands ({bands}) must divide permutations ({})",
                    self.permutations
                ),
            });
        }

        errors
    }
}

/// Validates a requested sensitivity against a band count; not tied to a
/// particular config struct since sensitivity is a per-query parameter, not
/// part of `IndexConfig`.
#[must_use]
pub fn validate_sensitivity(sensitivity: usize, bands: usize) -> Vec<ConfigError> {
    let mut errors = Vec::new();
    if sensitivity == 0 || sensitivity > bands {
        errors.push(ConfigError {
            field: "sensitivity".to_string(),
            message: format!(
                "sensitivity ({sensitivity}) must be between 1 and bands ({bands})"
            ),
        });
    }
    errors
}

/// Validates a `min_jaccard` threshold, which must land in `[0, 1]`.
#[must_use]
pub fn validate_min_jaccard(min_jaccard: f64) -> Vec<ConfigError> {
    let mut errors = Vec::new();
    if !(0.0..=1.0).contains(&min_jaccard) {
        errors.push(ConfigError {
            field: "min_jaccard".to_string(),
            message: format!("min_jaccard ({min_jaccard}) must be between 0.0 and 1.0"),
        });
    }
    errors
}

// ============================================================================
// Tests
// ============================================================================
