// ============================================================================
// domain/error.rs - GENERATION ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (a validation report holds many of them)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Configuration Errors (detected before resolution)
    // ========================================================================
    #[error("Invalid configuration: {}", problems.join("; "))]
    ConfigValidation { problems: Vec<String> },

    #[error("No blueprint for platform '{platform}' with state management '{state}'")]
    UnknownVariant { platform: String, state: String },

    // ========================================================================
    // Resolution / Consistency Errors
    // ========================================================================
    #[error("Duplicate output path '{path}': produced by {first} and {second}")]
    DuplicatePath {
        path: String,
        first: String,
        second: String,
    },

    #[error("'{path}' references '{target}', which is neither a generated file nor a declared package")]
    MissingReference { path: String, target: String },

    #[error("Incompatible features selected together ({group}): {}", members.join(", "))]
    ConflictingFeatures { group: String, members: Vec<String> },

    #[error("Generated project is inconsistent ({} problem(s))", issues.len())]
    Inconsistent { issues: Vec<DomainError> },

    // ========================================================================
    // Table Defects (bugs in a blueprint or version table, not user input)
    // ========================================================================
    #[error("Invalid blueprint: {0}")]
    InvalidBlueprint(String),

    #[error("Package '{package}' has no canonical version")]
    UnversionedPackage { package: String },

    #[error("Package '{package}' listed with conflicting versions '{first}' and '{second}'")]
    ConflictingVersions {
        package: String,
        first: String,
        second: String,
    },
}

impl DomainError {
    /// Shorthand for a single-problem configuration error.
    pub fn invalid_config(problem: impl Into<String>) -> Self {
        Self::ConfigValidation {
            problems: vec![problem.into()],
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigValidation { problems } => {
                let mut out: Vec<String> = problems.iter().map(|p| format!("• {p}")).collect();
                out.push("Fix every listed problem, then run the command again".into());
                out
            }
            Self::UnknownVariant { .. } => vec![
                "This platform / state management combination has no blueprint".into(),
                "Try: trellis list".into(),
            ],
            Self::Inconsistent { issues } => issues.iter().map(|i| format!("• {i}")).collect(),
            Self::ConflictingFeatures { group, .. } => vec![
                format!("Choose exactly one option for {group}"),
            ],
            Self::DuplicatePath { .. }
            | Self::MissingReference { .. }
            | Self::InvalidBlueprint(_)
            | Self::UnversionedPackage { .. }
            | Self::ConflictingVersions { .. } => vec![
                "The built-in catalog is inconsistent for this configuration".into(),
                "Please report this issue together with the command you ran".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigValidation { .. } | Self::ConflictingFeatures { .. } => {
                ErrorCategory::Validation
            }
            Self::UnknownVariant { .. } => ErrorCategory::NotFound,
            Self::DuplicatePath { .. }
            | Self::MissingReference { .. }
            | Self::Inconsistent { .. } => ErrorCategory::Consistency,
            Self::InvalidBlueprint(_)
            | Self::UnversionedPackage { .. }
            | Self::ConflictingVersions { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Consistency,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_lists_every_problem() {
        let err = DomainError::ConfigValidation {
            problems: vec!["a".into(), "b".into()],
        };
        assert_eq!(err.to_string(), "Invalid configuration: a; b");
        assert_eq!(err.suggestions().len(), 3);
    }

    #[test]
    fn inconsistent_counts_issues() {
        let err = DomainError::Inconsistent {
            issues: vec![DomainError::MissingReference {
                path: "src/a.ts".into(),
                target: "axios".into(),
            }],
        };
        assert!(err.to_string().contains("1 problem"));
        assert_eq!(err.category(), ErrorCategory::Consistency);
    }
}
