//! Error types for blog content blocks.
//!
//! Missing collaborator capabilities are never errors: resolution falls back to
//! a broader source or to nothing. The only resolution failure is a collaborator
//! that breaks its contract.

use thiserror::Error;

/// Result type for block operations.
pub type ElementalResult<T> = Result<T, ElementalError>;

/// Blog block errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ElementalError {
	/// A collaborator accessor returned a value of the wrong type.
	#[error("{accessor} expected to return class type {expected}")]
	ContractViolation {
		/// Name of the accessor that misbehaved.
		accessor: String,
		/// Type name the accessor must return.
		expected: &'static str,
	},

	/// Settings could not be parsed or failed validation.
	#[error("Invalid settings: {0}")]
	InvalidSettings(String),

	/// Settings file could not be read.
	#[error("Failed to read settings: {0}")]
	Io(#[from] std::io::Error),

	/// Template context could not be serialized.
	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

impl From<toml::de::Error> for ElementalError {
	fn from(err: toml::de::Error) -> Self {
		ElementalError::InvalidSettings(err.to_string())
	}
}

impl ElementalError {
	/// Returns true if this error signals a misconfigured collaborator.
	pub fn is_contract_violation(&self) -> bool {
		matches!(self, ElementalError::ContractViolation { .. })
	}
}
