pub mod errors;

pub use errors::{INVALID_PARAMETER, NUMERIC_OVERFLOW, RateError, RateErrorCategory, RateResult};

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// How strictly inputs and outputs of the rate kernels are checked.
///
/// `Permissive` reproduces plain IEEE-754 behaviour: nothing is rejected and
/// zero, NaN or infinite values propagate into the derived fields. `Strict`
/// rejects inputs outside the physical domain and any non-finite result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    #[default]
    Strict,
    Permissive,
}

impl ValidationPolicy {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Permissive => "permissive",
        }
    }

    pub const fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }
}

impl Display for ValidationPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

impl FromStr for ValidationPolicy {
    type Err = RateError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "permissive" => Ok(Self::Permissive),
            other => Err(RateError::input_validation(
                "INPUT.VALIDATION_POLICY",
                format!(
                    "unknown validation policy '{}', expected 'strict' or 'permissive'",
                    other
                ),
            )),
        }
    }
}
