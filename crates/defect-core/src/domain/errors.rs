use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RateResult<T> = Result<T, RateError>;

pub const INVALID_PARAMETER: &str = "INPUT.INVALID_PARAMETER";
pub const NUMERIC_OVERFLOW: &str = "RUN.NUMERIC_OVERFLOW";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateErrorCategory {
    Success,
    InputValidationError,
    IoSystemError,
    ComputationError,
    InternalError,
}

impl RateErrorCategory {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::InputValidationError => 2,
            Self::IoSystemError => 3,
            Self::ComputationError => 4,
            Self::InternalError => 5,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::InputValidationError => "InputValidationError",
            Self::IoSystemError => "IoSystemError",
            Self::ComputationError => "ComputationError",
            Self::InternalError => "InternalError",
        }
    }

    pub const fn is_fatal(self) -> bool {
        !matches!(self, Self::Success)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateError {
    category: RateErrorCategory,
    placeholder: &'static str,
    message: String,
}

impl RateError {
    pub fn new(
        category: RateErrorCategory,
        placeholder: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            placeholder,
            message: message.into(),
        }
    }

    pub fn input_validation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(
            RateErrorCategory::InputValidationError,
            placeholder,
            message,
        )
    }

    pub fn io_system(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(RateErrorCategory::IoSystemError, placeholder, message)
    }

    pub fn computation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(RateErrorCategory::ComputationError, placeholder, message)
    }

    pub fn internal(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(RateErrorCategory::InternalError, placeholder, message)
    }

    /// Input outside the physical domain of the rate expressions.
    pub fn invalid_parameter(name: &str, value: f64, reason: &str) -> Self {
        Self::input_validation(
            INVALID_PARAMETER,
            format!("parameter '{}' = {} {}", name, value, reason),
        )
    }

    /// Derived quantity that left the finite range of `f64`.
    pub fn numeric_overflow(field: &str, value: f64) -> Self {
        Self::computation(
            NUMERIC_OVERFLOW,
            format!("derived quantity '{}' is not finite ({})", field, value),
        )
    }

    pub const fn category(&self) -> RateErrorCategory {
        self.category
    }

    pub const fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn exit_code(&self) -> i32 {
        self.category.exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        let severity = if self.category.is_fatal() {
            "ERROR"
        } else {
            "INFO"
        };
        format!("{}: [{}] {}", severity, self.placeholder, self.message)
    }

    pub fn fatal_exit_line(&self) -> Option<String> {
        self.category
            .is_fatal()
            .then(|| format!("FATAL EXIT CODE: {}", self.exit_code()))
    }
}

impl Display for RateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}",
            self.category.as_str(),
            self.placeholder,
            self.message
        )
    }
}

impl Error for RateError {}

#[cfg(test)]
mod tests {
    use super::{INVALID_PARAMETER, NUMERIC_OVERFLOW, RateError, RateErrorCategory};

    #[test]
    fn exit_mapping_is_stable() {
        let cases = [
            (RateErrorCategory::Success, 0, "Success"),
            (
                RateErrorCategory::InputValidationError,
                2,
                "InputValidationError",
            ),
            (RateErrorCategory::IoSystemError, 3, "IoSystemError"),
            (RateErrorCategory::ComputationError, 4, "ComputationError"),
            (RateErrorCategory::InternalError, 5, "InternalError"),
        ];

        for (category, exit_code, name) in cases {
            assert_eq!(category.exit_code(), exit_code);
            assert_eq!(category.as_str(), name);
        }
    }

    #[test]
    fn invalid_parameter_renders_diagnostic_lines() {
        let error = RateError::invalid_parameter("T", 0.0, "must be greater than zero");

        assert_eq!(error.category(), RateErrorCategory::InputValidationError);
        assert_eq!(error.placeholder(), INVALID_PARAMETER);
        assert_eq!(
            error.diagnostic_line(),
            "ERROR: [INPUT.INVALID_PARAMETER] parameter 'T' = 0 must be greater than zero"
        );
        assert_eq!(error.fatal_exit_line().as_deref(), Some("FATAL EXIT CODE: 2"));
    }

    #[test]
    fn numeric_overflow_is_a_computation_error() {
        let error = RateError::numeric_overflow("alpha", f64::INFINITY);

        assert_eq!(error.category(), RateErrorCategory::ComputationError);
        assert_eq!(error.placeholder(), NUMERIC_OVERFLOW);
        assert_eq!(error.exit_code(), 4);
        assert!(error.message().contains("inf"));
    }

    #[test]
    fn success_category_has_no_fatal_line() {
        let error = RateError::new(RateErrorCategory::Success, "OK", "done");
        assert_eq!(error.diagnostic_line(), "INFO: [OK] done");
        assert!(error.fatal_exit_line().is_none());
    }
}
