use crate::format::format_general;
use crate::lexer::UnaryOperation;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error(
        "Error: Invalid number of arguments.\n\
         Usage: calc <num1> <operator> <num2>\n\
         Or: calc <operation> <num>\n\
         Supported single operations: {}",
        supported_operations()
    )]
    Usage,

    #[error("{}", invalid_operator(.unary))]
    InvalidOperator { token: String, unary: bool },

    #[error("Error: Division or modulo by zero.")]
    DivisionByZero,

    #[error("Error: Invalid number format.")]
    Parse(String),

    #[error("Error: Square root of negative number.")]
    NegativeSquareRoot,

    #[error("Error: Logarithm of non-positive number.")]
    NonPositiveLog,

    #[error("Error: Natural log of non-positive number.")]
    NonPositiveNaturalLog,

    #[error("Error: Tangent undefined at {} degrees.", tangent_angle(.0))]
    UndefinedTangent(f64),
}

fn supported_operations() -> String {
    UnaryOperation::ALL
        .iter()
        .map(|op| op.name())
        .collect::<Vec<_>>()
        .join(", ")
}

fn invalid_operator(unary: &bool) -> &'static str {
    if *unary {
        "Error: Invalid single operand operation."
    } else {
        "Error: Invalid Operator"
    }
}

fn tangent_angle(degrees: &f64) -> String {
    format_general(*degrees)
}

impl CalcError {
    /// Process exit status reported for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            CalcError::Usage => 1,
            CalcError::InvalidOperator { .. } => 2,
            CalcError::DivisionByZero => 3,
            CalcError::Parse(_) => 4,
            CalcError::NegativeSquareRoot => 5,
            CalcError::NonPositiveLog => 6,
            CalcError::NonPositiveNaturalLog => 7,
            CalcError::UndefinedTangent(_) => 8,
        }
    }

    /// Fatal errors abort the process instead of being reported as a normal
    /// failed calculation.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CalcError::UndefinedTangent(_))
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_match_failure_kinds() {
        let cases = [
            (CalcError::Usage, 1),
            (
                CalcError::InvalidOperator {
                    token: "^".to_string(),
                    unary: false,
                },
                2,
            ),
            (CalcError::DivisionByZero, 3),
            (CalcError::Parse("x".to_string()), 4),
            (CalcError::NegativeSquareRoot, 5),
            (CalcError::NonPositiveLog, 6),
            (CalcError::NonPositiveNaturalLog, 7),
            (CalcError::UndefinedTangent(90.0), 8),
        ];
        for (error, code) in cases {
            assert_eq!(error.exit_code(), code, "{error:?}");
        }
    }

    #[test]
    fn only_undefined_tangent_is_fatal() {
        assert!(CalcError::UndefinedTangent(270.0).is_fatal());
        assert!(!CalcError::DivisionByZero.is_fatal());
        assert!(!CalcError::Usage.is_fatal());
    }

    #[test]
    fn usage_lists_unary_operations() {
        let message = CalcError::Usage.to_string();
        assert!(message.starts_with("Error: Invalid number of arguments."));
        assert!(message.ends_with("sqrt, log, ln, abs, cos, sin, tan, exp"));
    }

    #[test]
    fn invalid_operator_message_depends_on_form() {
        let unary = CalcError::InvalidOperator {
            token: "foo".to_string(),
            unary: true,
        };
        let binary = CalcError::InvalidOperator {
            token: "^".to_string(),
            unary: false,
        };
        assert_eq!(unary.to_string(), "Error: Invalid single operand operation.");
        assert_eq!(binary.to_string(), "Error: Invalid Operator");
    }

    #[test]
    fn tangent_message_uses_general_format() {
        assert_eq!(
            CalcError::UndefinedTangent(-90.0).to_string(),
            "Error: Tangent undefined at -90 degrees."
        );
    }
}
