use crate::error::{CalcError, Result};
use crate::lexer::{scan_operand, BinaryOperator, UnaryOperation};
use tracing::debug;

/// Command-line arguments sorted into one of the two accepted shapes, still
/// as raw tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation<'a> {
    Unary {
        operation: &'a str,
        value: &'a str,
    },
    Binary {
        left: &'a str,
        operator: &'a str,
        right: &'a str,
    },
}

/// A fully resolved request: operands parsed and the operator tag known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Calculation {
    Unary {
        operation: UnaryOperation,
        value: f64,
    },
    Binary {
        left: f64,
        operator: BinaryOperator,
        right: f64,
    },
}

/// Classifies the arguments (program name excluded) by count alone.
pub fn classify(args: &[String]) -> Result<Invocation<'_>> {
    let invocation = match args {
        [operation, value] => Invocation::Unary { operation, value },
        [left, operator, right] => Invocation::Binary {
            left,
            operator,
            right,
        },
        _ => return Err(CalcError::Usage),
    };
    debug!(?invocation, "classified arguments");
    Ok(invocation)
}

impl Invocation<'_> {
    /// Operands are parsed before the operator is looked up, so a malformed
    /// number is reported ahead of an unknown operator.
    pub fn parse(&self) -> Result<Calculation> {
        let calculation = match *self {
            Invocation::Unary { operation, value } => {
                let value = scan_operand(value)?;
                let operation =
                    UnaryOperation::lookup(operation).ok_or_else(|| CalcError::InvalidOperator {
                        token: operation.to_string(),
                        unary: true,
                    })?;
                Calculation::Unary { operation, value }
            }
            Invocation::Binary {
                left,
                operator,
                right,
            } => {
                let left = scan_operand(left)?;
                let right = scan_operand(right)?;
                let operator =
                    BinaryOperator::lookup(operator).ok_or_else(|| CalcError::InvalidOperator {
                        token: operator.to_string(),
                        unary: false,
                    })?;
                Calculation::Binary {
                    left,
                    operator,
                    right,
                }
            }
        };
        debug!(?calculation, "parsed operands");
        Ok(calculation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn two_arguments_are_unary() {
        let list = args(&["sqrt", "9"]);
        assert_eq!(
            classify(&list),
            Ok(Invocation::Unary {
                operation: "sqrt",
                value: "9"
            })
        );
    }

    #[test]
    fn three_arguments_are_binary() {
        let list = args(&["3", "+", "4"]);
        assert_eq!(
            classify(&list),
            Ok(Invocation::Binary {
                left: "3",
                operator: "+",
                right: "4"
            })
        );
    }

    #[test]
    fn other_counts_are_usage_errors() {
        for list in [vec![], args(&["5"]), args(&["1", "2", "3", "4"])] {
            assert_eq!(classify(&list), Err(CalcError::Usage), "{list:?}");
        }
    }

    #[test]
    fn resolves_operands_and_tags() {
        let list = args(&["2", "**", "10"]);
        let calculation = classify(&list).and_then(|inv| inv.parse());
        assert_eq!(
            calculation,
            Ok(Calculation::Binary {
                left: 2.0,
                operator: BinaryOperator::Power,
                right: 10.0
            })
        );
    }

    #[test]
    fn malformed_number_wins_over_unknown_operator() {
        let list = args(&["1", "foo", "x"]);
        let result = classify(&list).and_then(|inv| inv.parse());
        assert_eq!(result, Err(CalcError::Parse("x".to_string())));

        let list = args(&["foo", "bar"]);
        let result = classify(&list).and_then(|inv| inv.parse());
        assert_eq!(result, Err(CalcError::Parse("bar".to_string())));
    }

    #[test]
    fn unknown_tokens_report_their_form() {
        let list = args(&["foo", "3"]);
        assert_eq!(
            classify(&list).and_then(|inv| inv.parse()),
            Err(CalcError::InvalidOperator {
                token: "foo".to_string(),
                unary: true
            })
        );

        let list = args(&["1", "^", "2"]);
        assert_eq!(
            classify(&list).and_then(|inv| inv.parse()),
            Err(CalcError::InvalidOperator {
                token: "^".to_string(),
                unary: false
            })
        );
    }
}
