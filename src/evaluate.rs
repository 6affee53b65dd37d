use crate::error::{CalcError, Result};
use crate::lexer::{BinaryOperator, UnaryOperation};
use crate::parse::Calculation;
use tracing::{debug, trace};

/// Dispatch entry for a one-operand operation.
pub struct UnaryEntry {
    pub precondition: Option<fn(f64) -> Result<()>>,
    pub apply: fn(f64) -> f64,
}

/// Dispatch entry for a two-operand operator.
pub struct BinaryEntry {
    pub precondition: Option<fn(f64, f64) -> Result<()>>,
    pub apply: fn(f64, f64) -> f64,
}

impl UnaryOperation {
    pub fn entry(self) -> UnaryEntry {
        match self {
            UnaryOperation::Sqrt => UnaryEntry {
                precondition: Some(non_negative),
                apply: f64::sqrt,
            },
            UnaryOperation::Log => UnaryEntry {
                precondition: Some(positive_for_log),
                apply: f64::log10,
            },
            UnaryOperation::Ln => UnaryEntry {
                precondition: Some(positive_for_ln),
                apply: f64::ln,
            },
            UnaryOperation::Abs => UnaryEntry {
                precondition: None,
                apply: f64::abs,
            },
            UnaryOperation::Cos => UnaryEntry {
                precondition: None,
                apply: |degrees| degrees.to_radians().cos(),
            },
            UnaryOperation::Sin => UnaryEntry {
                precondition: None,
                apply: |degrees| degrees.to_radians().sin(),
            },
            UnaryOperation::Tan => UnaryEntry {
                precondition: Some(tangent_defined),
                apply: |degrees| degrees.to_radians().tan(),
            },
            UnaryOperation::Exp => UnaryEntry {
                precondition: None,
                apply: f64::exp,
            },
        }
    }
}

impl BinaryOperator {
    pub fn entry(self) -> BinaryEntry {
        match self {
            BinaryOperator::Add => BinaryEntry {
                precondition: None,
                apply: |a, b| a + b,
            },
            BinaryOperator::Subtract => BinaryEntry {
                precondition: None,
                apply: |a, b| a - b,
            },
            BinaryOperator::Multiply => BinaryEntry {
                precondition: None,
                apply: |a, b| a * b,
            },
            BinaryOperator::Divide => BinaryEntry {
                precondition: Some(non_zero_divisor),
                apply: |a, b| a / b,
            },
            // `%` on floats truncates the quotient, so the sign follows `a`.
            BinaryOperator::Modulo => BinaryEntry {
                precondition: Some(non_zero_divisor),
                apply: |a, b| a % b,
            },
            BinaryOperator::Power => BinaryEntry {
                precondition: None,
                apply: f64::powf,
            },
        }
    }
}

fn non_negative(a: f64) -> Result<()> {
    if a < 0.0 {
        return Err(CalcError::NegativeSquareRoot);
    }
    Ok(())
}

fn positive_for_log(a: f64) -> Result<()> {
    if a <= 0.0 {
        return Err(CalcError::NonPositiveLog);
    }
    Ok(())
}

fn positive_for_ln(a: f64) -> Result<()> {
    if a <= 0.0 {
        return Err(CalcError::NonPositiveNaturalLog);
    }
    Ok(())
}

// Exact comparison: only angles landing precisely on 90 (mod 180) are rejected.
fn tangent_defined(degrees: f64) -> Result<()> {
    if degrees.abs() % 180.0 == 90.0 {
        return Err(CalcError::UndefinedTangent(degrees));
    }
    Ok(())
}

fn non_zero_divisor(_: f64, b: f64) -> Result<()> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(())
}

/// Checks the domain precondition of the requested operation, then applies it.
pub fn evaluate(calculation: &Calculation) -> Result<f64> {
    let result = match *calculation {
        Calculation::Unary { operation, value } => {
            let entry = operation.entry();
            if let Some(check) = entry.precondition {
                check(value)?;
            }
            debug!(operation = operation.name(), value, "applying unary operation");
            (entry.apply)(value)
        }
        Calculation::Binary {
            left,
            operator,
            right,
        } => {
            let entry = operator.entry();
            if let Some(check) = entry.precondition {
                check(left, right)?;
            }
            debug!(operator = operator.symbol(), left, right, "applying binary operator");
            (entry.apply)(left, right)
        }
    };
    trace!(result, "raw result");
    Ok(result)
}
