//! Scientific calculator operations.
//!
//! Ten operations addressable by menu number (`1`-`10`) or by name.
//! Trigonometric functions take degrees. Domain failures are reported as
//! [`CalcError`] rather than a numeric result.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Calculator failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Division by zero.")]
    DivisionByZero,

    #[error("Logarithm undefined for non-positive numbers.")]
    LogOfNonPositive(f64),

    #[error("Square root undefined for negative numbers.")]
    SqrtOfNegative(f64),

    #[error("Result is not a finite number.")]
    NonFiniteResult(Operation),

    #[error("{op} takes {expected} operand(s), got {got}")]
    WrongArity {
        op: Operation,
        expected: usize,
        got: usize,
    },

    #[error("unknown operation '{0}'. Choose 1-10 or a name such as add, sin, sqrt")]
    UnknownOperation(String),

    #[error("Invalid input '{0}'. Please enter numeric values.")]
    InvalidNumber(String),
}

/// One of the ten menu operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Sin,
    Cos,
    Tan,
    Log10,
    Sqrt,
    Power,
}

impl Operation {
    /// All operations in menu order.
    pub const ALL: &'static [Self] = &[
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Log10,
        Self::Sqrt,
        Self::Power,
    ];

    /// Menu number (1-based).
    #[must_use]
    pub const fn menu_number(self) -> usize {
        match self {
            Self::Add => 1,
            Self::Subtract => 2,
            Self::Multiply => 3,
            Self::Divide => 4,
            Self::Sin => 5,
            Self::Cos => 6,
            Self::Tan => 7,
            Self::Log10 => 8,
            Self::Sqrt => 9,
            Self::Power => 10,
        }
    }

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Subtract => "Subtract",
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
            Self::Sin => "Sin",
            Self::Cos => "Cos",
            Self::Tan => "Tan",
            Self::Log10 => "Log (base 10)",
            Self::Sqrt => "Square Root",
            Self::Power => "Power",
        }
    }

    /// Number of operands the operation takes.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide | Self::Power => 2,
            Self::Sin | Self::Cos | Self::Tan | Self::Log10 | Self::Sqrt => 1,
        }
    }

    /// Apply the operation to `operands`.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::WrongArity`] when the operand count does not match,
    /// a domain error for division by zero, `log10(x <= 0)` and `sqrt(x < 0)`,
    /// or [`CalcError::NonFiniteResult`] on overflow or an undefined power.
    pub fn apply(self, operands: &[f64]) -> Result<f64, CalcError> {
        let result = self.apply_unchecked(operands)?;
        if result.is_finite() {
            Ok(result)
        } else {
            Err(CalcError::NonFiniteResult(self))
        }
    }

    fn apply_unchecked(self, operands: &[f64]) -> Result<f64, CalcError> {
        if operands.len() != self.arity() {
            return Err(CalcError::WrongArity {
                op: self,
                expected: self.arity(),
                got: operands.len(),
            });
        }

        let x = operands[0];
        match self {
            Self::Add => Ok(x + operands[1]),
            Self::Subtract => Ok(x - operands[1]),
            Self::Multiply => Ok(x * operands[1]),
            Self::Divide => {
                let y = operands[1];
                if y == 0.0 {
                    Err(CalcError::DivisionByZero)
                } else {
                    Ok(x / y)
                }
            }
            Self::Sin => Ok(x.to_radians().sin()),
            Self::Cos => Ok(x.to_radians().cos()),
            Self::Tan => Ok(x.to_radians().tan()),
            Self::Log10 => {
                if x <= 0.0 {
                    Err(CalcError::LogOfNonPositive(x))
                } else {
                    Ok(x.log10())
                }
            }
            Self::Sqrt => {
                if x < 0.0 {
                    Err(CalcError::SqrtOfNegative(x))
                } else {
                    Ok(x.sqrt())
                }
            }
            Self::Power => Ok(x.powf(operands[1])),
        }
    }

    /// Format the evaluated expression, e.g. `2 + 3 = 5` or `√9 = 3`.
    #[must_use]
    pub fn describe(self, operands: &[f64], result: f64) -> String {
        let x = operands.first().copied().unwrap_or_default();
        let y = operands.get(1).copied().unwrap_or_default();
        match self {
            Self::Add => format!("{x} + {y} = {result}"),
            Self::Subtract => format!("{x} - {y} = {result}"),
            Self::Multiply => format!("{x} × {y} = {result}"),
            Self::Divide => format!("{x} ÷ {y} = {result}"),
            Self::Sin => format!("sin({x}°) = {result}"),
            Self::Cos => format!("cos({x}°) = {result}"),
            Self::Tan => format!("tan({x}°) = {result}"),
            Self::Log10 => format!("log10({x}) = {result}"),
            Self::Sqrt => format!("√{x} = {result}"),
            Self::Power => format!("{x} ^ {y} = {result}"),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let op = match s.trim().to_lowercase().as_str() {
            "1" | "add" | "+" => Self::Add,
            "2" | "subtract" | "sub" | "-" => Self::Subtract,
            "3" | "multiply" | "mul" | "*" | "x" => Self::Multiply,
            "4" | "divide" | "div" | "/" => Self::Divide,
            "5" | "sin" => Self::Sin,
            "6" | "cos" => Self::Cos,
            "7" | "tan" => Self::Tan,
            "8" | "log" | "log10" => Self::Log10,
            "9" | "sqrt" => Self::Sqrt,
            "10" | "power" | "pow" | "^" => Self::Power,
            _ => return Err(CalcError::UnknownOperation(s.to_string())),
        };
        Ok(op)
    }
}

/// Parse raw operand strings into numbers.
///
/// # Errors
///
/// Returns [`CalcError::InvalidNumber`] for the first operand that is not a
/// finite number.
pub fn parse_operands<S: AsRef<str>>(raw: &[S]) -> Result<Vec<f64>, CalcError> {
    raw.iter()
        .map(|s| {
            let s = s.as_ref().trim();
            s.parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| CalcError::InvalidNumber(s.to_string()))
        })
        .collect()
}

/// A successfully evaluated calculator expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub operation: String,
    pub operands: Vec<f64>,
    pub result: f64,
    pub expression: String,
}

/// Parse an operation and its operands, then apply it.
///
/// # Errors
///
/// Returns the first [`CalcError`] hit while parsing or applying.
pub fn evaluate<S: AsRef<str>>(operation: &str, operands: &[S]) -> Result<Evaluation, CalcError> {
    let op: Operation = operation.parse()?;
    let operands = parse_operands(operands)?;
    let result = op.apply(&operands)?;
    tracing::debug!(operation = %op, ?operands, result, "Evaluated");
    Ok(Evaluation {
        operation: op.label().to_string(),
        expression: op.describe(&operands, result),
        operands,
        result,
    })
}

/// Render the numbered operation menu.
#[must_use]
pub fn menu() -> String {
    let mut out = String::from("Scientific Calculator\nSelect operation:\n");
    for op in Operation::ALL {
        out.push_str(&format!("{}. {}\n", op.menu_number(), op.label()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn arithmetic_operations() {
        assert_eq!(Operation::Add.apply(&[2.0, 3.0]), Ok(5.0));
        assert_eq!(Operation::Subtract.apply(&[2.0, 3.0]), Ok(-1.0));
        assert_eq!(Operation::Multiply.apply(&[2.5, 4.0]), Ok(10.0));
        assert_eq!(Operation::Divide.apply(&[9.0, 2.0]), Ok(4.5));
        assert_eq!(Operation::Power.apply(&[2.0, 10.0]), Ok(1024.0));
    }

    #[test]
    fn trig_takes_degrees() {
        assert!(close(Operation::Sin.apply(&[90.0]).unwrap(), 1.0));
        assert!(close(Operation::Cos.apply(&[180.0]).unwrap(), -1.0));
        assert!(close(Operation::Tan.apply(&[45.0]).unwrap(), 1.0));
    }

    #[test]
    fn log_and_sqrt() {
        assert!(close(Operation::Log10.apply(&[1000.0]).unwrap(), 3.0));
        assert_eq!(Operation::Sqrt.apply(&[16.0]), Ok(4.0));
        assert_eq!(Operation::Sqrt.apply(&[0.0]), Ok(0.0));
    }

    #[test]
    fn division_by_zero_is_an_error() {
        let err = Operation::Divide.apply(&[1.0, 0.0]).unwrap_err();
        assert_eq!(err, CalcError::DivisionByZero);
        assert_eq!(err.to_string(), "Division by zero.");
    }

    #[test]
    fn log_of_non_positive_is_an_error() {
        assert_eq!(
            Operation::Log10.apply(&[0.0]),
            Err(CalcError::LogOfNonPositive(0.0))
        );
        assert!(matches!(
            Operation::Log10.apply(&[-5.0]),
            Err(CalcError::LogOfNonPositive(_))
        ));
    }

    #[test]
    fn sqrt_of_negative_is_an_error() {
        let err = Operation::Sqrt.apply(&[-4.0]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Square root undefined for negative numbers."
        );
    }

    #[test]
    fn non_finite_results_are_errors() {
        assert_eq!(
            Operation::Power.apply(&[-8.0, 0.5]),
            Err(CalcError::NonFiniteResult(Operation::Power))
        );
        assert_eq!(
            Operation::Power.apply(&[10.0, 400.0]),
            Err(CalcError::NonFiniteResult(Operation::Power))
        );
        assert!(Operation::Multiply.apply(&[1e308, 10.0]).is_err());
        assert!(Operation::Add.apply(&[f64::MAX, f64::MAX]).is_err());
        assert_eq!(
            evaluate("pow", &["-8", "0.5"]).unwrap_err().to_string(),
            "Result is not a finite number."
        );
    }

    #[test]
    fn wrong_arity_is_rejected() {
        let err = Operation::Add.apply(&[1.0]).unwrap_err();
        assert_eq!(
            err,
            CalcError::WrongArity {
                op: Operation::Add,
                expected: 2,
                got: 1
            }
        );
        assert!(Operation::Sqrt.apply(&[1.0, 2.0]).is_err());
    }

    #[test]
    fn parse_by_number_and_name() {
        assert_eq!("1".parse::<Operation>(), Ok(Operation::Add));
        assert_eq!("10".parse::<Operation>(), Ok(Operation::Power));
        assert_eq!("SQRT".parse::<Operation>(), Ok(Operation::Sqrt));
        assert_eq!("^".parse::<Operation>(), Ok(Operation::Power));
        assert!(matches!(
            "11".parse::<Operation>(),
            Err(CalcError::UnknownOperation(_))
        ));
    }

    #[test]
    fn operands_must_be_numeric() {
        assert_eq!(parse_operands(&["2", "-3.5", " 1e2 "]), Ok(vec![2.0, -3.5, 100.0]));
        assert_eq!(
            parse_operands(&["2", "two"]),
            Err(CalcError::InvalidNumber("two".to_string()))
        );
        assert!(parse_operands(&["NaN"]).is_err());
        assert!(parse_operands::<&str>(&[]).unwrap().is_empty());
    }

    #[test]
    fn evaluate_parses_and_applies() {
        let eval = evaluate("pow", &["2", "8"]).unwrap();
        assert_eq!(eval.operation, "Power");
        assert_eq!(eval.result, 256.0);
        assert_eq!(eval.expression, "2 ^ 8 = 256");

        assert_eq!(
            evaluate("4", &["1", "0"]),
            Err(CalcError::DivisionByZero)
        );
        assert!(matches!(
            evaluate("modulo", &["1", "2"]),
            Err(CalcError::UnknownOperation(_))
        ));
    }

    #[test]
    fn menu_lists_all_ten_operations() {
        let menu = menu();
        assert!(menu.contains("1. Add"));
        assert!(menu.contains("8. Log (base 10)"));
        assert!(menu.contains("10. Power"));
        assert_eq!(menu.lines().count(), 12);
    }

    #[test]
    fn describe_formats_expressions() {
        assert_eq!(Operation::Add.describe(&[2.0, 3.0], 5.0), "2 + 3 = 5");
        assert_eq!(Operation::Sqrt.describe(&[9.0], 3.0), "√9 = 3");
        assert_eq!(Operation::Sin.describe(&[30.0], 0.5), "sin(30°) = 0.5");
    }
}
