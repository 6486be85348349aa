//! The four arithmetic operations

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SessionError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }

    /// Apply the operation in double precision.
    ///
    /// Division by an exact zero (either sign) is refused.
    pub fn apply(&self, lhs: f64, rhs: f64) -> Result<f64> {
        match self {
            Operation::Add => Ok(lhs + rhs),
            Operation::Subtract => Ok(lhs - rhs),
            Operation::Multiply => Ok(lhs * rhs),
            Operation::Divide => {
                if rhs == 0.0 {
                    return Err(SessionError::DivisionByZero);
                }
                Ok(lhs / rhs)
            }
        }
    }
}

impl FromStr for Operation {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "+" => Ok(Operation::Add),
            "-" => Ok(Operation::Subtract),
            "*" => Ok(Operation::Multiply),
            "/" => Ok(Operation::Divide),
            other => Err(SessionError::UnknownOperation(other.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_symbols() {
        assert_eq!("+".parse::<Operation>().unwrap(), Operation::Add);
        assert_eq!("-".parse::<Operation>().unwrap(), Operation::Subtract);
        assert_eq!("*".parse::<Operation>().unwrap(), Operation::Multiply);
        assert_eq!("/".parse::<Operation>().unwrap(), Operation::Divide);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(" + ".parse::<Operation>().unwrap(), Operation::Add);
        assert_eq!("\t/\r".parse::<Operation>().unwrap(), Operation::Divide);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        for bad in ["%", "", "   ", "add", "++", "x"] {
            assert!(
                matches!(bad.parse::<Operation>(), Err(SessionError::UnknownOperation(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_apply() {
        assert_eq!(Operation::Add.apply(4.0, 2.0).unwrap(), 6.0);
        assert_eq!(Operation::Subtract.apply(1.0, 3.0).unwrap(), -2.0);
        assert_eq!(Operation::Multiply.apply(1.5, 2.0).unwrap(), 3.0);
        assert_eq!(Operation::Divide.apply(7.0, 2.0).unwrap(), 3.5);
        assert_eq!(Operation::Add.apply(0.1, 0.2).unwrap(), 0.1 + 0.2);
    }

    #[test]
    fn test_divide_by_zero() {
        assert!(matches!(
            Operation::Divide.apply(10.0, 0.0),
            Err(SessionError::DivisionByZero)
        ));
        assert!(matches!(
            Operation::Divide.apply(10.0, -0.0),
            Err(SessionError::DivisionByZero)
        ));
        assert!(Operation::Divide.apply(1.0, f64::NAN).unwrap().is_nan());
    }

    #[test]
    fn test_display_round_trips_symbol() {
        for op in [Operation::Add, Operation::Subtract, Operation::Multiply, Operation::Divide] {
            assert_eq!(op.to_string().parse::<Operation>().unwrap(), op);
        }
    }
}
