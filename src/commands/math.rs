//! Arithmetic and comparison operators.
//!
//! A single `MathCmd` parametrized by operator string stands in for a
//! byte-XOR operator dispatch trick used elsewhere, which is an
//! implementation artifact rather than semantics worth porting.

use super::Command;
use crate::error::{EvalResult, Status, TclError, WrongNumArgs};
use crate::interp::Interp;

pub const OPERATORS: [&str; 10] = ["+", "-", "*", "/", ">", ">=", "<", "<=", "==", "!="];

pub struct MathCmd {
    op: &'static str,
}

impl MathCmd {
    pub fn new(op: &'static str) -> Self {
        Self { op }
    }
}

impl Command for MathCmd {
    fn name(&self) -> &str {
        self.op
    }

    fn execute(&self, interp: &mut Interp, argv: &[String]) -> EvalResult<Status> {
        if argv.len() != 3 {
            return Err(WrongNumArgs(self.op.to_string()).into());
        }
        let a = parse_int(&argv[1]);
        let b = parse_int(&argv[2]);
        let value = match self.op {
            "+" => a.wrapping_add(b),
            "-" => a.wrapping_sub(b),
            "*" => a.wrapping_mul(b),
            "/" => {
                if b == 0 {
                    return Err(TclError::DivisionByZero);
                }
                a.wrapping_div(b)
            }
            ">" => (a > b) as i64,
            ">=" => (a >= b) as i64,
            "<" => (a < b) as i64,
            "<=" => (a <= b) as i64,
            "==" => (a == b) as i64,
            "!=" => (a != b) as i64,
            other => unreachable!("MathCmd registered with unsupported operator {other}"),
        };
        interp.set_result(value.to_string());
        Ok(Status::Ok)
    }
}

/// Decimal signed-integer parser used by every built-in that reads an
/// argument as a number: leading whitespace is skipped, an optional
/// sign follows, digits accumulate until the first non-digit, and a
/// word with no digits at all parses as zero.
pub fn parse_int(s: &str) -> i64 {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    let mut negative = false;
    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        negative = bytes[i] == b'-';
        i += 1;
    }
    let mut value: i64 = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        value = value.wrapping_mul(10).wrapping_add((bytes[i] - b'0') as i64);
        i += 1;
    }
    if negative {
        -value
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interp::Interp;

    #[test]
    fn parse_int_handles_whitespace_sign_and_stop_at_non_digit() {
        assert_eq!(parse_int("  -42abc"), -42);
        assert_eq!(parse_int("7"), 7);
        assert_eq!(parse_int(""), 0);
        assert_eq!(parse_int("abc"), 0);
        assert_eq!(parse_int("+9"), 9);
    }

    #[test]
    fn addition() {
        let mut interp = Interp::new();
        let cmd = MathCmd::new("+");
        let argv = vec!["+".to_string(), "5".to_string(), "3".to_string()];
        cmd.execute(&mut interp, &argv).unwrap();
        assert_eq!(interp.result(), "8");
    }

    #[test]
    fn division_truncates_toward_zero() {
        let mut interp = Interp::new();
        let cmd = MathCmd::new("/");
        let argv = vec!["/".to_string(), "-7".to_string(), "2".to_string()];
        cmd.execute(&mut interp, &argv).unwrap();
        assert_eq!(interp.result(), "-3");
    }

    #[test]
    fn division_by_zero_is_a_defined_error() {
        let mut interp = Interp::new();
        let cmd = MathCmd::new("/");
        let argv = vec!["/".to_string(), "1".to_string(), "0".to_string()];
        let err = cmd.execute(&mut interp, &argv).unwrap_err();
        assert_eq!(err.to_string(), "division by zero");
    }

    #[test]
    fn comparisons_yield_one_or_zero() {
        let mut interp = Interp::new();
        let cmd = MathCmd::new("==");
        let argv = vec!["==".to_string(), "1".to_string(), "1".to_string()];
        cmd.execute(&mut interp, &argv).unwrap();
        assert_eq!(interp.result(), "1");
    }

    #[test]
    fn wrong_arity_is_an_error() {
        let mut interp = Interp::new();
        let cmd = MathCmd::new("+");
        let argv = vec!["+".to_string(), "1".to_string()];
        assert!(cmd.execute(&mut interp, &argv).is_err());
    }
}
