//! `if`, `while`, `break`, `continue`, `return`.

use super::Command;
use super::math::parse_int;
use crate::error::{EvalResult, Status, WrongNumArgs};
use crate::interp::Interp;

pub struct IfCmd;

impl Command for IfCmd {
    fn name(&self) -> &str {
        "if"
    }

    fn execute(&self, interp: &mut Interp, argv: &[String]) -> EvalResult<Status> {
        if argv.len() != 3 && argv.len() != 5 {
            return Err(WrongNumArgs("if".to_string()).into());
        }
        let cond_status = interp.eval(&argv[1])?;
        if cond_status != Status::Ok {
            return Ok(cond_status);
        }
        let truthy = parse_int(interp.result()) != 0;
        if truthy {
            interp.eval(&argv[2])
        } else if argv.len() == 5 {
            // argv[3] is the unchecked "else" keyword (§9: any 4th-position
            // word is accepted, not just the literal `else`).
            interp.eval(&argv[4])
        } else {
            interp.set_result("");
            Ok(Status::Ok)
        }
    }
}

pub struct WhileCmd;

impl Command for WhileCmd {
    fn name(&self) -> &str {
        "while"
    }

    fn execute(&self, interp: &mut Interp, argv: &[String]) -> EvalResult<Status> {
        if argv.len() != 3 {
            return Err(WrongNumArgs("while".to_string()).into());
        }
        loop {
            let cond_status = interp.eval(&argv[1])?;
            if cond_status != Status::Ok {
                return Ok(cond_status);
            }
            if parse_int(interp.result()) == 0 {
                interp.set_result("");
                return Ok(Status::Ok);
            }
            match interp.eval(&argv[2])? {
                Status::Ok | Status::Continue => continue,
                Status::Break => {
                    interp.set_result("");
                    return Ok(Status::Ok);
                }
                Status::Return => return Ok(Status::Return),
            }
        }
    }
}

pub struct BreakCmd;

impl Command for BreakCmd {
    fn name(&self) -> &str {
        "break"
    }

    fn execute(&self, interp: &mut Interp, argv: &[String]) -> EvalResult<Status> {
        if argv.len() != 1 {
            return Err(WrongNumArgs("break".to_string()).into());
        }
        interp.set_result("");
        Ok(Status::Break)
    }
}

pub struct ContinueCmd;

impl Command for ContinueCmd {
    fn name(&self) -> &str {
        "continue"
    }

    fn execute(&self, interp: &mut Interp, argv: &[String]) -> EvalResult<Status> {
        if argv.len() != 1 {
            return Err(WrongNumArgs("continue".to_string()).into());
        }
        interp.set_result("");
        Ok(Status::Continue)
    }
}

pub struct ReturnCmd;

impl Command for ReturnCmd {
    fn name(&self) -> &str {
        "return"
    }

    fn execute(&self, interp: &mut Interp, argv: &[String]) -> EvalResult<Status> {
        if argv.len() != 1 && argv.len() != 2 {
            return Err(WrongNumArgs("return".to_string()).into());
        }
        let value = argv.get(1).cloned().unwrap_or_default();
        interp.set_result(value);
        Ok(Status::Return)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interp::Interp;

    #[test]
    fn if_true_branch_runs_then() {
        let mut interp = Interp::new();
        let cmd = IfCmd;
        let argv = vec![
            "if".to_string(),
            "== 1 1".to_string(),
            "set r yes".to_string(),
        ];
        cmd.execute(&mut interp, &argv).unwrap();
        assert_eq!(interp.result(), "yes");
    }

    #[test]
    fn if_false_with_no_else_returns_ok_with_empty_result() {
        let mut interp = Interp::new();
        let cmd = IfCmd;
        let argv = vec!["if".to_string(), "== 1 2".to_string(), "set r yes".to_string()];
        let status = cmd.execute(&mut interp, &argv).unwrap();
        assert_eq!(status, Status::Ok);
        assert_eq!(interp.result(), "");
    }

    #[test]
    fn if_false_runs_else_branch_regardless_of_keyword_text() {
        let mut interp = Interp::new();
        let cmd = IfCmd;
        let argv = vec![
            "if".to_string(),
            "== 1 2".to_string(),
            "set r yes".to_string(),
            "whatever".to_string(),
            "set r no".to_string(),
        ];
        cmd.execute(&mut interp, &argv).unwrap();
        assert_eq!(interp.result(), "no");
    }

    #[test]
    fn while_false_condition_terminates_without_running_body() {
        let mut interp = Interp::new();
        let cmd = WhileCmd;
        let argv = vec!["while".to_string(), "0".to_string(), "set ran yes".to_string()];
        cmd.execute(&mut interp, &argv).unwrap();
        assert!(interp.get_var("ran").is_err());
    }

    #[test]
    fn while_break_exits_with_ok() {
        let mut interp = Interp::new();
        let cmd = WhileCmd;
        let argv = vec!["while".to_string(), "1".to_string(), "break".to_string()];
        let status = cmd.execute(&mut interp, &argv).unwrap();
        assert_eq!(status, Status::Ok);
    }

    #[test]
    fn return_sets_result_and_signals_return_status() {
        let mut interp = Interp::new();
        let cmd = ReturnCmd;
        let argv = vec!["return".to_string(), "42".to_string()];
        let status = cmd.execute(&mut interp, &argv).unwrap();
        assert_eq!(status, Status::Return);
        assert_eq!(interp.result(), "42");
    }
}
