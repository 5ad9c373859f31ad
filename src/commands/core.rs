//! `set` and `puts`.

use super::Command;
use crate::error::{EvalResult, Status, WrongNumArgs};
use crate::interp::Interp;

pub struct SetCmd;

impl Command for SetCmd {
    fn name(&self) -> &str {
        "set"
    }

    fn execute(&self, interp: &mut Interp, argv: &[String]) -> EvalResult<Status> {
        if argv.len() != 3 {
            return Err(WrongNumArgs("set".to_string()).into());
        }
        interp.set_var(&argv[1], argv[2].clone());
        interp.set_result(argv[2].clone());
        Ok(Status::Ok)
    }
}

pub struct PutsCmd;

impl Command for PutsCmd {
    fn name(&self) -> &str {
        "puts"
    }

    fn execute(&self, interp: &mut Interp, argv: &[String]) -> EvalResult<Status> {
        if argv.len() != 2 {
            return Err(WrongNumArgs("puts".to_string()).into());
        }
        interp.sink_mut().write_line(&argv[1]);
        interp.set_result("");
        Ok(Status::Ok)
    }
}
