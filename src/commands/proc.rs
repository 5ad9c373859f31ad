//! `proc` and the callable it installs for each user-defined procedure.

use std::rc::Rc;

use super::Command;
use crate::error::{EvalResult, Status, WrongNumArgs};
use crate::interp::Interp;

pub struct ProcCmd;

impl Command for ProcCmd {
    fn name(&self) -> &str {
        "proc"
    }

    fn execute(&self, interp: &mut Interp, argv: &[String]) -> EvalResult<Status> {
        if argv.len() != 4 {
            return Err(WrongNumArgs("proc".to_string()).into());
        }
        let proc_name = argv[1].clone();
        let user_proc = UserProc {
            name: proc_name.clone(),
            formals: argv[2].clone(),
            body: argv[3].clone(),
        };
        interp.register(Rc::new(user_proc))?;
        interp.set_result("");
        Ok(Status::Ok)
    }
}

/// The callable `proc` installs for each procedure it registers.
/// Private data is the owned (formals, body) pair, mirroring the
/// original's `picolCommandCallProc` privdata.
pub struct UserProc {
    name: String,
    formals: String,
    body: String,
}

impl Command for UserProc {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&self, interp: &mut Interp, argv: &[String]) -> EvalResult<Status> {
        let params: Vec<&str> = self.formals.split(' ').filter(|s| !s.is_empty()).collect();
        if params.len() != argv.len() - 1 {
            return Err(WrongNumArgs(self.name.clone()).into());
        }
        interp.push_frame();
        for (param, value) in params.iter().zip(argv[1..].iter()) {
            interp.set_var(param, value.clone());
        }
        let status = interp.eval(&self.body);
        interp.pop_frame();
        match status? {
            Status::Return => Ok(Status::Ok),
            other => Ok(other),
        }
    }
}
