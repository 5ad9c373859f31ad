//! Command table (C4) and the built-in command set (C7).
//!
//! One file per related command family: a dedicated module per command
//! or command group.

mod control;
mod core;
mod math;
mod proc;

use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{DuplicateCommand, EvalResult, Status};
use crate::interp::Interp;

pub use proc::UserProc;

/// A callable registered in the command table: either a built-in or a
/// user-defined procedure (see `proc::UserProc`).
pub trait Command {
    fn name(&self) -> &str;
    fn execute(&self, interp: &mut Interp, argv: &[String]) -> EvalResult<Status>;
}

/// The global name -> callable mapping. `Rc` (rather than `Box`, as the
/// teacher's `CommandRegistry` uses) lets a lookup be cloned out before
/// calling it, so the call can re-enter `Interp::eval` (and thus look up
/// further commands) without holding a borrow of this table.
#[derive(Default)]
pub struct CommandTable {
    commands: HashMap<String, Rc<dyn Command>>,
}

impl CommandTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new command, failing if the name is already taken.
    pub fn register(&mut self, cmd: Rc<dyn Command>) -> EvalResult<()> {
        if self.commands.contains_key(cmd.name()) {
            return Err(DuplicateCommand(cmd.name().to_string()).into());
        }
        self.commands.insert(cmd.name().to_string(), cmd);
        Ok(())
    }

    /// Install a built-in at bootstrap time, bypassing the duplicate
    /// check (the built-in set is known to be unique by construction).
    fn insert_builtin(&mut self, cmd: Rc<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<Rc<dyn Command>> {
        self.commands.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(|s| s.as_str())
    }
}

/// Populate a fresh table with the full built-in set (§4.7).
pub fn register_builtins(table: &mut CommandTable) {
    for op in math::OPERATORS {
        table.insert_builtin(Rc::new(math::MathCmd::new(op)));
    }
    table.insert_builtin(Rc::new(core::SetCmd));
    table.insert_builtin(Rc::new(core::PutsCmd));
    table.insert_builtin(Rc::new(control::IfCmd));
    table.insert_builtin(Rc::new(control::WhileCmd));
    table.insert_builtin(Rc::new(control::BreakCmd));
    table.insert_builtin(Rc::new(control::ContinueCmd));
    table.insert_builtin(Rc::new(control::ReturnCmd));
    table.insert_builtin(Rc::new(proc::ProcCmd));
}
