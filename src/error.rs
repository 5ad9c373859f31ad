//! Error modeling.
//!
//! Each failure mode is its own small type with a `Display` impl,
//! unified into one enum via `thiserror`'s `#[from]`.

use thiserror::Error;

/// A variable lookup failed because the name has never been set in the
/// current frame.
#[derive(Debug, Clone, Error)]
#[error("No such variable '{0}'")]
pub struct NoSuchVariable(pub String);

/// A command name has no entry in the command table.
#[derive(Debug, Clone, Error)]
#[error("No such command '{0}'")]
pub struct NoSuchCommand(pub String);

/// A builtin or procedure was called with the wrong number of arguments.
#[derive(Debug, Clone, Error)]
#[error("Wrong number of args for {0}")]
pub struct WrongNumArgs(pub String);

/// `proc` was asked to register a name that already exists.
#[derive(Debug, Clone, Error)]
#[error("Command '{0}' already defined")]
pub struct DuplicateCommand(pub String);

/// Nested `eval` recursion exceeded the configured limit.
#[derive(Debug, Clone, Error)]
#[error("Too many nested evaluations (limit {0})")]
pub struct RecursionLimitExceeded(pub u32);

/// Unified interpreter error type. Each variant wraps one of the small
/// structs above so error sites can construct the specific type while
/// callers that only care about the message can match on `TclError`.
#[derive(Debug, Clone, Error)]
pub enum TclError {
    #[error(transparent)]
    NoSuchVariable(#[from] NoSuchVariable),

    #[error(transparent)]
    NoSuchCommand(#[from] NoSuchCommand),

    #[error(transparent)]
    WrongNumArgs(#[from] WrongNumArgs),

    #[error(transparent)]
    DuplicateCommand(#[from] DuplicateCommand),

    #[error(transparent)]
    RecursionLimitExceeded(#[from] RecursionLimitExceeded),

    #[error("division by zero")]
    DivisionByZero,
}

/// The five-valued evaluation result threaded through the evaluator,
/// call-frame stack, and every builtin command. Mirrors Picol's
/// `PICOL_OK` / `PICOL_ERR` / `PICOL_RETURN` / `PICOL_BREAK` /
/// `PICOL_CONTINUE` status codes, carrying the current result string
/// (or error payload) rather than returning it out-of-band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Ok,
    Return,
    Break,
    Continue,
}

pub type EvalResult<T> = Result<T, TclError>;
