//! tcl-lite - a minimal interpreter for a Tcl-like command language
//!
//! This library provides the scanner, substitution loop, command
//! dispatcher, and call-frame stack for a small Tcl-style scripting
//! language, plus its built-in command set.

pub mod commands;
pub mod error;
pub mod escape;
pub mod interp;
pub mod scanner;
pub mod sink;
pub mod vars;

pub use commands::{Command, CommandTable};
pub use error::{Status, TclError};
pub use interp::{Interp, InterpLimits};
pub use sink::{OutputSink, StdoutSink, VecSink};
