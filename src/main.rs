use std::io::{BufRead, IsTerminal, Read, Write};

use clap::Parser;
use tcl_lite::{Interp, Status};

#[derive(Parser)]
#[command(name = "tcl-lite")]
#[command(about = "A minimal interpreter for a Tcl-like command language")]
#[command(version)]
struct Cli {
    /// Execute the script from command line argument
    #[arg(short = 'c')]
    script: Option<String>,

    /// Script file to execute
    #[arg()]
    script_file: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    if let Some(script) = cli.script {
        run_once(&script);
        return;
    }

    if let Some(file) = cli.script_file {
        match std::fs::read_to_string(&file) {
            Ok(content) => run_once(&content),
            Err(e) => {
                eprintln!("Error: Cannot read script file: {file}: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        repl();
    } else {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).unwrap_or_default();
        run_once(&buf);
    }
}

/// Script-file / piped-stdin mode: evaluate the full input once, print
/// nothing but `puts` output, and surface an error on stderr with a
/// non-zero exit code.
fn run_once(script: &str) {
    let mut interp = Interp::new();
    match interp.eval(script) {
        Ok(_) => {}
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

/// Interactive mode per §6: read a line, evaluate it, print
/// `[status] result` when the result is non-empty. `quit` on its own
/// line ends the session.
fn repl() {
    let mut interp = Interp::new();
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    loop {
        print!("tcl-lite> ");
        let _ = stdout.flush();

        let mut line = String::new();
        let bytes_read = stdin.lock().read_line(&mut line).unwrap_or(0);
        if bytes_read == 0 {
            break;
        }
        let line = line.trim_end_matches('\n');
        if line.trim() == "quit" {
            break;
        }

        match interp.eval(line) {
            Ok(status) => {
                let result = interp.result();
                if !result.is_empty() {
                    println!("[{}] {}", status_label(&status), result);
                }
            }
            Err(e) => {
                println!("[error] {e}");
            }
        }
    }
}

fn status_label(status: &Status) -> &'static str {
    match status {
        Status::Ok => "ok",
        Status::Return => "return",
        Status::Break => "break",
        Status::Continue => "continue",
    }
}
