// Pointer indirection: call-by-reference mutation and array base + offset reads
use colored::Colorize;
use pointer_drills::indirection;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = indirection::run(&mut out).and_then(|()| Ok(out.flush()?));
    match result {
        Ok(()) => {
            eprintln!("{}", "Pointer indirection example completed".green());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
