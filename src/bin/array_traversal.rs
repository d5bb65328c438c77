// Array traversal: step cursor over one fixed array, begin/end span over another
use colored::Colorize;
use pointer_drills::traversal;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = traversal::run(&mut out).and_then(|()| Ok(out.flush()?));
    match result {
        Ok(()) => {
            eprintln!("{}", "Array traversal example completed".green());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
