//! Logs a short calculation, first to stdout and then to a timestamped file
//! in the working directory.
//!
//! Run with `cargo run -p logging-sink --example simple_math`.

use logging::{Log, Severity, SeverityLogger, log_debug, log_error, log_info, log_warning};
use logging_sink::{TextLogger, default_sink_or_exit};

fn debug_dump() -> String {
    "Hard to generate string".to_owned()
}

fn main() {
    // Plain lines on stdout, no timestamps.
    let console = SeverityLogger::new(Severity::Warning, TextLogger::stdout());
    log_error!(console, "{}", "This is an error log");
    log_warning!(console, "{}", "This is a warning log");
    log_debug!(console, "{}", "This is a debug log");

    if console.is_debug_enabled() {
        console.debug(format_args!("The state of the process is: {}", debug_dump()));
    }

    // SimpleMath_<timestamp>_<pid>.log with date/time headers.
    let file = SeverityLogger::new(Severity::Info, default_sink_or_exit("SimpleMath"));
    let (a, b) = (3, 5);
    log_info!(file, "{} + {} is equal to {}", a, b, a + b);
    log_debug!(file, "{}", "Addition is complete");
}
