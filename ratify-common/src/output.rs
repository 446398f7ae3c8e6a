//! Unified routines to print data.

use atty::{self, Stream};
use std::{fmt::Display, time::SystemTime};

/// Write a solution line (`"s ..."`) to stdout.
pub fn print_solution(verdict: &str) {
    puts!("s {}\n", verdict);
}

/// Write a key-value pair to stdout.
pub fn print_key_value(key: &str, value: impl Display) {
    requires!(key.len() < 35);
    comment!("{:<35} {:>15}", format!("{}:", key), value);
}

/// Check whether we are writing to a terminal.
pub fn is_a_tty() -> bool {
    atty::is(Stream::Stdout)
}

/// The style for warning messages: yellow when writing to a terminal.
pub fn warning_style() -> ansi_term::Style {
    if is_a_tty() {
        ansi_term::Colour::Yellow.normal()
    } else {
        ansi_term::Style::default()
    }
}

/// The style for fatal errors: red when writing to a terminal.
pub fn error_style() -> ansi_term::Style {
    if is_a_tty() {
        ansi_term::Colour::Red.normal()
    } else {
        ansi_term::Style::default()
    }
}

/// A RAII object that prints a timing message when it is destroyed.
pub struct Timer {
    /// The name of the thing that is being timed
    name: &'static str,
    /// The start time, set at construction time
    start: SystemTime,
    /// Whether this timer should be silenced
    pub disabled: bool,
}

impl Timer {
    /// Create a timer with a given name.
    pub fn name(name: &'static str) -> Timer {
        Timer {
            name,
            start: SystemTime::now(),
            disabled: false,
        }
    }
}

impl Drop for Timer {
    /// Write the elapsed time as comment.
    fn drop(&mut self) {
        if self.disabled {
            return;
        }
        let elapsed_time = self.start.elapsed().expect("failed to get time");
        print_key_value(
            &format!("{} (s)", self.name),
            format!(
                "{}.{:03}",
                elapsed_time.as_secs(),
                elapsed_time.subsec_millis()
            ),
        );
    }
}
