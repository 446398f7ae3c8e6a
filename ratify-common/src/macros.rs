//! Macros and other utility code.

/// This should be used for every write to stdout.
#[macro_export]
macro_rules! puts {
    ($($arg:tt)*) => ({
        use std::io::Write;
        match write!(std::io::stdout(), $($arg)*) {
            Ok(()) => (),
            // Don't panic on SIGPIPE.
            Err(ref err) if err.kind() == std::io::ErrorKind::BrokenPipe => std::process::exit(141),
            Err(ref err) => panic!("{}", err),
        };
    })
}

/// Print a formatted message based on verbosity level
#[macro_export]
macro_rules! _log {
    ($verbosity:expr, $level:expr, $($arg:tt)*) => {
        if $crate::config::ENABLE_LOGGING && $level <= $verbosity {
            $crate::puts!($($arg)*);
            $crate::puts!("\n");
        }
    };
}

/// Print to stdout, prefixed by "c ".
#[macro_export]
macro_rules! comment {
    ($($arg:tt)*) => ({
        $crate::puts!("c ");
        $crate::puts!($($arg)*);
        $crate::puts!("\n");
    })
}

/// Print to stdout with yellow font color.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => ({
        let style = $crate::output::warning_style();
        $crate::puts!("{}", style.paint("Warning: "));
        $crate::puts!("{}\n", style.paint(format!($($arg)*)));
    })
}

/// Report a fatal error and exit.
#[macro_export]
macro_rules! die {
    ($($arg:tt)*) => ({
        let style = $crate::output::error_style();
        $crate::puts!("{}", style.paint("Error: "));
        $crate::puts!("{}\n", style.paint(format!($($arg)*)));
        std::process::exit(2);
    })
}

/// Native assertions cannot be disabled, that's why why prefer to use this
/// macro.
#[macro_export]
macro_rules! invariant {
    ($($arg:tt)*) => ({
        if $crate::config::CHECK_INVARIANTS {
            assert!($($arg)*);
        }
    })
}

/// Like invariant, but for preconditions.
#[macro_export]
macro_rules! requires {
    ($($arg:tt)*) => ({
        if $crate::config::CHECK_PRECONDITIONS {
            assert!($($arg)*);
        }
    })
}
