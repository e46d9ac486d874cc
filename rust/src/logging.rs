//! Verbosity-gated logging for the scheduling pipeline.
//!
//! Costs one integer comparison when disabled. Levels:
//! - 0: SILENT
//! - 1: STAGES (project duration, critical path, path count)
//! - 2: ACTIVITIES (per-activity timings, PERT fallbacks)
//! - 3: DEBUG (topological order, tight-edge walk)

pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_STAGES: u8 = 1;
pub const VERBOSITY_ACTIVITIES: u8 = 2;
pub const VERBOSITY_DEBUG: u8 = 3;

/// Log a pipeline stage result (verbosity >= 1).
#[macro_export]
macro_rules! log_stages {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_STAGES {
            eprintln!($($arg)*);
        }
    };
}

/// Log per-activity detail (verbosity >= 2).
#[macro_export]
macro_rules! log_activities {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_ACTIVITIES {
            eprintln!($($arg)*);
        }
    };
}

/// Log algorithm internals (verbosity >= 3).
#[macro_export]
macro_rules! log_debug {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_DEBUG {
            eprintln!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered() {
        assert!(VERBOSITY_SILENT < VERBOSITY_STAGES);
        assert!(VERBOSITY_STAGES < VERBOSITY_ACTIVITIES);
        assert!(VERBOSITY_ACTIVITIES < VERBOSITY_DEBUG);
    }

    #[test]
    fn test_silent_macros_expand() {
        let verbosity = VERBOSITY_SILENT;
        log_stages!(verbosity, "duration {}", 1.0);
        log_activities!(verbosity, "activity {}", "a");
        log_debug!(verbosity, "order {:?}", [0, 1]);
    }
}
