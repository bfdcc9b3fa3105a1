//! Startup dispatch after the CLI has been parsed.
pub mod help;
pub mod startup;

pub use help::help_text;
pub use self_test::{run_self_test, CaseOutcome, CaseReport, SelfTestReport};
pub use startup::{run, RuntimeExit, VALIDATION_EXIT_CODE};
