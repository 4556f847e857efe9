//! Error handling utilities

use crate::error::{describe_error_code, FixerError};
use tracing::error;

/// Exit code used for failures that are not a [`FixerError`]
pub const GENERAL_ERROR: i32 = 1;

/// Print a fatal error and return the exit code it maps to.
///
/// - `verbose = 0`: user-facing message only
/// - `verbose >= 1`: also the error code description and the full source chain
pub fn report_fatal_error(error: &anyhow::Error, verbose: u8) -> i32 {
    error!("Fatal error: {}", error);

    if let Some(fixer_err) = error.downcast_ref::<FixerError>() {
        eprintln!("Error: {}", fixer_err.user_message());

        if verbose >= 1 {
            let code = fixer_err.code();
            eprintln!("\nE{:04}: {}", code, describe_error_code(code));
            eprintln!("\nContext Chain:\n{}", fixer_err.developer_message());
        }

        fixer_err.exit_code()
    } else {
        eprintln!("Error: {error}");

        if verbose >= 1 {
            eprintln!("\nError chain:");
            for (i, cause) in error.chain().enumerate() {
                eprintln!("  {}: {}", i, cause);
            }
        }

        GENERAL_ERROR
    }
}

/// Handle fatal errors and exit with the matching status code
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    std::process::exit(report_fatal_error(&error, verbose))
}
