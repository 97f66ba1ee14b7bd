//! Exit code constants for the paramsub CLI.
//!
//! - 0: Success
//! - 1: Input error (bad arguments, missing or oversized input)
//! - 2: Policy violation (secure parameter without `--resolve-secure`)
//! - 3: Parameter store failure
//! - 4: Output failure

use paramsub_application::ErrorKind;

/// Successful execution.
pub const SUCCESS: u8 = 0;

/// Input error: bad arguments, missing, unreadable or oversized input.
pub const INPUT_ERROR: u8 = 1;

/// A secure parameter was encountered without permission.
pub const POLICY_VIOLATION: u8 = 2;

/// The parameter store failed: unreachable, malformed, or unknown references.
pub const STORE_FAILURE: u8 = 3;

/// The resolved output could not be written.
pub const OUTPUT_FAILURE: u8 = 4;

/// Maps a resolution error kind to its exit code.
#[must_use]
pub const fn for_kind(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::Input => INPUT_ERROR,
        ErrorKind::PolicyViolation => POLICY_VIOLATION,
        ErrorKind::Store => STORE_FAILURE,
        ErrorKind::Output => OUTPUT_FAILURE,
    }
}
