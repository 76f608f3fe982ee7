//! Exit code constants for accessform.
//!
//! | Code | Constant | Description |
//! |------|----------|-------------|
//! | 0 | `SUCCESS` | Operation completed successfully |
//! | 1 | `INTERNAL` | General/internal failure |
//! | 2 | `CLI_ARGS` | Invalid CLI arguments or configuration |
//! | 3 | `SESSION_INVALID` | Session file unreadable, malformed, or inconsistent |
//! | 4 | `VALIDATION_FAILED` | Form failed required-field validation |
//! | 5 | `UNKNOWN_IDENTIFIER` | Strict mode hit an id outside the loaded options |

/// Exit codes matching the documented exit code table.
///
/// Use the named constants, or [`as_i32()`](Self::as_i32) for `std::process::exit()`.
///
/// ```rust
/// use accessform_utils::exit_codes::ExitCode;
///
/// assert_eq!(ExitCode::SUCCESS.as_i32(), 0);
/// assert_eq!(ExitCode::from_i32(4), ExitCode::VALIDATION_FAILED);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Success - operation completed successfully
    pub const SUCCESS: ExitCode = ExitCode(0);

    /// Internal error - general failure
    pub const INTERNAL: ExitCode = ExitCode(1);

    /// CLI arguments error - invalid arguments or configuration
    pub const CLI_ARGS: ExitCode = ExitCode(2);

    /// Session file could not be read or does not describe a valid session
    pub const SESSION_INVALID: ExitCode = ExitCode(3);

    /// The form did not pass validation and was not submitted
    pub const VALIDATION_FAILED: ExitCode = ExitCode(4);

    /// An action referenced an id that is not among the loaded options (strict mode)
    pub const UNKNOWN_IDENTIFIER: ExitCode = ExitCode(5);

    /// Get the numeric exit code value.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    /// Create an ExitCode from a raw i32 value.
    ///
    /// Prefer using the named constants when possible.
    #[must_use]
    pub const fn from_i32(code: i32) -> Self {
        ExitCode(code)
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.0
    }
}
