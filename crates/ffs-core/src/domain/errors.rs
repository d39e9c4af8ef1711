pub type FfsResult<T> = Result<T, FfsError>;
pub type ParserResult<T> = FfsResult<T>;
pub type ComputeResult<T> = FfsResult<T>;

/// Failure class; each maps to one process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FfsErrorCategory {
    /// Malformed or inconsistent parameter files, job logs or CLI arguments.
    InputValidation,
    /// An input could not be read.
    Io,
    /// Inputs were well formed but the rate cannot be derived from them.
    Computation,
    /// The run failed outside the pipeline.
    Internal,
}

impl FfsErrorCategory {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::InputValidation => 2,
            Self::Io => 3,
            Self::Computation => 4,
            Self::Internal => 5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::InputValidation => "input",
            Self::Io => "io",
            Self::Computation => "computation",
            Self::Internal => "internal",
        }
    }
}

/// Error carried through every stage of the rate pipeline.
///
/// The placeholder is a stable dotted tag (`IO.INPUT_READ`,
/// `INPUT.MISSING_PARAMETER`, ...) that tests and diagnostics key on; the
/// message is free text for humans.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} error [{}] {}", .category.label(), .placeholder, .message)]
pub struct FfsError {
    category: FfsErrorCategory,
    placeholder: &'static str,
    message: String,
}

impl FfsError {
    fn with_category(
        category: FfsErrorCategory,
        placeholder: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            placeholder,
            message: message.into(),
        }
    }

    pub fn input_validation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::with_category(FfsErrorCategory::InputValidation, placeholder, message)
    }

    pub fn io_system(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::with_category(FfsErrorCategory::Io, placeholder, message)
    }

    pub fn computation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::with_category(FfsErrorCategory::Computation, placeholder, message)
    }

    pub fn internal(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::with_category(FfsErrorCategory::Internal, placeholder, message)
    }

    pub const fn category(&self) -> FfsErrorCategory {
        self.category
    }

    pub const fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn exit_code(&self) -> i32 {
        self.category.exit_code()
    }

    /// `ERROR: [TAG] message`, the first stderr line of a failed run.
    pub fn diagnostic_line(&self) -> String {
        format!("ERROR: [{}] {}", self.placeholder, self.message)
    }

    /// `FATAL EXIT CODE: n`, the last stderr line of a failed run.
    pub fn fatal_exit_line(&self) -> String {
        format!("FATAL EXIT CODE: {}", self.exit_code())
    }
}
