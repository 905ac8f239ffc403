use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationInvalidArgument,

    FileNotFound,
    FileNotReadable,
    FileNotWritable,

    InternalIoError,
    InternalJsonError,
    InternalUnexpected,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",

            ErrorCode::FileNotFound => "file.not_found",
            ErrorCode::FileNotReadable => "file.not_readable",
            ErrorCode::FileNotWritable => "file.not_writable",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
            ErrorCode::InternalUnexpected => "internal.unexpected",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileErrorDetails {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidArgumentDetails {
    pub field: String,
    pub problem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
        }
    }

    pub fn validation_invalid_argument(
        field: impl Into<String>,
        problem: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        let problem = problem.into();
        let details = serde_json::to_value(InvalidArgumentDetails {
            field: field.into(),
            problem: problem.clone(),
            value,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(ErrorCode::ValidationInvalidArgument, problem, details)
    }

    pub fn file_not_found(path: impl Into<String>, error: impl Into<String>) -> Self {
        Self::file(ErrorCode::FileNotFound, "File not found", path, error)
    }

    pub fn file_not_readable(path: impl Into<String>, error: impl Into<String>) -> Self {
        Self::file(ErrorCode::FileNotReadable, "Cannot read file", path, error)
    }

    pub fn file_not_writable(path: impl Into<String>, error: impl Into<String>) -> Self {
        Self::file(ErrorCode::FileNotWritable, "Cannot write file", path, error)
    }

    fn file(
        code: ErrorCode,
        message: &str,
        path: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        let path = path.into();
        let error = error.into();
        let message = format!("{} {}: {}", message, path, error);
        let details = serde_json::to_value(FileErrorDetails { path, error })
            .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));
        Self::new(code, message, details)
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        Self::internal(ErrorCode::InternalIoError, "IO error", error, context)
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        Self::internal(ErrorCode::InternalJsonError, "JSON error", error, context)
    }

    pub fn internal_unexpected(error: impl Into<String>) -> Self {
        Self::internal(ErrorCode::InternalUnexpected, "Unexpected error", error, None)
    }

    fn internal(
        code: ErrorCode,
        message: &str,
        error: impl Into<String>,
        context: Option<String>,
    ) -> Self {
        let details = serde_json::to_value(InternalErrorDetails {
            error: error.into(),
            context,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(code, message, details)
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }
}
