use std::fmt;

#[derive(Debug)]
pub enum RuntimeError {
    TypeMismatch(String),
    ArityMismatch(String),
    Uncallable(String),
    NotAConstructor(String),
    FunctionNotFound,
    SystemError(String),
    Unknown(String),
}

impl From<String> for RuntimeError {
    fn from(s: String) -> Self {
        RuntimeError::Unknown(s)
    }
}

impl From<&str> for RuntimeError {
    fn from(s: &str) -> Self {
        RuntimeError::Unknown(s.to_string())
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::TypeMismatch(msg) => write!(f, "type mismatch: {}", msg),
            RuntimeError::ArityMismatch(msg) => write!(f, "arity mismatch: {}", msg),
            RuntimeError::Uncallable(msg) => write!(f, "value is not callable: {}", msg),
            RuntimeError::NotAConstructor(msg) => {
                write!(f, "value cannot be instantiated: {}", msg)
            }
            RuntimeError::FunctionNotFound => write!(f, "function not found"),
            RuntimeError::SystemError(msg) => write!(f, "system error: {}", msg),
            RuntimeError::Unknown(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for RuntimeError {}
