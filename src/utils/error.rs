use thiserror::Error;

#[derive(Error, Debug)]
pub enum KitError {
    #[error("Download request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Port {port} is already in use")]
    PortInUseError { port: u16 },

    #[error("Server startup failed: {message}")]
    StartupError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    FileSystem,
    Configuration,
    Server,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl KitError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            KitError::HttpError(_) => ErrorCategory::Network,
            KitError::IoError(_) => ErrorCategory::FileSystem,
            KitError::PortInUseError { .. } | KitError::StartupError { .. } => {
                ErrorCategory::Server
            }
            KitError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 端口衝突換個端口就能重試
            KitError::PortInUseError { .. } => ErrorSeverity::Medium,
            KitError::HttpError(_) => ErrorSeverity::High,
            KitError::IoError(_) => ErrorSeverity::High,
            KitError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            KitError::StartupError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            KitError::PortInUseError { port } => format!(
                "Port {} is already in use. Please try a different port or stop the existing server.",
                port
            ),
            KitError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration problem with '{}': {}", field, reason)
            }
            other => format!("{}", other),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            KitError::HttpError(_) => "Check your network connection and try again",
            KitError::IoError(_) => "Check file permissions and available disk space",
            KitError::PortInUseError { .. } => "Pass --port with a free port number",
            KitError::StartupError { .. } => "Check the startup log for details",
            KitError::InvalidConfigValueError { .. } => "Fix the flagged value and re-run",
        }
    }
}

pub type Result<T> = std::result::Result<T, KitError>;
