use error_stack::Report;
use ron::de::SpannedError;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(thiserror::Error, Debug)]
pub enum SnapErrorKind {
    #[error("General Error: {0}")]
    General(String),
    #[error("Configuration Error: {0}")]
    Config(String),
    #[error("A gesture is already in progress")]
    GestureInProgress,
    #[error("No gesture is in progress")]
    NoActiveGesture,
    #[error("Capture region is empty")]
    EmptyCapture,
}

#[derive(Debug)]
pub struct SnapError(pub Report<SnapErrorKind>);

impl Display for SnapError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl SnapError {
    #[track_caller]
    pub fn change_context<S: Into<String>>(self, message: S) -> Self {
        Self(
            self.0
                .change_context(SnapErrorKind::General(message.into())),
        )
    }

    pub fn kind(&self) -> &SnapErrorKind {
        self.0.current_context()
    }
}

impl SnapError {
    #[track_caller]
    pub fn new(error: SnapErrorKind) -> SnapError {
        SnapError(Report::new(error))
    }
}

pub type SnapResult<T> = Result<T, SnapError>;

impl<T> From<T> for SnapError
where
    for<'a> &'a T: Into<SnapErrorKind>,
    T: Error + Send + Sync + 'static,
{
    #[track_caller]
    fn from(error: T) -> Self {
        let kind: SnapErrorKind = (&error).into();
        let report = Report::new(error);
        let report = report.change_context(kind);
        Self(report)
    }
}

impl From<&std::io::Error> for SnapErrorKind {
    #[track_caller]
    fn from(error: &std::io::Error) -> Self {
        Self::General(error.to_string())
    }
}

impl From<&serde_yml::Error> for SnapErrorKind {
    #[track_caller]
    fn from(error: &serde_yml::Error) -> Self {
        Self::Config(format!("YAML Error: {}", error))
    }
}

impl From<&SpannedError> for SnapErrorKind {
    #[track_caller]
    fn from(error: &SpannedError) -> Self {
        Self::Config(format!("RON Error: {}", error))
    }
}

impl From<&image::ImageError> for SnapErrorKind {
    #[track_caller]
    fn from(error: &image::ImageError) -> Self {
        Self::General(format!("Image Error: {}", error))
    }
}

impl From<String> for SnapErrorKind {
    #[track_caller]
    fn from(error: String) -> Self {
        Self::General(error)
    }
}

impl From<&str> for SnapError {
    #[track_caller]
    fn from(error: &str) -> Self {
        Self(Report::new(SnapErrorKind::General(error.to_string())))
    }
}

#[macro_export]
macro_rules! bail {
    ($($args:tt)+) => {
        return Err($crate::result::SnapError::new($crate::result::SnapErrorKind::General(format!($($args)+).into())))
    }
}

#[macro_export]
macro_rules! err {
    ($($args:tt)+) => {
        $crate::result::SnapError::new($crate::result::SnapErrorKind::General(format!($($args)+).into()))
    };
}

#[macro_export]
macro_rules! context {
    ($fmt:expr $(, $($args:expr),+)? => $block:block) => {
        {
            $block
        }.map_err(|e: $crate::result::SnapError| e.change_context(format!(concat!("Failed to ",$fmt) $(, $($args)+)?)))
    };
}
pub use context;
