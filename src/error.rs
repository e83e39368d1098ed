use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreeterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("template parse error: {0}")]
    TemplateParse(#[source] minijinja::Error),

    #[error("template render error: {0}")]
    TemplateRender(#[source] minijinja::Error),

    #[error("config error: {0}")]
    Config(String),
}

impl GreeterError {
    /// Get the kind/category of this error.
    pub fn kind(&self) -> GreeterErrorKind {
        match self {
            GreeterError::Io(_) => GreeterErrorKind::Io,
            GreeterError::TemplateParse(_) => GreeterErrorKind::TemplateParse,
            GreeterError::TemplateRender(_) => GreeterErrorKind::TemplateRender,
            GreeterError::Config(_) => GreeterErrorKind::Config,
        }
    }
}

/// Lightweight error category for pattern matching without borrowing the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GreeterErrorKind {
    Io,
    TemplateParse,
    TemplateRender,
    Config,
}

impl GreeterErrorKind {
    /// Whether the failure comes from the template rather than the environment.
    pub fn is_template(self) -> bool {
        matches!(
            self,
            GreeterErrorKind::TemplateParse | GreeterErrorKind::TemplateRender
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GreeterErrorKind::Io => "IO",
            GreeterErrorKind::TemplateParse => "TEMPLATE_PARSE",
            GreeterErrorKind::TemplateRender => "TEMPLATE_RENDER",
            GreeterErrorKind::Config => "CONFIG",
        }
    }
}

impl From<GreeterError> for std::io::Error {
    fn from(e: GreeterError) -> Self {
        std::io::Error::other(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_labels() {
        let err = GreeterError::Config("empty greeting".into());
        assert_eq!(err.kind(), GreeterErrorKind::Config);
        assert_eq!(err.kind().as_str(), "CONFIG");
        assert!(!err.kind().is_template());
        assert_eq!(err.to_string(), "config error: empty greeting");
    }

    #[test]
    fn io_error_converts_both_ways() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: GreeterError = io.into();
        assert_eq!(err.kind(), GreeterErrorKind::Io);

        let back: std::io::Error = err.into();
        assert!(back.to_string().contains("pipe closed"));
    }
}
