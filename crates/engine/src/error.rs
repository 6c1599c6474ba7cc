use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot normalize {what}: total is zero")]
    DivisionByZero { what: &'static str },

    #[error("Work '{work}' failed: {source}")]
    Work {
        work: String,
        #[source]
        source: Box<EngineError>,
    },

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Thread pool creation failed: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("No works to analyze")]
    NoWorks,
}

impl EngineError {
    /// Attach the name of the work being analyzed.
    pub fn in_work(self, work: impl Into<String>) -> Self {
        Self::Work {
            work: work.into(),
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
