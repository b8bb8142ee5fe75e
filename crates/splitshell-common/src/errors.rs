use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("no config directory on this platform")]
    NoConfigDir,

    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum LayoutError {
    #[error("container element not found: #{0}")]
    ContainerNotFound(String),

    #[error("split layout needs at least 2 panels, got {0}")]
    TooFewPanels(usize),

    #[error("duplicate panel id: {0}")]
    DuplicatePanelId(String),

    #[error("panel '{id}' has invalid bounds: min {min}, max {max}")]
    InvalidPanelBounds { id: String, min: f64, max: f64 },

    #[error("expected {expected} ratios, got {actual}")]
    RatioCountMismatch { expected: usize, actual: usize },

    #[error("ratio at index {index} is invalid: {value}")]
    InvalidRatio { index: usize, value: f64 },

    #[error("unknown panel: {0}")]
    UnknownPanel(String),

    #[error("cannot replace ratios while separator {0} is being dragged")]
    DragInProgress(usize),

    #[error("split layout has been disposed")]
    Disposed,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("storage codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
