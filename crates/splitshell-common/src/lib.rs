pub mod errors;
pub mod types;

pub use errors::{ConfigError, LayoutError, ShellError, StoreError};
pub use types::Rect;

pub type Result<T> = std::result::Result<T, ShellError>;
