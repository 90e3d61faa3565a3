pub mod config;
pub mod convert;
pub mod error;
pub mod logger;
pub mod script;
pub mod source;
pub mod target;
pub mod utils;
pub mod variable;

// Re-export commonly used types
pub use convert::{Converter, convert, convert_str};
pub use error::{HoppmanError, Result};
pub use source::SourceDocument;
pub use target::TargetCollection;
