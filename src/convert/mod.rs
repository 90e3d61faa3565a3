pub mod collection;
pub mod endpoint;
pub mod id;
pub mod request;
pub mod walker;

// Re-export commonly used types
pub use collection::{Converter, convert, convert_str};
pub use endpoint::{ParsedEndpoint, parse_endpoint};
pub use id::IdGenerator;
pub use request::{RequestConverter, convert_request};
pub use walker::CollectionWalker;
