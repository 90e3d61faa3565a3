pub mod types;

// Re-export commonly used types
pub use types::{
    Auth, AuthAttribute, Body, CollectionInfo, CollectionVariable, Event, Header, Listen,
    QueryParam, RequestDefinition, ResponseExample, Script, TargetCollection, TargetFolder,
    TargetItem, TargetRequest, TargetUrl,
};
