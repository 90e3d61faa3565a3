pub mod rewriter;

pub use rewriter::VariableRewriter;
