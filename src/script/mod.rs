pub mod rules;
pub mod translator;

pub use rules::{Replacer, RewriteRule};
pub use translator::ScriptTranslator;
