pub mod formatter;
pub mod summary;

pub use formatter::{CollectionFormatter, OutputFormat, output_file_name, to_json};
pub use summary::{CollectionSummary, variables_table};
