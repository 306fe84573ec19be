mod formatter;

pub use formatter::{NO_SOURCES_MESSAGE, SourceFormatter};
