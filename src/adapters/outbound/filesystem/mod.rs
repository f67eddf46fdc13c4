/// Filesystem adapters: the offline fixture source and file/stdout output
mod file_writer;
mod fixture_source;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use fixture_source::FixtureSource;
