mod formatter_factory;
mod presenter_factory;
mod source_factory;

pub use formatter_factory::{FormatterFactory, FormatterType};
pub use presenter_factory::{PresenterFactory, PresenterType};
pub use source_factory::SourceFactory;
