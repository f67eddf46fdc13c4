use crate::adapters::outbound::formatters::{AsciiTreeFormatter, DotFormatter, ListingFormatter};
use crate::ports::outbound::GraphFormatter;

/// Output shapes the CLI can render a graph as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatterType {
    /// `package -> [deps]` lines
    Listing,
    /// Indented tree from the root
    AsciiTree,
    /// Graphviz DOT document
    Dot,
}

/// Maps a [`FormatterType`] to its adapter.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified type
    ///
    /// # Examples
    /// ```
    /// use nuget_depgraph::application::factories::{FormatterFactory, FormatterType};
    ///
    /// let formatter = FormatterFactory::create(FormatterType::Listing);
    /// ```
    pub fn create(formatter_type: FormatterType) -> Box<dyn GraphFormatter> {
        match formatter_type {
            FormatterType::Listing => Box::new(ListingFormatter::new()),
            FormatterType::AsciiTree => Box::new(AsciiTreeFormatter::new()),
            FormatterType::Dot => Box::new(DotFormatter::new()),
        }
    }

    /// Returns the progress message for the specified formatter type
    ///
    /// # Examples
    /// ```
    /// use nuget_depgraph::application::factories::{FormatterFactory, FormatterType};
    ///
    /// let message = FormatterFactory::progress_message(FormatterType::Dot);
    /// assert_eq!(message, "📝 Generating Graphviz DOT output...");
    /// ```
    pub fn progress_message(formatter_type: FormatterType) -> &'static str {
        match formatter_type {
            FormatterType::Listing => "📝 Generating dependency listing...",
            FormatterType::AsciiTree => "📝 Generating ASCII dependency tree...",
            FormatterType::Dot => "📝 Generating Graphviz DOT output...",
        }
    }
}
