/// Formatter adapters for the supported graph renderings
mod ascii_tree_formatter;
mod dot_formatter;
mod listing_formatter;

pub use ascii_tree_formatter::AsciiTreeFormatter;
pub use dot_formatter::DotFormatter;
pub use listing_formatter::ListingFormatter;
