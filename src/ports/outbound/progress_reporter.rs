/// ProgressReporter port for reporting progress during a traversal
///
/// This port abstracts progress reporting (e.g., to stderr)
/// so that stdout stays reserved for the rendered graph.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports a running count of completed lookups
    ///
    /// # Arguments
    /// * `completed` - Number of lookups finished so far
    /// * `message` - Optional message to include (usually the current package)
    fn report_progress(&self, completed: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
