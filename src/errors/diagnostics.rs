use super::errors::{Error, Severity};

/// Receiver for diagnostics raised while tokenizing and driving the parser.
///
/// The core only hands over an [`Error`] with its byte offset; locating the
/// line and rendering it is left to the implementor.
pub trait DiagnosticSink {
    fn report(&mut self, error: Error);
}

impl DiagnosticSink for Vec<Error> {
    fn report(&mut self, error: Error) {
        self.push(error);
    }
}

/// Counts how many diagnostics of each severity were reported.
pub fn count_by_severity(errors: &[Error]) -> (usize, usize) {
    errors.iter().fold((0, 0), |(e, w), error| match error.get_severity() {
        Severity::Error => (e + 1, w),
        Severity::Warning => (e, w + 1),
    })
}
