//! Error types and diagnostic reporting.
//!
//! This module defines the error types shared by the tokenizer, the parser
//! and the driver. It includes:
//!
//! - Error structures carrying the byte offset of the offending input
//! - Severity levels (recoverable errors and warnings)
//! - Helpful error names and suggestions for renderers
//! - The `DiagnosticSink` trait diagnostics are pushed into

pub mod diagnostics;
pub mod errors;
