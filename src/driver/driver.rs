//! Sequential driver loop.
//!
//! Parses one top-level construct at a time and hands each finished
//! function to a [`Lowering`] collaborator before attempting the next. A
//! construct that fails to parse is reported and one token is skipped, so a
//! single malformed item never blocks the rest of the input.

use std::rc::Rc;

use crate::{
    ast::ast::{FunctionDef, Prototype},
    errors::{diagnostics::DiagnosticSink, errors::Error},
    lexer::lexer::tokenize,
    parser::parser::Parser,
};

/// Whatever turns parsed functions into something executable.
pub trait Lowering {
    /// Called with a function's prototype before its definition is handed
    /// over, so it can be referenced ahead of its body.
    fn declare(&mut self, _prototype: &Prototype) -> Result<(), Error> {
        Ok(())
    }

    fn define(&mut self, function: FunctionDef) -> Result<(), Error>;
}

impl Lowering for Vec<FunctionDef> {
    fn define(&mut self, function: FunctionDef) -> Result<(), Error> {
        self.push(function);
        Ok(())
    }
}

/// Outcome counts of a [`drive`] run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub lowered: usize,
    pub parse_failures: usize,
    pub lowering_failures: usize,
}

/// Runs `parser` to the end of its tokens.
///
/// Every error is reported to `diagnostics`. Parse failures discard the
/// construct and skip one token before retrying; lowering failures only
/// discard the construct.
pub fn drive(
    parser: &mut Parser,
    lowering: &mut impl Lowering,
    diagnostics: &mut impl DiagnosticSink,
) -> Summary {
    let mut summary = Summary::default();

    while !parser.is_at_end() {
        let function = match parser.parse() {
            Ok(function) => function,
            Err(error) => {
                diagnostics.report(error);
                summary.parse_failures += 1;
                parser.skip_token();
                continue;
            }
        };

        let lowered = lowering
            .declare(&function.prototype)
            .and_then(|_| lowering.define(function));

        match lowered {
            Ok(()) => summary.lowered += 1,
            Err(error) => {
                diagnostics.report(error);
                summary.lowering_failures += 1;
            }
        }
    }

    summary
}

/// Tokenizes and parses `source`, returning every construct that parsed.
pub fn parse_source(
    source: &str,
    file: Option<String>,
    diagnostics: &mut impl DiagnosticSink,
) -> Vec<FunctionDef> {
    let file_name = Rc::new(file.clone().unwrap_or_else(|| String::from("shell")));
    let tokens = tokenize(source, file, diagnostics);

    let mut parser = Parser::new(tokens, file_name);
    let mut functions = vec![];
    drive(&mut parser, &mut functions, diagnostics);

    functions
}
