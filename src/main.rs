use std::{env, fs::read_to_string, process, rc::Rc, time::Instant};

use lasil::{
    ast::{ast::FunctionDef, display::render_tree},
    display_error,
    driver::driver::{drive, Lowering},
    errors::{
        diagnostics::{count_by_severity, DiagnosticSink},
        errors::Error,
    },
    lexer::{lexer::tokenize, tokens::render_token_list},
    parser::parser::Parser,
};

/// Prints each diagnostic against the source as soon as it is reported.
struct ConsoleSink<'a> {
    source: &'a str,
    reported: Vec<Error>,
}

impl DiagnosticSink for ConsoleSink<'_> {
    fn report(&mut self, error: Error) {
        display_error(&error, self.source);
        self.reported.push(error);
    }
}

/// Dumps every parsed construct as a tree.
struct TreePrinter;

impl Lowering for TreePrinter {
    fn define(&mut self, function: FunctionDef) -> Result<(), Error> {
        println!("{}", render_tree(&function));
        Ok(())
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let (show_tokens, file_path) = match args.as_slice() {
        [_, path] => (false, path.as_str()),
        [_, flag, path] if flag == "--tokens" => (true, path.as_str()),
        _ => {
            println!(
                "Usage: {} [--tokens] <file>",
                args.first().map_or("lasil", String::as_str)
            );
            process::exit(1);
        }
    };

    let file_name = file_path.rsplit('/').next().unwrap_or(file_path);

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(error) => {
            println!("Failed to read {}: {}", file_path, error);
            process::exit(1);
        }
    };

    let start = Instant::now();
    let mut sink = ConsoleSink {
        source: &source,
        reported: vec![],
    };

    let tokens = tokenize(&source, Some(String::from(file_name)), &mut sink);

    println!("Tokenized in {:?}", start.elapsed());

    if show_tokens {
        print!("{}", render_token_list(&tokens));
    }

    let parse_start = Instant::now();
    let mut parser = Parser::new(tokens, Rc::new(String::from(file_name)));
    let summary = drive(&mut parser, &mut TreePrinter, &mut sink);

    println!("Parsed in {:?}", parse_start.elapsed());

    let (errors, warnings) = count_by_severity(&sink.reported);
    println!(
        "{} top-level constructs, {} errors, {} warnings",
        summary.lowered, errors, warnings
    );
    println!("Total time: {:?}", start.elapsed());
}
