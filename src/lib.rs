#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip, Severity};

pub mod ast;
pub mod driver;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A byte offset into a source buffer, tagged with the buffer's name.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub usize, pub Rc<String>);

/// Finds the line containing `position`.
///
/// Returns the 1-based line number, the line's text (including its newline)
/// and the column of `position` within that line. An offset equal to the
/// buffer length maps onto the end of the last line, so errors raised at end
/// of input can still be pointed at.
pub fn get_line_at_position(content: &str, position: usize) -> Option<(usize, String, usize)> {
    if position > content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;
    let mut last = None;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&position) {
            return Some((line_number, line.to_string(), position - start));
        }

        last = Some((line_number, line.to_string(), position - start));
        start = end;
        line_number += 1;
    }

    if position == content.len() {
        // Trailing newline: point just past the final line's text.
        if content.ends_with('\n') || content.is_empty() {
            return Some((line_number, String::new(), 0));
        }
        return last;
    }

    None
}


pub fn display_error(error: &Error, source: &str) {
    /*
        Error: message
        -> final.lasil
           |
        20 | def f(x) { x @ 1 }
           | -------------^
    */

    let position = error.get_position();
    let label = match error.get_severity() {
        Severity::Error => "Error",
        Severity::Warning => "Warning",
    };

    if let ErrorTip::None = error.get_tip() {
        println!("{}: {}", label, error.get_error_name());
    } else {
        println!("{}: {} ({})", label, error.get_error_name(), error.get_tip());
    }
    println!("-> {}", position.1);

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
