use std::fmt::Write;

use super::ast::{Expr, FunctionDef};

/// Renders a parsed function as an indented tree, one node per line.
///
/// ```text
/// function add(a, b)
/// binary operation: +
///    └variable: a
///    └variable: b
/// ```
pub fn render_tree(function: &FunctionDef) -> String {
    let mut output = format!(
        "function {}({})\n",
        function.prototype.name,
        function.prototype.parameters.join(", ")
    );
    render_expr(&mut output, 0, &function.body);
    output
}

fn render_expr(output: &mut String, level: usize, expr: &Expr) {
    let indent = " ".repeat(level * 3);
    let marker = if level != 0 { "└" } else { "" };

    // Writing into a String cannot fail.
    let _ = match expr {
        Expr::Number(value) => writeln!(output, "{indent}{marker}number: {value}"),
        Expr::Variable(name) => writeln!(output, "{indent}{marker}variable: {name}"),
        Expr::Binary { operator, .. } => writeln!(
            output,
            "{indent}{marker}binary operation: {}",
            operator.lexeme()
        ),
        Expr::Call { callee, .. } => writeln!(output, "{indent}{marker}function call: {callee}"),
        Expr::If { .. } => writeln!(output, "{indent}{marker}if/else expression:"),
        Expr::While { .. } => writeln!(output, "{indent}{marker}while expression:"),
    };

    match expr {
        Expr::Number(_) | Expr::Variable(_) => {}
        Expr::Binary { left, right, .. } => {
            render_expr(output, level + 1, left);
            render_expr(output, level + 1, right);
        }
        Expr::Call { arguments, .. } => {
            for argument in arguments {
                render_expr(output, level + 1, argument);
            }
        }
        Expr::If {
            condition,
            then_branch,
            else_branch,
        } => {
            render_expr(output, level + 1, condition);
            render_expr(output, level + 1, then_branch);
            render_expr(output, level + 1, else_branch);
        }
        Expr::While { condition, body } => {
            render_expr(output, level + 1, condition);
            render_expr(output, level + 1, body);
        }
    }
}
