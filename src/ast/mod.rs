/// AST (Abstract Syntax Tree) module
/// Contains the node definitions shared between the parser and whatever
/// lowers the tree afterwards.
///
/// Submodules:
/// - ast: Expression, prototype and function definitions
/// - display: Indented tree rendering for debugging output
pub mod ast;
pub mod display;
