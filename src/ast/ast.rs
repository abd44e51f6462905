use crate::lexer::tokens::TokenKind;

/// Name given to the synthetic function wrapping a bare top-level expression.
pub const ANONYMOUS_FUNCTION_NAME: &str = "__anon_expr";

/// Value a `while` expression evaluates to once lowered.
pub const WHILE_RESULT: f64 = 0.0;

/// Expression Nodes
///
/// Every construct in the language is an expression. Children are owned by
/// their parent node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Variable(String),
    Binary {
        operator: TokenKind,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Call {
        callee: String,
        arguments: Vec<Expr>,
    },
    /// Both branches are mandatory.
    If {
        condition: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
    While {
        condition: Box<Expr>,
        body: Box<Expr>,
    },
}

impl Expr {
    pub fn binary(operator: TokenKind, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn call(callee: &str, arguments: Vec<Expr>) -> Self {
        Expr::Call {
            callee: callee.to_string(),
            arguments,
        }
    }

    pub fn if_else(condition: Expr, then_branch: Expr, else_branch: Expr) -> Self {
        Expr::If {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }
    }

    pub fn while_loop(condition: Expr, body: Expr) -> Self {
        Expr::While {
            condition: Box::new(condition),
            body: Box::new(body),
        }
    }
}

/// A function's name and ordered, unique parameter names.
#[derive(Debug, Clone, PartialEq)]
pub struct Prototype {
    pub name: String,
    pub parameters: Vec<String>,
    /// Byte offset where the construct began in the source.
    pub offset: usize,
}

impl Prototype {
    pub fn is_anonymous(&self) -> bool {
        self.name == ANONYMOUS_FUNCTION_NAME
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    pub prototype: Prototype,
    pub body: Expr,
}

impl FunctionDef {
    /// Wraps a bare top-level expression in a zero-argument function.
    pub fn anonymous(body: Expr, offset: usize) -> Self {
        FunctionDef {
            prototype: Prototype {
                name: ANONYMOUS_FUNCTION_NAME.to_string(),
                parameters: vec![],
                offset,
            },
            body,
        }
    }
}
