// Syntax tree produced by a successful parse

use std::fmt;

use super::token::{NumberShape, SourceLocation};

/// Declared variable types. Recorded only; never compared against usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    Int,
    Float,
    Bool,
}

impl Type {
    pub fn from_keyword(lexeme: &str) -> Option<Self> {
        match lexeme {
            "int" => Some(Type::Int),
            "float" => Some(Type::Float),
            "bool" => Some(Type::Bool),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Int => write!(f, "int"),
            Type::Float => write!(f, "float"),
            Type::Bool => write!(f, "bool"),
        }
    }
}

/// Binary operators, grouped by precedence level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    // Relational
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    // Additive
    Add,
    Sub,
    Or,
    // Multiplicative
    Mul,
    Div,
    And,
}

impl BinOp {
    pub fn relational(lexeme: &str) -> Option<Self> {
        match lexeme {
            "EQ" => Some(BinOp::Eq),
            "NE" => Some(BinOp::Ne),
            "LT" => Some(BinOp::Lt),
            "LE" => Some(BinOp::Le),
            "GT" => Some(BinOp::Gt),
            "GE" => Some(BinOp::Ge),
            _ => None,
        }
    }

    pub fn additive(lexeme: &str) -> Option<Self> {
        match lexeme {
            "plus" => Some(BinOp::Add),
            "min" => Some(BinOp::Sub),
            "or" => Some(BinOp::Or),
            _ => None,
        }
    }

    pub fn multiplicative(lexeme: &str) -> Option<Self> {
        match lexeme {
            "mult" => Some(BinOp::Mul),
            "div" => Some(BinOp::Div),
            "and" => Some(BinOp::And),
            _ => None,
        }
    }

    /// The source spelling of the operator.
    pub fn lexeme(&self) -> &'static str {
        match self {
            BinOp::Eq => "EQ",
            BinOp::Ne => "NE",
            BinOp::Lt => "LT",
            BinOp::Le => "LE",
            BinOp::Gt => "GT",
            BinOp::Ge => "GE",
            BinOp::Add => "plus",
            BinOp::Sub => "min",
            BinOp::Or => "or",
            BinOp::Mul => "mult",
            BinOp::Div => "div",
            BinOp::And => "and",
        }
    }
}

/// Expressions
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Variable(String, SourceLocation),
    Number {
        lexeme: String,
        shape: NumberShape,
        location: SourceLocation,
    },
    Bool(bool, SourceLocation),
    /// `~` applied to a factor
    Not {
        operand: Box<Expr>,
        location: SourceLocation,
    },
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
        location: SourceLocation,
    },
}

impl Expr {
    /// Get the source location of this node
    pub fn location(&self) -> SourceLocation {
        match self {
            Expr::Variable(_, loc) | Expr::Bool(_, loc) => *loc,
            Expr::Number { location, .. }
            | Expr::Not { location, .. }
            | Expr::Binary { location, .. } => *location,
        }
    }
}

/// Fully parenthesised rendering, handy for checking precedence.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Variable(name, _) => write!(f, "{name}"),
            Expr::Number { lexeme, .. } => write!(f, "{lexeme}"),
            Expr::Bool(value, _) => write!(f, "{value}"),
            Expr::Not { operand, .. } => write!(f, "~{operand}"),
            Expr::Binary {
                op, left, right, ..
            } => write!(f, "({left} {} {right})", op.lexeme()),
        }
    }
}

/// `name as value`
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub target: String,
    pub value: Expr,
    pub location: SourceLocation,
}

/// Statements
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Assign(Assignment),
    If {
        condition: Expr,
        then_branch: Box<Statement>,
        else_branch: Option<Box<Statement>>,
        location: SourceLocation,
    },
    For {
        init: Assignment,
        limit: Expr,
        body: Box<Statement>,
        location: SourceLocation,
    },
    While {
        condition: Expr,
        body: Box<Statement>,
        location: SourceLocation,
    },
    Read {
        targets: Vec<String>,
        location: SourceLocation,
    },
    Write {
        values: Vec<Expr>,
        location: SourceLocation,
    },
    /// `[ stmt (: | ;) stmt ... ]`
    Compound {
        statements: Vec<Statement>,
        location: SourceLocation,
    },
}

impl Statement {
    /// Get the source location of this node
    pub fn location(&self) -> SourceLocation {
        match self {
            Statement::Assign(assignment) => assignment.location,
            Statement::If { location, .. }
            | Statement::For { location, .. }
            | Statement::While { location, .. }
            | Statement::Read { location, .. }
            | Statement::Write { location, .. }
            | Statement::Compound { location, .. } => *location,
        }
    }
}

/// `a, b, c : type ;`
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub names: Vec<String>,
    pub ty: Type,
    pub location: SourceLocation,
}

/// Top-level program structure
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub declarations: Vec<Declaration>,
    pub body: Vec<Statement>,
}

impl Program {
    /// Number of declared variables across all declarations.
    pub fn variable_count(&self) -> usize {
        self.declarations.iter().map(|d| d.names.len()).sum()
    }
}
