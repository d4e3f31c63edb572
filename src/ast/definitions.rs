use super::expressions::Expr;
use super::types::{FunctionType, Type};

/// A parsed program: top-level definitions in declaration order.
pub type Ast = Vec<Definition>;

#[derive(Debug, Clone, PartialEq)]
pub enum Definition {
    /// A function/value definition.
    ///
    /// `body` holds at least one expression by construction; the parser
    /// rejects an empty body.
    TermDef {
        name: String,
        generics: Vec<String>,
        function_type: FunctionType,
        assignments: Vec<String>,
        body: Vec<Expr>,
    },
    /// A data type definition; may have zero constructors.
    TypeDef {
        name: String,
        generics: Vec<String>,
        constructors: Vec<Constructor>,
    },
}

/// A named variant of a type definition, carrying zero or more typed fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Constructor {
    pub name: String,
    pub types: Vec<Type>,
}
