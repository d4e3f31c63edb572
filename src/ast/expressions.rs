#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Named output bindings. No grammar production yields this today;
    /// the variant is kept for downstream consumers.
    Assignment { assignments: Vec<String> },
    /// A reference to a word. `id` may be a plain identifier or one of the
    /// literal chevron symbols `<` / `>`.
    Term { id: String },
    /// An anonymous bracketed block, possibly empty.
    Closure { exprs: Vec<Expr> },
    /// A match over constructors, possibly with zero branches.
    Match { branches: Vec<MatchBranch> },
    Literal(Literal),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Str(String),
    Num(f64),
}

/// One `| Cons [ ... ]` clause of a match; the body may be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchBranch {
    pub cons: String,
    pub exprs: Vec<Expr>,
}
