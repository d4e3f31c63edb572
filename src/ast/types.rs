/// A type reference: a name plus bare generic parameter names.
///
/// Generics are names, not nested `Type`s; the grammar deliberately keeps
/// type arguments flat.
#[derive(Debug, Clone, PartialEq)]
pub struct Type {
    pub name: String,
    pub generics: Vec<String>,
}

/// A stack-effect signature element.
#[derive(Debug, Clone, PartialEq)]
pub enum FunctionType {
    /// A single stack slot.
    Cell(Type),
    /// A (possibly nested) stack effect; `outputs` may be empty.
    Function {
        inputs: Vec<FunctionType>,
        outputs: Vec<FunctionType>,
    },
}
