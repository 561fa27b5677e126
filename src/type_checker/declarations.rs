//! The declaration table shared by one type checking pass.
//!
//! Every type that can still be inferred lives in a [`TypeSlot`]. A slot
//! starts either bound (the type was written in the declaration) or
//! unresolved, and may be bound exactly once afterwards.

use std::fmt::Display;

use tracing::debug;

use crate::ast::types::Type;

/// A binding cell for a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeSlot(Type);

impl TypeSlot {
    pub fn new(ty: Type) -> Self {
        TypeSlot(ty)
    }

    pub fn unresolved() -> Self {
        TypeSlot(Type::Unresolved)
    }

    pub fn is_bound(&self) -> bool {
        self.0.is_resolved()
    }

    /// Binds an unresolved slot to a concrete type.
    ///
    /// # Panics
    ///
    /// If the slot is already bound or `ty` is `Unresolved`.
    pub fn bind(&mut self, ty: Type) {
        assert!(!self.is_bound(), "type slot already bound to {}", self.0);
        assert!(ty.is_resolved(), "type slot cannot be bound to Unresolved");
        self.0 = ty;
    }

    pub fn read(&self) -> Type {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Variable,
    Function,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// Only used for display.
    pub name: Option<String>,
    pub slot: TypeSlot,
}

impl Parameter {
    pub fn new(ty: Type) -> Self {
        Parameter { name: None, slot: TypeSlot::new(ty) }
    }

    pub fn named(name: &str, ty: Type) -> Self {
        Parameter { name: Some(name.to_string()), slot: TypeSlot::new(ty) }
    }
}

/// A variable or function known to the checker.
///
/// For variables `slot` holds the variable's type, for functions the
/// return type.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub name: String,
    pub kind: DeclarationKind,
    pub slot: TypeSlot,
    pub parameters: Vec<Parameter>,
}

impl Declaration {
    pub fn variable(name: &str, ty: Type) -> Self {
        Declaration {
            name: name.to_string(),
            kind: DeclarationKind::Variable,
            slot: TypeSlot::new(ty),
            parameters: vec![],
        }
    }

    pub fn function(name: &str, parameters: Vec<Parameter>, return_type: Type) -> Self {
        Declaration {
            name: name.to_string(),
            kind: DeclarationKind::Function,
            slot: TypeSlot::new(return_type),
            parameters,
        }
    }

    /// True if this declaration or any of its parameters is still unbound.
    pub fn has_unresolved(&self) -> bool {
        !self.slot.is_bound() || self.parameters.iter().any(|param| !param.slot.is_bound())
    }
}

impl Display for Declaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            DeclarationKind::Variable => {
                write!(f, "var {}: {}", self.name, self.slot.read().source_name())
            }
            DeclarationKind::Function => {
                let parameters = self
                    .parameters
                    .iter()
                    .map(|param| match &param.name {
                        Some(name) => format!("{}: {}", name, param.slot.read().source_name()),
                        None => param.slot.read().source_name().to_string(),
                    })
                    .collect::<Vec<String>>()
                    .join(", ");
                write!(f, "fn {}({}) -> {}", self.name, parameters, self.slot.read().source_name())
            }
        }
    }
}

/// Ordered table of declarations.
///
/// Variables and functions are looked up in separate namespaces. When a
/// name is declared more than once, variable lookup returns the first
/// declaration and function lookup returns the last one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Declarations {
    declarations: Vec<Declaration>,
}

impl Declarations {
    pub fn new() -> Self {
        Declarations { declarations: vec![] }
    }

    pub fn push(&mut self, declaration: Declaration) {
        debug!(declaration = %declaration, "declared");
        self.declarations.push(declaration);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn find_variable(&self, name: &str) -> Option<&Declaration> {
        self.declarations
            .iter()
            .find(|decl| decl.kind == DeclarationKind::Variable && decl.name == name)
    }

    pub fn find_function(&self, name: &str) -> Option<&Declaration> {
        self.declarations
            .iter()
            .rev()
            .find(|decl| decl.kind == DeclarationKind::Function && decl.name == name)
    }

    pub fn find_function_mut(&mut self, name: &str) -> Option<&mut Declaration> {
        self.declarations
            .iter_mut()
            .rev()
            .find(|decl| decl.kind == DeclarationKind::Function && decl.name == name)
    }

    /// Declarations that still have an unbound type slot.
    pub fn unresolved(&self) -> Vec<&Declaration> {
        self.declarations.iter().filter(|decl| decl.has_unresolved()).collect()
    }
}

impl From<Vec<Declaration>> for Declarations {
    fn from(declarations: Vec<Declaration>) -> Self {
        Declarations { declarations }
    }
}

impl FromIterator<Declaration> for Declarations {
    fn from_iter<T: IntoIterator<Item = Declaration>>(iter: T) -> Self {
        Declarations { declarations: iter.into_iter().collect() }
    }
}
