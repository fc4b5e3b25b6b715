//! Scope and symbol contracts
//!
//! The debugger supplies the lexical scopes of the stopped frame and the
//! global scopes of the program. The compiler only reads them: it looks
//! up declared types while building the tree, and captures the chains
//! inside identifier nodes so the runtime can bind them lazily.

use crate::types::Type;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    #[default]
    Variable,
    Function,
}

/// Symbol table entry
///
/// For functions `symbol_type` is the declared return type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    pub symbol_type: Type,
    #[serde(default)]
    pub kind: SymbolKind,
}

impl Symbol {
    pub fn variable(name: impl Into<String>, symbol_type: Type) -> Self {
        Self {
            name: name.into(),
            symbol_type,
            kind: SymbolKind::Variable,
        }
    }

    pub fn function(name: impl Into<String>, return_type: Type) -> Self {
        Self {
            name: name.into(),
            symbol_type: return_type,
            kind: SymbolKind::Function,
        }
    }

    pub fn is_function(&self) -> bool {
        self.kind == SymbolKind::Function
    }

    pub fn return_type(&self) -> Option<&Type> {
        self.is_function().then_some(&self.symbol_type)
    }
}

/// A read-only symbol lookup provided by the debugger
pub trait Scope: fmt::Debug + Send + Sync {
    fn lookup(&self, name: &str) -> Option<Symbol>;
}

/// Scope backed by a hash map
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Symbol>", into = "Vec<Symbol>")]
pub struct MapScope {
    symbols: HashMap<String, Symbol>,
}

impl MapScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol, replacing any previous one with the same name
    pub fn insert(&mut self, symbol: Symbol) {
        self.symbols.insert(symbol.name.clone(), symbol);
    }

    pub fn with_symbol(mut self, symbol: Symbol) -> Self {
        self.insert(symbol);
        self
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Scope for MapScope {
    fn lookup(&self, name: &str) -> Option<Symbol> {
        self.symbols.get(name).cloned()
    }
}

impl From<Vec<Symbol>> for MapScope {
    fn from(symbols: Vec<Symbol>) -> Self {
        symbols.into_iter().fold(MapScope::new(), MapScope::with_symbol)
    }
}

impl From<MapScope> for Vec<Symbol> {
    fn from(scope: MapScope) -> Self {
        let mut symbols: Vec<Symbol> = scope.symbols.into_values().collect();
        symbols.sort_by(|a, b| a.name.cmp(&b.name));
        symbols
    }
}

/// Ordered scopes, innermost first
///
/// Cloning is cheap; the scopes themselves are shared.
#[derive(Debug, Clone, Default)]
pub struct ScopeChain {
    scopes: Vec<Arc<dyn Scope>>,
}

impl ScopeChain {
    pub fn new(scopes: Vec<Arc<dyn Scope>>) -> Self {
        Self { scopes }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Chain with a single scope
    pub fn single(scope: impl Scope + 'static) -> Self {
        let scope: Arc<dyn Scope> = Arc::new(scope);
        Self::new(vec![scope])
    }

    /// This chain followed by `outer`
    pub fn chained(&self, outer: &ScopeChain) -> ScopeChain {
        let scopes = self.scopes.iter().chain(outer.scopes.iter()).cloned().collect();
        ScopeChain { scopes }
    }

    /// Look a name up, innermost scope first
    pub fn lookup(&self, name: &str) -> Option<Symbol> {
        self.scopes.iter().find_map(|scope| scope.lookup(name))
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

impl FromIterator<Arc<dyn Scope>> for ScopeChain {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Scope>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Chains are equal when they share the very same scopes, in order
impl PartialEq for ScopeChain {
    fn eq(&self, other: &Self) -> bool {
        self.scopes.len() == other.scopes.len()
            && self
                .scopes
                .iter()
                .zip(&other.scopes)
                .all(|(a, b)| Arc::ptr_eq(a, b))
    }
}

/// A name whose binding is deferred until the runtime visits the node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identifier {
    name: String,
    #[serde(skip)]
    scopes: ScopeChain,
}

impl Identifier {
    pub fn new(name: impl Into<String>, scopes: ScopeChain) -> Self {
        Self {
            name: name.into(),
            scopes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The captured lookup path
    pub fn scopes(&self) -> &ScopeChain {
        &self.scopes
    }

    pub fn resolve(&self) -> Option<Symbol> {
        self.scopes.lookup(&self.name)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Deferred type lookup keyed by an identifier, used as the target of
/// explicit pointer casts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeofRef {
    name: String,
    #[serde(skip)]
    scopes: ScopeChain,
}

impl TypeofRef {
    pub fn new(name: impl Into<String>, scopes: ScopeChain) -> Self {
        Self {
            name: name.into(),
            scopes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn resolve(&self) -> Option<Type> {
        self.scopes.lookup(&self.name).map(|symbol| symbol.symbol_type)
    }
}
