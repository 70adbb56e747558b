//! Name interning for type and variable names.
//!
//! Every template name (`Array`, `Tuple`, ...) and every variable name is
//! stored once and referred to by a `Symbol`. Two symbols are equal iff the
//! names are equal, so comparing template identities is an integer compare.

use indexmap::IndexSet;

/// A handle to an interned name.
///
/// Symbols order by first interning, not lexicographically.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Symbol(u32);

impl Symbol {
    /// Raw index, for debugging and serialization.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Insertion-ordered name table.
#[derive(Debug, Clone, Default)]
pub struct Interner {
    names: IndexSet<Box<str>>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a name, returning the existing symbol when already present.
    pub fn intern(&mut self, name: &str) -> Symbol {
        if let Some(index) = self.names.get_index_of(name) {
            return Symbol(index as u32);
        }
        let (index, _) = self.names.insert_full(name.into());
        Symbol(index as u32)
    }

    /// Look a name up without interning it.
    pub fn lookup(&self, name: &str) -> Option<Symbol> {
        self.names.get_index_of(name).map(|i| Symbol(i as u32))
    }

    /// # Panics
    /// Panics if the symbol was not created by this interner.
    #[inline]
    pub fn resolve(&self, sym: Symbol) -> &str {
        match self.names.get_index(sym.index()) {
            Some(name) => &**name,
            None => panic!("Interner: symbol {} was minted by another interner", sym.0),
        }
    }

    #[inline]
    pub fn try_resolve(&self, sym: Symbol) -> Option<&str> {
        self.names.get_index(sym.index()).map(|s| &**s)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, s)| (Symbol(i as u32), &**s))
    }
}
