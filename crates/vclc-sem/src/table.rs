//! The symbol table itself: [`Symbol`], [`MethodSig`], and
//! [`SymbolTable`]'s lookup/insert operations.

use indexmap::IndexMap;

/// The coarse category a [`Symbol`] belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolKind {
    Object,
    Field,
    Method,
    Enum,
}

/// VCL's built-in scalar and aggregate types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VclType {
    String,
    Int,
    Real,
    Bool,
    Time,
    Duration,
    Bytes,
    Ip,
    HeaderMap,
    Backend,
    Probe,
    Acl,
    /// The type of a declaration that has no value of its own (a
    /// subroutine, an object grouping fields) - distinct from `Bool`
    /// so a symbol table consumer can't accidentally treat `req` as a
    /// boolean.
    Void,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MethodSig {
    pub name: String,
    pub params: Vec<VclType>,
    pub return_type: VclType,
}

/// An entry in the symbol table: a built-in object/field/method, or a
/// user declaration (`sub`, `backend`, `acl`, VMOD import) inserted
/// later by a caller.
#[derive(Clone, Debug, PartialEq)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    pub ty: VclType,
    pub members: IndexMap<String, Symbol>,
    pub methods: IndexMap<String, MethodSig>,
    pub readable: bool,
    pub writable: bool,
}

impl Symbol {
    pub fn object(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: SymbolKind::Object,
            ty: VclType::Void,
            members: IndexMap::new(),
            methods: IndexMap::new(),
            readable: true,
            writable: false,
        }
    }

    pub fn field(name: impl Into<String>, ty: VclType, readable: bool, writable: bool) -> Self {
        Self {
            name: name.into(),
            kind: SymbolKind::Field,
            ty,
            members: IndexMap::new(),
            methods: IndexMap::new(),
            readable,
            writable,
        }
    }

    pub fn with_members(mut self, members: impl IntoIterator<Item = Symbol>) -> Self {
        for member in members {
            self.members.insert(member.name.clone(), member);
        }
        self
    }

    /// The synthetic field produced for a `req.http.X-Foo`-style lookup
    /// past a `HEADER_MAP` field: always a readable, writable string,
    /// named after the header.
    fn synthetic_header(name: &str) -> Self {
        Self::field(name, VclType::String, true, true)
    }
}

/// Maps top-level identifiers to [`Symbol`]s, with dotted-path lookup
/// into `members`. Built with [`new_symbol_table`]; user declarations
/// are added afterward with [`SymbolTable::insert`].
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    roots: IndexMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_root(&mut self, symbol: Symbol) {
        self.roots.insert(symbol.name.clone(), symbol);
    }

    /// Insert a user-defined symbol at a dotted path, creating
    /// intermediate `Object` symbols along the way if they don't exist.
    /// Used for subroutine names, backend/ACL declarations, and VMOD
    /// imports, none of which are known until a parse completes.
    pub fn insert(&mut self, path: &str, symbol: Symbol) {
        let mut segments: Vec<&str> = path.split('.').collect();
        let Some(last) = segments.pop() else { return };

        let mut map = &mut self.roots;
        for seg in segments {
            let entry = map.entry(seg.to_string()).or_insert_with(|| Symbol::object(seg));
            map = &mut entry.members;
        }
        map.insert(last.to_string(), symbol);
    }

    /// Split `path` on `.` and walk `members` from a root identifier,
    /// returning the deepest matched symbol. Once the walk reaches a
    /// `HEADER_MAP` field, any remaining single segment is accepted as
    /// a header name and answered with a synthetic `STRING` symbol
    /// rather than a literal member lookup - the header catalog of any
    /// real VCL file is open-ended.
    pub fn lookup(&self, path: &str) -> Option<Symbol> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.roots.get(first)?.clone();

        for seg in segments {
            if current.ty == VclType::HeaderMap {
                return Some(Symbol::synthetic_header(seg));
            }
            current = current.members.get(seg)?.clone();
        }

        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_creates_intermediate_objects() {
        let mut table = SymbolTable::new();
        table.insert(
            "vmods.std",
            Symbol::field("std", VclType::Void, true, false),
        );
        assert!(table.lookup("vmods").is_some());
        assert!(table.lookup("vmods.std").is_some());
    }

    #[test]
    fn lookup_missing_path_returns_none() {
        let table = SymbolTable::new();
        assert!(table.lookup("nonexistent").is_none());
    }
}
