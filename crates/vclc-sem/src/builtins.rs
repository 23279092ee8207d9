//! The built-in object catalog, expressed as data so new fields are a
//! diffable one-line addition rather than a code change.

use crate::table::{Symbol, SymbolTable, VclType};

/// Build a fresh [`SymbolTable`] populated with VCL's built-in objects:
/// `req`, `resp`, `bereq`, `beresp`, `client`, `server`, `obj`, `local`,
/// `remote`, `now`, `storage`.
///
/// The built-in portion is immutable after this call returns nothing
/// here mutates it again; callers add user declarations with
/// [`SymbolTable::insert`].
pub fn new_symbol_table() -> SymbolTable {
    let mut table = SymbolTable::new();
    for root in builtin_roots() {
        table.insert_root(root);
    }
    table
}

fn http_object_fields() -> Symbol {
    Symbol::field("http", VclType::HeaderMap, true, true)
}

fn builtin_roots() -> Vec<Symbol> {
    vec![
        Symbol::object("req").with_members([
            Symbol::field("method", VclType::String, true, true),
            Symbol::field("url", VclType::String, true, true),
            Symbol::field("proto", VclType::String, true, true),
            Symbol::field("xid", VclType::String, true, false),
            http_object_fields(),
            Symbol::field("backend_hint", VclType::Backend, true, true),
            Symbol::field("restarts", VclType::Int, true, false),
            Symbol::field("grace", VclType::Duration, true, true),
        ]),
        Symbol::object("bereq").with_members([
            Symbol::field("method", VclType::String, true, true),
            Symbol::field("url", VclType::String, true, true),
            Symbol::field("proto", VclType::String, true, true),
            http_object_fields(),
            Symbol::field("backend", VclType::Backend, true, true),
            Symbol::field("connect_timeout", VclType::Duration, true, true),
            Symbol::field("first_byte_timeout", VclType::Duration, true, true),
        ]),
        Symbol::object("resp").with_members([
            Symbol::field("status", VclType::Int, true, true),
            Symbol::field("reason", VclType::String, true, true),
            http_object_fields(),
        ]),
        Symbol::object("beresp").with_members([
            Symbol::field("status", VclType::Int, true, true),
            Symbol::field("reason", VclType::String, true, true),
            http_object_fields(),
            Symbol::field("ttl", VclType::Duration, true, true),
            Symbol::field("grace", VclType::Duration, true, true),
            Symbol::field("keep", VclType::Duration, true, true),
            Symbol::field("uncacheable", VclType::Bool, true, true),
            Symbol::field("backend", VclType::Backend, true, false),
        ]),
        Symbol::object("client").with_members([
            Symbol::field("ip", VclType::Ip, true, false),
            Symbol::field("identity", VclType::String, true, true),
        ]),
        Symbol::object("server").with_members([
            Symbol::field("ip", VclType::Ip, true, false),
            Symbol::field("hostname", VclType::String, true, false),
            Symbol::field("identity", VclType::String, true, false),
        ]),
        Symbol::object("obj").with_members([
            Symbol::field("ttl", VclType::Duration, true, true),
            Symbol::field("grace", VclType::Duration, true, true),
            Symbol::field("keep", VclType::Duration, true, true),
            Symbol::field("hits", VclType::Int, true, false),
            Symbol::field("uncacheable", VclType::Bool, true, false),
            http_object_fields(),
        ]),
        Symbol::object("local").with_members([Symbol::field("ip", VclType::Ip, true, false)]),
        Symbol::object("remote").with_members([Symbol::field("ip", VclType::Ip, true, false)]),
        Symbol::field("now", VclType::Time, true, false),
        Symbol::object("storage").with_members([
            Symbol::field("free_space", VclType::Bytes, true, false),
            Symbol::field("used_space", VclType::Bytes, true, false),
            Symbol::field("happy", VclType::Bool, true, false),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::VclType;

    #[test]
    fn req_method_is_a_readable_writable_string() {
        let table = new_symbol_table();
        let sym = table.lookup("req.method").expect("req.method should exist");
        assert_eq!(sym.ty, VclType::String);
        assert!(sym.readable && sym.writable);
    }

    #[test]
    fn header_map_lookup_is_synthetic() {
        let table = new_symbol_table();
        let sym = table.lookup("req.http.X-Forwarded-For").expect("header lookup should succeed");
        assert_eq!(sym.ty, VclType::String);
        assert_eq!(sym.name, "X-Forwarded-For");
    }

    #[test]
    fn unknown_root_is_none() {
        let table = new_symbol_table();
        assert!(table.lookup("nonexistent").is_none());
    }

    #[test]
    fn now_is_a_bare_time_field_with_no_members() {
        let table = new_symbol_table();
        let sym = table.lookup("now").unwrap();
        assert_eq!(sym.ty, VclType::Time);
        assert!(sym.members.is_empty());
    }
}
