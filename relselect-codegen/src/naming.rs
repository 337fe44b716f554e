//! Identifier derivation for generated code

use proc_macro2::{Ident, Span};
use std::collections::HashSet;

/// Convert a table or column name to PascalCase.
///
/// Splits on `_`, `-`, whitespace and any other character outside `[A-Za-z0-9]`; existing
/// camelCase humps are kept (`firstName` -> `FirstName`). Non-ASCII characters are dropped
/// so the result can always continue a Rust identifier.
pub fn to_pascal_case(s: &str) -> String {
    s.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect()
}

/// PascalCase identifier that is always a valid Rust identifier
pub fn type_ident(name: &str) -> String {
    let mut ident = to_pascal_case(name);
    if ident.is_empty() {
        ident.push_str("Unnamed");
    }
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    // `Self` is the only PascalCase keyword and cannot be a raw identifier
    if syn::parse_str::<syn::Ident>(&ident).is_err() {
        ident.push('_');
    }
    ident
}

/// Hands out identifiers unique within one scope, suffixing repeats with a counter
#[derive(Debug, Default)]
pub struct IdentAllocator {
    taken: HashSet<String>,
}

impl IdentAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self, name: &str) -> Ident {
        let base = type_ident(name);
        let mut candidate = base.clone();
        let mut n = 2;
        while self.taken.contains(&candidate) {
            candidate = format!("{base}{n}");
            n += 1;
        }
        self.taken.insert(candidate.clone());
        Ident::new(&candidate, Span::call_site())
    }
}
