//! Generator-specific tokens that never reach the published file.

/// Lines the generator emits for its own bookkeeping, e.g.
/// `//!! Processing provides [firebase.auth] from input auth.js`.
pub struct Directive;

impl Directive {
    pub const PREFIX: &'static str = "//!!";

    pub fn matches(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }
}

/// Annotation on members that only exist to defeat structural typing.
pub struct NoStructuralTyping;

impl NoStructuralTyping {
    pub const MARKER: &'static str = "noStructuralTyping_";

    pub fn matches(line: &str) -> bool {
        line.contains(Self::MARKER)
    }
}

/// Rewrites of the generator's internal error alias.
pub struct ErrorAlias;

impl ErrorAlias {
    pub const DEFAULT: &'static str = "ಠ_ಠ.clutz.GlobalError";
    pub const PUBLIC: &'static str = "Error";

    pub fn rewrite(line: &str, alias: &str) -> String {
        if alias.is_empty() || !line.contains(alias) {
            return line.to_string();
        }
        line.replace(alias, Self::PUBLIC)
    }
}
