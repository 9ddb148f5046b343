use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// A user-facing namespace name such as `firebase.auth`.
///
/// Dot-separated, non-empty segments of letters, digits and `_`. Letters and
/// digits may be any Unicode alphanumerics. Ordering is byte order, which is
/// the order namespaces are emitted in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NamespaceName(String);

impl NamespaceName {
    /// Validates `raw` against the identifier grammar.
    pub fn parse(raw: &str) -> Option<Self> {
        let valid = !raw.is_empty()
            && raw.split('.').all(|segment| {
                !segment.is_empty()
                    && segment.chars().all(|c| c.is_alphanumeric() || c == '_')
            });
        valid.then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NamespaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub struct NamespaceDecl;

impl NamespaceDecl {
    pub const KEYWORD: &'static str = "declare namespace";
    pub const CLOSE: &'static str = "}";

    /// Returns the name declared by an opener line, if the line is one.
    ///
    /// A captured name that fails [`NamespaceName::parse`] means the line is
    /// not an opener at all.
    pub fn open(line: &str) -> Option<NamespaceName> {
        static OPEN_REGEX: OnceLock<Regex> = OnceLock::new();
        let open_regex = OPEN_REGEX.get_or_init(|| {
            Regex::new(r"^declare namespace (\S+) \{\s*$").expect("Invalid namespace regex")
        });

        let caps = open_regex.captures(line)?;
        NamespaceName::parse(&caps[1])
    }

    /// Whether `line` opens the namespace called exactly `name`.
    ///
    /// Used for the generator's internal namespace, which must never be
    /// treated as a user-facing opener.
    pub fn opens_exactly(line: &str, name: &str) -> bool {
        line.trim_end()
            .strip_prefix(Self::KEYWORD)
            .and_then(|rest| rest.strip_prefix(' '))
            .and_then(|rest| rest.strip_prefix(name))
            .is_some_and(|rest| rest == " {")
    }

    pub fn closes(line: &str) -> bool {
        line.trim_end() == Self::CLOSE
    }

    pub fn opener_line(name: &NamespaceName) -> String {
        format!("{} {name} {{", Self::KEYWORD)
    }
}
