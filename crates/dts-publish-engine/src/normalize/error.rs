use std::fmt;

use super::kinds::NamespaceName;

/// A block that was still open when the input ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Construct {
    InternalNamespace,
    Namespace(NamespaceName),
    Comment { namespace: NamespaceName },
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Construct::InternalNamespace => f.write_str("internal namespace"),
            Construct::Namespace(name) => write!(f, "namespace `{name}`"),
            Construct::Comment { namespace } => {
                write!(f, "block comment in namespace `{namespace}`")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    #[error("Unterminated {construct} opened at line {line}")]
    Unterminated { construct: Construct, line: usize },
}
