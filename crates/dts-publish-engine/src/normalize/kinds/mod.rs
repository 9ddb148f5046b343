mod comment;
mod markers;
mod namespace;

pub use comment::{BlockComment, CommentSig};
pub use markers::{Directive, ErrorAlias, NoStructuralTyping};
pub use namespace::{NamespaceDecl, NamespaceName};
