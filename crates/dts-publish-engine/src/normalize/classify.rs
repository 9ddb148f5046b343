use super::kinds::{
    BlockComment, CommentSig, Directive, NamespaceDecl, NamespaceName, NoStructuralTyping,
};
use super::lines::LineRef;

/// Classification of a single line containing only local facts.
///
/// Phase 1 of normalization: every predicate is evaluated independently and
/// without reference to scanner state. The scanner decides which facts
/// matter in its current state.
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    /// The line this class describes.
    pub line: LineRef<'a>,
    /// The line has no characters at all. Whitespace-only lines are content.
    pub is_empty: bool,
    /// Generator bookkeeping line, discarded in every state.
    pub is_directive: bool,
    /// Opens the generator's internal namespace.
    pub opens_internal: bool,
    /// Name of the user-facing namespace this line opens, if any.
    pub namespace_open: Option<NamespaceName>,
    /// A `}` at column zero.
    pub is_block_close: bool,
    /// Carries the no-structural-typing annotation somewhere in the line.
    pub has_no_structural_marker: bool,
    /// Block comment delimiter found at the start of the line.
    pub comment_sig: Option<CommentSig>,
}

/// Classifies individual lines of generated declaration text.
pub struct DeclarationLineClassifier<'o> {
    internal_namespace: &'o str,
}

impl<'o> DeclarationLineClassifier<'o> {
    pub fn new(internal_namespace: &'o str) -> Self {
        Self { internal_namespace }
    }

    /// Classifies a line into a [`LineClass`].
    pub fn classify<'a>(&self, lr: LineRef<'a>) -> LineClass<'a> {
        let text = lr.text;
        let opens_internal = NamespaceDecl::opens_exactly(text, self.internal_namespace);

        LineClass {
            line: lr,
            is_empty: text.is_empty(),
            is_directive: Directive::matches(text),
            opens_internal,
            namespace_open: if opens_internal {
                None
            } else {
                NamespaceDecl::open(text)
            },
            is_block_close: NamespaceDecl::closes(text),
            has_no_structural_marker: NoStructuralTyping::matches(text),
            comment_sig: BlockComment::sig(text),
        }
    }
}
