use super::{
    buffers::NamespaceBuffers,
    classify::LineClass,
    error::{Construct, NormalizeError},
    kinds::{BlockComment, CommentSig, ErrorAlias, NamespaceName},
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum ScanState {
    Init,
    IgnoringInternalBlock {
        opened_at: usize,
    },
    CollectingNamespace {
        name: NamespaceName,
        opened_at: usize,
    },
    IgnoringCommentBlock {
        name: NamespaceName,
        opened_at: usize,
        comment_at: usize,
    },
}

/// Everything the scanner accumulated from one input.
#[derive(Debug, Default, Clone)]
pub struct ScanOutput {
    /// Lines outside every namespace block, in input order.
    pub catch_all: Vec<String>,
    pub namespaces: NamespaceBuffers,
}

/// Line-at-a-time state machine that routes lines into the accumulators.
pub struct NamespaceScanner<'o> {
    state: ScanState,
    strip_comments: bool,
    error_alias: &'o str,
    out: ScanOutput,
}

impl<'o> NamespaceScanner<'o> {
    pub fn new(strip_comments: bool, error_alias: &'o str) -> Self {
        Self {
            state: ScanState::Init,
            strip_comments,
            error_alias,
            out: ScanOutput::default(),
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        if c.is_directive {
            log::trace!("line {}: dropping directive", c.line.number);
            return;
        }

        let state = std::mem::replace(&mut self.state, ScanState::Init);
        self.state = match state {
            ScanState::Init => self.scan_top_level(c),
            ScanState::IgnoringInternalBlock { opened_at } => {
                if c.is_block_close {
                    log::debug!(
                        "dropped internal namespace, lines {opened_at}..={}",
                        c.line.number
                    );
                    ScanState::Init
                } else {
                    ScanState::IgnoringInternalBlock { opened_at }
                }
            }
            ScanState::CollectingNamespace { name, opened_at } => {
                self.collect_namespace_line(c, name, opened_at)
            }
            ScanState::IgnoringCommentBlock {
                name,
                opened_at,
                comment_at,
            } => {
                if BlockComment::closes(c.comment_sig) {
                    ScanState::CollectingNamespace { name, opened_at }
                } else {
                    ScanState::IgnoringCommentBlock {
                        name,
                        opened_at,
                        comment_at,
                    }
                }
            }
        };
    }

    /// Ends the scan. Input that stops inside a block is rejected.
    pub fn finish(self) -> Result<ScanOutput, NormalizeError> {
        match self.state {
            ScanState::Init => Ok(self.out),
            ScanState::IgnoringInternalBlock { opened_at } => Err(NormalizeError::Unterminated {
                construct: Construct::InternalNamespace,
                line: opened_at,
            }),
            ScanState::CollectingNamespace { name, opened_at } => {
                Err(NormalizeError::Unterminated {
                    construct: Construct::Namespace(name),
                    line: opened_at,
                })
            }
            ScanState::IgnoringCommentBlock {
                name, comment_at, ..
            } => Err(NormalizeError::Unterminated {
                construct: Construct::Comment { namespace: name },
                line: comment_at,
            }),
        }
    }

    fn scan_top_level(&mut self, c: &LineClass) -> ScanState {
        let number = c.line.number;
        if c.opens_internal {
            return ScanState::IgnoringInternalBlock { opened_at: number };
        }

        if let Some(name) = &c.namespace_open {
            if self.out.namespaces.begin_occurrence(name) {
                log::debug!("line {number}: merging repeated namespace `{name}`");
            }
            return ScanState::CollectingNamespace {
                name: name.clone(),
                opened_at: number,
            };
        }

        if !c.is_empty {
            self.out.catch_all.push(c.line.text.to_string());
        }
        ScanState::Init
    }

    fn collect_namespace_line(
        &mut self,
        c: &LineClass,
        name: NamespaceName,
        opened_at: usize,
    ) -> ScanState {
        if c.is_block_close {
            return ScanState::Init;
        }

        if self.strip_comments {
            match c.comment_sig {
                Some(CommentSig::Open) => {
                    return ScanState::IgnoringCommentBlock {
                        name,
                        opened_at,
                        comment_at: c.line.number,
                    };
                }
                Some(CommentSig::Inline) => {
                    return ScanState::CollectingNamespace { name, opened_at };
                }
                Some(CommentSig::Close) | None => {}
            }
        }

        if c.has_no_structural_marker {
            log::trace!("line {}: dropping no-structural-typing member", c.line.number);
        } else {
            let line = ErrorAlias::rewrite(c.line.text, self.error_alias);
            self.out.namespaces.push(&name, line);
        }
        ScanState::CollectingNamespace { name, opened_at }
    }
}
