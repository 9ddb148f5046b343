#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentSig {
    /// `/*` starting a block that continues on later lines.
    Open,
    /// `*/` ending a block opened earlier.
    Close,
    /// `/* ... */` opened and closed on the same line with nothing after it.
    Inline,
}

pub struct BlockComment;

impl BlockComment {
    pub const OPEN: &'static str = "/*";
    pub const CLOSE: &'static str = "*/";

    pub fn sig(line: &str) -> Option<CommentSig> {
        let t = line.trim_start();
        if let Some(rest) = t.strip_prefix(Self::OPEN) {
            match rest.find(Self::CLOSE) {
                None => Some(CommentSig::Open),
                // Code after the comment makes this a body line.
                Some(end) if rest[end + Self::CLOSE.len()..].trim().is_empty() => {
                    Some(CommentSig::Inline)
                }
                Some(_) => None,
            }
        } else if t.starts_with(Self::CLOSE) {
            Some(CommentSig::Close)
        } else {
            None
        }
    }

    pub fn closes(sig: Option<CommentSig>) -> bool {
        matches!(sig, Some(CommentSig::Close))
    }
}
