/// A single input line with its 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    pub number: usize,
    /// Line text without its `\n` or `\r\n` terminator.
    pub text: &'a str,
}

/// Returns an iterator over the lines of `text`, numbered from 1.
pub fn numbered_lines(text: &str) -> impl Iterator<Item = LineRef<'_>> {
    text.lines().enumerate().map(|(idx, text)| LineRef {
        number: idx + 1,
        text,
    })
}
