use serde::{Deserialize, Serialize};

use super::{kinds::NamespaceDecl, scanner::ScanOutput};

/// Where catch-all lines go relative to the merged namespace blocks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatchAllPlacement {
    /// Before the first namespace block, as the generator's own tooling did.
    #[default]
    Leading,
    /// After the last namespace block, separated by a blank line.
    Trailing,
}

/// Serializes scanner output into the published document.
pub fn render(out: &ScanOutput, placement: CatchAllPlacement) -> String {
    let mut lines: Vec<&str> = Vec::new();

    if placement == CatchAllPlacement::Leading {
        lines.extend(out.catch_all.iter().map(String::as_str));
    }

    let openers: Vec<_> = out
        .namespaces
        .sorted_names()
        .into_iter()
        .map(|name| (name, NamespaceDecl::opener_line(name)))
        .collect();
    for (i, (name, opener)) in openers.iter().enumerate() {
        if i > 0 {
            lines.push("");
        }
        lines.push(opener);
        lines.extend(
            out.namespaces
                .body(name)
                .unwrap_or_default()
                .iter()
                .map(String::as_str),
        );
        lines.push(NamespaceDecl::CLOSE);
    }

    if placement == CatchAllPlacement::Trailing && !out.catch_all.is_empty() {
        if !openers.is_empty() {
            lines.push("");
        }
        lines.extend(out.catch_all.iter().map(String::as_str));
    }

    let mut doc = String::new();
    for line in lines {
        doc.push_str(line);
        doc.push('\n');
    }
    doc
}
