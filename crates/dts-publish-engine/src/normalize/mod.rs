//! # Declaration Normalization
//!
//! Turns a generator-produced ambient declaration file into a publishable one:
//! the generator's internal namespace is dropped, repeated occurrences of each
//! user-facing namespace are merged, internal markers and directive lines are
//! stripped, and the merged namespaces are emitted in sorted order.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` of local facts (directive, namespace opener, block close,
//!    comment delimiter, marker).
//!
//! 2. **Scanning** (`scanner`): a `NamespaceScanner` state machine routes each
//!    line into the catch-all sequence or a namespace buffer, or drops it.
//!
//! 3. **Rendering** (`render`): namespace names are sorted and the buffers
//!    serialized around the catch-all section.
//!
//! ## Key Invariants
//!
//! - Every input line is dropped, stored in one namespace buffer, or stored in
//!   the catch-all sequence. Never more than one.
//! - Directive lines are discarded in every scanner state.
//! - No brace counting: blocks end at the first column-zero `}`.

pub mod buffers;
pub mod classify;
pub mod error;
pub mod kinds;
pub mod lines;
pub mod render;
pub mod scanner;

#[cfg(test)]
mod tests;

pub use buffers::NamespaceBuffers;
pub use classify::{DeclarationLineClassifier, LineClass};
pub use error::{Construct, NormalizeError};
pub use kinds::NamespaceName;
pub use render::CatchAllPlacement;
pub use scanner::{NamespaceScanner, ScanOutput};

use kinds::ErrorAlias;
use lines::numbered_lines;

/// The generator's scratch namespace holding synthesized symbols.
pub const INTERNAL_NAMESPACE: &str = "ಠ_ಠ.clutz";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Drop block comments inside namespace bodies.
    pub strip_comments: bool,
    /// Name of the namespace that is removed wholesale.
    pub internal_namespace: String,
    /// Identifier rewritten to `Error` inside namespace bodies. Empty disables the rewrite.
    pub error_alias: String,
    pub catch_all: CatchAllPlacement,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            strip_comments: true,
            internal_namespace: INTERNAL_NAMESPACE.to_string(),
            error_alias: ErrorAlias::DEFAULT.to_string(),
            catch_all: CatchAllPlacement::default(),
        }
    }
}

/// Runs classification and scanning, returning the accumulated buffers.
pub fn scan(text: &str, options: &NormalizeOptions) -> Result<ScanOutput, NormalizeError> {
    let classifier = DeclarationLineClassifier::new(&options.internal_namespace);
    let mut scanner = NamespaceScanner::new(options.strip_comments, &options.error_alias);

    for lr in numbered_lines(text) {
        let lc = classifier.classify(lr);
        scanner.push(&lc);
    }

    scanner.finish()
}

/// Normalizes a whole declaration document.
pub fn normalize(text: &str, options: &NormalizeOptions) -> Result<String, NormalizeError> {
    let out = scan(text, options)?;
    log::debug!(
        "scanned {} namespaces and {} catch-all lines",
        out.namespaces.len(),
        out.catch_all.len()
    );
    Ok(render::render(&out, options.catch_all))
}
