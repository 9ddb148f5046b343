use std::collections::HashMap;

use super::kinds::NamespaceName;

/// Body lines collected per namespace across all of its occurrences.
#[derive(Debug, Default, Clone)]
pub struct NamespaceBuffers {
    bodies: HashMap<NamespaceName, Vec<String>>,
}

impl NamespaceBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the start of an occurrence of `name`.
    ///
    /// Returns `true` when earlier occurrences already contributed lines, in
    /// which case a blank separator has been appended.
    pub fn begin_occurrence(&mut self, name: &NamespaceName) -> bool {
        let body = self.bodies.entry(name.clone()).or_default();
        if body.is_empty() {
            return false;
        }
        body.push(String::new());
        true
    }

    pub fn push(&mut self, name: &NamespaceName, line: String) {
        self.bodies.entry(name.clone()).or_default().push(line);
    }

    pub fn body(&self, name: &NamespaceName) -> Option<&[String]> {
        self.bodies.get(name).map(Vec::as_slice)
    }

    /// Namespace names in emission order (byte order).
    pub fn sorted_names(&self) -> Vec<&NamespaceName> {
        let mut names: Vec<_> = self.bodies.keys().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
