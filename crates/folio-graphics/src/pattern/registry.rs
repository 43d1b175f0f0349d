//! Pattern registry

use std::collections::HashMap;

use crate::ColorSpaceError;

use super::PatternDefinition;

/// Immutable mapping from pattern name to definition
///
/// Built once when a page's pattern color space is instantiated and
/// read-only afterwards, so lookups are safe from any thread.
#[derive(Debug, Clone, Default)]
pub struct PatternRegistry {
    patterns: HashMap<String, PatternDefinition>,
}

impl PatternRegistry {
    /// Look up a pattern by name
    pub fn lookup(&self, name: &str) -> Result<&PatternDefinition, ColorSpaceError> {
        self.patterns
            .get(name)
            .ok_or_else(|| ColorSpaceError::PatternNotFound { name: name.to_string() })
    }

    /// Look up a pattern by name, `None` when absent
    pub fn get(&self, name: &str) -> Option<&PatternDefinition> {
        self.patterns.get(name)
    }

    /// Number of registered patterns
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Is the registry empty?
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Names of all registered patterns
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.patterns.keys().map(String::as_str)
    }
}

impl From<HashMap<String, PatternDefinition>> for PatternRegistry {
    fn from(patterns: HashMap<String, PatternDefinition>) -> Self {
        Self { patterns }
    }
}

impl FromIterator<(String, PatternDefinition)> for PatternRegistry {
    fn from_iter<I: IntoIterator<Item = (String, PatternDefinition)>>(iter: I) -> Self {
        Self {
            patterns: iter.into_iter().collect(),
        }
    }
}
