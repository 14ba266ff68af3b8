//! Plain serialized bundler result structures.
//!
//! These are the stable summary shape the runner works with, produced from
//! the bundler's native result by [`BundleStatsHandle::summarize`]. Expensive
//! hash and source payloads have no counterpart here and are ignored when
//! deserializing.
//!
//! [`BundleStatsHandle::summarize`]: super::BundleStatsHandle::summarize

use serde::Deserialize;

/// Result of one build target: errors, warnings and emitted chunks.
///
/// A multi-target build carries one nested entry per target in `children`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BundleStats {
    pub errors: Vec<String>,
    pub warnings: Vec<BuildWarning>,
    pub chunks: Vec<OutputChunk>,
    pub children: Option<Vec<BundleStats>>,
}

/// One warning record with an optional source location.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BuildWarning {
    pub message: String,
    pub loc: Option<String>,
}

/// One output artifact grouping: a byte size and the files it produced.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputChunk {
    pub size: u64,
    pub files: Vec<String>,
}

impl BundleStats {
    /// Normalizes the single- vs multi-target shape.
    ///
    /// Returns `children` when present, otherwise a one-element list holding
    /// this result itself. Downstream consumers depend on exactly this rule,
    /// so a single result is never double-counted.
    pub fn units(&self) -> Vec<&BundleStats> {
        match &self.children {
            Some(children) => children.iter().collect(),
            None => vec![self],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_result_normalizes_to_one_unit() {
        let stats = BundleStats {
            errors: vec!["boom".into()],
            ..Default::default()
        };

        let units = stats.units();
        assert_eq!(units.len(), 1);
        assert_eq!(units[0], &stats);
    }

    #[test]
    fn children_become_the_units() {
        let stats = BundleStats {
            children: Some(vec![BundleStats::default(), BundleStats::default()]),
            ..Default::default()
        };

        assert_eq!(stats.units().len(), 2);
    }

    #[test]
    fn deserialization_ignores_hash_and_source_fields() {
        let stats: BundleStats = serde_json::from_value(json!({
            "hash": "abc123",
            "errors": ["module not found"],
            "warnings": [{ "message": "deprecated", "loc": "src/a.js:1", "source": "..." }],
            "chunks": [{ "size": 2048, "files": ["main.js"], "hash": "def" }]
        }))
        .unwrap();

        assert_eq!(stats.errors, vec!["module not found"]);
        assert_eq!(stats.warnings[0].loc.as_deref(), Some("src/a.js:1"));
        assert_eq!(stats.chunks[0].size, 2048);
        assert!(stats.children.is_none());
    }
}
