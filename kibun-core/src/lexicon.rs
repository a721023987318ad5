//! Lexicon store and modifier rule sets
//!
//! Manages embedded lexicon data with caching. The lexicon is loaded
//! once per process and shared read-only, so concurrent analysis calls
//! need no locking.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Embedded lexicons, initialized on first access
///
/// The load result itself is cached: if the embedded data fails to
/// parse, every `get_lexicon` call sees the same load error rather
/// than a misleading unknown-code error.
static EMBEDDED: OnceLock<Result<HashMap<String, Arc<Lexicon>>>> = OnceLock::new();

/// Get a shared lexicon by code
///
/// Embedded lexicons are parsed on first access and cached for the
/// lifetime of the process. An unknown code is [`CoreError::UnknownLexicon`];
/// a parse or validation failure of the embedded data is surfaced as
/// [`CoreError::LexiconLoad`] / [`CoreError::LexiconInvalid`].
pub fn get_lexicon(code: &str) -> Result<Arc<Lexicon>> {
    let embedded = EMBEDDED
        .get_or_init(load_embedded)
        .as_ref()
        .map_err(Clone::clone)?;

    embedded
        .get(code)
        .cloned()
        .ok_or_else(|| CoreError::UnknownLexicon {
            code: code.to_string(),
        })
}

fn load_embedded() -> Result<HashMap<String, Arc<Lexicon>>> {
    let english = Arc::new(Lexicon::from_toml_str(include_str!(
        "../configs/lexicons/english.toml"
    ))?);

    let mut map = HashMap::new();
    map.insert("en".to_string(), Arc::clone(&english));
    map.insert("english".to_string(), english);
    Ok(map)
}

/// Root lexicon configuration (TOML schema)
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LexiconConfig {
    metadata: Metadata,
    valence: ValenceTable,
    modifiers: Modifiers,
}

/// Lexicon metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Metadata {
    code: String,
    name: String,
}

/// Word valence table
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ValenceTable {
    scale: f64,
    entries: HashMap<String, f64>,
}

/// Modifier rule sets: disjoint word classes that adjust nearby valences
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Modifiers {
    boosters: Vec<String>,
    dampeners: Vec<String>,
    negators: Vec<String>,
    #[serde(default)]
    contrast: Vec<String>,
}

/// Immutable word-to-valence store with heuristic modifier rules
///
/// All lookups take normalized (lowercased) words. The store is pure
/// and thread-safe by construction: it is never mutated after load.
#[derive(Debug, Clone)]
pub struct Lexicon {
    code: String,
    name: String,
    max_valence: f64,
    entries: HashMap<String, f64>,
    boosters: HashSet<String>,
    dampeners: HashSet<String>,
    negators: HashSet<String>,
    contrast: HashSet<String>,
}

impl Lexicon {
    /// Parse a lexicon from its TOML representation
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: LexiconConfig =
            toml::from_str(toml_str).map_err(|e| CoreError::LexiconLoad(e.to_string()))?;
        Self::from_config(config)
    }

    fn from_config(config: LexiconConfig) -> Result<Self> {
        if config.valence.scale <= 0.0 {
            return Err(CoreError::LexiconInvalid(format!(
                "valence scale must be positive, got {}",
                config.valence.scale
            )));
        }
        if config.valence.entries.is_empty() {
            return Err(CoreError::LexiconInvalid(
                "valence table is empty".to_string(),
            ));
        }

        let scale = config.valence.scale;
        for (word, valence) in &config.valence.entries {
            if !valence.is_finite() || valence.abs() > scale {
                return Err(CoreError::LexiconInvalid(format!(
                    "valence {valence} for '{word}' outside [-{scale}, {scale}]"
                )));
            }
        }

        Ok(Self {
            code: config.metadata.code,
            name: config.metadata.name,
            max_valence: scale,
            entries: config.valence.entries,
            boosters: config.modifiers.boosters.into_iter().collect(),
            dampeners: config.modifiers.dampeners.into_iter().collect(),
            negators: config.modifiers.negators.into_iter().collect(),
            contrast: config.modifiers.contrast.into_iter().collect(),
        })
    }

    /// Lexicon code (e.g. "en")
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable lexicon name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute bound of the valence range
    pub fn max_valence(&self) -> f64 {
        self.max_valence
    }

    /// Number of valence entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the valence table is empty (never true after validation)
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Base valence of a normalized word, if present
    pub fn lookup(&self, normalized: &str) -> Option<f64> {
        self.entries.get(normalized).copied()
    }

    /// Whether the word increases the magnitude of nearby valences
    pub fn is_booster(&self, normalized: &str) -> bool {
        self.boosters.contains(normalized)
    }

    /// Whether the word decreases the magnitude of nearby valences
    pub fn is_dampener(&self, normalized: &str) -> bool {
        self.dampeners.contains(normalized)
    }

    /// Whether the word inverts and dampens a following valence
    pub fn is_negator(&self, normalized: &str) -> bool {
        self.negators.contains(normalized)
    }

    /// Whether the word shifts weighting between clauses (e.g. "but")
    pub fn is_contrast(&self, normalized: &str) -> bool {
        self.contrast.contains(normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        [metadata]
        code = "test"
        name = "Test"

        [valence]
        scale = 4.0

        [valence.entries]
        good = 1.9
        bad = -2.5

        [modifiers]
        boosters = ["very"]
        dampeners = ["slightly"]
        negators = ["not"]
        contrast = ["but"]
    "#;

    #[test]
    fn parses_minimal_lexicon() {
        let lexicon = Lexicon::from_toml_str(MINIMAL).unwrap();
        assert_eq!(lexicon.code(), "test");
        assert_eq!(lexicon.lookup("good"), Some(1.9));
        assert_eq!(lexicon.lookup("bad"), Some(-2.5));
        assert_eq!(lexicon.lookup("unknown"), None);
        assert!(lexicon.is_booster("very"));
        assert!(lexicon.is_dampener("slightly"));
        assert!(lexicon.is_negator("not"));
        assert!(lexicon.is_contrast("but"));
        assert_eq!(lexicon.max_valence(), 4.0);
    }

    #[test]
    fn rejects_out_of_range_valence() {
        let toml_str = r#"
            [metadata]
            code = "test"
            name = "Test"

            [valence]
            scale = 4.0

            [valence.entries]
            overflowing = 5.5

            [modifiers]
            boosters = []
            dampeners = []
            negators = []
        "#;
        let err = Lexicon::from_toml_str(toml_str).unwrap_err();
        assert!(matches!(err, CoreError::LexiconInvalid(_)));
    }

    #[test]
    fn rejects_empty_valence_table() {
        let toml_str = r#"
            [metadata]
            code = "test"
            name = "Test"

            [valence]
            scale = 4.0

            [valence.entries]

            [modifiers]
            boosters = []
            dampeners = []
            negators = []
        "#;
        let err = Lexicon::from_toml_str(toml_str).unwrap_err();
        assert!(matches!(err, CoreError::LexiconInvalid(_)));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = Lexicon::from_toml_str("not valid toml [[").unwrap_err();
        assert!(matches!(err, CoreError::LexiconLoad(_)));
    }

    #[test]
    fn embedded_english_loads() {
        let lexicon = get_lexicon("en").unwrap();
        assert_eq!(lexicon.code(), "en");
        assert!(lexicon.len() > 100);
        assert!(lexicon.lookup("good").unwrap() > 0.0);
        assert!(lexicon.lookup("terrible").unwrap() < 0.0);
        assert!(lexicon.is_negator("not"));
        assert!(lexicon.is_booster("very"));
    }

    #[test]
    fn embedded_english_by_full_name() {
        let lexicon = get_lexicon("english").unwrap();
        assert_eq!(lexicon.code(), "en");
    }

    #[test]
    fn unknown_code_is_an_error() {
        let err = get_lexicon("xx").unwrap_err();
        assert!(matches!(err, CoreError::UnknownLexicon { .. }));
    }

    #[test]
    fn cached_load_failure_keeps_its_kind() {
        // A failed load is cached as the error itself, so lookups see
        // the load failure rather than an unknown-code error.
        let cache: OnceLock<Result<HashMap<String, Arc<Lexicon>>>> = OnceLock::new();
        let err = cache
            .get_or_init(|| Err(CoreError::LexiconLoad("truncated data".into())))
            .as_ref()
            .map_err(Clone::clone)
            .unwrap_err();
        assert!(matches!(err, CoreError::LexiconLoad(_)));
    }

    #[test]
    fn embedded_valences_within_scale() {
        let lexicon = get_lexicon("en").unwrap();
        for word in ["good", "bad", "love", "hate", "worst", "best"] {
            let v = lexicon.lookup(word).unwrap();
            assert!(v.abs() <= lexicon.max_valence(), "{word} out of range");
        }
    }
}
