use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::VariantMapError;

/// Wildcard key consulted at a level when no exact key matches.
const DEFAULT_KEY: &str = "default";

type RegionMap = HashMap<String, String>;
type ScriptMap = HashMap<String, RegionMap>;

/// Immutable variant mapping table: language -> script -> region -> variant
/// code, with a `default` wildcard key available at the script and region
/// levels.
///
/// Loaded once at startup; an absent or malformed resource yields an empty
/// table, which degrades every lookup to "no variant" without failing.
#[derive(Clone, Debug, Default)]
pub struct VariantMap {
    languages: HashMap<String, ScriptMap>,
}

impl VariantMap {
    pub fn new() -> Self {
        Self {
            languages: HashMap::new(),
        }
    }

    /// Parse a YAML mapping resource. Keys are normalized to lowercase so
    /// later lookups are case-insensitive.
    pub fn parse(src: &str) -> Result<Self, VariantMapError> {
        let raw: HashMap<String, ScriptMap> = serde_yaml::from_str(src)?;

        let mut languages = HashMap::with_capacity(raw.len());
        for (language, scripts) in raw {
            let mut script_map = ScriptMap::with_capacity(scripts.len());
            for (script, regions) in scripts {
                let mut region_map = RegionMap::with_capacity(regions.len());
                for (region, variant) in regions {
                    region_map.insert(region.to_ascii_lowercase(), variant);
                }
                script_map.insert(script.to_ascii_lowercase(), region_map);
            }
            languages.insert(language.to_ascii_lowercase(), script_map);
        }

        Ok(Self { languages })
    }

    /// Read and parse the mapping resource at `path`.
    pub fn try_load(path: &Path) -> Result<Self, VariantMapError> {
        let content = fs::read_to_string(path).map_err(|source| VariantMapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Load the mapping resource at `path`, degrading to an empty table when
    /// the resource is absent or malformed.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(map) => {
                debug!(
                    path = %path.display(),
                    languages = map.len(),
                    "loaded variant mapping"
                );
                map
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    "variant mapping unavailable, resolving without variants: {err}"
                );
                Self::default()
            }
        }
    }

    /// Look up the variant code for a decomposed locale.
    ///
    /// Each level tries the exact key first and falls through to `default`;
    /// a miss at any level short-circuits to `None`. There is no
    /// backtracking: once a script bucket is selected, only that bucket's
    /// region map is consulted.
    pub fn lookup(
        &self,
        language: &str,
        script: Option<&str>,
        region: Option<&str>,
    ) -> Option<&str> {
        let scripts = self.languages.get(&language.to_ascii_lowercase())?;

        let regions = match script {
            Some(script) => {
                let key = script.to_ascii_lowercase();
                scripts.get(&key).or_else(|| scripts.get(DEFAULT_KEY))
            }
            None => scripts.get(DEFAULT_KEY),
        }?;

        let variant = match region {
            Some(region) => {
                let key = region.to_ascii_lowercase();
                regions.get(&key).or_else(|| regions.get(DEFAULT_KEY))
            }
            None => regions.get(DEFAULT_KEY),
        }?;

        Some(variant.as_str())
    }

    /// Number of languages with variant entries.
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}
