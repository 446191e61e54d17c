use std::collections::BTreeMap;

use anyhow::Result;

use super::{data_version, DefaultParser, Scoreboard, ScoreboardParser, V3120Parser, V4325Parser};
use crate::{nbt::Value, verbose};

/// Version-keyed strategy table with an irremovable default.
///
/// Populated before the first parse, then shared read-only; strategies are
/// `Send + Sync`, so one registry serves concurrent parse calls.
pub struct ParserRegistry {
    parsers: BTreeMap<i32, Box<dyn ScoreboardParser>>,
    default: Box<dyn ScoreboardParser>,
}

impl ParserRegistry {
    /// Registry holding only the default strategy
    pub fn new() -> Self {
        Self {
            parsers: BTreeMap::new(),
            default: Box::new(DefaultParser),
        }
    }

    /// Registry seeded with the built-in version-specific strategies
    pub fn with_builtin_parsers() -> Self {
        let mut registry = Self::new();
        registry.register(3120, Box::new(V3120Parser));
        registry.register(4325, Box::new(V4325Parser));
        registry
    }

    /// Register a strategy for a schema version. Re-registering a version
    /// replaces the earlier strategy.
    pub fn register(&mut self, version: i32, parser: Box<dyn ScoreboardParser>) {
        self.parsers.insert(version, parser);
    }

    /// Pick the strategy for a schema version: exact match first, then the
    /// nearest registered version (ties prefer the lower key), then the
    /// default.
    pub fn select(&self, version: i32) -> &dyn ScoreboardParser {
        if let Some(parser) = self.parsers.get(&version) {
            if verbose() {
                eprintln!("Using exact parser for DataVersion {version}");
            }
            return parser.as_ref();
        }

        let mut candidates = self
            .parsers
            .keys()
            .map(|&key| ((i64::from(key) - i64::from(version)).abs(), key))
            .collect::<Vec<_>>();
        candidates.sort_unstable();

        // At most two failed candidate lookups before giving up on the
        // version-specific strategies
        let mut failures = 0;
        for (_, key) in candidates {
            match self.parsers.get(&key) {
                Some(parser) => {
                    if verbose() {
                        eprintln!("Using nearest parser: DataVersion {key} (requested {version})");
                    }
                    return parser.as_ref();
                }
                None => {
                    failures += 1;
                    if failures >= 2 {
                        break;
                    }
                }
            }
        }

        if verbose() {
            eprintln!("Using default parser (requested DataVersion {version})");
        }
        self.default.as_ref()
    }

    /// Extract scoreboards from a decoded save tree: resolve the schema
    /// version and dispatch to the matching strategy
    pub fn parse_scoreboards(&self, root: &Value) -> Result<Vec<Scoreboard>> {
        self.select(data_version(root)).parse(root)
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::with_builtin_parsers()
    }
}
