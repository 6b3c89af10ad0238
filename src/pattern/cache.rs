use std::sync::Arc;

use hashbrown::HashMap as FastHashMap;
use parking_lot::RwLock;

use crate::pattern::compiled::CompiledPattern;
use crate::pattern::error::PatternResult;

/// Append-only memoization of compiled patterns, keyed by pattern string.
/// Entries are never evicted or mutated; repeated compilation of the same
/// pattern returns the cached matcher.
#[derive(Debug)]
pub struct PatternCache {
    case_sensitive: bool,
    map: RwLock<FastHashMap<Box<str>, Arc<CompiledPattern>>>,
}

impl PatternCache {
    pub fn new(case_sensitive: bool) -> Self {
        Self {
            case_sensitive,
            map: RwLock::new(FastHashMap::new()),
        }
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn compile(&self, pattern: &str) -> PatternResult<Arc<CompiledPattern>> {
        if let Some(found) = self.map.read().get(pattern) {
            return Ok(found.clone());
        }

        let compiled = Arc::new(CompiledPattern::compile(pattern, self.case_sensitive)?);

        // Upgrade to write: another caller may have raced the compilation.
        let mut map = self.map.write();
        if let Some(found) = map.get(pattern) {
            return Ok(found.clone());
        }
        map.insert(Box::from(pattern), compiled.clone());
        Ok(compiled)
    }

    pub fn len(&self) -> usize {
        self.map.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.read().is_empty()
    }
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new(true)
    }
}
