/// Default bound on resolution depth
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Largest accepted depth bound
///
/// Resolution recurses on the native stack, so larger bounds are clamped to
/// this value.
pub const MAX_DEPTH_LIMIT: usize = 1_000;

/// How predicate symbols take part in unification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SymbolMatching {
    /// Symbols must be equal before arguments are unified
    #[default]
    Exact,
    /// Only arity and arguments are unified, symbols are not looked at
    Ignore,
}

/// Engine settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Sub-goals deeper than this are abandoned with a diagnostic.
    /// Never more than [`MAX_DEPTH_LIMIT`] in effect.
    pub max_depth: usize,
    /// Symbol handling during unification
    pub symbols: SymbolMatching,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            symbols: SymbolMatching::default(),
        }
    }
}

impl EngineConfig {
    /// Set the depth bound, clamped to [`MAX_DEPTH_LIMIT`]
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.min(MAX_DEPTH_LIMIT);
        self
    }

    /// Set the symbol handling
    #[must_use]
    pub fn with_symbols(mut self, symbols: SymbolMatching) -> Self {
        self.symbols = symbols;
        self
    }

    /// The depth bound actually enforced
    #[must_use]
    pub fn effective_max_depth(&self) -> usize {
        self.max_depth.min(MAX_DEPTH_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(config.symbols, SymbolMatching::Exact);
    }

    #[test]
    fn test_max_depth_is_clamped() {
        let config = EngineConfig::default().with_max_depth(usize::MAX);
        assert_eq!(config.max_depth, MAX_DEPTH_LIMIT);

        let config = EngineConfig {
            max_depth: 50_000,
            ..EngineConfig::default()
        };
        assert_eq!(config.effective_max_depth(), MAX_DEPTH_LIMIT);
        assert_eq!(EngineConfig::default().with_max_depth(25).max_depth, 25);
    }
}
