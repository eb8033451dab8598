use crate::consts::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_LOOKAHEAD, ENV_MAX_DEPTH, ENV_MAX_LOOKAHEAD};
use crate::error::{Error, Result};

/// Limits applied to a single parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum nesting of expressions, statements and types
    pub max_depth: usize,
    /// Maximum number of tokens a lookahead gate may inspect before it
    /// gives up and leaves the choice to speculation
    pub max_lookahead: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_lookahead: DEFAULT_MAX_LOOKAHEAD,
        }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_lookahead(mut self, max_lookahead: usize) -> Self {
        self.max_lookahead = max_lookahead;
        self
    }

    /// Defaults overridden by `JCST_MAX_DEPTH` and `JCST_MAX_LOOKAHEAD`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`ParserConfig::from_env`] with a caller supplied variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(ENV_MAX_DEPTH) {
            config.max_depth = parse_limit(ENV_MAX_DEPTH, &value)?;
        }
        if let Some(value) = lookup(ENV_MAX_LOOKAHEAD) {
            config.max_lookahead = parse_limit(ENV_MAX_LOOKAHEAD, &value)?;
        }
        log::debug!("parser config: {:?}", config);
        Ok(config)
    }
}

fn parse_limit(name: &str, value: &str) -> Result<usize> {
    match value.trim().parse::<usize>() {
        Ok(0) => Err(Error::config_error(format!("{} must be greater than zero", name))),
        Ok(limit) => Ok(limit),
        Err(e) => Err(Error::config_error(format!("invalid {} '{}': {}", name, value, e))),
    }
}
