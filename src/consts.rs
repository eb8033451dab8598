// Global safety caps to prevent pathological nesting or unbounded scans

// Parser: maximum nesting of expressions, statements and types
pub const DEFAULT_MAX_DEPTH: usize = 128;
// Gates: maximum number of tokens a lookahead gate may inspect
pub const DEFAULT_MAX_LOOKAHEAD: usize = 512;

// Environment overrides read by ParserConfig::from_env
pub const ENV_MAX_DEPTH: &str = "JCST_MAX_DEPTH";
pub const ENV_MAX_LOOKAHEAD: &str = "JCST_MAX_LOOKAHEAD";
