//! Parsing options and configuration.

use super::{CleanupOptions, CleanupPreset};

/// Options for parsing analysis text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Cleanup applied before classification
    pub cleanup: CleanupOptions,

    /// Whether batch parsing uses parallel processing
    pub parallel: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set cleanup options.
    pub fn with_cleanup(mut self, cleanup: CleanupOptions) -> Self {
        self.cleanup = cleanup;
        self
    }

    /// Set cleanup preset.
    pub fn with_cleanup_preset(mut self, preset: CleanupPreset) -> Self {
        self.cleanup = CleanupOptions::from_preset(preset);
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            cleanup: CleanupOptions::standard(),
            parallel: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options_builder() {
        let options = ParseOptions::new()
            .with_cleanup_preset(CleanupPreset::Aggressive)
            .sequential();

        assert!(options.cleanup.normalize_unicode);
        assert!(!options.parallel);
    }

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert_eq!(options.cleanup, CleanupOptions::standard());
        assert!(options.parallel);
    }
}
