//! Noise removal for model-generated analysis text.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Fenced block labeled as JSON, fences included.
static FENCED_JSON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)```json.*?```").expect("valid fence regex"));

/// `N. **JSON ...**` (number optional, may sit inside the bold markers)
/// through to the end of the text.
static STRUCTURED_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ims)^[ \t]*(?:\d+\.?[ \t]*)?\*\*[ \t]*(?:\d+\.?[ \t]*)?json[^*]*\*\*.*\z")
        .expect("valid structured section regex")
});

/// Literal array of numbers, e.g. `[1, 2, 3]`.
static NUMERIC_ARRAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[\d,\s]+\]").expect("valid numeric array regex"));

/// Three or more line breaks with only whitespace between them.
static BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n\s*\n").expect("valid blank run regex"));

const DECORATIVE_BULLETS: [char; 8] = ['●', '○', '■', '□', '◆', '◇', '▪', '►'];

/// Cleanup preset levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CleanupPreset {
    /// Minimal cleanup: blank-line collapsing and trimming only
    Minimal,
    /// Standard cleanup: strip structured-data noise, collapse blank lines
    #[default]
    Standard,
    /// Aggressive cleanup: Standard plus Unicode and bullet normalization
    Aggressive,
}

/// Options for text cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupOptions {
    /// Normalize Unicode to NFC form
    pub normalize_unicode: bool,

    /// Remove Unicode replacement character (U+FFFD)
    pub remove_replacement_char: bool,

    /// Standardize decorative bullet glyphs (●, ■, ► ...) to •
    pub standardize_bullets: bool,

    /// Remove ```json fenced blocks
    pub remove_fenced_blocks: bool,

    /// Remove a trailing `N. **JSON ...**` section and everything after it
    pub remove_structured_section: bool,

    /// Remove bracketed numeric sequences such as `[1, 2, 3]`
    pub remove_numeric_arrays: bool,

    /// Collapse runs of blank lines to a single blank line
    pub collapse_blank_lines: bool,
}

impl CleanupOptions {
    /// Create options from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        match preset {
            CleanupPreset::Minimal => Self::minimal(),
            CleanupPreset::Standard => Self::standard(),
            CleanupPreset::Aggressive => Self::aggressive(),
        }
    }

    /// Minimal cleanup options.
    pub fn minimal() -> Self {
        Self {
            normalize_unicode: false,
            remove_replacement_char: false,
            standardize_bullets: false,
            remove_fenced_blocks: false,
            remove_structured_section: false,
            remove_numeric_arrays: false,
            collapse_blank_lines: true,
        }
    }

    /// Standard cleanup options.
    pub fn standard() -> Self {
        Self {
            normalize_unicode: false,
            remove_replacement_char: false,
            standardize_bullets: false,
            remove_fenced_blocks: true,
            remove_structured_section: true,
            remove_numeric_arrays: true,
            collapse_blank_lines: true,
        }
    }

    /// Aggressive cleanup options.
    pub fn aggressive() -> Self {
        Self {
            normalize_unicode: true,
            remove_replacement_char: true,
            standardize_bullets: true,
            ..Self::standard()
        }
    }
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self::standard()
    }
}

/// Text cleaner that strips structured-data noise from analysis text.
///
/// Every stage only ever shortens the text, so [`Cleaner::process`] repeats
/// the stages until the text stops changing. Removing one fragment can
/// expose another (`[ [1] ]`), and the repetition is what makes cleaning
/// idempotent.
#[derive(Debug, Clone, Default)]
pub struct Cleaner {
    options: CleanupOptions,
}

impl Cleaner {
    /// Create a new cleaner with the given options.
    pub fn new(options: CleanupOptions) -> Self {
        Self { options }
    }

    /// Create a cleaner from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        Self::new(CleanupOptions::from_preset(preset))
    }

    /// Get the cleanup options.
    pub fn options(&self) -> &CleanupOptions {
        &self.options
    }

    /// Process text through the cleaner.
    pub fn process(&self, text: &str) -> String {
        let mut result = self.pass(text);
        let mut passes = 1;
        loop {
            let next = self.pass(&result);
            if next == result {
                break;
            }
            result = next;
            passes += 1;
        }

        log::debug!(
            "cleaned analysis text: {} -> {} bytes in {} pass(es)",
            text.len(),
            result.len(),
            passes
        );
        result
    }

    fn pass(&self, text: &str) -> String {
        let mut result = text.to_string();

        // Stage 1: character-level normalization
        if self.options.normalize_unicode {
            result = result.nfc().collect();
        }

        if self.options.remove_replacement_char {
            result = result.replace('\u{FFFD}', "");
        }

        if self.options.standardize_bullets {
            result = result.replace(DECORATIVE_BULLETS, "•");
        }

        // Stage 2: structured-data noise
        if self.options.remove_fenced_blocks {
            result = FENCED_JSON.replace_all(&result, "").into_owned();
        }

        if self.options.remove_structured_section {
            result = STRUCTURED_SECTION.replace(&result, "").into_owned();
        }

        if self.options.remove_numeric_arrays {
            result = NUMERIC_ARRAY.replace_all(&result, "").into_owned();
        }

        // Stage 3: layout
        if self.options.collapse_blank_lines {
            result = BLANK_RUN.replace_all(&result, "\n\n").into_owned();
        }

        result.trim().to_string()
    }
}

/// Clean analysis text with the standard preset.
pub fn clean(raw: &str) -> String {
    Cleaner::default().process(raw)
}
