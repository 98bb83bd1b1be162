//! Rendering options and configuration.

/// Options for rendering an analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Character used in front of bullet and recommendation items in text output
    pub list_marker: char,

    /// Group consecutive bullet items into a single `<ul>` in HTML output
    pub group_list_items: bool,

    /// Wrap HTML output in a `<div class="analysis-content">` container
    pub wrap_container: bool,

    /// Collect block statistics during rendering
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the list marker character.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.list_marker = marker;
        self
    }

    /// Enable or disable `<ul>` grouping of bullet items.
    pub fn with_list_grouping(mut self, group: bool) -> Self {
        self.group_list_items = group;
        self
    }

    /// Enable or disable the HTML container element.
    pub fn with_container(mut self, wrap: bool) -> Self {
        self.wrap_container = wrap;
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            list_marker: '•',
            group_list_items: true,
            wrap_container: false,
            collect_stats: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_list_marker('-')
            .with_list_grouping(false)
            .with_container(true)
            .with_stats(true);

        assert_eq!(options.list_marker, '-');
        assert!(!options.group_list_items);
        assert!(options.wrap_container);
        assert!(options.collect_stats);
    }

    #[test]
    fn test_render_options_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.list_marker, '•');
        assert!(options.group_list_items);
        assert!(!options.wrap_container);
    }
}
