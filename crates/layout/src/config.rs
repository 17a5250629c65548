/// How a table that lands on a fresh page picks its starting offset after a
/// table of the other kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReanchorRule {
    /// Re-anchor to the table's authored `y` when the previously placed table
    /// was of a different kind and the page is still empty.
    #[default]
    LastTableKind,
    /// Never re-anchor: a table starts at the furthest bottom edge already on
    /// the page, which is `0` on a fresh page. Kept to compare against layouts
    /// produced by older template previews.
    MaxPreviousEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Emit a single page without walking rows when the whole flow fits on
    /// the first page.
    ///
    /// Defaults to `true`. Disabling it forces the multi-page walk, which
    /// yields identical offsets for content that fits.
    pub fast_path: bool,
    /// Defaults to [`ReanchorRule::LastTableKind`].
    pub reanchor: ReanchorRule,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            fast_path: true,
            reanchor: ReanchorRule::default(),
        }
    }
}

impl PaginationConfig {
    pub fn with_fast_path(mut self, enabled: bool) -> Self {
        self.fast_path = enabled;
        self
    }

    pub fn with_reanchor(mut self, rule: ReanchorRule) -> Self {
        self.reanchor = rule;
        self
    }
}
