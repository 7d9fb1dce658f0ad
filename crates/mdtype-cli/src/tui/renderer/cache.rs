//! Rendered line cache
//!
//! Re-rendering is only needed when the visible text, the wrap width, the
//! theme, or the math toggle changes.

use mdtype_core::ThemeMode;
use ratatui::text::Line;

use super::lines::render_lines;
use crate::tui::themes::Theme;

/// (visible byte length, wrap width, theme, math)
type CacheKey = (usize, usize, ThemeMode, bool);

#[derive(Default)]
pub struct RenderCache {
    key: Option<CacheKey>,
    lines: Vec<Line<'static>>,
}

impl RenderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines for `text`, re-rendering only when the inputs changed
    ///
    /// Keyed on the visible length: the typewriter only ever grows the
    /// prefix of one source, and a new source always goes through
    /// [`RenderCache::invalidate`].
    pub fn get_or_render(
        &mut self,
        text: &str,
        width: usize,
        mode: ThemeMode,
        math: bool,
    ) -> &[Line<'static>] {
        let key = (text.len(), width, mode, math);
        if self.key != Some(key) {
            self.lines = render_lines(text, width, Theme::for_mode(mode), math);
            self.key = Some(key);
        }
        &self.lines
    }

    pub fn invalidate(&mut self) {
        self.key = None;
        self.lines.clear();
    }

    /// Lines from the last render
    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rerenders_on_key_change() {
        let mut cache = RenderCache::new();
        assert_eq!(cache.get_or_render("a b", 80, ThemeMode::Light, true).len(), 1);
        assert_eq!(cache.get_or_render("a b", 1, ThemeMode::Light, true).len(), 2);

        cache.invalidate();
        assert!(cache.lines().is_empty());
    }
}
