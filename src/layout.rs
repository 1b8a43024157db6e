//! Layout hints derived from live terminal geometry.
//!
//! The chat view adapts its presentation to the environment it runs in: the
//! wrap width and visible transcript rows follow the terminal size, and a
//! compact mode kicks in on narrow terminals. Derivation is a pure function
//! of the latest geometry snapshot, recomputed before each render and fully
//! decoupled from the message/request state machine.

use std::env;

/// Below this width the transcript switches to compact presentation.
const COMPACT_COLS: u16 = 60;

/// Upper bound on wrap width; long lines are hard to read on wide terminals.
const MAX_WRAP_COLS: usize = 100;

/// Columns reserved for the message gutter in regular (non-compact) mode.
const GUTTER_COLS: u16 = 2;

/// Rows consumed by the input prompt and its help line while active.
const PROMPT_ROWS: u16 = 2;

/// Rows consumed by the session header.
const HEADER_ROWS: u16 = 2;

/// A snapshot of the terminal geometry signals the view adapts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermGeometry {
    pub cols: u16,
    pub rows: u16,
    /// Whether the input prompt currently occupies the bottom of the screen.
    pub prompt_active: bool,
}

impl TermGeometry {
    pub const fn new(cols: u16, rows: u16, prompt_active: bool) -> Self {
        Self {
            cols,
            rows,
            prompt_active,
        }
    }
}

/// Derived presentation hints consumed by the transcript renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutHints {
    /// Width messages are wrapped to.
    pub wrap_cols: usize,
    /// Rows available for the transcript pane.
    pub transcript_rows: usize,
    /// Rows the input area takes from the transcript pane.
    pub input_rows: usize,
    /// Narrow-terminal presentation (no gutter, short speaker tags).
    pub compact: bool,
}

impl LayoutHints {
    /// Derives presentation hints from a geometry snapshot.
    ///
    /// Pure: same snapshot, same hints. Callers re-derive from fresh geometry
    /// whenever they are about to render.
    pub fn derive(geometry: TermGeometry) -> Self {
        let compact = geometry.cols < COMPACT_COLS;
        let gutter = if compact { 0 } else { GUTTER_COLS };

        let wrap_cols = usize::from(geometry.cols.saturating_sub(gutter)).clamp(10, MAX_WRAP_COLS);

        let input_rows = if geometry.prompt_active { PROMPT_ROWS } else { 0 };
        let transcript_rows = geometry
            .rows
            .saturating_sub(input_rows + HEADER_ROWS)
            .max(1);

        Self {
            wrap_cols,
            transcript_rows: usize::from(transcript_rows),
            input_rows: usize::from(input_rows),
            compact,
        }
    }
}

/// Terminal background kinds, used to pick the markdown skin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Dark,
    Light,
}

/// Detect the terminal background from the environment.
///
/// Checks in order:
/// 1. `COLORFGBG` (format: "fg;bg", bg > 6 = light)
/// 2. `TERM_BACKGROUND` ("dark" | "light")
/// 3. Defaults to dark
pub fn detect_background() -> Background {
    if let Ok(val) = env::var("COLORFGBG")
        && let Some(bg) = val.split(';').nth(1)
        && let Ok(bg_num) = bg.parse::<u8>()
    {
        return if bg_num <= 6 {
            Background::Dark
        } else {
            Background::Light
        };
    }

    if let Ok(val) = env::var("TERM_BACKGROUND") {
        return if val.eq_ignore_ascii_case("light") {
            Background::Light
        } else {
            Background::Dark
        };
    }

    Background::Dark
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_regular_terminal() {
        let hints = LayoutHints::derive(TermGeometry::new(80, 24, true));

        assert!(!hints.compact);
        assert_eq!(hints.wrap_cols, 78);
        assert_eq!(hints.input_rows, 2);
        assert_eq!(hints.transcript_rows, 20);
    }

    #[test]
    fn test_narrow_terminal_is_compact() {
        let hints = LayoutHints::derive(TermGeometry::new(50, 24, true));

        assert!(hints.compact);
        // Compact mode drops the gutter entirely
        assert_eq!(hints.wrap_cols, 50);
    }

    #[test]
    fn test_wide_terminal_caps_wrap_width() {
        let hints = LayoutHints::derive(TermGeometry::new(240, 60, false));

        assert_eq!(hints.wrap_cols, 100);
        assert_eq!(hints.input_rows, 0);
    }

    #[test]
    fn test_tiny_terminal_floors() {
        let hints = LayoutHints::derive(TermGeometry::new(4, 3, true));

        assert_eq!(hints.wrap_cols, 10);
        assert_eq!(hints.transcript_rows, 1);
    }

    #[test]
    fn test_prompt_shrinks_transcript() {
        let idle = LayoutHints::derive(TermGeometry::new(80, 24, false));
        let active = LayoutHints::derive(TermGeometry::new(80, 24, true));

        assert!(active.transcript_rows < idle.transcript_rows);
    }

    #[test]
    fn test_derive_is_pure() {
        let geometry = TermGeometry::new(100, 40, true);
        assert_eq!(LayoutHints::derive(geometry), LayoutHints::derive(geometry));
    }

    #[test]
    #[serial]
    fn test_detect_background_colorfgbg_dark() {
        let original = std::env::var("COLORFGBG").ok();
        unsafe { std::env::set_var("COLORFGBG", "15;0") };

        assert_eq!(detect_background(), Background::Dark);

        restore("COLORFGBG", original);
    }

    #[test]
    #[serial]
    fn test_detect_background_colorfgbg_light() {
        let original = std::env::var("COLORFGBG").ok();
        unsafe { std::env::set_var("COLORFGBG", "0;15") };

        assert_eq!(detect_background(), Background::Light);

        restore("COLORFGBG", original);
    }

    #[test]
    #[serial]
    fn test_detect_background_term_background() {
        let fgbg = std::env::var("COLORFGBG").ok();
        let term_bg = std::env::var("TERM_BACKGROUND").ok();
        unsafe {
            std::env::remove_var("COLORFGBG");
            std::env::set_var("TERM_BACKGROUND", "light");
        }

        assert_eq!(detect_background(), Background::Light);

        restore("COLORFGBG", fgbg);
        restore("TERM_BACKGROUND", term_bg);
    }

    #[test]
    #[serial]
    fn test_detect_background_defaults_dark() {
        let fgbg = std::env::var("COLORFGBG").ok();
        let term_bg = std::env::var("TERM_BACKGROUND").ok();
        unsafe {
            std::env::remove_var("COLORFGBG");
            std::env::remove_var("TERM_BACKGROUND");
        }

        assert_eq!(detect_background(), Background::Dark);

        restore("COLORFGBG", fgbg);
        restore("TERM_BACKGROUND", term_bg);
    }

    fn restore(key: &str, original: Option<String>) {
        if let Some(val) = original {
            unsafe { std::env::set_var(key, val) };
        } else {
            unsafe { std::env::remove_var(key) };
        }
    }
}
