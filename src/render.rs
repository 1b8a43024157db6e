//! Markdown rendering for assistant messages.
//!
//! Assistant replies arrive as GitHub-flavored markdown. They are rendered
//! for the terminal with termimad, wrapped to the width the layout hints
//! provide. Link targets are surfaced next to the link text, so nothing is
//! lost by not having a browser to open them in. User messages are never
//! treated as markdown.

use termimad::MadSkin;
use termimad::crossterm::style::Color;

use crate::layout::Background;

/// Renders assistant markdown for the terminal.
pub struct MarkdownRenderer {
    skin: MadSkin,
}

impl MarkdownRenderer {
    /// Creates a renderer with a skin matching the terminal background.
    pub fn new(background: Background) -> Self {
        let skin = match background {
            Background::Dark => Self::dark_skin(),
            Background::Light => Self::light_skin(),
        };
        Self { skin }
    }

    fn dark_skin() -> MadSkin {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Magenta);
        skin.bold.set_fg(Color::White);
        skin.italic.set_fg(Color::Cyan);
        skin.inline_code.set_bg(Color::DarkGrey);
        skin.code_block.set_bg(Color::DarkGrey);
        skin
    }

    fn light_skin() -> MadSkin {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::DarkMagenta);
        skin.bold.set_fg(Color::Black);
        skin.italic.set_fg(Color::DarkBlue);
        skin.inline_code.set_bg(Color::Grey);
        skin.code_block.set_bg(Color::Grey);
        skin
    }

    /// Renderer without any styling, for NO_COLOR environments. Wrapping and
    /// link handling still apply.
    pub fn plain() -> Self {
        Self {
            skin: MadSkin::no_style(),
        }
    }

    /// Renders markdown wrapped at word boundaries to the given width.
    pub fn render(&self, markdown: &str, width: usize) -> String {
        let processed = expose_link_urls(markdown);
        self.skin.text(&processed, Some(width)).to_string()
    }
}

/// Rewrites `[text](url)` as `text (url)` so link targets stay visible.
///
/// The terminal cannot open links in a new tab; showing the target inline is
/// the closest equivalent. Image syntax and reference-style links are left
/// untouched.
fn expose_link_urls(markdown: &str) -> String {
    let mut result = String::with_capacity(markdown.len() + 16);
    let mut rest = markdown;

    while let Some(open) = rest.find('[') {
        // Skip image syntax (preceded by '!')
        let is_image = rest[..open].ends_with('!');
        let Some(close) = rest[open..].find("](") else {
            break;
        };
        let close = open + close;
        let Some(end) = rest[close + 2..].find(')') else {
            break;
        };
        let end = close + 2 + end;

        let text = &rest[open + 1..close];
        let url = &rest[close + 2..end];

        result.push_str(&rest[..open]);
        if is_image || text == url {
            result.push_str(&rest[open..=end]);
        } else {
            result.push_str(text);
            result.push_str(" (");
            result.push_str(url);
            result.push(')');
        }
        rest = &rest[end + 1..];
    }

    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> MarkdownRenderer {
        MarkdownRenderer::new(Background::Dark)
    }

    #[test]
    fn test_render_plain_text_survives() {
        let out = renderer().render("Our day passes start at 299.", 80);
        assert!(out.contains("Our day passes start at 299."));
    }

    #[test]
    fn test_render_wraps_to_width() {
        let long = "word ".repeat(40);
        let out = renderer().render(&long, 30);

        for line in out.lines() {
            let visible = strip_ansi(line);
            assert!(visible.chars().count() <= 30, "line too wide: {visible:?}");
        }
    }

    #[test]
    fn test_render_list_items() {
        let out = renderer().render("- meeting rooms\n- day passes", 80);
        assert!(out.contains("meeting rooms"));
        assert!(out.contains("day passes"));
    }

    #[test]
    fn test_expose_link_urls_inline_link() {
        assert_eq!(
            expose_link_urls("See [our locations](https://alt-f.example/loc)."),
            "See our locations (https://alt-f.example/loc)."
        );
    }

    #[test]
    fn test_expose_link_urls_multiple() {
        let input = "[a](http://x) and [b](http://y)";
        assert_eq!(expose_link_urls(input), "a (http://x) and b (http://y)");
    }

    #[test]
    fn test_expose_link_urls_skips_images() {
        let input = "![logo](http://x/logo.png)";
        assert_eq!(expose_link_urls(input), input);
    }

    #[test]
    fn test_expose_link_urls_skips_redundant_target() {
        let input = "[http://x](http://x)";
        assert_eq!(expose_link_urls(input), input);
    }

    #[test]
    fn test_expose_link_urls_plain_brackets_untouched() {
        let input = "prices [subject to change] apply";
        assert_eq!(expose_link_urls(input), input);
    }

    #[test]
    fn test_render_keeps_link_url_visible() {
        let out = renderer().render("See [our locations](https://alt-f.example/loc).", 80);
        assert!(out.contains("https://alt-f.example/loc"));
    }

    fn strip_ansi(line: &str) -> String {
        let mut out = String::new();
        let mut chars = line.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for esc in chars.by_ref() {
                    if esc.is_ascii_alphabetic() {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }
}
