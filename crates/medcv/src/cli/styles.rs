//! Styles for the medcv terminal client.
//!
//! Templates never name colors. They pipe text through the `style` filter with a semantic name
//! (`{{ entry.heading | style("heading") }}`) and this module decides what that name looks like.
//! Changing the look of the client means editing the table below, not the templates.
//!
//! Style names come in two layers:
//!
//! 1. Message levels (`info`, `success`, `warning`, `error`), matching
//!    [`MessageLevel`](medcvapp::commands::MessageLevel) so messages can be styled by level.
//! 2. Semantic names for resume content (`title`, `section`, `heading`, `period`, ...).
//!
//! A name missing from the table is rendered with [`MISSING_STYLE_INDICATOR`] in front of the
//! text, so a typo in a template shows up in the output instead of silently losing its style.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const REGULAR: &str = "regular";
    pub const MUTED: &str = "muted";
    pub const FAINT: &str = "faint";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
    pub const TITLE: &str = "title";
    pub const SECTION: &str = "section";
    pub const HEADING: &str = "heading";
    pub const PERIOD: &str = "period";
    pub const KIND: &str = "kind";
    pub const ID: &str = "id";
    pub const FIELD: &str = "field";
    pub const PROMPT: &str = "prompt";
}

pub static STYLES: Lazy<HashMap<&'static str, Style>> = Lazy::new(|| {
    use names::*;

    let muted = Style::new().color256(245);
    HashMap::from([
        (REGULAR, Style::new()),
        (MUTED, muted.clone()),
        (FAINT, Style::new().color256(240)),
        (INFO, muted),
        (SUCCESS, Style::new().green()),
        (WARNING, Style::new().yellow()),
        (ERROR, Style::new().red().bold()),
        (TITLE, Style::new().bold()),
        (SECTION, Style::new().cyan().bold()),
        (HEADING, Style::new().bold()),
        (PERIOD, Style::new().color256(245).italic()),
        (KIND, Style::new().cyan()),
        (ID, Style::new().color256(240)),
        (FIELD, Style::new().yellow()),
        (PROMPT, Style::new().cyan().bold()),
    ])
});

/// Applies the named style to `text`. Without color the text is returned as is, but an unknown
/// name is still flagged.
pub fn apply(name: &str, text: &str, use_color: bool) -> String {
    match STYLES.get(name) {
        Some(style) if use_color => style.clone().force_styling(true).apply_to(text).to_string(),
        Some(_) => text.to_string(),
        None => format!("{}{}", MISSING_STYLE_INDICATOR, text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output_keeps_text() {
        assert_eq!(apply(names::HEADING, "MBBS", false), "MBBS");
    }

    #[test]
    fn colored_output_wraps_in_escapes() {
        let styled = apply(names::ERROR, "boom", true);
        assert!(styled.contains("boom"));
        assert!(styled.starts_with("\u{1b}["));
    }

    #[test]
    fn unknown_style_is_flagged() {
        assert_eq!(apply("headng", "MBBS", false), "(!?)MBBS");
    }
}
