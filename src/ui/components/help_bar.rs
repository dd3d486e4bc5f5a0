//! Footer line with the key hints for whatever has focus.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::events::{get_context_hints, KeyContext};
use crate::ui::theme::theme;

pub fn render_context_help(frame: &mut Frame, area: Rect, context: KeyContext) {
    let line = Line::from(hint_spans(get_context_hints(context)));
    frame.render_widget(Paragraph::new(line), area);
}

/// Split "[key] label  [key] label" into spans with the bracketed keys in
/// the accent color. An unclosed bracket is treated as plain text.
fn hint_spans(hints: &str) -> Vec<Span<'static>> {
    let t = theme();
    let label = Style::default().fg(t.muted);
    let key = Style::default().fg(t.accent);

    let mut spans = Vec::new();
    let mut rest = hints;
    while let Some(open) = rest.find('[') {
        let Some(close) = rest[open..].find(']').map(|i| open + i) else {
            break;
        };
        if open > 0 {
            spans.push(Span::styled(rest[..open].to_string(), label));
        }
        spans.push(Span::styled(rest[open..=close].to_string(), key));
        rest = &rest[close + 1..];
    }
    if !rest.is_empty() {
        spans.push(Span::styled(rest.to_string(), label));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(hints: &str) -> Vec<String> {
        hint_spans(hints)
            .into_iter()
            .map(|span| span.content.into_owned())
            .collect()
    }

    #[test]
    fn test_keys_and_labels_alternate() {
        assert_eq!(
            contents("[s] sort  [Space] select"),
            ["[s]", " sort  ", "[Space]", " select"]
        );
    }

    #[test]
    fn test_key_styled_with_accent() {
        let spans = hint_spans("[?] help");
        assert_eq!(spans[0].style.fg, Some(theme().accent));
        assert_eq!(spans[1].style.fg, Some(theme().muted));
    }

    #[test]
    fn test_unclosed_bracket_is_plain_text() {
        assert_eq!(contents("[Tab] next  [oops"), ["[Tab]", " next  [oops"]);
    }

    #[test]
    fn test_empty_and_plain() {
        assert!(hint_spans("").is_empty());
        assert_eq!(contents("just text"), ["just text"]);
    }
}
