//! One labelled line of a replicator form.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::app::form::FieldKind;
use crate::theme::Theme;

const LABEL_WIDTH: usize = 22;
const CURSOR: &str = "▏";

pub struct FormRow<'a> {
    pub label: &'a str,
    pub kind: FieldKind,
    pub text: &'a str,
    pub flag: bool,
    pub focused: bool,
    pub editing: bool,
    /// Status shown after the value, e.g. "not found" or a spinner.
    pub note: Option<Span<'static>>,
}

impl<'a> FormRow<'a> {
    pub fn new(label: &'a str, kind: FieldKind, text: &'a str) -> Self {
        Self {
            label,
            kind,
            text,
            flag: false,
            focused: false,
            editing: false,
            note: None,
        }
    }

    pub fn line(self) -> Line<'static> {
        let marker = if self.focused {
            Span::styled("▸ ", Style::default().fg(Theme::FOCUS_BORDER))
        } else {
            Span::raw("  ")
        };
        let label_style = if self.focused {
            Style::default()
                .fg(Theme::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::TEXT_SECONDARY)
        };

        let mut spans = vec![
            marker,
            Span::styled(format!("{:<LABEL_WIDTH$}", self.label), label_style),
            self.value_span(),
        ];
        if self.editing {
            spans.push(Span::styled(CURSOR, Style::default().fg(Theme::TEXT_ACCENT)));
        }
        if let Some(note) = self.note {
            spans.push(Span::raw("  "));
            spans.push(note);
        }
        Line::from(spans)
    }

    fn value_span(&self) -> Span<'static> {
        let muted = Style::default().fg(Theme::TEXT_MUTED);
        let value = Style::default().fg(Theme::TEXT_PRIMARY);
        match self.kind {
            FieldKind::Toggle => {
                let mark = if self.flag { "[x]" } else { "[ ]" };
                Span::styled(mark, value)
            }
            FieldKind::Choice if self.text.is_empty() => Span::styled("‹ none ›", muted),
            FieldKind::Choice => Span::styled(format!("‹ {} ›", self.text), value),
            FieldKind::Secret => Span::styled("•".repeat(self.text.chars().count()), value),
            FieldKind::Text | FieldKind::LocalDatabase
                if self.text.is_empty() && !self.editing =>
            {
                Span::styled("-", muted)
            }
            FieldKind::Text | FieldKind::LocalDatabase => {
                Span::styled(self.text.to_string(), value)
            }
        }
    }
}

pub fn note(text: impl Into<String>, color: ratatui::style::Color) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(color))
}
