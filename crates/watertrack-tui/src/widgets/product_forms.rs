//! Add New Product and Fill Stock forms.
//!
//! The forms are drawn from `FormState`; the focused field is highlighted
//! only while the user is in form input mode.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use watertrack_app::{FormField, FormKind, FormState};
use watertrack_core::Snapshot;

use crate::theme::styles;

/// Label of the empty product selector option
pub const SELECT_PRODUCT_PROMPT: &str = "Select a product";

pub struct ProductForm<'a> {
    kind: FormKind,
    forms: &'a FormState,
    snapshot: &'a Snapshot,
    editing: bool,
}

impl<'a> ProductForm<'a> {
    pub fn new(kind: FormKind, forms: &'a FormState, snapshot: &'a Snapshot) -> Self {
        Self {
            kind,
            forms,
            snapshot,
            editing: false,
        }
    }

    /// Highlight the focused field
    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }

    fn is_focused(&self, field: FormField) -> bool {
        self.editing && self.forms.focus == field
    }

    fn field_lines(&self, label: &'static str, field: FormField) -> [Line<'a>; 2] {
        let focused = self.is_focused(field);
        let text = self.forms.field_text(field);

        let value = match field {
            FormField::FillProduct => {
                let name = self
                    .snapshot
                    .product_by_id(text)
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| SELECT_PRODUCT_PROMPT.to_string());
                Span::styled(format!("\u{25c2} {} \u{25b8}", name), value_style(focused))
            }
            _ if text.is_empty() => Span::styled(placeholder(field), styles::text_muted()),
            _ => Span::styled(text.to_string(), value_style(focused)),
        };

        let cursor = if focused && field != FormField::FillProduct {
            Span::styled("\u{2581}", styles::accent())
        } else {
            Span::raw("")
        };

        [
            Line::from(Span::styled(label, styles::text_secondary())),
            Line::from(vec![Span::raw(" "), value, cursor]),
        ]
    }
}

fn value_style(focused: bool) -> ratatui::style::Style {
    if focused {
        styles::accent_bold()
    } else {
        styles::text_primary()
    }
}

fn placeholder(field: FormField) -> &'static str {
    match field {
        FormField::ProductName => "Enter product name",
        FormField::InitialStock => "Enter initial stock",
        FormField::FillQuantity => "Enter quantity",
        FormField::FillProduct => SELECT_PRODUCT_PROMPT,
    }
}

impl Widget for ProductForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (title, fields, button) = match self.kind {
            FormKind::NewProduct => (
                "Add New Product",
                [
                    ("Name", FormField::ProductName),
                    ("Initial Stock", FormField::InitialStock),
                ],
                "[ Add Product ]",
            ),
            FormKind::FillStock => (
                "Fill Stock",
                [
                    ("Product", FormField::FillProduct),
                    ("Quantity", FormField::FillQuantity),
                ],
                "[ Fill Stock ]",
            ),
        };

        let active = self.editing && self.forms.focus.form() == self.kind;

        let mut lines: Vec<Line> = Vec::new();
        for (label, field) in fields {
            lines.extend(self.field_lines(label, field));
        }
        let button_style = if active {
            styles::focused_selected()
        } else {
            styles::text_muted()
        };
        lines.push(Line::from(Span::styled(button, button_style)));

        Paragraph::new(lines)
            .block(styles::card_block(title, active))
            .render(area, buf);
    }
}
