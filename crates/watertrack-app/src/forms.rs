//! Add-Product and Fill-Stock form drafts.
//!
//! Drafts are local, uncommitted input. Submitting a form hands the draft to
//! the submission sink and resets it; nothing here ever touches the snapshot's
//! products or filling history.

use std::fmt;

use serde::{Deserialize, Serialize};
use watertrack_core::Product;

/// Uncommitted Add-Product form input.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProductDraft {
    pub name: String,
    pub initial_stock: f64,
}

impl fmt::Display for NewProductDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ name: {:?}, initialStock: {} }}",
            self.name, self.initial_stock
        )
    }
}

/// Uncommitted Fill-Stock form input. `product_id` is empty or the string
/// form of a [`Product::id`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillStockDraft {
    pub product_id: String,
    pub quantity: f64,
}

impl fmt::Display for FillStockDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ productId: {:?}, quantity: {} }}",
            self.product_id, self.quantity
        )
    }
}

/// Which of the two forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    NewProduct,
    FillStock,
}

/// Focusable form fields, in focus-ring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    ProductName,
    InitialStock,
    FillProduct,
    FillQuantity,
}

impl FormField {
    const RING: [FormField; 4] = [
        FormField::ProductName,
        FormField::InitialStock,
        FormField::FillProduct,
        FormField::FillQuantity,
    ];

    fn index(self) -> usize {
        Self::RING.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::RING[(self.index() + 1) % Self::RING.len()]
    }

    pub fn prev(self) -> Self {
        Self::RING[(self.index() + Self::RING.len() - 1) % Self::RING.len()]
    }

    /// The form this field belongs to.
    pub fn form(self) -> FormKind {
        match self {
            FormField::ProductName | FormField::InitialStock => FormKind::NewProduct,
            FormField::FillProduct | FormField::FillQuantity => FormKind::FillStock,
        }
    }
}

/// Coerce raw numeric-field text to a number.
///
/// Empty (after trimming) and unparseable text become `0.0`, as do parse
/// results that are not finite.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Both drafts plus the raw text buffers and focus used while editing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub new_product: NewProductDraft,
    pub fill_stock: FillStockDraft,
    /// Raw text behind `new_product.initial_stock`
    pub initial_stock_input: String,
    /// Raw text behind `fill_stock.quantity`
    pub quantity_input: String,
    pub focus: FormField,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text currently shown for a field.
    pub fn field_text(&self, field: FormField) -> &str {
        match field {
            FormField::ProductName => &self.new_product.name,
            FormField::InitialStock => &self.initial_stock_input,
            FormField::FillProduct => &self.fill_stock.product_id,
            FormField::FillQuantity => &self.quantity_input,
        }
    }

    /// Replace a field's text wholesale, re-coercing numeric fields.
    pub fn set_field(&mut self, field: FormField, text: impl Into<String>) {
        let text = text.into();
        match field {
            FormField::ProductName => self.new_product.name = text,
            FormField::InitialStock => {
                self.new_product.initial_stock = coerce_number(&text);
                self.initial_stock_input = text;
            }
            FormField::FillProduct => self.fill_stock.product_id = text,
            FormField::FillQuantity => {
                self.fill_stock.quantity = coerce_number(&text);
                self.quantity_input = text;
            }
        }
    }

    /// Append a character to the focused text field. The product selector
    /// does not take free text.
    pub fn push_char(&mut self, c: char) {
        if self.focus == FormField::FillProduct {
            return;
        }
        let mut text = self.field_text(self.focus).to_string();
        text.push(c);
        self.set_field(self.focus, text);
    }

    pub fn backspace(&mut self) {
        if self.focus == FormField::FillProduct {
            return;
        }
        let mut text = self.field_text(self.focus).to_string();
        text.pop();
        self.set_field(self.focus, text);
    }

    /// Clear the focused field (the selector goes back to "Select a product").
    pub fn clear_focused(&mut self) {
        self.set_field(self.focus, String::new());
    }

    /// Step the product selector through `""` and each product id.
    pub fn cycle_product(&mut self, products: &[Product], forward: bool) {
        let options: Vec<String> = std::iter::once(String::new())
            .chain(products.iter().map(|p| p.id.to_string()))
            .collect();
        let current = options
            .iter()
            .position(|o| *o == self.fill_stock.product_id)
            .unwrap_or(0);
        let len = options.len();
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.fill_stock.product_id = options[next].clone();
    }

    /// Take the Add-Product draft, leaving an empty one behind.
    pub fn take_new_product(&mut self) -> NewProductDraft {
        self.initial_stock_input.clear();
        std::mem::take(&mut self.new_product)
    }

    /// Take the Fill-Stock draft, leaving an empty one behind.
    pub fn take_fill_stock(&mut self) -> FillStockDraft {
        self.quantity_input.clear();
        std::mem::take(&mut self.fill_stock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products() -> Vec<Product> {
        watertrack_core::MockDataSource::new().generate().products
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("   "), 0.0);
        assert_eq!(coerce_number("50"), 50.0);
        assert_eq!(coerce_number(" 12.5 "), 12.5);
        assert_eq!(coerce_number("-3"), -3.0);
        assert_eq!(coerce_number("abc"), 0.0);
        assert_eq!(coerce_number("5x"), 0.0);
        assert_eq!(coerce_number("inf"), 0.0);
        assert_eq!(coerce_number("NaN"), 0.0);
    }

    #[test]
    fn test_focus_ring_wraps() {
        assert_eq!(FormField::FillQuantity.next(), FormField::ProductName);
        assert_eq!(FormField::ProductName.prev(), FormField::FillQuantity);
        assert_eq!(FormField::InitialStock.form(), FormKind::NewProduct);
        assert_eq!(FormField::FillProduct.form(), FormKind::FillStock);
    }

    #[test]
    fn test_typing_into_numeric_field_coerces() {
        let mut forms = FormState::new();
        forms.focus = FormField::InitialStock;
        forms.push_char('5');
        forms.push_char('0');
        assert_eq!(forms.initial_stock_input, "50");
        assert_eq!(forms.new_product.initial_stock, 50.0);

        forms.push_char('x');
        assert_eq!(forms.initial_stock_input, "50x");
        assert_eq!(forms.new_product.initial_stock, 0.0);

        forms.backspace();
        assert_eq!(forms.new_product.initial_stock, 50.0);
    }

    #[test]
    fn test_selector_ignores_free_text() {
        let mut forms = FormState::new();
        forms.focus = FormField::FillProduct;
        forms.push_char('9');
        assert_eq!(forms.fill_stock.product_id, "");
    }

    #[test]
    fn test_cycle_product_walks_options() {
        let products = products();
        let mut forms = FormState::new();
        forms.cycle_product(&products, true);
        assert_eq!(forms.fill_stock.product_id, "1");
        forms.cycle_product(&products, true);
        forms.cycle_product(&products, true);
        assert_eq!(forms.fill_stock.product_id, "3");
        forms.cycle_product(&products, true);
        assert_eq!(forms.fill_stock.product_id, "");
        forms.cycle_product(&products, false);
        assert_eq!(forms.fill_stock.product_id, "3");
    }

    #[test]
    fn test_take_resets_draft_and_buffer() {
        let mut forms = FormState::new();
        forms.set_field(FormField::ProductName, "Test");
        forms.set_field(FormField::InitialStock, "50");

        let draft = forms.take_new_product();
        assert_eq!(
            draft,
            NewProductDraft {
                name: "Test".to_string(),
                initial_stock: 50.0
            }
        );
        assert_eq!(forms.new_product, NewProductDraft::default());
        assert!(forms.initial_stock_input.is_empty());
    }

    #[test]
    fn test_draft_display_matches_log_format() {
        let draft = FillStockDraft {
            product_id: "2".to_string(),
            quantity: 10.0,
        };
        assert_eq!(draft.to_string(), r#"{ productId: "2", quantity: 10 }"#);
    }

    #[test]
    fn test_draft_serializes_camel_case() {
        let draft = NewProductDraft {
            name: "Test".to_string(),
            initial_stock: 50.0,
        };
        let json = serde_json::to_string(&draft).unwrap();
        insta::assert_snapshot!(json, @r#"{"name":"Test","initialStock":50.0}"#);
    }
}
