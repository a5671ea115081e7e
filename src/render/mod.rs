//! Table body rendering for the product list.
//!
//! The whole body is rebuilt from scratch on every refresh. All record text
//! goes through `html_escape` before it is placed in markup.

use html_escape::{encode_double_quoted_attribute, encode_safe};

use crate::models::{format_price, Product};

/// The per-row triggers, in the order they appear in the actions cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    View,
    Edit,
    Delete,
}

impl ActionKind {
    pub const ALL: [ActionKind; 3] = [ActionKind::View, ActionKind::Edit, ActionKind::Delete];

    /// Value of the `data-action` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::View => "view",
            ActionKind::Edit => "edit",
            ActionKind::Delete => "delete",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "view" => Some(ActionKind::View),
            "edit" => Some(ActionKind::Edit),
            "delete" => Some(ActionKind::Delete),
            _ => None,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ActionKind::View => "View",
            ActionKind::Edit => "Edit",
            ActionKind::Delete => "Delete",
        }
    }

    fn button_class(&self) -> &'static str {
        match self {
            ActionKind::View => "btn btn-primary btn-sm",
            ActionKind::Edit => "btn btn-warning btn-sm",
            ActionKind::Delete => "btn btn-danger btn-sm",
        }
    }
}

/// Render one `<tr>` per product.
///
/// Columns: id, name, price, discount price, category, status, actions.
/// An empty slice renders an empty body.
pub fn render_rows(products: &[Product]) -> String {
    products.iter().map(render_row).collect()
}

/// Render a single product row, ending with a newline.
pub fn render_row(product: &Product) -> String {
    let id = product.id.map(|id| id.to_string()).unwrap_or_default();

    let cells = [
        id.clone(),
        product.name.clone(),
        format_price(product.price),
        format_price(product.discount_price),
        product.category.clone(),
        product.status.clone(),
    ];

    let mut row = String::from("<tr>");
    for cell in &cells {
        row.push_str("<td>");
        row.push_str(&encode_safe(cell));
        row.push_str("</td>");
    }

    row.push_str("<td>");
    let id_attr = encode_double_quoted_attribute(&id);
    for (i, kind) in ActionKind::ALL.iter().enumerate() {
        if i > 0 {
            row.push(' ');
        }
        row.push_str(&format!(
            r#"<button type="button" class="{}" data-action="{}" data-id="{}">{}</button>"#,
            kind.button_class(),
            kind.as_str(),
            id_attr,
            kind.label()
        ));
    }
    row.push_str("</td></tr>\n");

    row
}
