//! Product edit form state.
//!
//! Holds the text of the seven form fields, the identifier of the product
//! being edited (if any) and whether the modal is showing. No I/O happens
//! here; see `catalog` for the request side.

use crate::models::{format_price, Product};

/// Visibility of the edit modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// Raw text of every form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub price: String,
    pub discount_price: String,
    pub category: String,
    pub status: String,
    pub description: String,
    pub image_url: String,
}

impl FormFields {
    /// Field values for an existing record.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: format_price(product.price),
            discount_price: format_price(product.discount_price),
            category: product.category.clone(),
            status: product.status.clone(),
            description: product.description.clone(),
            image_url: product.image_url.clone(),
        }
    }

    /// Read the fields into a record without identifier.
    ///
    /// Prices are parsed like a browser's `parseFloat`; garbage becomes NaN
    /// and is passed on unchanged.
    pub fn to_product(&self) -> Product {
        Product {
            id: None,
            name: self.name.clone(),
            price: parse_float(&self.price),
            discount_price: parse_float(&self.discount_price),
            category: self.category.clone(),
            status: self.status.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

/// Which request a submit turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitTarget {
    Create,
    Update(i64),
}

/// Marks one opening of the form. Any later open or close makes it stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormTicket(u64);

/// State of the add/edit modal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub fields: FormFields,
    editing_id: Option<i64>,
    modal: ModalState,
    generation: u64,
}

impl ProductForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget any tracked product, blank every field and show the modal.
    pub fn open_for_create(&mut self) {
        self.generation += 1;
        self.editing_id = None;
        self.fields = FormFields::default();
        self.modal = ModalState::Open;
    }

    /// Start opening the form on a record that is still being fetched.
    ///
    /// Tickets handed out before this one become stale.
    pub fn begin_open(&mut self) -> FormTicket {
        self.generation += 1;
        FormTicket(self.generation)
    }

    /// Track `id`, fill the fields from `product` and show the modal.
    ///
    /// Returns false and changes nothing if the form was opened, closed or
    /// reopened since `ticket` was taken.
    pub fn open_for_edit(&mut self, ticket: FormTicket, id: i64, product: &Product) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.generation += 1;
        self.editing_id = Some(id);
        self.fields = FormFields::from_product(product);
        self.modal = ModalState::Open;
        true
    }

    /// Ticket for the form as it is now, taken when a submit starts.
    pub fn ticket(&self) -> FormTicket {
        FormTicket(self.generation)
    }

    /// Hide the modal. The tracked identifier and field text stay as they are.
    pub fn close(&mut self) {
        self.generation += 1;
        self.modal = ModalState::Closed;
    }

    /// Hide the modal only if it has not been opened or closed since `ticket`.
    pub fn close_if_current(&mut self, ticket: FormTicket) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.close();
        true
    }

    pub fn is_open(&self) -> bool {
        self.modal == ModalState::Open
    }

    pub fn editing_id(&self) -> Option<i64> {
        self.editing_id
    }

    pub fn target(&self) -> SubmitTarget {
        match self.editing_id {
            Some(id) => SubmitTarget::Update(id),
            None => SubmitTarget::Create,
        }
    }

    pub fn to_product(&self) -> Product {
        self.fields.to_product()
    }
}

/// Parse the longest numeric prefix of `input`, skipping leading whitespace.
///
/// Mirrors the browser's `parseFloat`: `"12abc"` is 12, `"Infinity"` is
/// infinite, and anything without a leading number is NaN.
pub fn parse_float(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < len && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return f64::NAN;
    }

    if end < len && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < len && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mug() -> Product {
        Product {
            id: Some(5),
            name: "Mug".to_string(),
            price: 9.99,
            discount_price: 7.99,
            category: "Home".to_string(),
            status: "ACTIVE".to_string(),
            description: "d".to_string(),
            image_url: "u".to_string(),
        }
    }

    #[test]
    fn test_open_for_edit_populates_fields() {
        let mut form = ProductForm::new();
        let ticket = form.begin_open();
        assert!(form.open_for_edit(ticket, 5, &mug()));

        assert!(form.is_open());
        assert_eq!(form.editing_id(), Some(5));
        assert_eq!(form.target(), SubmitTarget::Update(5));
        assert_eq!(form.fields.name, "Mug");
        assert_eq!(form.fields.price, "9.99");
        assert_eq!(form.fields.discount_price, "7.99");
        assert_eq!(form.fields.category, "Home");
        assert_eq!(form.fields.status, "ACTIVE");
        assert_eq!(form.fields.description, "d");
        assert_eq!(form.fields.image_url, "u");
    }

    #[test]
    fn test_open_for_create_resets_everything() {
        let mut form = ProductForm::new();
        let ticket = form.begin_open();
        form.open_for_edit(ticket, 5, &mug());
        form.close();
        form.open_for_create();

        assert!(form.is_open());
        assert_eq!(form.editing_id(), None);
        assert_eq!(form.target(), SubmitTarget::Create);
        assert_eq!(form.fields, FormFields::default());
    }

    #[test]
    fn test_close_keeps_tracked_id() {
        let mut form = ProductForm::new();
        assert!(!form.is_open());

        let ticket = form.begin_open();
        form.open_for_edit(ticket, 8, &mug());
        form.close();

        assert!(!form.is_open());
        assert_eq!(form.editing_id(), Some(8));
    }

    #[test]
    fn test_late_record_does_not_replace_new_form() {
        let mut form = ProductForm::new();
        let ticket = form.begin_open();
        form.open_for_create();
        form.fields.name = "New thing".to_string();

        assert!(!form.open_for_edit(ticket, 5, &mug()));
        assert_eq!(form.editing_id(), None);
        assert_eq!(form.target(), SubmitTarget::Create);
        assert_eq!(form.fields.name, "New thing");
    }

    #[test]
    fn test_latest_open_wins() {
        let mut form = ProductForm::new();
        let first = form.begin_open();
        let second = form.begin_open();

        assert!(form.open_for_edit(second, 8, &mug()));
        assert!(!form.open_for_edit(first, 5, &mug()));
        assert_eq!(form.editing_id(), Some(8));
    }

    #[test]
    fn test_close_if_current_skips_reopened_form() {
        let mut form = ProductForm::new();
        form.open_for_create();
        let ticket = form.ticket();
        form.open_for_create();

        assert!(!form.close_if_current(ticket));
        assert!(form.is_open());

        let ticket = form.ticket();
        assert!(form.close_if_current(ticket));
        assert!(!form.is_open());
    }

    #[test]
    fn test_fields_round_trip_into_product() {
        let fields = FormFields::from_product(&mug());
        let product = fields.to_product();

        assert_eq!(product, Product { id: None, ..mug() });
    }

    #[test]
    fn test_parse_float_prefixes() {
        assert_eq!(parse_float("12.5"), 12.5);
        assert_eq!(parse_float("  42abc"), 42.0);
        assert_eq!(parse_float("-3"), -3.0);
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("5."), 5.0);
        assert_eq!(parse_float("1e3"), 1000.0);
        assert_eq!(parse_float("2e"), 2.0);
        assert_eq!(parse_float("7.25E-2x"), 0.0725);
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_float("-Infinityx"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_parse_float_garbage_is_nan() {
        assert!(parse_float("").is_nan());
        assert!(parse_float("abc").is_nan());
        assert!(parse_float(".").is_nan());
        assert!(parse_float("-").is_nan());
        assert!(parse_float("$10").is_nan());
    }
}
