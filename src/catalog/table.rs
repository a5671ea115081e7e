//! Rendered product table with a refresh generation counter.

use crate::models::Product;
use crate::render::render_rows;

/// Ticket handed out when a refresh starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket(u64);

/// Last applied list response and its markup.
#[derive(Debug, Default)]
pub struct ProductTable {
    products: Vec<Product>,
    html: String,
    generation: u64,
}

impl ProductTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a refresh. Any ticket issued earlier becomes stale.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.generation += 1;
        RefreshTicket(self.generation)
    }

    /// Replace the table contents if `ticket` is still the latest one.
    ///
    /// Returns false and leaves the table untouched for a stale ticket.
    pub fn apply(&mut self, ticket: RefreshTicket, products: Vec<Product>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.html = render_rows(&products);
        self.products = products;
        true
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}
