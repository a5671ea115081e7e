//! Catalog page controller.
//!
//! Ties user actions (search, add, view/edit, delete, submit) to requests
//! against the product endpoint and keeps the table and form state current.
//! Failures are logged and returned; nothing is shown to the user and
//! nothing is retried.

mod actions;
mod table;

pub use actions::*;
pub use table::*;

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::api::ProductClient;
use crate::errors::ClientError;
use crate::form::{FormFields, ProductForm, SubmitTarget};
use crate::models::Product;
use crate::render::ActionKind;
use crate::search::SearchFilters;

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined; no request was sent
    Cancelled,
    Deleted,
}

/// Page state shared by every action.
///
/// Locks are only held between awaits, so several requests can be in
/// flight against the same catalog at once.
#[derive(Debug)]
pub struct Catalog {
    client: ProductClient,
    table: Mutex<ProductTable>,
    form: Mutex<ProductForm>,
}

impl Catalog {
    pub fn new(client: ProductClient) -> Self {
        Self {
            client,
            table: Mutex::new(ProductTable::new()),
            form: Mutex::new(ProductForm::new()),
        }
    }

    fn lock_table(&self) -> MutexGuard<'_, ProductTable> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_form(&self) -> MutexGuard<'_, ProductForm> {
        self.form.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Products of the last applied list response.
    pub fn products(&self) -> Vec<Product> {
        self.lock_table().products().to_vec()
    }

    /// Current table body markup.
    pub fn table_html(&self) -> String {
        self.lock_table().html().to_string()
    }

    /// Snapshot of the edit form.
    pub fn form(&self) -> ProductForm {
        self.lock_form().clone()
    }

    /// Re-fetch the list with an encoded query (empty for no filters).
    ///
    /// Returns `Ok(false)` when a newer refresh started while this one was in
    /// flight; the response is then dropped. On error the table keeps its
    /// previous rows.
    pub async fn refresh(&self, query: &str) -> Result<bool, ClientError> {
        let ticket = self.lock_table().begin_refresh();

        let products = match self.client.list(query).await {
            Ok(products) => products,
            Err(e) => {
                tracing::error!(error = %e, query, "Error fetching products");
                return Err(e);
            }
        };

        let count = products.len();
        let applied = self.lock_table().apply(ticket, products);
        if applied {
            tracing::debug!(query, count, "Rendered product list");
        } else {
            tracing::debug!(query, "Discarding stale product list");
        }
        Ok(applied)
    }

    /// Refresh the list with the given filters.
    pub async fn search(&self, filters: &SearchFilters) -> Result<bool, ClientError> {
        let query = match filters.to_query_string() {
            Ok(query) => query,
            Err(e) => {
                tracing::error!(error = %e, "Error fetching products");
                return Err(e);
            }
        };
        self.refresh(&query).await
    }

    /// Blank the form, stop tracking any product and open the modal.
    pub fn open_for_create(&self) {
        self.lock_form().open_for_create();
    }

    /// Fetch a product and open the modal on it.
    ///
    /// View and edit both land here. On failure the modal is left as it was.
    /// Returns `Ok(false)` when the form was opened or closed again while the
    /// record was in flight; the record is then dropped.
    pub async fn open_product(&self, id: i64) -> Result<bool, ClientError> {
        let ticket = self.lock_form().begin_open();

        let product = match self.client.get(id).await {
            Ok(product) => product,
            Err(e) => {
                tracing::error!(error = %e, id, "Error fetching product");
                return Err(e);
            }
        };

        let applied = self.lock_form().open_for_edit(ticket, id, &product);
        if !applied {
            tracing::debug!(id, "Discarding stale product record");
        }
        Ok(applied)
    }

    /// Apply user edits to the form fields.
    pub fn update_form(&self, edit: impl FnOnce(&mut FormFields)) {
        edit(&mut self.lock_form().fields);
    }

    /// Dismiss the modal without submitting.
    pub fn close_form(&self) {
        self.lock_form().close();
    }

    /// Send the form as a create or an update, depending on whether a product
    /// is tracked.
    ///
    /// On success the modal closes and the list is re-fetched without
    /// filters. On failure the modal stays open with the entered text. A form
    /// opened or closed while the save was in flight is left alone.
    pub async fn submit(&self) -> Result<Product, ClientError> {
        let (ticket, target, product) = {
            let form = self.lock_form();
            (form.ticket(), form.target(), form.to_product())
        };

        let saved = match target {
            SubmitTarget::Create => self.client.create(&product).await.map_err(|e| {
                tracing::error!(error = %e, "Error adding product");
                e
            })?,
            SubmitTarget::Update(id) => self.client.update(id, &product).await.map_err(|e| {
                tracing::error!(error = %e, id, "Error updating product");
                e
            })?,
        };

        self.lock_form().close_if_current(ticket);
        // A failed refresh is already logged and does not undo the save.
        let _ = self.refresh("").await;

        Ok(saved)
    }

    /// Delete a product after the user confirms.
    pub async fn delete(
        &self,
        id: i64,
        confirm: &impl Confirm,
    ) -> Result<DeleteOutcome, ClientError> {
        if !confirm.confirm(DELETE_PROMPT) {
            return Ok(DeleteOutcome::Cancelled);
        }

        if let Err(e) = self.client.remove(id).await {
            tracing::error!(error = %e, id, "Error deleting product");
            return Err(e);
        }

        let _ = self.refresh("").await;
        Ok(DeleteOutcome::Deleted)
    }

    /// Route a row trigger to its handler.
    pub async fn dispatch(
        &self,
        action: RowAction,
        confirm: &impl Confirm,
    ) -> Result<(), ClientError> {
        match action.kind {
            ActionKind::View | ActionKind::Edit => {
                self.open_product(action.id).await.map(|_| ())
            }
            ActionKind::Delete => self.delete(action.id, confirm).await.map(|_| ()),
        }
    }
}
