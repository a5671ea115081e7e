//! Per-row triggers of the product table.

use crate::render::ActionKind;

/// Prompt shown before a product is deleted.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this product?";

/// Blocking yes/no question put to the user.
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

/// A trigger bound to the identifier of the row it was rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowAction {
    pub kind: ActionKind,
    pub id: i64,
}

impl RowAction {
    pub fn new(kind: ActionKind, id: i64) -> Self {
        Self { kind, id }
    }

    /// Rebuild an action from a button's `data-action` and `data-id` values.
    pub fn from_trigger(action: &str, id: &str) -> Option<Self> {
        let kind = ActionKind::from_str(action.trim())?;
        let id = id.trim().parse().ok()?;
        Some(Self::new(kind, id))
    }
}
