mod export;

pub use export::{default_export_path, export_to_path, render_csv, EXPORT_FILE_NAME};

use crate::catalog::CatalogIndex;
use crate::models::{
    evaluate, BudgetPolicy, Cart, CatalogItem, DerivedTotals, PlanInputs,
};

/// A cart mutation. All three intake paths (explicit add, drop by id, field
/// edits) funnel through this one enum.
#[derive(Debug, Clone)]
pub enum CartCommand {
    /// Explicit add of a fully known item.
    Add(CatalogItem),
    /// Add by identifier alone; resolved through the catalog index.
    /// Unresolvable ids are dropped without comment.
    AddById(i64),
    /// Set an entry's quantity from raw field text.
    SetQuantity(i64, String),
    Remove(i64),
}

/// What a drag gesture is carrying. Only item ids are accepted; any other
/// payload is ignored at the drop site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragPayload {
    ItemId(i64),
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// A payload is hovering over the drop zone.
    Over,
}

/// One planning session: the cart, the last-results index, the user inputs
/// and the totals derived from them. Totals are recomputed after every
/// mutation, so callers never observe them stale.
#[derive(Debug, Default)]
pub struct Planner {
    cart: Cart,
    index: CatalogIndex,
    inputs: PlanInputs,
    policy: BudgetPolicy,
    totals: DerivedTotals,
    drag: DragState,
}

impl Planner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: BudgetPolicy) -> Self {
        let mut planner = Self {
            policy,
            ..Self::default()
        };
        planner.recompute();
        planner
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn inputs(&self) -> &PlanInputs {
        &self.inputs
    }

    pub fn totals(&self) -> &DerivedTotals {
        &self.totals
    }

    pub fn index(&self) -> &CatalogIndex {
        &self.index
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    /// Install a fresh search-result snapshot for drop resolution.
    pub fn set_results(&mut self, items: &[CatalogItem]) {
        self.index.replace(items);
    }

    /// Apply one cart mutation and recompute totals.
    pub fn apply(&mut self, command: CartCommand) {
        match command {
            CartCommand::Add(item) => self.cart.add(item),
            CartCommand::AddById(id) => {
                if let Some(item) = self.index.resolve(id) {
                    self.cart.add(item.clone());
                }
            }
            CartCommand::SetQuantity(id, raw) => self.cart.set_quantity(id, &raw),
            CartCommand::Remove(id) => self.cart.remove(id),
        }
        self.recompute();
    }

    pub fn set_days_raw(&mut self, raw: &str) {
        self.inputs.set_days_raw(raw);
        self.recompute();
    }

    pub fn set_budget_raw(&mut self, raw: &str) {
        self.inputs.set_budget_raw(raw);
        self.recompute();
    }

    // ── Drag state machine ───────────────────────────────────

    pub fn drag_enter(&mut self) {
        self.drag = DragState::Over;
    }

    pub fn drag_leave(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Complete a drag. Returns whether the payload was accepted. Either way
    /// the drag affordance resets to idle.
    pub fn drop_payload(&mut self, payload: DragPayload) -> bool {
        let was_over = self.drag == DragState::Over;
        self.drag = DragState::Idle;
        if !was_over {
            return false;
        }
        match payload {
            DragPayload::ItemId(id) => {
                let known = self.index.resolve(id).is_some();
                self.apply(CartCommand::AddById(id));
                known
            }
            DragPayload::Text(_) => false,
        }
    }

    fn recompute(&mut self) {
        self.totals = evaluate(&self.cart, &self.inputs, &self.policy);
    }
}

#[cfg(test)]
mod tests;
