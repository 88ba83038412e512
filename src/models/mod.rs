mod budget;
mod cart;
mod catalog_item;

pub use budget::{evaluate, BudgetPolicy, BudgetStatus, DerivedTotals, PlanInputs};
pub use cart::{Cart, CartEntry};
pub use catalog_item::{CatalogItem, WireItem};

#[cfg(test)]
mod tests;
