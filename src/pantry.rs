//! The user's working list of ingredients for one session.

use log::debug;
use serde::Serialize;

use crate::error::InputError;

/// One pantry entry. `amount` never drops below 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PantryItem {
    pub name: String,
    pub amount: u32,
}

/// Outcome of a pantry operation, for the UI to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PantryNotice {
    Added { name: String, amount: u32 },
    Merged { name: String, amount: u32 },
    Updated { name: String, amount: u32 },
    Removed { name: String },
    /// Decrement refused, the amount is already 1
    FloorReached { name: String },
    NotFound { name: String },
    Rejected(InputError),
}

impl PantryNotice {
    /// True for advisories that left the pantry unchanged
    pub fn is_advisory(&self) -> bool {
        matches!(
            self,
            PantryNotice::FloorReached { .. }
                | PantryNotice::NotFound { .. }
                | PantryNotice::Rejected(_)
        )
    }
}

/// Insertion-ordered ingredient list, unique by case-folded name
#[derive(Debug, Default, Clone)]
pub struct Pantry {
    items: Vec<PantryItem>,
}

/// Key used to compare ingredient names
fn fold(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Display form: first letter upper-case, the rest lower-case
pub fn display_name(name: &str) -> String {
    let lowered = fold(name);
    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl Pantry {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        let key = fold(name);
        self.items.iter().position(|item| fold(&item.name) == key)
    }

    /// Add `amount` of an ingredient, merging with an existing entry of the
    /// same name regardless of case and surrounding whitespace.
    pub fn add(&mut self, raw_name: &str, amount: u32) -> PantryNotice {
        if raw_name.trim().is_empty() {
            return PantryNotice::Rejected(InputError::EmptyName);
        }
        if amount == 0 {
            return PantryNotice::Rejected(InputError::ZeroAmount);
        }

        match self.position(raw_name) {
            Some(idx) => {
                let item = &mut self.items[idx];
                item.amount = item.amount.saturating_add(amount);
                debug!("Merged {} into {} ({})", amount, item.name, item.amount);
                PantryNotice::Merged {
                    name: item.name.clone(),
                    amount: item.amount,
                }
            }
            None => {
                let name = display_name(raw_name);
                debug!("Added {} ({})", name, amount);
                self.items.push(PantryItem {
                    name: name.clone(),
                    amount,
                });
                PantryNotice::Added { name, amount }
            }
        }
    }

    pub fn increment(&mut self, name: &str) -> PantryNotice {
        match self.position(name) {
            Some(idx) => {
                let item = &mut self.items[idx];
                item.amount = item.amount.saturating_add(1);
                PantryNotice::Updated {
                    name: item.name.clone(),
                    amount: item.amount,
                }
            }
            None => PantryNotice::NotFound {
                name: name.trim().to_string(),
            },
        }
    }

    /// Decrease by one, never below 1. Use `remove` to drop an entry.
    pub fn decrement(&mut self, name: &str) -> PantryNotice {
        match self.position(name) {
            Some(idx) => {
                let item = &mut self.items[idx];
                if item.amount > 1 {
                    item.amount -= 1;
                    PantryNotice::Updated {
                        name: item.name.clone(),
                        amount: item.amount,
                    }
                } else {
                    PantryNotice::FloorReached {
                        name: item.name.clone(),
                    }
                }
            }
            None => PantryNotice::NotFound {
                name: name.trim().to_string(),
            },
        }
    }

    /// Delete an entry. Removing a missing name changes nothing.
    pub fn remove(&mut self, name: &str) -> PantryNotice {
        match self.position(name) {
            Some(idx) => {
                let item = self.items.remove(idx);
                debug!("Removed {}", item.name);
                PantryNotice::Removed { name: item.name }
            }
            None => PantryNotice::NotFound {
                name: name.trim().to_string(),
            },
        }
    }

    pub fn list(&self) -> &[PantryItem] {
        &self.items
    }

    pub fn get(&self, name: &str) -> Option<&PantryItem> {
        self.position(name).map(|idx| &self.items[idx])
    }

    /// Display names in insertion order, as sent to the search stage
    pub fn names(&self) -> Vec<String> {
        self.items.iter().map(|item| item.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
