use std::collections::BTreeSet;
use std::path::Path;

use chrono::{Local, NaiveDate};
use medialoan_core::{ContentItem, Customer, Rental};

use crate::error::CatalogError;
use crate::loader::{self, ParsedCatalog};

/// Outcome of a borrow attempt on an item that exists in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BorrowOutcome {
    /// The item was available and is now checked out.
    Borrowed,
    /// The item is already checked out; nothing changed.
    Unavailable,
}

/// Outcome of a return attempt on an item that exists in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnOutcome {
    /// The item was checked out and is available again.
    Returned { on: NaiveDate },
    /// The item was never checked out; nothing changed.
    AlreadyAvailable,
}

/// The in-memory inventory and its derived category set.
///
/// Built once from a catalog file and then queried and mutated for the
/// rest of the process. All mutation goes through [`borrow_content`]
/// and [`process_return`]; nothing is ever removed from the inventory,
/// and mutations are never written back to the source file.
///
/// [`borrow_content`]: CatalogManager::borrow_content
/// [`process_return`]: CatalogManager::process_return
#[derive(Debug)]
pub struct CatalogManager {
    inventory: Vec<ContentItem>,
    categories: BTreeSet<String>,
}

impl CatalogManager {
    /// Load the catalog from a file. Any parse failure aborts the load;
    /// a manager is never constructed over a partial inventory.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        Ok(Self::from_parsed(loader::load_catalog_file(path)?))
    }

    /// Build a manager from an in-memory catalog source.
    pub fn from_reader<R: std::io::BufRead>(reader: R) -> Result<Self, CatalogError> {
        Ok(Self::from_parsed(loader::parse_catalog(reader)?))
    }

    fn from_parsed(parsed: ParsedCatalog) -> Self {
        Self {
            inventory: parsed.items,
            categories: parsed.categories,
        }
    }

    /// The full inventory, in source-file order.
    pub fn inventory(&self) -> &[ContentItem] {
        &self.inventory
    }

    pub fn len(&self) -> usize {
        self.inventory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inventory.is_empty()
    }

    /// Distinct genre tags across all items, whitespace-trimmed,
    /// case preserved from the source text.
    pub fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    /// Find an item by id. A miss is a normal outcome, not an error.
    pub fn content_by_id(&self, id: u32) -> Option<&ContentItem> {
        self.inventory.iter().find(|item| item.id() == id)
    }

    /// Case-insensitive exact title match; first hit in catalog order.
    pub fn search_by_title(&self, title: &str) -> Option<&ContentItem> {
        self.inventory
            .iter()
            .find(|item| item.title.eq_ignore_ascii_case(title))
    }

    /// Every item tagged with the genre (case-insensitively), in
    /// catalog order. Empty when nothing matches.
    pub fn search_by_genre(&self, genre: &str) -> Vec<&ContentItem> {
        self.inventory
            .iter()
            .filter(|item| item.has_genre(genre))
            .collect()
    }

    /// Attempt to borrow an item for a customer.
    ///
    /// Unknown ids are an error. Otherwise the item is checked out if it
    /// was available, and a [`Rental`] dated today is appended to the
    /// customer's list **regardless of outcome** — failed attempts are
    /// kept as part of the customer's rental trail.
    pub fn borrow_content(
        &mut self,
        id: u32,
        customer: &mut dyn Customer,
    ) -> Result<BorrowOutcome, CatalogError> {
        let item = self
            .inventory
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or(CatalogError::ContentNotFound(id))?;

        let outcome = if item.check_out() {
            log::info!("{} borrowed \"{}\" (id {id})", customer.name(), item.title);
            BorrowOutcome::Borrowed
        } else {
            log::info!(
                "{} could not borrow \"{}\" (id {id}): not available",
                customer.name(),
                item.title
            );
            BorrowOutcome::Unavailable
        };

        let rental = Rental::new(item, customer.name(), Local::now().date_naive());
        customer.add_rental(rental);

        Ok(outcome)
    }

    /// Attempt to return an item from a customer.
    ///
    /// Unknown ids are an error. If the item is checked out it becomes
    /// available again and is appended to the customer's history; if it
    /// was never checked out, nothing changes.
    pub fn process_return(
        &mut self,
        id: u32,
        customer: &mut dyn Customer,
    ) -> Result<ReturnOutcome, CatalogError> {
        let item = self
            .inventory
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or(CatalogError::ContentNotFound(id))?;

        if item.check_in() {
            log::info!("{} returned \"{}\" (id {id})", customer.name(), item.title);
            customer.add_to_history(item);
            Ok(ReturnOutcome::Returned {
                on: Local::now().date_naive(),
            })
        } else {
            log::info!(
                "return of \"{}\" (id {id}) by {} failed: not checked out",
                item.title,
                customer.name()
            );
            Ok(ReturnOutcome::AlreadyAvailable)
        }
    }
}
