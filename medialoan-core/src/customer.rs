use serde::{Deserialize, Serialize};

use crate::content::ContentItem;
use crate::rental::Rental;

/// The customer collaborator seen by the catalog.
///
/// The catalog only ever writes toward a customer: it appends rental
/// records on borrow attempts and viewed items on returns. It never reads
/// the lists back, so implementors are free to store them however they
/// like (or discard them).
pub trait Customer {
    /// Display name, used in rental records and status output.
    fn name(&self) -> &str;

    /// Append a rental record. Called once per borrow attempt,
    /// whether or not the borrow succeeded.
    fn add_rental(&mut self, rental: Rental);

    /// Append a returned item to the viewing history.
    fn add_to_history(&mut self, item: &ContentItem);
}

/// Straightforward in-memory customer: a name plus the two lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub rentals: Vec<Rental>,
    pub history: Vec<ContentItem>,
}

impl Member {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rentals: Vec::new(),
            history: Vec::new(),
        }
    }
}

impl Customer for Member {
    fn name(&self) -> &str {
        &self.name
    }

    fn add_rental(&mut self, rental: Rental) {
        self.rentals.push(rental);
    }

    fn add_to_history(&mut self, item: &ContentItem) {
        self.history.push(item.clone());
    }
}
