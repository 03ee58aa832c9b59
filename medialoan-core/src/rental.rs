use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::content::ContentItem;

/// Snapshot of one borrow attempt: which item, who, and when.
///
/// A record is created for every borrow attempt and handed to the
/// customer's rental list; the catalog does not keep a copy or mutate it
/// afterwards. The `returned` flag belongs to whoever owns the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rental {
    pub content_id: u32,
    pub content_title: String,
    pub customer_name: String,
    pub borrowed_on: NaiveDate,
    pub returned: bool,
}

impl Rental {
    pub fn new(item: &ContentItem, customer_name: impl Into<String>, borrowed_on: NaiveDate) -> Self {
        Self {
            content_id: item.id(),
            content_title: item.title.clone(),
            customer_name: customer_name.into(),
            borrowed_on,
            returned: false,
        }
    }
}
