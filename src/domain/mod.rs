//! Domain records - the concrete collection kinds the dashboard stores.

mod customer;
mod notification;
mod sale;
mod settings;

pub use customer::{Customer, CustomerStatus, CUSTOMER_SEED_COUNT};
pub use notification::{
    mark_all_read, mark_read, time_ago, unread_count, Notification, NotificationKind,
};
pub use sale::{
    invoice_id, set_sale_status, status_totals, LineItem, Sale, SaleStatus, StatusTotals,
    SALE_SEED_COUNT, TAX_RATE,
};
pub use settings::{
    validate_avatar, AvatarError, NotificationPrefs, Preferences, Profile, UserSettings,
    AVATAR_MAX_BYTES,
};

use crate::query::{filter_limited, Query, GLOBAL_SEARCH_LIMIT};

/// Results of the global search modal: the top matches per collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    pub customers: Vec<Customer>,
    pub sales: Vec<Sale>,
}

impl SearchResults {
    /// True when neither collection matched.
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty() && self.sales.is_empty()
    }
}

/// Search customers and sales at once with the global-search policy:
/// queries shorter than two characters return nothing, and each
/// collection contributes at most [`GLOBAL_SEARCH_LIMIT`] matches.
pub fn global_search(customers: &[Customer], sales: &[Sale], text: &str) -> SearchResults {
    let query = Query::global().with_text(text);

    SearchResults {
        customers: filter_limited(customers, &query, GLOBAL_SEARCH_LIMIT)
            .into_iter()
            .cloned()
            .collect(),
        sales: filter_limited(sales, &query, GLOBAL_SEARCH_LIMIT)
            .into_iter()
            .cloned()
            .collect(),
    }
}
