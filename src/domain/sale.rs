//! Sale/invoice records.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::query::Queryable;
use crate::record::{Record, Seed};

use super::customer::COMPANIES;

const PRODUCTS: &[&str] = &[
    "Website Design",
    "Mobile App",
    "SEO Service",
    "Consulting",
    "Marketing Campaign",
    "Cloud Hosting",
    "Database Setup",
    "API Integration",
];

const PAYMENT_METHODS: &[&str] = &["Credit Card", "Bank Transfer", "PayPal"];

/// Number of sales a fresh seed produces.
pub const SALE_SEED_COUNT: usize = 80;

/// Sales tax rate applied to every invoice subtotal.
pub const TAX_RATE: f64 = 0.1;

/// Invoice status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaleStatus {
    Paid,
    Pending,
    Overdue,
    Cancelled,
}

impl SaleStatus {
    /// The lowercase wire/facet value.
    pub fn as_str(&self) -> &'static str {
        match self {
            SaleStatus::Paid => "paid",
            SaleStatus::Pending => "pending",
            SaleStatus::Overdue => "overdue",
            SaleStatus::Cancelled => "cancelled",
        }
    }
}

const STATUSES: &[SaleStatus] = &[
    SaleStatus::Paid,
    SaleStatus::Pending,
    SaleStatus::Overdue,
    SaleStatus::Cancelled,
];

/// One invoice line item. `total = price * quantity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub quantity: u32,
    pub price: u64,
    pub total: u64,
}

/// One invoice, persisted under the `sales` slot.
///
/// Identifiers are prefixed sequence strings (`INV-0001`); the sequence
/// continues from the highest numeric suffix in the collection.
/// `subtotal` is the sum of line-item totals, `tax` is 10% of the
/// subtotal, `total = subtotal + tax`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: String,
    pub customer: String,
    pub items: Vec<LineItem>,
    pub subtotal: u64,
    pub tax: f64,
    pub total: f64,
    pub status: SaleStatus,
    pub date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub payment_method: String,
}

/// Format a numeric invoice sequence as an id (`7` -> `INV-0007`).
pub fn invoice_id(sequence: u32) -> String {
    format!("INV-{:04}", sequence)
}

fn invoice_sequence(id: &str) -> u32 {
    id.strip_prefix("INV-")
        .and_then(|suffix| suffix.parse().ok())
        .unwrap_or(0)
}

impl Record for Sale {
    type Id = String;
    const SLOT: &'static str = "sales";

    fn id(&self) -> String {
        self.id.clone()
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn first_id() -> String {
        invoice_id(1)
    }

    fn next_id(max: &String) -> String {
        invoice_id(invoice_sequence(max) + 1)
    }

    // String order is lexicographic, so "INV-9999" would sort above
    // "INV-10000" once the sequence outgrows its zero padding. Compare
    // by the parsed numeric suffix instead.
    fn max_id(collection: &[Self]) -> Option<String> {
        collection
            .iter()
            .max_by_key(|sale| invoice_sequence(&sale.id))
            .map(|sale| sale.id.clone())
    }
}

impl Queryable for Sale {
    fn search_text(&self) -> Vec<&str> {
        vec![&self.id, &self.customer]
    }

    fn facet(&self, name: &str) -> Option<&str> {
        (name == "status").then_some(self.status.as_str())
    }
}

impl Seed for Sale {
    fn seed<G: Rng>(rng: &mut G) -> Vec<Self> {
        let mut sales: Vec<Sale> = (1..=SALE_SEED_COUNT as u32)
            .map(|sequence| {
                let items: Vec<LineItem> = (0..rng.gen_range(1..=3))
                    .map(|_| {
                        let price = rng.gen_range(500..5500);
                        let quantity = rng.gen_range(1..=3);
                        LineItem {
                            name: PRODUCTS[rng.gen_range(0..PRODUCTS.len())].to_string(),
                            quantity,
                            price,
                            total: price * quantity as u64,
                        }
                    })
                    .collect();

                let subtotal: u64 = items.iter().map(|item| item.total).sum();
                let tax = subtotal as f64 * TAX_RATE;
                let date = date_in_2024(rng);

                Sale {
                    id: invoice_id(sequence),
                    customer: COMPANIES[rng.gen_range(0..8)].to_string(),
                    items,
                    subtotal,
                    tax,
                    total: subtotal as f64 + tax,
                    status: STATUSES[rng.gen_range(0..STATUSES.len())],
                    date,
                    due_date: date + Duration::days(30),
                    payment_method: PAYMENT_METHODS[rng.gen_range(0..PAYMENT_METHODS.len())]
                        .to_string(),
                }
            })
            .collect();

        // Newest first, like the sales page renders them.
        sales.sort_by(|a, b| b.date.cmp(&a.date));
        sales
    }
}

fn date_in_2024<G: Rng>(rng: &mut G) -> DateTime<Utc> {
    let month = rng.gen_range(1..=12);
    let day = rng.gen_range(1..=28);
    // Day capped at 28, so every month/day pair is a valid date.
    Utc.with_ymd_and_hms(2024, month, day, 0, 0, 0)
        .single()
        .expect("month 1-12, day 1-28 is always valid")
}

/// Replace the status of the invoice with the matching id; no-op when
/// the id is absent. Pure - the caller persists the result.
pub fn set_sale_status(sales: &[Sale], id: &str, status: SaleStatus) -> Vec<Sale> {
    sales
        .iter()
        .map(|sale| {
            if sale.id == id {
                let mut updated = sale.clone();
                updated.status = status;
                updated
            } else {
                sale.clone()
            }
        })
        .collect()
}

/// Outstanding totals per status, for the sales page header cards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StatusTotals {
    pub paid: f64,
    pub pending: f64,
    pub overdue: f64,
}

/// Sum invoice totals by status across the whole collection.
pub fn status_totals(sales: &[Sale]) -> StatusTotals {
    let mut totals = StatusTotals::default();
    for sale in sales {
        match sale.status {
            SaleStatus::Paid => totals.paid += sale.total,
            SaleStatus::Pending => totals.pending += sale.total,
            SaleStatus::Overdue => totals.overdue += sale.total,
            SaleStatus::Cancelled => {}
        }
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded() -> Vec<Sale> {
        let mut rng = StdRng::seed_from_u64(11);
        Sale::seed(&mut rng)
    }

    #[test]
    fn seed_produces_eighty_sales_newest_first() {
        let sales = seeded();
        assert_eq!(sales.len(), SALE_SEED_COUNT);
        for pair in sales.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[test]
    fn invoice_arithmetic_holds() {
        for sale in seeded() {
            for item in &sale.items {
                assert_eq!(item.total, item.price * item.quantity as u64);
            }
            let subtotal: u64 = sale.items.iter().map(|i| i.total).sum();
            assert_eq!(sale.subtotal, subtotal);
            assert_eq!(sale.tax, subtotal as f64 * TAX_RATE);
            assert_eq!(sale.total, subtotal as f64 + sale.tax);
        }
    }

    #[test]
    fn due_date_is_thirty_days_after_issue() {
        for sale in seeded() {
            assert_eq!(sale.due_date - sale.date, Duration::days(30));
        }
    }

    #[test]
    fn invoice_ids_continue_from_max_suffix() {
        assert_eq!(Sale::next_id(&"INV-0080".to_string()), "INV-0081");
        assert_eq!(Sale::first_id(), "INV-0001");
        // Unparsable ids restart the sequence rather than panicking.
        assert_eq!(Sale::next_id(&"garbage".to_string()), "INV-0001");
    }

    #[test]
    fn sequence_keeps_growing_past_four_digits() {
        use crate::ops;

        let mut sales = seeded();
        sales[0].id = invoice_id(9999);
        sales[1].id = invoice_id(10000);

        let grown = ops::add(&sales, sales[2].clone());
        assert_eq!(grown.last().unwrap().id, "INV-10001");
    }

    #[test]
    fn set_status_changes_only_the_matching_invoice() {
        let sales = seeded();
        let target = sales[3].id.clone();
        let updated = set_sale_status(&sales, &target, SaleStatus::Paid);

        for (before, after) in sales.iter().zip(updated.iter()) {
            if before.id == target {
                assert_eq!(after.status, SaleStatus::Paid);
                assert_eq!(after.items, before.items);
                assert_eq!(after.total, before.total);
            } else {
                assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn status_totals_ignore_cancelled() {
        let sales = seeded();
        let totals = status_totals(&sales);

        let by_status = |status: SaleStatus| -> f64 {
            sales
                .iter()
                .filter(|s| s.status == status)
                .map(|s| s.total)
                .sum()
        };
        assert_eq!(totals.paid, by_status(SaleStatus::Paid));
        assert_eq!(totals.pending, by_status(SaleStatus::Pending));
        assert_eq!(totals.overdue, by_status(SaleStatus::Overdue));
    }

    #[test]
    fn sale_serializes_camel_case() {
        let sale = &seeded()[0];
        let json = serde_json::to_string(sale).unwrap();
        assert!(json.contains(r#""dueDate""#));
        assert!(json.contains(r#""paymentMethod""#));
    }
}
