//! Notification records.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::query::Queryable;
use crate::record::{Record, Seed};

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    /// The lowercase wire/facet value.
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Warning => "warning",
            NotificationKind::Error => "error",
        }
    }
}

const TEMPLATES: &[(NotificationKind, &str, &str)] = &[
    (
        NotificationKind::Success,
        "New customer added",
        "Sarah Johnson has been added to your customer list.",
    ),
    (
        NotificationKind::Info,
        "Invoice payment received",
        "Payment of $3,240 received for INV-1023.",
    ),
    (
        NotificationKind::Warning,
        "Invoice overdue",
        "Invoice INV-1015 is 5 days overdue.",
    ),
    (
        NotificationKind::Success,
        "Report generated",
        "Your monthly sales report is ready to download.",
    ),
    (
        NotificationKind::Info,
        "New order placed",
        "Tech Corp placed a new order worth $12,500.",
    ),
    (
        NotificationKind::Warning,
        "Low inventory alert",
        "Product stock is running low for 3 items.",
    ),
    (
        NotificationKind::Success,
        "Customer updated",
        "Profile updated for Michael Brown.",
    ),
    (
        NotificationKind::Error,
        "Payment failed",
        "Payment attempt failed for INV-1018. Please retry.",
    ),
];

/// One notification, persisted under the `notifications` slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

impl Record for Notification {
    type Id = u64;
    const SLOT: &'static str = "notifications";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn first_id() -> u64 {
        1
    }

    fn next_id(max: &u64) -> u64 {
        max + 1
    }
}

impl Queryable for Notification {
    fn search_text(&self) -> Vec<&str> {
        vec![&self.title, &self.message]
    }

    fn facet(&self, name: &str) -> Option<&str> {
        match name {
            "type" => Some(self.kind.as_str()),
            "read" => Some(if self.read { "read" } else { "unread" }),
            _ => None,
        }
    }
}

impl Seed for Notification {
    fn seed<G: Rng>(rng: &mut G) -> Vec<Self> {
        let now = Utc::now();
        let count = rng.gen_range(5..=12);

        let mut notifications: Vec<Notification> = (1..=count)
            .map(|id| {
                let (kind, title, message) = TEMPLATES[rng.gen_range(0..TEMPLATES.len())];
                Notification {
                    id,
                    kind,
                    title: title.to_string(),
                    message: message.to_string(),
                    timestamp: now - Duration::hours(rng.gen_range(0..48)),
                    read: rng.gen_bool(0.4),
                }
            })
            .collect();

        notifications.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        notifications
    }
}

/// Flip one notification's `read` flag to true; everything else is
/// untouched. Pure - the caller persists the result.
pub fn mark_read(notifications: &[Notification], id: u64) -> Vec<Notification> {
    notifications
        .iter()
        .map(|n| {
            if n.id == id {
                let mut read = n.clone();
                read.read = true;
                read
            } else {
                n.clone()
            }
        })
        .collect()
}

/// Mark every notification read.
pub fn mark_all_read(notifications: &[Notification]) -> Vec<Notification> {
    notifications
        .iter()
        .map(|n| {
            let mut read = n.clone();
            read.read = true;
            read
        })
        .collect()
}

/// Count of unread notifications, for the header badge.
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

/// Relative rendering of a timestamp against `now`: "Just now", then
/// minutes, hours, and days, falling back to the calendar date after a
/// week. Future timestamps render as "Just now".
pub fn time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - timestamp).num_seconds().max(0);

    if seconds < 60 {
        "Just now".to_string()
    } else if seconds < 3600 {
        format!("{}m ago", seconds / 60)
    } else if seconds < 86_400 {
        format!("{}h ago", seconds / 3600)
    } else if seconds < 604_800 {
        format!("{}d ago", seconds / 86_400)
    } else {
        timestamp.format("%b %-d, %Y").to_string()
    }
}
