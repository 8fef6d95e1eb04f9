use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::message::models::Message;
use crate::product::models::{ListingStatus, Product};
use crate::rental::models::RentalRecord;
use crate::user::models::SafeUser;

/// Wire envelope for the dashboard endpoint. The same type is parsed
/// back by the client-side loader, so the two sides cannot drift.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardEnvelope {
    pub success: bool,
    #[serde(default)]
    pub data: Option<DashboardData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub seller: SafeUser,
    pub listings: Vec<Product>,
    pub messages: Vec<Message>,
    pub rental_history: Vec<RentalRecord>,
    pub earnings: Earnings,
    pub stats: DashboardStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Earnings {
    pub total: f64,
    pub monthly: Vec<MonthlyEarning>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyEarning {
    pub month: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub unread_messages: i64,
    pub active_listings: i64,
    pub pending_listings: i64,
}

impl DashboardStats {
    pub fn from_parts(listings: &[Product], messages: &[Message]) -> Self {
        Self {
            unread_messages: messages.iter().filter(|m| !m.is_read).count() as i64,
            active_listings: listings
                .iter()
                .filter(|p| p.status == ListingStatus::Active)
                .count() as i64,
            pending_listings: listings
                .iter()
                .filter(|p| p.status == ListingStatus::Pending)
                .count() as i64,
        }
    }
}

impl Earnings {
    pub fn from_history(history: &[RentalRecord]) -> Self {
        let mut monthly: BTreeMap<String, f64> = BTreeMap::new();

        for record in history {
            let month = record.started_on.format("%Y-%m").to_string();
            *monthly.entry(month).or_default() += record.total;
        }

        Self {
            total: history.iter().map(|r| r.total).sum(),
            monthly: monthly
                .into_iter()
                .map(|(month, amount)| MonthlyEarning { month, amount })
                .collect(),
        }
    }
}
