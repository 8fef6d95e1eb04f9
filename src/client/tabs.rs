use crate::product::models::{ListingStatus, Product};
use crate::seller::models::DashboardData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Listings,
    Pending,
    Messages,
    Earnings,
    History,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Listings,
        Tab::Pending,
        Tab::Messages,
        Tab::Earnings,
        Tab::History,
        Tab::Profile,
    ];
}

/// Holds the active tab. Switching is a pure assignment; each tab reads
/// its slice of the shared dataset through the helpers below.
#[derive(Debug, Default)]
pub struct TabRouter {
    active: Tab,
}

impl TabRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn activate(&mut self, tab: Tab) {
        self.active = tab;
    }

    pub fn active(&self) -> Tab {
        self.active
    }
}

pub fn pending_listings(data: &DashboardData) -> Vec<&Product> {
    data.listings
        .iter()
        .filter(|p| p.status == ListingStatus::Pending)
        .collect()
}

pub fn unread_count(data: &DashboardData) -> i64 {
    data.stats.unread_messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::models::Message;
    use crate::seller::models::{DashboardStats, Earnings};
    use crate::user::models::{Role, SafeUser};

    fn listing(id: i32, status: ListingStatus) -> Product {
        Product {
            id,
            title: format!("listing {id}"),
            price: 10.0,
            description: String::new(),
            location: String::new(),
            category: String::new(),
            rating: 0.0,
            review_count: 0,
            review_snippet: String::new(),
            image: "/images/x.jpg".to_owned(),
            badges: vec![],
            status,
            seller_id: Some(1),
        }
    }

    fn data_with(listings: Vec<Product>, messages: Vec<Message>) -> DashboardData {
        let stats = DashboardStats::from_parts(&listings, &messages);
        DashboardData {
            seller: SafeUser {
                id: 1,
                full_name: "Ada Seller".to_owned(),
                email: "ada@example.com".to_owned(),
                role: Role::Seller,
                student_verified: false,
            },
            listings,
            messages,
            rental_history: vec![],
            earnings: Earnings {
                total: 0.0,
                monthly: vec![],
            },
            stats,
        }
    }

    #[test]
    fn pending_tab_sees_only_pending_listings() {
        let data = data_with(
            vec![
                listing(1, ListingStatus::Active),
                listing(2, ListingStatus::Pending),
                listing(3, ListingStatus::Inactive),
                listing(4, ListingStatus::Pending),
            ],
            vec![],
        );

        let pending = pending_listings(&data);
        let ids: Vec<i32> = pending.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn unread_count_follows_the_stats_slice() {
        let now = chrono::NaiveDate::from_ymd_opt(2026, 8, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let message = |id, is_read| Message {
            id,
            sender_id: 2,
            recipient_id: 1,
            body: "is this still available?".to_owned(),
            is_read,
            sent_at: now,
        };

        let data = data_with(vec![], vec![message(1, false), message(2, true), message(3, false)]);
        assert_eq!(unread_count(&data), 2);
    }

    #[test]
    fn router_starts_on_listings_and_switches() {
        let mut router = TabRouter::new();
        assert_eq!(router.active(), Tab::Listings);

        router.activate(Tab::Earnings);
        assert_eq!(router.active(), Tab::Earnings);

        router.activate(Tab::Pending);
        assert_eq!(router.active(), Tab::Pending);
    }
}
