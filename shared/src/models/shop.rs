//! Shop Model

use serde::{Deserialize, Serialize};

/// One day of a weekly schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopHours {
    /// Weekday name ("Monday", "mon", ...)
    pub day: String,
    /// Opening time ("09:00", "9:00 AM")
    pub open: String,
    /// Closing time ("21:00", "9:00 PM")
    pub close: String,
}

/// Opening hours as published by a business
///
/// Either a free-text range (`"10:00 AM - 9:00 PM"`) or a per-day schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OpeningHours {
    Text(String),
    Weekly(Vec<ShopHours>),
}

impl Default for OpeningHours {
    fn default() -> Self {
        Self::Text(default_hours())
    }
}

impl From<&str> for OpeningHours {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<ShopHours>> for OpeningHours {
    fn from(schedule: Vec<ShopHours>) -> Self {
        Self::Weekly(schedule)
    }
}

fn default_hours() -> String {
    "09:00 - 21:00".to_string()
}

/// Kind of business listed in the catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShopKind {
    #[default]
    Shop,
    Wholesaler,
    Service,
}

/// Business listed in the discovery catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub kind: ShopKind,
    #[serde(default)]
    pub category: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    /// Average review rating (0–5)
    pub rating: Option<f32>,
    #[serde(default)]
    pub hours: OpeningHours,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_hours_untagged() {
        let text: OpeningHours = serde_json::from_str(r#""9:00 AM - 9:00 PM""#).unwrap();
        assert_eq!(text, OpeningHours::from("9:00 AM - 9:00 PM"));

        let weekly: OpeningHours =
            serde_json::from_str(r#"[{"day":"Monday","open":"09:00","close":"17:00"}]"#).unwrap();
        match weekly {
            OpeningHours::Weekly(days) => {
                assert_eq!(days.len(), 1);
                assert_eq!(days[0].day, "Monday");
            }
            OpeningHours::Text(_) => panic!("expected weekly schedule"),
        }
    }

    #[test]
    fn test_shop_defaults() {
        let shop: Shop = serde_json::from_str(r#"{"id":1,"name":"Corner Bakery"}"#).unwrap();
        assert_eq!(shop.kind, ShopKind::Shop);
        assert_eq!(shop.category, "");
        assert_eq!(shop.hours, OpeningHours::Text("09:00 - 21:00".to_string()));
        assert!(shop.address.is_none());
    }

    #[test]
    fn test_shop_kind_serde() {
        let json = serde_json::to_string(&ShopKind::Wholesaler).unwrap();
        assert_eq!(json, "\"wholesaler\"");
        let kind: ShopKind = serde_json::from_str("\"service\"").unwrap();
        assert_eq!(kind, ShopKind::Service);
    }
}
