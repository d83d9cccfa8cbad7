use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Completed,
}

impl OrderStatus {
    /// Parse a client-submitted status string. Anything outside the four
    /// known states is rejected.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(Self::Pending),
            "Preparing" => Some(Self::Preparing),
            "Ready" => Some(Self::Ready),
            "Completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// One cart line as submitted by the client at checkout. The name and price
/// are snapshots taken when the item was added to the cart; they are not
/// revalidated against the live menu.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Menu item id at the time the line was added
    pub id: u64,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u64,
    pub user_id: u64,
    pub items: Vec<OrderLine>,
    pub total_price: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub estimated_time: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub items: Option<Vec<OrderLine>>,
    #[serde(default)]
    pub total_price: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateStatusRequest {
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_known_states() {
        assert_eq!(OrderStatus::parse("Pending"), Some(OrderStatus::Pending));
        assert_eq!(OrderStatus::parse("Preparing"), Some(OrderStatus::Preparing));
        assert_eq!(OrderStatus::parse("Ready"), Some(OrderStatus::Ready));
        assert_eq!(OrderStatus::parse("Completed"), Some(OrderStatus::Completed));
    }

    #[test]
    fn test_status_parse_rejects_unknown() {
        assert_eq!(OrderStatus::parse("Delivered"), None);
        assert_eq!(OrderStatus::parse("pending"), None);
        assert_eq!(OrderStatus::parse(""), None);
    }

    #[test]
    fn test_order_serializes_camel_case() {
        let order = Order {
            id: 1,
            user_id: 2,
            items: vec![OrderLine {
                id: 1,
                name: "Jollof Rice".to_string(),
                price: 15.0,
                quantity: 2,
            }],
            total_price: 30.0,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
            estimated_time: "30 mins".to_string(),
        };

        let json = serde_json::to_string(&order).unwrap();
        assert!(json.contains("\"userId\":2"));
        assert!(json.contains("\"totalPrice\":30.0"));
        assert!(json.contains("\"status\":\"Pending\""));
        assert!(json.contains("\"estimatedTime\":\"30 mins\""));
    }
}
