//! Order entity model and the status state machine

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Delivery order lifecycle status.
///
/// `Delivered` is terminal: a delivered order accepts no further update,
/// and only a `Pending` order may be deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    /// Parse a payload value; `None` for anything but the four wire names.
    pub fn parse(value: &Value) -> Option<OrderStatus> {
        match value.as_str()? {
            "pending" => Some(OrderStatus::Pending),
            "preparing" => Some(OrderStatus::Preparing),
            "out-for-delivery" => Some(OrderStatus::OutForDelivery),
            "delivered" => Some(OrderStatus::Delivered),
            _ => None,
        }
    }

    /// Whether the state admits no further changes.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }

    /// Only pending orders may leave the store.
    pub fn is_deletable(self) -> bool {
        matches!(self, OrderStatus::Pending)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of an order: an opaque dish reference and how many.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Reference to a dish, kept verbatim (string and numeric ids both
    /// appear in payloads) and never resolved here.
    #[serde(rename = "dishId")]
    pub dish_id: Value,
    pub quantity: u64,
}

/// A delivery order.
///
/// `status` is stored exactly as supplied at creation: absent stays
/// absent, nothing assigns a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    #[serde(rename = "deliverTo")]
    pub deliver_to: String,
    #[serde(rename = "mobileNumber")]
    pub mobile_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    pub dishes: Vec<OrderLine>,
}
