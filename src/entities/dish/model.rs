//! Dish entity model

use serde::{Deserialize, Serialize};

/// A menu dish.
///
/// The id is assigned once at creation and never changes; every other
/// field is overwritten wholesale on update. Price is a strictly positive
/// integer, enforced at the validation gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dish_wire_format() {
        let dish = Dish {
            id: "1".to_string(),
            name: "Pasta".to_string(),
            description: "Tomato".to_string(),
            price: 12,
            image_url: "u".to_string(),
        };
        let value = serde_json::to_value(&dish).expect("should serialize");
        assert_eq!(
            value,
            json!({
                "id": "1",
                "name": "Pasta",
                "description": "Tomato",
                "price": 12,
                "image_url": "u"
            })
        );
    }
}
