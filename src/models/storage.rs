// Stored item (pantry) wire type

use serde::{Deserialize, Serialize};

use super::Item;

/// A quantity of an item held in a user's kitchen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub user_id: i64,

    pub item_id: i64,

    pub quantity: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stored_item: Option<Item>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_item_roundtrip() {
        let stored = StoredItem {
            id: None,
            user_id: 3,
            item_id: 12,
            quantity: 2,
            stored_item: None,
        };

        let raw = serde_json::to_string(&stored).unwrap();
        assert_eq!(raw, r#"{"userId":3,"itemId":12,"quantity":2}"#);

        let parsed: StoredItem = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.user_id, 3);
        assert_eq!(parsed.quantity, 2);
    }
}
