// Item and item type wire types

use serde::{Deserialize, Serialize};

/// A known grocery item (localized name pair, owning type, display unit)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default)]
    pub id: i64,

    pub name: String,

    #[serde(rename = "name_EN")]
    pub name_en: String,

    pub type_id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Item category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemType {
    #[serde(default)]
    pub id: i64,

    pub name: String,

    #[serde(rename = "name_EN")]
    pub name_en: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_parses_backend_names() {
        let raw = r#"{
            "id": 12,
            "name": "Liszt",
            "name_EN": "Flour",
            "typeId": 4,
            "unit": "g",
            "image": "flour.png"
        }"#;

        let item: Item = serde_json::from_str(raw).unwrap();
        assert_eq!(item.id, 12);
        assert_eq!(item.name_en, "Flour");
        assert_eq!(item.type_id, 4);
        assert_eq!(item.unit.as_deref(), Some("g"));
    }

    #[test]
    fn test_item_type_roundtrip() {
        let item_type = ItemType {
            id: 1,
            name: "Zöldség".to_string(),
            name_en: "Vegetable".to_string(),
            image: None,
        };

        let raw = serde_json::to_string(&item_type).unwrap();
        assert!(raw.contains("\"name_EN\":\"Vegetable\""));
        let parsed: ItemType = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.name_en, "Vegetable");
    }
}
