// Recipe and ingredient wire types

use serde::{Deserialize, Serialize};

use super::Item;

/// A recipe with localized text, difficulty 1-5 and preparation time in minutes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default)]
    pub id: i64,

    pub name: String,

    #[serde(rename = "name_EN")]
    pub name_en: String,

    pub description: String,

    #[serde(rename = "description_EN")]
    pub description_en: String,

    /// Short category code, e.g. "brk" / "lun" / "din"
    #[serde(rename = "type")]
    pub category: String,

    pub difficulty: i32,

    pub time: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<Ingredient>>,
}

/// A recipe line: how much of which item the recipe needs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub recipe_id: i64,

    pub item_id: i64,

    pub quantity: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<Item>,
}
