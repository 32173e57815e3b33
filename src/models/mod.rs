// Wire types for the kitchen inventory backend

mod item;
mod recipe;
mod storage;
mod user;

pub use item::{Item, ItemType};
pub use recipe::{Ingredient, Recipe};
pub use storage::StoredItem;
pub use user::User;

use serde::Deserialize;

/// Error payload the backend attaches to non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorMessage {
    pub message: String,
}
