//! Frontend Models
//!
//! Link cards and the groups that hold them.

use serde::{Deserialize, Serialize};

use leptos_dragdrop::Draggable;

pub type ItemId = String;
pub type GroupId = String;

/// Which list an item lives in: `None` is the ungrouped collection
pub type ListId = Option<GroupId>;

/// A single link card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub image: String,
    /// CSS background for the thumbnail tile
    #[serde(default = "default_gradient")]
    pub gradient: String,
}

impl Draggable for Item {
    type Id = ItemId;

    fn drag_id(&self) -> ItemId {
        self.id.clone()
    }
}

/// A titled, ordered collection of cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub title: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

pub fn default_gradient() -> String {
    "linear-gradient(135deg, #f6d365 0%, #fda085 100%)".to_string()
}
