//! Layout Keys
//!
//! Registry keys for every measurable element of the card list. Rendered into
//! the `data-dnd-key` attribute and parsed back by the measurement pass.

use std::fmt;
use std::str::FromStr;

use crate::models::{GroupId, ItemId};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LayoutKey {
    /// The ungrouped collection's container
    Ungrouped,
    /// A group's container (header included)
    Group(GroupId),
    Item(ItemId),
}

impl fmt::Display for LayoutKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutKey::Ungrouped => write!(f, "ungrouped"),
            LayoutKey::Group(id) => write!(f, "group:{}", id),
            LayoutKey::Item(id) => write!(f, "item:{}", id),
        }
    }
}

impl FromStr for LayoutKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "ungrouped" {
            return Ok(LayoutKey::Ungrouped);
        }
        match s.split_once(':') {
            Some(("group", id)) if !id.is_empty() => Ok(LayoutKey::Group(id.to_string())),
            Some(("item", id)) if !id.is_empty() => Ok(LayoutKey::Item(id.to_string())),
            _ => Err(format!("unknown layout key: {}", s)),
        }
    }
}
