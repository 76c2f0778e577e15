//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos_dragdrop::{create_dnd_signals, DndSignals};

use crate::config::AppConfig;
use crate::models::{Item, ListId};

pub type CardDnd = DndSignals<Item, ListId>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Drag state for the card list
    pub dnd: CardDnd,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            dnd: create_dnd_signals(),
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Reactive: true while a card is being dragged
    pub fn is_dragging(&self) -> bool {
        self.dnd.is_dragging()
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
