//! DOM Measurement
//!
//! The measurement pass behind the position registry: every element carrying
//! a [`LAYOUT_KEY_ATTR`] attribute is measured with `getBoundingClientRect`.

use std::hash::Hash;
use std::str::FromStr;

use wasm_bindgen::JsCast;

use crate::geometry::{Point, Rect};
use crate::registry::PositionRegistry;

/// Attribute holding the registry key of a measurable element
pub const LAYOUT_KEY_ATTR: &str = "data-dnd-key";

pub fn pointer_of(ev: &web_sys::MouseEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

pub fn rect_of(el: &web_sys::Element) -> Rect {
    let rect = el.get_bounding_client_rect();
    Rect::new(rect.top(), rect.bottom(), rect.left(), rect.width())
}

/// Re-measure every keyed element under `root` into a fresh registry frame.
///
/// Elements whose key does not parse are skipped. Returns the number of
/// rectangles recorded.
pub fn measure_tracked<K>(root: &web_sys::Element, registry: &mut PositionRegistry<K>) -> usize
where
    K: FromStr + Eq + Hash,
{
    registry.unregister_all();

    let selector = format!("[{}]", LAYOUT_KEY_ATTR);
    let Ok(nodes) = root.query_selector_all(&selector) else {
        return 0;
    };

    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|node| node.dyn_into::<web_sys::Element>().ok()) else {
            continue;
        };
        let Some(key) = el
            .get_attribute(LAYOUT_KEY_ATTR)
            .and_then(|raw| raw.parse::<K>().ok())
        else {
            continue;
        };
        registry.register(key, rect_of(&el));
    }

    registry.len()
}
