//! Position Registry
//!
//! Identifier → last measured rectangle. Rebuilt by the measurement pass on
//! every pointer event; entries are only valid for the frame that wrote them.

use std::collections::HashMap;
use std::hash::Hash;

use crate::geometry::Rect;

/// Live mapping from layout key to its measured rectangle
#[derive(Clone, Debug)]
pub struct PositionRegistry<K> {
    rects: HashMap<K, Rect>,
    /// Bumped on every full re-layout
    frame: u64,
}

impl<K> Default for PositionRegistry<K> {
    fn default() -> Self {
        Self {
            rects: HashMap::new(),
            frame: 0,
        }
    }
}

impl<K: Eq + Hash> PositionRegistry<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record or overwrite the rectangle for `id`
    pub fn register(&mut self, id: K, rect: Rect) {
        self.rects.insert(id, rect);
    }

    /// Missing entries are not an error; callers skip the candidate
    pub fn get(&self, id: &K) -> Option<Rect> {
        self.rects.get(id).copied()
    }

    /// Drop every measurement and start a new frame
    pub fn unregister_all(&mut self) {
        self.rects.clear();
        self.frame += 1;
    }

    /// Replace all measurements with a fresh set
    pub fn refresh<I>(&mut self, measurements: I)
    where
        I: IntoIterator<Item = (K, Rect)>,
    {
        self.unregister_all();
        self.rects.extend(measurements);
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}
