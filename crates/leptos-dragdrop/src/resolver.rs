//! Insertion Resolver
//!
//! Maps a pointer position onto a semantic drop target (list + index) and the
//! pixel geometry of the insertion indicator. Pure: reads the registry and the
//! tracked lists, never mutates anything.

use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect};
use crate::registry::PositionRegistry;

/// Fixed offsets used when placing the indicator line
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    /// Gap between the indicator and the card edge it hugs
    pub edge_inset: f64,
    /// Horizontal offset of the indicator from the list's left edge
    pub side_padding: f64,
    /// Subtracted from the list width when no card is available to copy
    pub fallback_padding: f64,
    /// Space taken by a group's header, applied to empty groups
    pub group_header_offset: f64,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            edge_inset: 1.0,
            side_padding: 20.0,
            fallback_padding: 40.0,
            group_header_offset: 40.0,
        }
    }
}

/// One droppable list as seen by the resolver
///
/// `region` and `items` are registry keys; `list` is the identifier handed
/// back in the target.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackedList<L, K> {
    pub list: L,
    pub region: K,
    pub items: Vec<K>,
    /// Added to the region top when the list has no measurable items
    pub header_offset: f64,
}

impl<L, K> TrackedList<L, K> {
    pub fn new(list: L, region: K, items: Vec<K>) -> Self {
        Self {
            list,
            region,
            items,
            header_offset: 0.0,
        }
    }

    pub fn with_header_offset(mut self, header_offset: f64) -> Self {
        self.header_offset = header_offset;
        self
    }
}

/// Indicator placement relative to the container origin
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorGeometry {
    pub top: f64,
    pub left: f64,
    pub width: f64,
}

/// Where the dragged item would land if released now
#[derive(Clone, Debug, PartialEq)]
pub struct InsertionTarget<L> {
    pub list: L,
    /// Index into the destination list with the dragged item removed
    pub index: usize,
    pub geometry: IndicatorGeometry,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InsertionResolver {
    config: IndicatorConfig,
}

impl InsertionResolver {
    pub fn new(config: IndicatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    /// Resolve the insertion target for `pointer`.
    ///
    /// `lists` is scanned in order and the first list whose region contains
    /// the pointer vertically wins, so callers must pass them in stacking
    /// order. `dragged` is never considered as a neighbour. Returns `None`
    /// when the pointer is outside every measured region.
    pub fn resolve<L, K>(
        &self,
        pointer: Point,
        dragged: Option<&K>,
        lists: &[TrackedList<L, K>],
        registry: &PositionRegistry<K>,
        origin: &Rect,
    ) -> Option<InsertionTarget<L>>
    where
        L: Clone,
        K: Eq + Hash,
    {
        lists.iter().find_map(|tracked| {
            let region = registry.get(&tracked.region)?;
            region
                .contains_y(pointer.y)
                .then(|| self.resolve_within(pointer.y, dragged, tracked, region, registry, origin))
        })
    }

    fn resolve_within<L, K>(
        &self,
        y: f64,
        dragged: Option<&K>,
        tracked: &TrackedList<L, K>,
        region: Rect,
        registry: &PositionRegistry<K>,
        origin: &Rect,
    ) -> InsertionTarget<L>
    where
        L: Clone,
        K: Eq + Hash,
    {
        let inset = self.config.edge_inset;
        let candidates: Vec<&K> = tracked
            .items
            .iter()
            .filter(|key| dragged != Some(*key))
            .collect();
        let len = candidates.len();

        // Strict comparison: on a tie the earlier card wins
        let mut closest: Option<(usize, Rect)> = None;
        let mut closest_distance = f64::INFINITY;
        for (position, key) in candidates.iter().enumerate() {
            let Some(rect) = registry.get(key) else {
                continue;
            };
            let distance = (y - rect.mid_y()).abs();
            if distance < closest_distance {
                closest_distance = distance;
                closest = Some((position, rect));
            }
        }

        let mut index = 0;
        let mut top = region.top - origin.top + tracked.header_offset;
        let mut reference: Option<Rect> = None;

        if let Some((position, rect)) = closest {
            if y < rect.mid_y() {
                index = position;
                top = rect.top - origin.top - inset;
                reference = Some(rect);
            } else {
                index = position + 1;
                if index == len {
                    top = rect.bottom - origin.top + inset;
                    reference = Some(rect);
                }
            }
        }

        if index > 0 && index < len {
            if let (Some(prev), Some(next)) = (
                registry.get(candidates[index - 1]),
                registry.get(candidates[index]),
            ) {
                top = ((prev.bottom - origin.top) + (next.top - origin.top)) / 2.0;
                reference = Some(next);
            }
        }

        let width = reference
            .map(|rect| rect.width)
            .unwrap_or(region.width - self.config.fallback_padding);

        InsertionTarget {
            list: tracked.list.clone(),
            index,
            geometry: IndicatorGeometry {
                top,
                left: region.left - origin.left + self.config.side_padding,
                width,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: Rect = Rect {
        top: 0.0,
        bottom: 1000.0,
        left: 0.0,
        width: 600.0,
    };

    fn card(top: f64) -> Rect {
        Rect::new(top, top + 40.0, 20.0, 560.0)
    }

    /// Ungrouped list U: P(100-140), Q(150-190)
    /// Group G: A(250-290), B(300-340), C(350-390)
    fn fixture() -> (Vec<TrackedList<Option<&'static str>, &'static str>>, PositionRegistry<&'static str>) {
        let mut registry = PositionRegistry::new();
        registry.register("U", Rect::new(90.0, 200.0, 0.0, 600.0));
        registry.register("P", card(100.0));
        registry.register("Q", card(150.0));
        registry.register("G", Rect::new(210.0, 400.0, 0.0, 600.0));
        registry.register("A", card(250.0));
        registry.register("B", card(300.0));
        registry.register("C", card(350.0));

        let lists = vec![
            TrackedList::new(None, "U", vec!["P", "Q"]),
            TrackedList::new(Some("G"), "G", vec!["A", "B", "C"]).with_header_offset(40.0),
        ];
        (lists, registry)
    }

    fn resolve(y: f64, dragged: Option<&'static str>) -> Option<InsertionTarget<Option<&'static str>>> {
        let (lists, registry) = fixture();
        InsertionResolver::default().resolve(
            Point::new(300.0, y),
            dragged.as_ref(),
            &lists,
            &registry,
            &ORIGIN,
        )
    }

    #[test]
    fn test_between_two_cards_uses_gap_midpoint() {
        let target = resolve(145.0, Some("R")).expect("pointer is inside U");

        assert_eq!(target.list, None);
        assert_eq!(target.index, 1);
        assert_eq!(target.geometry.top, 145.0);
        assert_eq!(target.geometry.width, 560.0);
        assert_eq!(target.geometry.left, 20.0);
    }

    #[test]
    fn test_above_first_card_hugs_its_top() {
        let target = resolve(105.0, None).unwrap();
        assert_eq!(target.index, 0);
        assert_eq!(target.geometry.top, 99.0);
    }

    #[test]
    fn test_below_last_midpoint_appends() {
        let target = resolve(185.0, None).unwrap();
        assert_eq!(target.index, 2);
        assert_eq!(target.geometry.top, 191.0);
    }

    #[test]
    fn test_dragged_item_is_never_a_candidate() {
        // Directly over B's midpoint while dragging B: A and C are equidistant,
        // A wins the tie and the pointer is below A, so B lands between A and C.
        let target = resolve(320.0, Some("B")).unwrap();
        assert_eq!(target.list, Some("G"));
        assert_eq!(target.index, 1);
        assert_eq!(target.geometry.top, (290.0 + 350.0) / 2.0);
    }

    #[test]
    fn test_same_list_index_excludes_dragged() {
        // Below C's midpoint while dragging B: two candidates remain, so append is 2
        let target = resolve(380.0, Some("B")).unwrap();
        assert_eq!(target.index, 2);
    }

    #[test]
    fn test_outside_every_region_is_none() {
        assert!(resolve(50.0, None).is_none());
        assert!(resolve(205.0, None).is_none());
        assert!(resolve(900.0, None).is_none());
    }

    #[test]
    fn test_empty_group_uses_header_offset_and_fallback_width() {
        let mut registry = PositionRegistry::new();
        registry.register("G", Rect::new(500.0, 600.0, 30.0, 400.0));
        let lists = vec![TrackedList::new(Some("G"), "G", Vec::<&str>::new()).with_header_offset(40.0)];
        let origin = Rect::new(100.0, 900.0, 10.0, 600.0);

        let target = InsertionResolver::default()
            .resolve(Point::new(0.0, 550.0), None, &lists, &registry, &origin)
            .unwrap();

        assert_eq!(target.index, 0);
        assert_eq!(target.geometry.top, 440.0);
        assert_eq!(target.geometry.left, 40.0);
        assert_eq!(target.geometry.width, 360.0);
    }

    #[test]
    fn test_group_holding_only_dragged_item_behaves_as_empty() {
        let mut registry = PositionRegistry::new();
        registry.register("G", Rect::new(0.0, 100.0, 0.0, 300.0));
        registry.register("X", Rect::new(40.0, 80.0, 20.0, 260.0));
        let lists = vec![TrackedList::new(Some("G"), "G", vec!["X"]).with_header_offset(40.0)];

        let target = InsertionResolver::default()
            .resolve(Point::new(0.0, 70.0), Some(&"X"), &lists, &registry, &ORIGIN)
            .unwrap();

        assert_eq!(target.index, 0);
        assert_eq!(target.geometry.top, 40.0);
        assert_eq!(target.geometry.width, 260.0);
    }

    #[test]
    fn test_first_matching_region_wins() {
        let mut registry = PositionRegistry::new();
        registry.register("first", Rect::new(0.0, 100.0, 0.0, 300.0));
        registry.register("second", Rect::new(0.0, 100.0, 0.0, 300.0));
        let lists = vec![
            TrackedList::new("first", "first", Vec::new()),
            TrackedList::new("second", "second", Vec::new()),
        ];

        let target = InsertionResolver::default()
            .resolve(Point::new(0.0, 50.0), None, &lists, &registry, &ORIGIN)
            .unwrap();
        assert_eq!(target.list, "first");
    }

    #[test]
    fn test_unmeasured_region_is_skipped() {
        let (lists, mut registry) = fixture();
        registry.refresh([("G", Rect::new(210.0, 400.0, 0.0, 600.0)), ("A", card(250.0))]);

        let resolver = InsertionResolver::default();
        assert!(resolver
            .resolve(Point::new(0.0, 120.0), None, &lists, &registry, &ORIGIN)
            .is_none());

        // B and C lost their rects: A is the only neighbour and not the last card
        let target = resolver
            .resolve(Point::new(0.0, 280.0), None, &lists, &registry, &ORIGIN)
            .unwrap();
        assert_eq!(target.index, 1);
        assert_eq!(target.geometry.top, 210.0 + 40.0);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let (lists, registry) = fixture();
        let resolver = InsertionResolver::default();
        let pointer = Point::new(12.0, 333.0);

        let first = resolver.resolve(pointer, Some(&"A"), &lists, &registry, &ORIGIN);
        let second = resolver.resolve(pointer, Some(&"A"), &lists, &registry, &ORIGIN);
        assert_eq!(first, second);
    }
}
