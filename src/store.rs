//! Card Board Store
//!
//! In-memory groups and ungrouped cards. All moves go through
//! [`ListStore::transfer`], which validates before it mutates.

use serde::{Deserialize, Serialize};

use leptos_dragdrop::{ListStore, ReorderError, TrackedList};

use crate::layout::LayoutKey;
use crate::models::{Group, Item, ListId};

const SEED: &str = include_str!("../assets/seed.json");

/// Every card on the page, each owned by exactly one list
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub ungrouped: Vec<Item>,
}

impl Board {
    /// Board bundled with the app; empty if the bundle does not parse
    pub fn seed() -> Self {
        match serde_json::from_str(SEED) {
            Ok(board) => board,
            Err(err) => {
                tracing::warn!(error = %err, "seed board is malformed, starting empty");
                Board::default()
            }
        }
    }

    pub fn list(&self, list: &ListId) -> Option<&Vec<Item>> {
        match list {
            None => Some(&self.ungrouped),
            Some(group_id) => self.groups.iter().find(|g| &g.id == group_id).map(|g| &g.items),
        }
    }

    fn list_mut(&mut self, list: &ListId) -> Option<&mut Vec<Item>> {
        match list {
            None => Some(&mut self.ungrouped),
            Some(group_id) => self
                .groups
                .iter_mut()
                .find(|g| &g.id == group_id)
                .map(|g| &mut g.items),
        }
    }

    /// Find the list and position holding `id`
    pub fn locate(&self, id: &str) -> Option<(ListId, usize)> {
        if let Some(pos) = self.ungrouped.iter().position(|i| i.id == id) {
            return Some((None, pos));
        }
        self.groups.iter().find_map(|g| {
            g.items
                .iter()
                .position(|i| i.id == id)
                .map(|pos| (Some(g.id.clone()), pos))
        })
    }

    pub fn item_count(&self) -> usize {
        self.ungrouped.len() + self.groups.iter().map(|g| g.items.len()).sum::<usize>()
    }

    /// Drop regions in resolution order: ungrouped first, then groups as displayed
    pub fn tracked_lists(&self, group_header_offset: f64) -> Vec<TrackedList<ListId, LayoutKey>> {
        let ungrouped = TrackedList::new(
            None,
            LayoutKey::Ungrouped,
            self.ungrouped.iter().map(|i| LayoutKey::Item(i.id.clone())).collect(),
        );
        let groups = self.groups.iter().map(|g| {
            TrackedList::new(
                Some(g.id.clone()),
                LayoutKey::Group(g.id.clone()),
                g.items.iter().map(|i| LayoutKey::Item(i.id.clone())).collect(),
            )
            .with_header_offset(group_header_offset)
        });
        std::iter::once(ungrouped).chain(groups).collect()
    }
}

fn list_label(list: &ListId) -> String {
    list.clone().unwrap_or_else(|| "ungrouped".to_string())
}

impl ListStore<Item, ListId> for Board {
    fn transfer(&mut self, id: &String, from: &ListId, to: &ListId, index: usize) -> Result<usize, ReorderError> {
        let source = self.list(from).ok_or_else(|| ReorderError::UnknownList(list_label(from)))?;
        let position = source
            .iter()
            .position(|i| &i.id == id)
            .ok_or_else(|| ReorderError::MissingItem {
                item: id.clone(),
                list: list_label(from),
            })?;
        let dest_len = self.list(to).ok_or_else(|| ReorderError::UnknownList(list_label(to)))?.len();
        let len = if from == to { dest_len - 1 } else { dest_len };
        if index > len {
            return Err(ReorderError::IndexOutOfBounds { index, len });
        }

        // Validated: from here on nothing can fail halfway
        let source = self.list_mut(from).ok_or_else(|| ReorderError::UnknownList(list_label(from)))?;
        let item = source.remove(position);
        let Some(dest) = self.list_mut(to) else {
            if let Some(source) = self.list_mut(from) {
                source.insert(position, item);
            }
            return Err(ReorderError::UnknownList(list_label(to)));
        };
        dest.insert(index, item);
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_gradient;
    use leptos_dragdrop::{DragController, DropOutcome, InsertionResolver, Point, PositionRegistry, Rect};

    const HEADER: f64 = 40.0;

    fn item(id: &str) -> Item {
        Item {
            id: id.to_string(),
            title: format!("Card {}", id),
            subtitle: format!("{}.example", id),
            image: String::new(),
            gradient: default_gradient(),
        }
    }

    fn board(ungrouped: &[&str], group: &[&str]) -> Board {
        Board {
            groups: vec![Group {
                id: "g".to_string(),
                title: "Group".to_string(),
                items: group.iter().map(|id| item(id)).collect(),
            }],
            ungrouped: ungrouped.iter().map(|id| item(id)).collect(),
        }
    }

    fn ids(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    fn card(top: f64) -> Rect {
        Rect::new(top, top + 40.0, 20.0, 560.0)
    }

    /// Drag `id` with the pointer at `y`, then release
    fn drag(board: &mut Board, registry: &PositionRegistry<LayoutKey>, id: &str, y: f64) -> DropOutcome<ListId> {
        let (source, _) = board.locate(id).expect("dragged card exists");
        let dragged = board.list(&source).and_then(|l| l.iter().find(|i| i.id == id)).cloned().unwrap();
        let lists = board.tracked_lists(HEADER);
        let origin = Rect::new(0.0, 1000.0, 0.0, 600.0);
        let resolver = InsertionResolver::default();

        let mut controller = DragController::new();
        controller.begin(dragged, source, Point::new(100.0, y), |session| {
            let key = LayoutKey::Item(session.item.id.clone());
            resolver.resolve(session.pointer, Some(&key), &lists, registry, &origin)
        });
        controller.release(board)
    }

    #[test]
    fn test_drop_between_two_ungrouped_cards() {
        // Ungrouped P(100-140), Q(150-190); R starts in the group
        let mut board = board(&["p", "q"], &["r"]);
        let mut registry = PositionRegistry::new();
        registry.register(LayoutKey::Ungrouped, Rect::new(90.0, 200.0, 0.0, 600.0));
        registry.register(LayoutKey::Item("p".into()), card(100.0));
        registry.register(LayoutKey::Item("q".into()), card(150.0));
        registry.register(LayoutKey::Group("g".into()), Rect::new(220.0, 320.0, 0.0, 600.0));
        registry.register(LayoutKey::Item("r".into()), card(260.0));

        let outcome = drag(&mut board, &registry, "r", 145.0);

        assert_eq!(outcome, DropOutcome::Moved { list: None, index: 1 });
        assert_eq!(ids(&board.ungrouped), vec!["p", "r", "q"]);
        assert!(board.groups[0].items.is_empty());
    }

    #[test]
    fn test_reorder_within_group_to_front() {
        let mut board = board(&[], &["a", "b", "c"]);
        let mut registry = PositionRegistry::new();
        registry.register(LayoutKey::Group("g".into()), Rect::new(0.0, 200.0, 0.0, 600.0));
        registry.register(LayoutKey::Item("a".into()), card(50.0));
        registry.register(LayoutKey::Item("b".into()), card(100.0));
        registry.register(LayoutKey::Item("c".into()), card(150.0));

        // Above A's midpoint (70)
        let outcome = drag(&mut board, &registry, "b", 60.0);

        assert_eq!(outcome, DropOutcome::Moved { list: Some("g".into()), index: 0 });
        assert_eq!(ids(&board.groups[0].items), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_ungrouped_card_appended_to_group() {
        let mut board = board(&["u"], &["a", "b"]);
        let mut registry = PositionRegistry::new();
        registry.register(LayoutKey::Ungrouped, Rect::new(300.0, 360.0, 0.0, 600.0));
        registry.register(LayoutKey::Item("u".into()), card(310.0));
        registry.register(LayoutKey::Group("g".into()), Rect::new(0.0, 200.0, 0.0, 600.0));
        registry.register(LayoutKey::Item("a".into()), card(50.0));
        registry.register(LayoutKey::Item("b".into()), card(100.0));

        // Below B's midpoint (120)
        let outcome = drag(&mut board, &registry, "u", 150.0);

        assert_eq!(outcome, DropOutcome::Moved { list: Some("g".into()), index: 2 });
        assert!(board.ungrouped.is_empty());
        assert_eq!(ids(&board.groups[0].items), vec!["a", "b", "u"]);
    }

    #[test]
    fn test_drop_outside_leaves_board_unchanged() {
        let mut board = board(&["p", "q"], &["a"]);
        let before = board.clone();
        let mut registry = PositionRegistry::new();
        registry.register(LayoutKey::Ungrouped, Rect::new(90.0, 200.0, 0.0, 600.0));
        registry.register(LayoutKey::Item("p".into()), card(100.0));
        registry.register(LayoutKey::Item("q".into()), card(150.0));

        let outcome = drag(&mut board, &registry, "p", 700.0);

        assert_eq!(outcome, DropOutcome::Kept);
        assert_eq!(board, before);
    }

    #[test]
    fn test_transfer_rejects_unknown_group() {
        let mut board = board(&["p"], &[]);
        let before = board.clone();

        let result = board.transfer(&"p".to_string(), &None, &Some("nope".to_string()), 0);

        assert_eq!(result, Err(ReorderError::UnknownList("nope".to_string())));
        assert_eq!(board, before);
    }

    #[test]
    fn test_transfer_rejects_item_missing_from_source() {
        let mut board = board(&["p"], &["a"]);
        let before = board.clone();

        // "a" lives in the group, not in ungrouped
        let result = board.transfer(&"a".to_string(), &None, &Some("g".to_string()), 0);

        assert!(matches!(result, Err(ReorderError::MissingItem { .. })));
        assert_eq!(board, before);
    }

    #[test]
    fn test_transfer_same_list_bound_excludes_moved_item() {
        let mut board = board(&["p", "q", "r"], &[]);
        let id = "p".to_string();

        assert_eq!(
            board.transfer(&id, &None, &None, 3),
            Err(ReorderError::IndexOutOfBounds { index: 3, len: 2 })
        );
        assert_eq!(board.transfer(&id, &None, &None, 2), Ok(2));
        assert_eq!(ids(&board.ungrouped), vec!["q", "r", "p"]);
    }

    #[test]
    fn test_tracked_lists_order_and_offsets() {
        let board = Board {
            groups: vec![
                Group { id: "one".into(), title: "One".into(), items: vec![item("a")] },
                Group { id: "two".into(), title: "Two".into(), items: vec![] },
            ],
            ungrouped: vec![item("u")],
        };

        let lists = board.tracked_lists(HEADER);

        let order: Vec<ListId> = lists.iter().map(|l| l.list.clone()).collect();
        assert_eq!(order, vec![None, Some("one".into()), Some("two".into())]);
        assert_eq!(lists[0].header_offset, 0.0);
        assert_eq!(lists[1].header_offset, HEADER);
        assert_eq!(lists[1].items, vec![LayoutKey::Item("a".into())]);
    }

    #[test]
    fn test_seed_board_parses() {
        let board = Board::seed();
        assert!(!board.groups.is_empty());
        assert!(board.item_count() > 0);
        assert!(board.locate("ungrouped-1").is_some());
    }
}
