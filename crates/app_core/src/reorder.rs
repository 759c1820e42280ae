//! Drag-to-reorder list state

/// Move the element at `from` to `to`, shifting the items in between by one.
/// Returns false (and leaves `items` untouched) for a drop on itself or an
/// out-of-range index.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == to || from >= items.len() || to >= items.len() {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}

/// Pointer state of a reorderable list
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReorderList {
    dragging: Option<usize>,
    hovered: Option<usize>,
}

impl ReorderList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pick_up(&mut self, index: usize) {
        self.dragging = Some(index);
        self.hovered = None;
    }

    pub fn hover(&mut self, index: usize) {
        if self.dragging.is_some() {
            self.hovered = Some(index);
        }
    }

    pub fn dragging(&self) -> Option<usize> {
        self.dragging
    }

    /// Drop target currently under the pointer, if it differs from the source
    pub fn drop_target(&self) -> Option<usize> {
        match (self.dragging, self.hovered) {
            (Some(from), Some(to)) if from != to => Some(to),
            _ => None,
        }
    }

    /// Finish the drag over `index`. Returns whether `items` changed.
    pub fn drop_on<T>(&mut self, items: &mut Vec<T>, index: usize) -> bool {
        let moved = match self.dragging.take() {
            Some(from) => move_item(items, from, index),
            None => false,
        };
        self.hovered = None;
        moved
    }

    pub fn cancel(&mut self) {
        self.dragging = None;
        self.hovered = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_forward() {
        let mut v = vec!['a', 'b', 'c', 'd'];
        assert!(move_item(&mut v, 0, 2));
        assert_eq!(v, vec!['b', 'c', 'a', 'd']);
    }

    #[test]
    fn test_move_backward() {
        let mut v = vec!['a', 'b', 'c', 'd'];
        assert!(move_item(&mut v, 3, 1));
        assert_eq!(v, vec!['a', 'd', 'b', 'c']);
    }

    #[test]
    fn test_drop_on_self_is_noop() {
        let mut v = vec![1, 2, 3];
        assert!(!move_item(&mut v, 1, 1));
        assert!(!move_item(&mut v, 0, 3));
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn test_drag_cycle() {
        let mut v = vec!["x", "y", "z"];
        let mut list = ReorderList::new();

        list.hover(1);
        assert_eq!(list.drop_target(), None);

        list.pick_up(2);
        list.hover(2);
        assert_eq!(list.drop_target(), None);
        list.hover(0);
        assert_eq!(list.drop_target(), Some(0));

        assert!(list.drop_on(&mut v, 0));
        assert_eq!(v, vec!["z", "x", "y"]);
        assert_eq!(list.dragging(), None);

        // Dropping without a pick-up does nothing
        assert!(!list.drop_on(&mut v, 1));
    }

    #[test]
    fn test_cancel() {
        let mut list = ReorderList::new();
        list.pick_up(0);
        list.hover(1);
        list.cancel();
        assert_eq!(list, ReorderList::new());
    }
}
