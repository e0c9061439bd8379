use crate::rect::Rectangle;

/// Index of a [`Node`] in the grid's arena.
pub type NodeId = usize;

/// Position of a child within its parent.
///
/// ```notrust
///    |-----|-----|
///    |  UL |  UR |
///    |-----+-----|
///    |  LL |  LR |
///    |-----|-----|
/// ```
///
/// The discriminant is the child's index, so going clockwise around the parent means going up
/// by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    UpperRight = 0,
    LowerRight = 1,
    LowerLeft = 2,
    UpperLeft = 3,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::UpperRight,
        Quadrant::LowerRight,
        Quadrant::LowerLeft,
        Quadrant::UpperLeft,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(i: usize) -> Self {
        Self::ALL[i % 4]
    }

    /// Next quadrant going clockwise
    pub fn clockwise(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Next quadrant going counter-clockwise
    pub fn counter_clockwise(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Top-left corner of this quadrant within a parent at `(x, y)` with side length `size`.
    pub fn origin(self, x: u32, y: u32, size: u32) -> (u32, u32) {
        let h = size / 2;

        match self {
            Quadrant::UpperRight => (x + h, y),
            Quadrant::LowerRight => (x + h, y + h),
            Quadrant::LowerLeft => (x, y + h),
            Quadrant::UpperLeft => (x, y),
        }
    }
}

/// Either nothing below, or exactly four children, indexed by [`Quadrant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Children {
    Leaf,
    Split([NodeId; 4]),
}

#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) rect: Rectangle,

    /// Navigation only. The arena owns every node.
    pub(crate) parent: Option<NodeId>,

    pub(crate) children: Children,
}

impl Node {
    pub(crate) fn new(rect: Rectangle, parent: Option<NodeId>) -> Self {
        Self {
            rect,
            parent,
            children: Children::Leaf,
        }
    }

    pub fn rect(&self) -> &Rectangle {
        &self.rect
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> Option<[NodeId; 4]> {
        match self.children {
            Children::Leaf => None,
            Children::Split(ids) => Some(ids),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.children, Children::Leaf)
    }
}

#[cfg(test)]
mod tests {
    use super::Quadrant;

    #[test]
    fn test_neighbours_wrap_around() {
        assert_eq!(Quadrant::UpperRight.counter_clockwise(), Quadrant::UpperLeft);
        assert_eq!(Quadrant::UpperLeft.clockwise(), Quadrant::UpperRight);
        assert_eq!(Quadrant::LowerRight.clockwise(), Quadrant::LowerLeft);
        assert_eq!(Quadrant::LowerLeft.counter_clockwise(), Quadrant::LowerRight);
    }

    #[test]
    fn test_origins_tile_parent() {
        let origins: Vec<_> = Quadrant::ALL
            .iter()
            .map(|q| q.origin(256, 0, 256))
            .collect();

        assert_eq!(origins, [(384, 0), (384, 128), (256, 128), (256, 0)]);
    }
}
