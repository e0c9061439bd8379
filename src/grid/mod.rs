use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::debug;
use tracing::trace;

use crate::color::Palette;
use crate::events::Command;
use crate::rect::Rectangle;

pub use crate::grid::node::Children;
pub use crate::grid::node::Node;
pub use crate::grid::node::NodeId;
pub use crate::grid::node::Quadrant;

mod node;
mod transform;

/// Side length of the whole board, in pixels
pub const MAX_SIZE: u32 = 512;

/// Deepest a grid may go. One level further and squares would be smaller than a pixel.
pub const DEPTH_LIMIT: u8 = MAX_SIZE.trailing_zeros() as u8;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GridError {
    #[error("Max depth must be between 1 and {limit}, got {depth}", limit = DEPTH_LIMIT)]
    InvalidDepth { depth: u8 },
}

/// The game board: a quad-tree of squares, one of which is selected.
///
/// Every node owns a [`Rectangle`] and has either no children or exactly four, stored in the
/// order upper-right, lower-right, lower-left, upper-left (see [`Quadrant`]). Only leaves are
/// visible. Nodes are never removed, so a [`NodeId`] stays valid for the life of the grid.
///
/// Commands never fail. Moving up from the root, smashing a square that is already split or
/// too small, or rotating a leaf all leave the grid as it was.
#[derive(Debug)]
pub struct Grid<R = StdRng> {
    /// The index of the root in `nodes`. Always `0`.
    root: NodeId,

    /// The index of the selected node in `nodes`
    selected: NodeId,

    nodes: Vec<Node>,

    palette: Palette,

    max_depth: u8,

    /// Squares this size or smaller can't be smashed
    lowest_size: u32,

    rng: R,
}

impl Grid<StdRng> {
    /// Create a grid whose colors are seeded from the OS.
    pub fn from_entropy(max_depth: u8, palette: Palette) -> Result<Self, GridError> {
        Self::new(max_depth, palette, StdRng::from_entropy())
    }

    /// Create a grid that always plays out the same way for the same `seed`.
    pub fn seeded(max_depth: u8, palette: Palette, seed: u64) -> Result<Self, GridError> {
        Self::new(max_depth, palette, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Grid<R> {
    /// Create a grid with five squares: the root, and the four children it is immediately
    /// smashed into. The (now hidden) root starts out selected.
    ///
    /// New squares get a color drawn from `palette` using `rng`.
    pub fn new(max_depth: u8, palette: Palette, rng: R) -> Result<Self, GridError> {
        if max_depth == 0 || max_depth > DEPTH_LIMIT {
            return Err(GridError::InvalidDepth { depth: max_depth });
        }

        let mut grid = Self {
            root: 0,
            selected: 0,
            nodes: Vec::new(),
            palette,
            max_depth,
            lowest_size: MAX_SIZE >> max_depth,
            rng,
        };

        let color = grid.palette.pick(&mut grid.rng);
        let mut rect = Rectangle::new(0, 0, MAX_SIZE, color);
        rect.set_selected(true);
        grid.nodes.push(Node::new(rect, None));

        grid.split(grid.root);

        debug!(max_depth, lowest_size = grid.lowest_size, "created grid");

        Ok(grid)
    }

    /// Smash the selected square into four smaller ones.
    ///
    /// Nothing happens if the square is already split, or if it is at or below the smallest
    /// size allowed by the max depth. The selection stays on the smashed square, which is now
    /// hidden behind its children.
    pub fn smash(&mut self) {
        let id = self.selected;
        let node = &self.nodes[id];

        if !node.is_leaf() {
            trace!(node = id, "already smashed");
            return;
        }

        if node.rect.size() <= self.lowest_size {
            trace!(node = id, size = node.rect.size(), "too small to smash");
            return;
        }

        self.split(id);

        debug!(node = id, size = self.nodes[id].rect.size(), "smashed");
    }

    /// Run a single command.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::MoveUp => self.move_up(),
            Command::MoveDown => self.move_down(),
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::Smash => self.smash(),
            Command::Rotate { clockwise } => self.rotate(clockwise),
            Command::Mirror { horizontal } => self.mirror(horizontal),
        }
    }

    /// Hide `id` and give it four visible children tiling its area.
    fn split(&mut self, id: NodeId) {
        let parent = self.nodes[id].rect;
        let size = parent.size() / 2;

        let mut ids = [0; 4];
        for q in Quadrant::ALL {
            let (x, y) = q.origin(parent.x(), parent.y(), parent.size());
            let color = self.palette.pick(&mut self.rng);

            ids[q.index()] = self.nodes.len();
            let rect = Rectangle::new(x, y, size, color);
            self.nodes.push(Node::new(rect, Some(id)));
        }

        let node = &mut self.nodes[id];
        node.rect.set_visible(false);
        node.children = Children::Split(ids);
    }
}

impl<R> Grid<R> {
    /// Select the parent of the selected square, if there is one.
    pub fn move_up(&mut self) {
        let Some(parent) = self.nodes[self.selected].parent else {
            trace!("already at the root");
            return;
        };

        self.select(parent);
    }

    /// Select the upper-right child of the selected square, if it has children.
    pub fn move_down(&mut self) {
        let Children::Split(children) = self.nodes[self.selected].children else {
            trace!(node = self.selected, "no children to move into");
            return;
        };

        self.select(children[Quadrant::UpperRight.index()]);
    }

    /// Select the next sibling counter-clockwise. The root has no siblings.
    pub fn move_left(&mut self) {
        self.move_sibling(Quadrant::counter_clockwise);
    }

    /// Select the next sibling clockwise. The root has no siblings.
    pub fn move_right(&mut self) {
        self.move_sibling(Quadrant::clockwise);
    }

    fn move_sibling(&mut self, next: fn(Quadrant) -> Quadrant) {
        let Some(q) = self.quadrant(self.selected) else {
            trace!("the root has no siblings");
            return;
        };

        let Some(parent) = self.nodes[self.selected].parent else {
            return;
        };

        let Children::Split(siblings) = self.nodes[parent].children else {
            return;
        };

        self.select(siblings[next(q).index()]);
    }

    fn select(&mut self, id: NodeId) {
        self.nodes[self.selected].rect.set_selected(false);
        self.selected = id;
        self.nodes[id].rect.set_selected(true);

        trace!(node = id, "selected");
    }

    /// Every square in the grid, hidden ones included, with their border sizes filled in.
    ///
    /// Squares come in depth-first pre-order: a node, then its upper-right, lower-right,
    /// lower-left and upper-left subtrees. Deeper squares always come after the squares they
    /// cover, so drawing in this order paints the board correctly.
    pub fn squares(&self) -> Vec<Rectangle> {
        let root = self.nodes[self.root].rect;
        let mut squares = Vec::with_capacity(self.nodes.len());

        self.collect(self.root, &root, &mut squares);

        squares
    }

    fn collect(&self, id: NodeId, root: &Rectangle, squares: &mut Vec<Rectangle>) {
        let node = &self.nodes[id];
        squares.push(node.rect.with_border(root));

        if let Children::Split(children) = node.children {
            for child in children {
                self.collect(child, root, squares);
            }
        }
    }

    /// Like [`Grid::squares`], but only the squares that are actually shown (the leaves).
    pub fn visible_squares(&self) -> Vec<Rectangle> {
        self.squares()
            .into_iter()
            .filter(Rectangle::is_visible)
            .collect()
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn selected(&self) -> NodeId {
        self.selected
    }

    pub fn selected_rect(&self) -> &Rectangle {
        &self.nodes[self.selected].rect
    }

    /// # Panics
    ///
    /// If `id` did not come from this grid.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Which child of its parent `id` is. `None` for the root.
    pub fn quadrant(&self, id: NodeId) -> Option<Quadrant> {
        let parent = self.nodes[id].parent?;
        let Children::Split(siblings) = self.nodes[parent].children else {
            return None;
        };

        siblings
            .iter()
            .position(|&s| s == id)
            .map(Quadrant::from_index)
    }

    /// Distance from the root, which is at depth `0`.
    pub fn depth(&self, mut id: NodeId) -> u8 {
        let mut depth = 0;

        while let Some(parent) = self.nodes[id].parent {
            id = parent;
            depth += 1;
        }

        depth
    }

    /// Number of nodes, hidden ones included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`, a grid has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    pub fn lowest_size(&self) -> u32 {
        self.lowest_size
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}
