use tracing::debug;

use crate::grid::Children;
use crate::grid::Grid;
use crate::grid::NodeId;
use crate::grid::Quadrant;

impl<R> Grid<R> {
    /// Rotate everything below the selected square by a quarter turn.
    ///
    /// Clockwise, the upper-left child moves to the upper-right, the upper-right to the
    /// lower-right, and so on around. Every descendant is turned the same way, so the picture
    /// inside each child rotates along with it. Does nothing on a leaf.
    pub fn rotate(&mut self, clockwise: bool) {
        debug!(node = self.selected, clockwise, "rotate");

        self.rotate_from(self.selected, clockwise);
    }

    /// Flip everything below the selected square.
    ///
    /// A horizontal flip swaps the upper and lower rows of children, a vertical flip swaps the
    /// left and right columns. Does nothing on a leaf.
    pub fn mirror(&mut self, horizontal: bool) {
        debug!(node = self.selected, horizontal, "mirror");

        self.mirror_from(self.selected, horizontal);
    }

    fn rotate_from(&mut self, id: NodeId, clockwise: bool) {
        let Children::Split(mut children) = self.nodes[id].children else {
            return;
        };

        // children are stored clockwise, so a clockwise turn shifts everything up one slot
        if clockwise {
            children.rotate_right(1);
        } else {
            children.rotate_left(1);
        }

        self.rearrange(id, children);

        for child in children {
            self.rotate_from(child, clockwise);
        }
    }

    fn mirror_from(&mut self, id: NodeId, horizontal: bool) {
        let Children::Split(mut children) = self.nodes[id].children else {
            return;
        };

        let pairs = if horizontal {
            [
                (Quadrant::UpperRight, Quadrant::LowerRight),
                (Quadrant::LowerLeft, Quadrant::UpperLeft),
            ]
        } else {
            [
                (Quadrant::UpperRight, Quadrant::UpperLeft),
                (Quadrant::LowerRight, Quadrant::LowerLeft),
            ]
        };

        for (a, b) in pairs {
            children.swap(a.index(), b.index());
        }

        self.rearrange(id, children);

        for child in children {
            self.mirror_from(child, horizontal);
        }
    }

    /// Store the new child order of `id` and move each child to the corner its slot calls for.
    ///
    /// Only the children themselves move here, their own children are placed when the
    /// recursion reaches them.
    fn rearrange(&mut self, id: NodeId, children: [NodeId; 4]) {
        let parent = self.nodes[id].rect;
        self.nodes[id].children = Children::Split(children);

        for q in Quadrant::ALL {
            let (x, y) = q.origin(parent.x(), parent.y(), parent.size());
            self.nodes[children[q.index()]].rect.set_position(x, y);
        }
    }
}
