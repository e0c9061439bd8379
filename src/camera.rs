use crate::color::Color;
use crate::grid::Grid;
use crate::grid::MAX_SIZE;
use crate::rect::Rectangle;

/// What ends up in a single cell of the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub color: Color,

    /// Part of the outline of the selected square
    pub highlight: bool,
}

/// Looks at the whole board through a grid of `n` by `n` cells.
///
/// Each cell stands for a `scale` by `scale` block of board pixels and takes the color of
/// whatever square covers the block's top-left pixel. Squares smaller than a cell still get one
/// cell, so nothing the player can select ever disappears entirely.
pub struct Camera {
    /// The cell buffer. `None` where no visible square has been drawn.
    cb: Vec<Option<Pixel>>,

    /// The frame buffer
    fb: String,

    /// Cells on each side
    n: usize,

    /// Board pixels per cell
    scale: u32,
}

impl Camera {
    /// # Panics
    ///
    /// If `n` is not a power of two between `1` and [`MAX_SIZE`].
    pub fn new(n: u32) -> Self {
        assert!(
            n.is_power_of_two() && n <= MAX_SIZE,
            "camera size must be a power of two no larger than the board"
        );

        let cells = n as usize;

        // one byte per cell, one newline per row
        let fb = String::with_capacity(cells * cells + cells);

        Self {
            cb: vec![None; cells * cells],
            fb,
            n: cells,
            scale: MAX_SIZE / n,
        }
    }

    /// Cells on each side
    pub fn size(&self) -> usize {
        self.n
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// The cell at column `x`, row `y`
    pub fn pixel(&self, x: usize, y: usize) -> Option<Pixel> {
        self.cb[self.xy_from(x, y)]
    }

    /// Reset the cell buffer
    pub fn reset(&mut self) {
        self.cb.fill(None);
    }

    /// Draw every visible square of `grid`, then outline the selected one.
    pub fn draw<R>(&mut self, grid: &Grid<R>) {
        self.reset();

        // pre-order: smaller squares come after, and land on top
        for rect in grid.squares().iter().filter(|r| r.is_visible()) {
            self.draw_square(rect);
        }

        self.draw_outline(grid.selected_rect());
    }

    /// Fill the cells covered by `rect` with its color.
    pub fn draw_square(&mut self, rect: &Rectangle) {
        let (xs, ys) = self.span(rect);

        for y in ys {
            for x in xs.clone() {
                let i = self.xy_from(x, y);
                self.cb[i] = Some(Pixel {
                    color: rect.color(),
                    highlight: false,
                });
            }
        }
    }

    /// Highlight the cells on the edge of `rect`. Cells nothing was drawn on are left alone.
    pub fn draw_outline(&mut self, rect: &Rectangle) {
        let (xs, ys) = self.span(rect);
        let (x0, x1) = (xs.start, xs.end - 1);
        let (y0, y1) = (ys.start, ys.end - 1);

        for y in ys {
            for x in xs.clone() {
                if x != x0 && x != x1 && y != y0 && y != y1 {
                    continue;
                }

                let i = self.xy_from(x, y);
                if let Some(px) = &mut self.cb[i] {
                    px.highlight = true;
                }
            }
        }
    }

    /// Render the cell buffer as text, one line per row.
    ///
    /// Every cell is the letter of its color (see [`Color::letter`]), upper case if it is
    /// highlighted, or `.` if it is empty.
    pub fn render(&mut self) -> &str {
        self.fb.clear();

        for (i, px) in self.cb.iter().enumerate() {
            if i > 0 && i % self.n == 0 {
                self.fb.push('\n');
            }

            let c = match px {
                None => '.',
                Some(Pixel {
                    color,
                    highlight: false,
                }) => color.letter(),
                Some(Pixel {
                    color,
                    highlight: true,
                }) => color.letter().to_ascii_uppercase(),
            };

            self.fb.push(c);
        }
        self.fb.push('\n');

        &self.fb
    }

    /// Rows of the cell buffer, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Pixel>]> {
        self.cb.chunks(self.n)
    }

    /// Columns and rows of cells covered by `rect`. Never empty.
    fn span(&self, rect: &Rectangle) -> (std::ops::Range<usize>, std::ops::Range<usize>) {
        let s = self.scale;
        let n = self.n;

        let axis = |start: u32, size: u32| {
            let lo = ((start / s) as usize).min(n - 1);
            let hi = ((start + size).div_ceil(s) as usize).clamp(lo + 1, n);

            lo..hi
        };

        (axis(rect.x(), rect.size()), axis(rect.y(), rect.size()))
    }

    fn xy_from(&self, x: usize, y: usize) -> usize {
        y * self.n + x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Palette;

    #[test]
    fn test_small_squares_get_a_cell() {
        let mut cam = Camera::new(4);
        cam.draw_square(&Rectangle::new(0, 0, 512, Color::Red));
        cam.draw_square(&Rectangle::new(130, 260, 8, Color::Blue));

        assert_eq!(cam.render(), "rrrr\nrrrr\nrbrr\nrrrr\n");
    }

    #[test]
    fn test_outline_skips_empty_cells() {
        let mut cam = Camera::new(2);
        cam.draw_square(&Rectangle::new(0, 0, 256, Color::Green));
        cam.draw_outline(&Rectangle::new(0, 0, 512, Color::Green));

        assert_eq!(cam.render(), "G.\n..\n");
    }

    #[test]
    fn test_draw_outlines_selected_leaf() {
        let mut grid = Grid::seeded(2, Palette::single(Color::Cyan), 3).unwrap();
        grid.move_down();
        grid.move_left();

        let mut cam = Camera::new(4);
        cam.draw(&grid);

        assert_eq!(cam.render(), "CCcc\nCCcc\ncccc\ncccc\n");
        assert_eq!(cam.rows().count(), 4);
        assert_eq!(
            cam.pixel(0, 0),
            Some(Pixel {
                color: Color::Cyan,
                highlight: true
            })
        );
    }
}
