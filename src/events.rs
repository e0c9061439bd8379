pub enum Event {
    Grid(Command),
    App(AppEvent),
}

/// Everything the player can do to the grid. See [`crate::grid::Grid::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Select the parent
    MoveUp,

    /// Select the upper-right child
    MoveDown,

    /// Select the sibling counter-clockwise
    MoveLeft,

    /// Select the sibling clockwise
    MoveRight,

    /// Split the selected square into four
    Smash,

    Rotate { clockwise: bool },

    Mirror { horizontal: bool },
}

pub enum AppEvent {
    /// Terminal was resized to `cols` by `rows`
    Resize { cols: u16, rows: u16 },

    /// Exit the application
    Exit,
}
