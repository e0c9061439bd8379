use nested_grid::camera::Camera;
use nested_grid::color::Color;
use nested_grid::color::Palette;
use nested_grid::events::Command;
use nested_grid::grid::Grid;
use nested_grid::grid::Quadrant;
use rand::rngs::mock::StepRng;

fn red_grid() -> Grid {
    Grid::seeded(2, Palette::single(Color::Red), 0).unwrap()
}

/// Two color palette, colors alternate red, blue, red, ... starting with the root.
///
/// `StepRng` hands out `0, 2^63, 0, 2^63, ...`, which picks the first and second color of a two
/// color palette in turn.
fn striped_grid() -> Grid<StepRng> {
    let palette = Palette::new(vec![Color::Red, Color::Blue]).unwrap();

    Grid::new(2, palette, StepRng::new(0, 1 << 63)).unwrap()
}

#[test]
fn new_grid_shows_four_red_quadrants() {
    let grid = red_grid();

    let visible: Vec<_> = grid
        .visible_squares()
        .iter()
        .map(|r| (r.x(), r.y(), r.size(), r.color()))
        .collect();

    assert_eq!(
        visible,
        [
            (256, 0, 256, Color::Red),
            (256, 256, 256, Color::Red),
            (0, 256, 256, Color::Red),
            (0, 0, 256, Color::Red),
        ]
    );

    // the root is in there too, hidden and selected
    let all = grid.squares();
    assert_eq!(all.len(), 5);
    assert!(!all[0].is_visible());
    assert!(all[0].is_selected());
}

#[test]
fn smashing_the_root_again_does_nothing() {
    let mut grid = red_grid();
    let before = grid.squares();

    grid.smash();

    assert_eq!(grid.squares(), before);
}

#[test]
fn smash_stops_at_lowest_size() {
    let mut grid = red_grid();

    grid.move_down();
    grid.smash();

    let children = grid.node(grid.selected()).children().unwrap();
    let rects: Vec<_> = children
        .iter()
        .map(|&c| {
            let r = grid.node(c).rect();
            (r.x(), r.y(), r.size())
        })
        .collect();
    assert_eq!(
        rects,
        [(384, 0, 128), (384, 128, 128), (256, 128, 128), (256, 0, 128)]
    );

    grid.move_down();
    grid.smash();

    assert!(grid.node(grid.selected()).is_leaf());
    assert_eq!(grid.visible_squares().len(), 7);
}

#[test]
fn sideways_moves_wrap_around() {
    let mut grid = red_grid();
    grid.move_down();
    assert_eq!(grid.quadrant(grid.selected()), Some(Quadrant::UpperRight));

    grid.move_left();
    assert_eq!(grid.quadrant(grid.selected()), Some(Quadrant::UpperLeft));

    grid.move_right();
    assert_eq!(grid.quadrant(grid.selected()), Some(Quadrant::UpperRight));
}

#[test]
fn commands_never_fail() {
    let mut grid = red_grid();

    // nothing to do for any of these at the root of a fresh grid, except moving down
    for command in [
        Command::MoveUp,
        Command::MoveLeft,
        Command::MoveRight,
        Command::Smash,
    ] {
        grid.apply(command);
        assert_eq!(grid.selected(), grid.root());
    }

    // and at a leaf
    grid.apply(Command::MoveDown);
    let leaf = grid.squares();
    grid.apply(Command::MoveDown);
    grid.apply(Command::Rotate { clockwise: true });
    grid.apply(Command::Mirror { horizontal: false });

    assert_eq!(grid.squares(), leaf);
}

#[test]
fn border_sizes_of_new_grid() {
    let grid = red_grid();

    let borders: Vec<_> = grid.squares().iter().map(|r| r.border_size()).collect();

    // every quadrant touches two edges
    assert_eq!(borders, [1024, 512, 512, 512, 512]);
}

#[test]
fn striped_colors_are_predictable() {
    let grid = striped_grid();

    let colors: Vec<_> = grid.squares().iter().map(|r| r.color()).collect();

    assert_eq!(
        colors,
        [Color::Red, Color::Blue, Color::Red, Color::Blue, Color::Red]
    );
}

#[test]
fn camera_shows_selected_root() {
    let grid = striped_grid();
    let mut cam = Camera::new(8);

    cam.draw(&grid);

    insta::assert_snapshot!(cam.render().trim_end(), @r"
    RRRRBBBB
    RrrrbbbB
    RrrrbbbB
    RrrrbbbB
    BbbbrrrR
    BbbbrrrR
    BbbbrrrR
    BBBBRRRR
    ");
}

#[test]
fn camera_follows_rotate_and_smash() {
    let mut grid = striped_grid();
    let mut cam = Camera::new(8);

    grid.rotate(true);
    cam.draw(&grid);

    insta::assert_snapshot!(cam.render().trim_end(), @r"
    BBBBRRRR
    BbbbrrrR
    BbbbrrrR
    BbbbrrrR
    RrrrbbbB
    RrrrbbbB
    RrrrbbbB
    RRRRBBBB
    ");

    grid.move_down();
    grid.smash();
    cam.draw(&grid);

    insta::assert_snapshot!(cam.render().trim_end(), @r"
    bbbbRRBB
    bbbbRrbB
    bbbbBbrR
    bbbbBBRR
    rrrrbbbb
    rrrrbbbb
    rrrrbbbb
    rrrrbbbb
    ");
}
