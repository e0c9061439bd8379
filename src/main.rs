use std::io;
use std::io::Write;
use std::time;

use anyhow::Context;
use crossterm::cursor;
use crossterm::event;
use crossterm::queue;
use crossterm::style;
use crossterm::style::Stylize;
use crossterm::terminal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nested_grid::camera::Camera;
use nested_grid::color::Color;
use nested_grid::config::Config;
use nested_grid::events::AppEvent;
use nested_grid::events::Event;
use nested_grid::grid::Grid;
use nested_grid::io::convert_event;
use nested_grid::rect::Rectangle;

const FRAMERATE: u32 = 60;
const FRAMETIME: time::Duration =
    time::Duration::from_millis(((1f64 / FRAMERATE as f64) * 1_000f64) as u64);

fn main() -> anyhow::Result<()> {
    // logs go to stderr so they can be redirected away from the board, e.g.
    // `RUST_LOG=nested_grid=debug nested-grid 2> grid.log`
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env().context("Failed to read configuration")?;

    let grid = match config.seed {
        Some(seed) => Grid::seeded(config.max_depth, config.palette.clone(), seed),
        None => Grid::from_entropy(config.max_depth, config.palette.clone()),
    }
    .context("Failed to create grid")?;

    info!(?config, "starting");

    let mut cam = Camera::new(config.cells);

    terminal::enable_raw_mode().context("Failed to enable raw mode")?;
    let res = run(grid, &mut cam);
    terminal::disable_raw_mode().context("Failed to disable raw mode")?;

    res
}

fn run(mut grid: Grid, cam: &mut Camera) -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    let mut dirty = true;

    queue!(stdout, cursor::Hide, terminal::Clear(terminal::ClearType::All))?;

    loop {
        if dirty {
            cam.draw(&grid);
            draw(&mut stdout, cam, &grid)?;
            dirty = false;
        }

        if !event::poll(FRAMETIME)? {
            continue;
        }

        match convert_event(event::read()?) {
            None => {}
            Some(Event::App(AppEvent::Exit)) => break,
            Some(Event::App(AppEvent::Resize { cols, rows })) => {
                info!(cols, rows, "resized");
                queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
                dirty = true;
            }
            Some(Event::Grid(command)) => {
                grid.apply(command);
                dirty = true;
            }
        }
    }

    queue!(stdout, cursor::Show, cursor::MoveToNextLine(1))?;
    stdout.flush()?;

    Ok(())
}

/// Paint the camera, two terminal columns per cell so squares look square.
fn draw(stdout: &mut io::Stdout, cam: &Camera, grid: &Grid) -> io::Result<()> {
    queue!(stdout, cursor::MoveTo(0, 0))?;

    for row in cam.rows() {
        for px in row {
            let cell = match px {
                None => "  ".reset(),
                Some(px) if px.highlight => "  ".on(style::Color::Yellow),
                Some(px) => "  ".on(terminal_color(px.color)),
            };

            queue!(stdout, style::PrintStyledContent(cell))?;
        }

        queue!(stdout, cursor::MoveToNextLine(1))?;
    }

    let selected = grid.selected_rect();
    let border = grid
        .squares()
        .into_iter()
        .find(Rectangle::is_selected)
        .map_or(0, |r| r.border_size());

    queue!(
        stdout,
        terminal::Clear(terminal::ClearType::CurrentLine),
        style::Print(format!(
            "selected: {}px at ({}, {}), depth {}/{}, border {}",
            selected.size(),
            selected.x(),
            selected.y(),
            grid.depth(grid.selected()),
            grid.max_depth(),
            border,
        )),
        cursor::MoveToNextLine(1),
        terminal::Clear(terminal::ClearType::CurrentLine),
        style::Print("hjkl/arrows move, s smash, r/R rotate, m/M mirror, q quit"),
    )?;

    stdout.flush()
}

fn terminal_color(color: Color) -> style::Color {
    match color {
        Color::Red => style::Color::Red,
        Color::Green => style::Color::Green,
        Color::Blue => style::Color::Blue,
        Color::Yellow => style::Color::DarkYellow,
        Color::Magenta => style::Color::Magenta,
        Color::Cyan => style::Color::Cyan,
        Color::White => style::Color::White,
        Color::Black => style::Color::Black,
    }
}
