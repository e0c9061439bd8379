use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Colors a square can be painted with.
///
/// Yellow is reserved by the frontend for the selection outline, so it is not part of the
/// default palette, but nothing stops a caller from asking for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Magenta,
    Cyan,
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 8] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::Black,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::Black => "black",
        }
    }

    /// Single letter used by the text renderer. Black is `k` so it doesn't clash with blue.
    pub fn letter(&self) -> char {
        match self {
            Color::Red => 'r',
            Color::Green => 'g',
            Color::Blue => 'b',
            Color::Yellow => 'y',
            Color::Magenta => 'm',
            Color::Cyan => 'c',
            Color::White => 'w',
            Color::Black => 'k',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PaletteError {
    #[error("Unknown color \"{name}\"")]
    UnknownColor { name: String },

    #[error("A palette needs at least one color")]
    Empty,
}

impl FromStr for Color {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();

        Color::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| PaletteError::UnknownColor {
                name: name.to_string(),
            })
    }
}

/// A non-empty list of colors new squares are drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: vec![
                Color::Red,
                Color::Green,
                Color::Blue,
                Color::Magenta,
                Color::Cyan,
            ],
        }
    }
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }

        Ok(Self { colors })
    }

    /// Palette with a single color. Handy when the colors don't matter.
    pub fn single(color: Color) -> Self {
        Self {
            colors: vec![color],
        }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Pick a color uniformly at random.
    pub fn pick<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Color {
        // never empty, see `Palette::new`
        self.colors[rng.gen_range(0..self.colors.len())]
    }
}

/// Parses a comma separated list of color names, e.g. `red,green,blue`.
impl FromStr for Palette {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let colors = s
            .split(',')
            .filter(|name| !name.trim().is_empty())
            .map(str::parse)
            .collect::<Result<Vec<Color>, _>>()?;

        Palette::new(colors)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_parse_color_ignores_case_and_padding() {
        assert_eq!(" Magenta ".parse::<Color>(), Ok(Color::Magenta));
        assert_eq!("BLACK".parse::<Color>(), Ok(Color::Black));
    }

    #[test]
    fn test_parse_unknown_color() {
        let err = "mauve".parse::<Color>().unwrap_err();

        assert_eq!(
            err,
            PaletteError::UnknownColor {
                name: "mauve".to_string()
            }
        );
    }

    #[test]
    fn test_parse_palette() {
        let palette: Palette = "red, blue,white".parse().unwrap();

        assert_eq!(palette.colors(), &[Color::Red, Color::Blue, Color::White]);
    }

    #[test]
    fn test_empty_palette_is_rejected() {
        assert_eq!("".parse::<Palette>(), Err(PaletteError::Empty));
        assert_eq!(" , ".parse::<Palette>(), Err(PaletteError::Empty));
        assert_eq!(Palette::new(vec![]), Err(PaletteError::Empty));
    }

    #[test]
    fn test_pick_stays_in_palette() {
        let palette = Palette::new(vec![Color::Green, Color::Black]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let c = palette.pick(&mut rng);
            assert!(palette.colors().contains(&c));
        }
    }

    #[test]
    fn test_letters_are_unique() {
        let mut letters: Vec<char> = Color::ALL.iter().map(Color::letter).collect();
        letters.sort();
        letters.dedup();

        assert_eq!(letters.len(), Color::ALL.len());
    }
}
