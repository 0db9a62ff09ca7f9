//! Shape colors and good/bad classification
//!
//! Black is the only "bad" color. Everything else is worth a point.

use rand::Rng;

/// Linear RGBA color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
    pub const MAGENTA: Color = Color::rgb(1.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);

    /// Colors a spawned shape can take. One in eight is black.
    pub const PALETTE: [Color; 8] = [
        Color::BLACK,
        Color::WHITE,
        Color::RED,
        Color::GREEN,
        Color::BLUE,
        Color::CYAN,
        Color::MAGENTA,
        Color::YELLOW,
    ];

    /// Uniform pick from the palette
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::PALETTE[rng.random_range(0..Self::PALETTE.len())]
    }

    /// Pack as 0xRRGGBBAA
    pub fn to_rgba8(&self) -> u32 {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        (q(self.r) << 24) | (q(self.g) << 16) | (q(self.b) << 8) | q(self.a)
    }
}

/// Whether tapping a shape scores or costs a life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeTag {
    Good,
    Bad,
}

impl ShapeTag {
    /// Bad iff the color is exactly the black sentinel
    pub fn classify(color: Color) -> Self {
        if color == Color::BLACK {
            ShapeTag::Bad
        } else {
            ShapeTag::Good
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeTag::Good => "GOOD",
            ShapeTag::Bad => "BAD",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_palette_classification() {
        let bad: Vec<_> = Color::PALETTE
            .iter()
            .filter(|c| ShapeTag::classify(**c) == ShapeTag::Bad)
            .collect();
        assert_eq!(bad, vec![&Color::BLACK]);
    }

    #[test]
    fn test_to_rgba8() {
        assert_eq!(Color::BLACK.to_rgba8(), 0x0000_00ff);
        assert_eq!(Color::YELLOW.to_rgba8(), 0xffff_00ff);
    }

    proptest! {
        #[test]
        fn prop_only_black_is_bad(
            r in 0.0f32..=1.0,
            g in 0.0f32..=1.0,
            b in 0.0f32..=1.0,
            a in 0.0f32..=1.0,
        ) {
            let color = Color { r, g, b, a };
            let expected = if color == Color::BLACK { ShapeTag::Bad } else { ShapeTag::Good };
            prop_assert_eq!(ShapeTag::classify(color), expected);
        }

        #[test]
        fn prop_random_color_comes_from_palette(seed in any::<u64>()) {
            use rand::SeedableRng;
            let mut rng = rand_pcg::Pcg32::seed_from_u64(seed);
            let color = Color::random(&mut rng);
            prop_assert!(Color::PALETTE.contains(&color));
        }
    }
}
