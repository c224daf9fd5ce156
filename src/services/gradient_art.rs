//! Random color pairs and direction grids for gradient artwork

use oklch_hue::hsl_to_hex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use utoipa::ToSchema;

/// Gradient angles a cell may take, in degrees
pub const DIRECTIONS: [u16; 4] = [0, 45, 90, 180];

pub const DEFAULT_GRID_SIZE: usize = 8;

/// Largest accepted grid side
pub const MAX_GRID_SIZE: usize = 64;

/// Two complementary HSL colors sharing saturation and lightness
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ArtworkColors {
    pub color1: String,
    pub color2: String,
    pub hue1: u16,
    pub hue2: u16,
    /// Percent, `[70, 100)`
    pub saturation: f64,
    /// Percent, `[40, 60)`
    pub lightness: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct GradientCell {
    pub id: usize,
    pub direction: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Artwork {
    /// Seed that reproduces this artwork
    pub seed: u64,
    pub size: usize,
    pub colors: ArtworkColors,
    pub grid: Vec<GradientCell>,
}

pub fn generate_opposite_colors<R: Rng + ?Sized>(rng: &mut R) -> ArtworkColors {
    let hue1: u16 = rng.gen_range(0..360);
    let hue2 = (hue1 + 180) % 360;
    let saturation = 70.0 + rng.gen::<f64>() * 30.0;
    let lightness = 40.0 + rng.gen::<f64>() * 20.0;

    ArtworkColors {
        color1: hsl_to_hex(f64::from(hue1), saturation, lightness),
        color2: hsl_to_hex(f64::from(hue2), saturation, lightness),
        hue1,
        hue2,
        saturation,
        lightness,
    }
}

/// `size * size` cells, row-major
pub fn generate_grid<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vec<GradientCell> {
    (0..size * size)
        .map(|id| GradientCell {
            id,
            direction: *DIRECTIONS.choose(rng).unwrap_or(&0),
        })
        .collect()
}

/// Colors and grid from one seeded generator
///
/// Without a seed a fresh one is drawn and reported back.
pub fn generate_artwork(seed: Option<u64>, size: usize) -> Artwork {
    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = StdRng::seed_from_u64(seed);

    let colors = generate_opposite_colors(&mut rng);
    let grid = generate_grid(size, &mut rng);

    tracing::debug!(seed, size, hue1 = colors.hue1, "Generated artwork");

    Artwork {
        seed,
        size,
        colors,
        grid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_colors_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let colors = generate_opposite_colors(&mut rng);
            assert!(colors.hue1 < 360);
            assert_eq!(colors.hue2, (colors.hue1 + 180) % 360);
            assert!((70.0..100.0).contains(&colors.saturation));
            assert!((40.0..60.0).contains(&colors.lightness));
            assert_eq!(colors.color1.len(), 7);
            assert_ne!(colors.color1, colors.color2);
        }
    }

    #[test]
    fn test_colors_follow_hsl() {
        let mut rng = StdRng::seed_from_u64(42);
        let colors = generate_opposite_colors(&mut rng);
        assert_eq!(
            colors.color1,
            hsl_to_hex(f64::from(colors.hue1), colors.saturation, colors.lightness)
        );
    }

    #[test]
    fn test_grid_shape() {
        let mut rng = StdRng::seed_from_u64(1);
        let grid = generate_grid(DEFAULT_GRID_SIZE, &mut rng);
        assert_eq!(grid.len(), 64);
        for (i, cell) in grid.iter().enumerate() {
            assert_eq!(cell.id, i);
            assert!(DIRECTIONS.contains(&cell.direction));
        }
        assert!(generate_grid(0, &mut rng).is_empty());
    }

    #[test]
    fn test_seed_is_reproducible() {
        let a = generate_artwork(Some(1234), 4);
        let b = generate_artwork(Some(1234), 4);
        assert_eq!(a, b);
        assert_eq!(a.seed, 1234);
        assert_eq!(a.grid.len(), 16);
    }

    #[test]
    fn test_unseeded_reports_seed() {
        let art = generate_artwork(None, 2);
        assert_eq!(generate_artwork(Some(art.seed), 2), art);
    }
}
