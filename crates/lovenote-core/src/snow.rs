//! Falling snow decoration.
//!
//! Twenty flakes, each with an independently sampled position, fall
//! duration, start delay and size. The layout is drawn once per mount and
//! is purely visual.

use std::ops::Range;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of flakes in a snowfall
pub const SNOWFLAKE_COUNT: usize = 20;

/// Horizontal position, percent of viewport width
pub const LEFT_PERCENT: Range<f64> = 0.0..100.0;
/// Time for one fall, seconds
pub const DURATION_SECS: Range<f64> = 5.0..10.0;
/// Start offset of the fall animation, seconds
pub const DELAY_SECS: Range<f64> = 0.0..5.0;
/// Glyph size, pixels
pub const FONT_SIZE_PX: Range<f64> = 10.0..30.0;

/// Layout parameters for one flake
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnowflakeDescriptor {
    pub left: f64,
    pub duration: f64,
    pub delay: f64,
    pub font_size: f64,
}

impl SnowflakeDescriptor {
    /// Draw one flake uniformly from the documented ranges
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left: rng.random_range(LEFT_PERCENT),
            duration: rng.random_range(DURATION_SECS),
            delay: rng.random_range(DELAY_SECS),
            font_size: rng.random_range(FONT_SIZE_PX),
        }
    }

    /// Inline CSS for this flake
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; animation-duration: {:.2}s; animation-delay: {:.2}s; font-size: {:.2}px;",
            self.left, self.duration, self.delay, self.font_size
        )
    }

    pub fn in_bounds(&self) -> bool {
        LEFT_PERCENT.contains(&self.left)
            && DURATION_SECS.contains(&self.duration)
            && DELAY_SECS.contains(&self.delay)
            && FONT_SIZE_PX.contains(&self.font_size)
    }
}

/// An immutable set of [`SNOWFLAKE_COUNT`] flakes
#[derive(Clone, Debug, PartialEq)]
pub struct Snowfall {
    flakes: Vec<SnowflakeDescriptor>,
}

impl Snowfall {
    /// Sample a new layout from the thread RNG
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::rng())
    }

    /// Sample a new layout from the given RNG
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let flakes = (0..SNOWFLAKE_COUNT)
            .map(|_| SnowflakeDescriptor::sample(rng))
            .collect();
        Self { flakes }
    }

    pub fn flakes(&self) -> &[SnowflakeDescriptor] {
        &self.flakes
    }

    pub fn len(&self) -> usize {
        self.flakes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flakes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SnowflakeDescriptor> {
        self.flakes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generates_twenty_flakes_in_bounds() {
        let snowfall = Snowfall::generate();
        assert_eq!(snowfall.len(), 20);
        assert!(snowfall.iter().all(SnowflakeDescriptor::in_bounds));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = Snowfall::generate_with(&mut StdRng::seed_from_u64(7));
        let b = Snowfall::generate_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn style_formats_units() {
        let flake = SnowflakeDescriptor {
            left: 12.5,
            duration: 6.0,
            delay: 1.25,
            font_size: 18.0,
        };
        assert_eq!(
            flake.style(),
            "left: 12.50%; animation-duration: 6.00s; animation-delay: 1.25s; font-size: 18.00px;"
        );
    }

    #[test]
    fn out_of_range_flake_detected() {
        let flake = SnowflakeDescriptor {
            left: 50.0,
            duration: 11.0,
            delay: 0.0,
            font_size: 10.0,
        };
        assert!(!flake.in_bounds());
    }
}
