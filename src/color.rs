//! Random color generation.
//!
//! Colors are sampled in HSV space using a per-hue dictionary of
//! saturation/brightness lower bounds, then rendered as `#rrggbb` hex.
//! The dictionary values follow the `randomColor` family of generators.

use clap::ValueEnum;
use rand::RngExt;

/// A named region of the color wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Hue {
    Monochrome,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
}

/// The fixed hue list cycled by [`ColorGen::across_hues`].
pub const HUE_WHEEL: [Hue; 7] = [
    Hue::Red,
    Hue::Orange,
    Hue::Yellow,
    Hue::Green,
    Hue::Blue,
    Hue::Purple,
    Hue::Pink,
];

impl Hue {
    /// Hue range in degrees. Red wraps around zero.
    fn range(self) -> (i32, i32) {
        match self {
            Hue::Monochrome => (0, 0),
            Hue::Red => (-26, 18),
            Hue::Orange => (18, 46),
            Hue::Yellow => (46, 62),
            Hue::Green => (62, 178),
            Hue::Blue => (178, 257),
            Hue::Purple => (257, 282),
            Hue::Pink => (282, 334),
        }
    }

    /// (saturation, brightness) points below which colors of this hue
    /// wash out. Saturation is the x axis, ascending.
    fn lower_bounds(self) -> &'static [(i32, i32)] {
        match self {
            Hue::Monochrome => &[(0, 0), (100, 0)],
            Hue::Red => &[
                (20, 100),
                (30, 92),
                (40, 89),
                (50, 85),
                (60, 78),
                (70, 70),
                (80, 60),
                (90, 55),
                (100, 50),
            ],
            Hue::Orange => &[
                (20, 100),
                (30, 93),
                (40, 88),
                (50, 86),
                (60, 85),
                (70, 70),
                (100, 70),
            ],
            Hue::Yellow => &[
                (25, 100),
                (40, 94),
                (50, 89),
                (60, 86),
                (70, 84),
                (80, 82),
                (90, 80),
                (100, 75),
            ],
            Hue::Green => &[
                (30, 100),
                (40, 90),
                (50, 85),
                (60, 81),
                (70, 74),
                (80, 64),
                (90, 50),
                (100, 40),
            ],
            Hue::Blue => &[
                (20, 100),
                (30, 86),
                (40, 80),
                (50, 74),
                (60, 60),
                (70, 52),
                (80, 44),
                (90, 39),
                (100, 35),
            ],
            Hue::Purple => &[
                (20, 100),
                (30, 87),
                (40, 79),
                (50, 70),
                (60, 65),
                (70, 59),
                (80, 52),
                (90, 45),
                (100, 42),
            ],
            Hue::Pink => &[
                (20, 100),
                (30, 90),
                (40, 86),
                (60, 84),
                (80, 80),
                (90, 75),
                (100, 73),
            ],
        }
    }

    fn saturation_range(self) -> (i32, i32) {
        let bounds = self.lower_bounds();
        (bounds[0].0, bounds[bounds.len() - 1].0)
    }

    /// Interpolated minimum brightness keeping a color of this hue
    /// readable at the given saturation.
    fn minimum_brightness(self, saturation: i32) -> i32 {
        for pair in self.lower_bounds().windows(2) {
            let (s1, v1) = pair[0];
            let (s2, v2) = pair[1];
            if saturation >= s1 && saturation <= s2 {
                let m = (v2 - v1) as f64 / (s2 - s1) as f64;
                return (m * saturation as f64 + (v1 as f64 - m * s1 as f64)) as i32;
            }
        }
        0
    }

    /// Classify an absolute hue angle into its named region.
    fn classify(degrees: i32) -> Hue {
        // The red range is expressed as [-26, 18], so the top of the
        // wheel folds back to negative degrees.
        let degrees = if degrees >= 334 { degrees - 360 } else { degrees };
        HUE_WHEEL
            .into_iter()
            .find(|hue| {
                let (lo, hi) = hue.range();
                degrees >= lo && degrees <= hi
            })
            .unwrap_or(Hue::Monochrome)
    }
}

/// How light the sampled colors should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Luminosity {
    Bright,
    Light,
    Dark,
    Random,
}

/// A color in HSV space (hue 0-360, saturation and value 0-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    pub hue: i32,
    pub saturation: i32,
    pub value: i32,
}

impl Hsv {
    /// Render as a lowercase `#rrggbb` hex string.
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// HSV to RGB on the 0-255 scale.
    pub fn to_rgb(self) -> (u8, u8, u8) {
        // Fold the degenerate angles inward so the sextant math stays
        // in range.
        let h = match self.hue {
            0 => 1,
            360 => 359,
            h => h,
        } as f64
            / 360.0;
        let s = self.saturation as f64 / 100.0;
        let v = self.value as f64 / 100.0;

        let i = (h * 6.0).floor();
        let f = h * 6.0 - i;
        let p = v * (1.0 - s);
        let q = v * (1.0 - f * s);
        let t = v * (1.0 - (1.0 - f) * s);

        let (r, g, b) = match i as i32 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        (
            (r * 255.0).floor() as u8,
            (g * 255.0).floor() as u8,
            (b * 255.0).floor() as u8,
        )
    }
}

/// Samples colors, optionally biased toward one hue.
pub struct ColorGen<R> {
    rng: R,
    hue: Option<Hue>,
    luminosity: Luminosity,
}

impl ColorGen<rand::rngs::ThreadRng> {
    pub fn new(hue: Option<Hue>, luminosity: Luminosity) -> Self {
        Self::with_rng(rand::rng(), hue, luminosity)
    }
}

impl<R: RngExt> ColorGen<R> {
    /// Sampler over an explicit rng. Tests pass a seeded `StdRng`.
    pub fn with_rng(rng: R, hue: Option<Hue>, luminosity: Luminosity) -> Self {
        Self {
            rng,
            hue,
            luminosity,
        }
    }

    /// Sample one color using the configured hue bias.
    pub fn sample(&mut self) -> Hsv {
        self.sample_with(self.hue)
    }

    /// Sample one color of the given hue, ignoring the configured bias.
    pub fn sample_in(&mut self, hue: Hue) -> Hsv {
        self.sample_with(Some(hue))
    }

    /// Exactly `count` hex colors.
    pub fn generate(&mut self, count: usize) -> Vec<String> {
        (0..count).map(|_| self.sample().to_hex()).collect()
    }

    /// Exactly `count` hex colors cycling through [`HUE_WHEEL`] in order.
    pub fn across_hues(&mut self, count: usize) -> Vec<String> {
        (0..count)
            .map(|i| self.sample_in(HUE_WHEEL[i % HUE_WHEEL.len()]).to_hex())
            .collect()
    }

    fn sample_with(&mut self, hue: Option<Hue>) -> Hsv {
        let (degrees, hue) = self.pick_hue(hue);
        let saturation = self.pick_saturation(hue);
        let value = self.pick_value(hue, saturation);
        Hsv {
            hue: degrees,
            saturation,
            value,
        }
    }

    fn pick_hue(&mut self, hue: Option<Hue>) -> (i32, Hue) {
        match hue {
            Some(Hue::Monochrome) => (0, Hue::Monochrome),
            Some(hue) => {
                let (lo, hi) = hue.range();
                let degrees = self.rng.random_range(lo..=hi);
                (if degrees < 0 { degrees + 360 } else { degrees }, hue)
            }
            None => {
                let degrees = self.rng.random_range(0..=360);
                (degrees, Hue::classify(degrees))
            }
        }
    }

    fn pick_saturation(&mut self, hue: Hue) -> i32 {
        if hue == Hue::Monochrome {
            return 0;
        }
        if self.luminosity == Luminosity::Random {
            return self.rng.random_range(0..=100);
        }

        let (mut lo, mut hi) = hue.saturation_range();
        match self.luminosity {
            Luminosity::Bright => lo = 55,
            Luminosity::Dark => lo = hi - 10,
            Luminosity::Light => hi = 55,
            Luminosity::Random => unreachable!(),
        }
        self.rng.random_range(lo..=hi)
    }

    fn pick_value(&mut self, hue: Hue, saturation: i32) -> i32 {
        let mut lo = hue.minimum_brightness(saturation);
        let mut hi = 100;
        match self.luminosity {
            Luminosity::Bright => {}
            Luminosity::Dark => hi = lo + 20,
            Luminosity::Light => lo = (hi + lo) / 2,
            Luminosity::Random => {
                lo = 0;
                hi = 100;
            }
        }
        self.rng.random_range(lo..=hi)
    }
}
