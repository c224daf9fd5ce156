//! Weighted hue histogram and coarse color-group tallies.

/// Number of one-degree bins on the hue circle.
pub const HUE_BINS: usize = 360;

/// Weighted votes per integer hue degree.
///
/// Bins wrap: degree 359 is a neighbor of degree 0 for smoothing.
#[derive(Debug, Clone, PartialEq)]
pub struct HueHistogram {
    bins: [f64; HUE_BINS],
}

impl Default for HueHistogram {
    fn default() -> Self {
        Self {
            bins: [0.0; HUE_BINS],
        }
    }
}

impl HueHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `weight` to the bin for `degree` (taken modulo 360).
    #[inline]
    pub fn add(&mut self, degree: usize, weight: f64) {
        self.bins[degree % HUE_BINS] += weight;
    }

    /// Raw bin values.
    pub fn bins(&self) -> &[f64; HUE_BINS] {
        &self.bins
    }

    /// Circular moving average.
    ///
    /// Each output bin averages the `2 * (window / 2) + 1` bins centred on
    /// it, wrapping around 0/359. Windows wider than the circle are capped
    /// at [`HUE_BINS`]` - 1`.
    pub fn smoothed(&self, window: usize) -> HueHistogram {
        let half = (window.min(HUE_BINS - 1) / 2) as isize;
        let count = (2 * half + 1) as f64;
        let n = HUE_BINS as isize;

        let mut out = HueHistogram::new();
        for (i, slot) in out.bins.iter_mut().enumerate() {
            let mut sum = 0.0;
            for j in -half..=half {
                let idx = (i as isize + j).rem_euclid(n) as usize;
                sum += self.bins[idx];
            }
            *slot = sum / count;
        }
        out
    }

    /// Degree of the first bin holding the strict maximum.
    ///
    /// An empty histogram peaks at 0.
    pub fn peak(&self) -> usize {
        let mut max = 0.0;
        let mut peak = 0;
        for (degree, &value) in self.bins.iter().enumerate() {
            if value > max {
                max = value;
                peak = degree;
            }
        }
        peak
    }
}

/// Six 60° sectors of the hue circle.
///
/// Red straddles 0°, covering `[330, 360)` and `[0, 30)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorGroup {
    Red,
    Yellow,
    Green,
    Cyan,
    Blue,
    Magenta,
}

impl ColorGroup {
    /// All groups in declaration order.
    pub const ALL: [ColorGroup; 6] = [
        ColorGroup::Red,
        ColorGroup::Yellow,
        ColorGroup::Green,
        ColorGroup::Cyan,
        ColorGroup::Blue,
        ColorGroup::Magenta,
    ];

    /// Group of an integer hue degree in `[0, 360)`.
    pub fn from_degree(degree: usize) -> Self {
        match degree % HUE_BINS {
            0..=29 | 330..=359 => ColorGroup::Red,
            30..=89 => ColorGroup::Yellow,
            90..=149 => ColorGroup::Green,
            150..=209 => ColorGroup::Cyan,
            210..=269 => ColorGroup::Blue,
            _ => ColorGroup::Magenta,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorGroup::Red => "red",
            ColorGroup::Yellow => "yellow",
            ColorGroup::Green => "green",
            ColorGroup::Cyan => "cyan",
            ColorGroup::Blue => "blue",
            ColorGroup::Magenta => "magenta",
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Accumulated weight per [`ColorGroup`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupWeights {
    weights: [f64; 6],
}

impl GroupWeights {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn add(&mut self, degree: usize, weight: f64) {
        self.weights[ColorGroup::from_degree(degree).index()] += weight;
    }

    pub fn get(&self, group: ColorGroup) -> f64 {
        self.weights[group.index()]
    }

    /// Largest group weight, 0.0 when nothing was added.
    pub fn max(&self) -> f64 {
        self.weights.iter().copied().fold(0.0, f64::max)
    }

    /// Heaviest group, first in declaration order on ties. `None` when all
    /// weights are zero.
    pub fn dominant(&self) -> Option<ColorGroup> {
        let max = self.max();
        if max <= 0.0 {
            return None;
        }
        ColorGroup::ALL.into_iter().find(|g| self.get(*g) == max)
    }
}
