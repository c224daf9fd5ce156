//! Coarse color quantization by fixed-size channel bins.

use std::collections::HashMap;

use crate::color::Rgb;

/// A quantized color and how many pixels fell into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorBucket {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub count: usize,
}

impl ColorBucket {
    pub fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

/// Counts pixels per quantized color.
///
/// Each channel is floored to a multiple of `bin_size`. Buckets remember
/// the order they were first seen in, which decides ties when sorting.
#[derive(Debug, Clone)]
pub struct ColorQuantizer {
    bin_size: u8,
    buckets: Vec<ColorBucket>,
    index: HashMap<(u8, u8, u8), usize>,
}

impl ColorQuantizer {
    /// Create a quantizer. A `bin_size` of 0 is treated as 1.
    pub fn new(bin_size: u8) -> Self {
        Self {
            bin_size: bin_size.max(1),
            buckets: Vec::new(),
            index: HashMap::new(),
        }
    }

    #[inline]
    fn quantize(&self, channel: u8) -> u8 {
        channel / self.bin_size * self.bin_size
    }

    /// Count one pixel.
    pub fn add(&mut self, rgb: Rgb) {
        let key = (
            self.quantize(rgb.r),
            self.quantize(rgb.g),
            self.quantize(rgb.b),
        );
        match self.index.get(&key) {
            Some(&i) => self.buckets[i].count += 1,
            None => {
                self.index.insert(key, self.buckets.len());
                self.buckets.push(ColorBucket {
                    r: key.0,
                    g: key.1,
                    b: key.2,
                    count: 1,
                });
            }
        }
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Buckets by descending count. Equal counts stay in first-seen order.
    pub fn into_sorted(self) -> Vec<ColorBucket> {
        let mut buckets = self.buckets;
        // sort_by is stable
        buckets.sort_by(|a, b| b.count.cmp(&a.count));
        buckets
    }
}
