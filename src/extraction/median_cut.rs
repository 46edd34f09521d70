//! Median-cut color quantization
//!
//! Reduces sampled pixels to a small set of representative colors:
//! - Sample every `quality`-th pixel, skipping transparent and near-white ones
//! - Bucket samples into a 5-bit-per-channel histogram
//! - Repeatedly split the most important box at the weighted median of its
//!   longest axis: first by population, then by population × volume
//! - Report box averages, largest population first

use tracing::{debug, trace};

use super::PaletteExtractor;
use crate::color::Color;
use crate::constants::extraction::{
    MAX_COLOR_COUNT, MIN_ALPHA, POPULATION_SPLIT_FRACTION, SIGNIFICANT_BITS, WHITE_CUTOFF,
};
use crate::error::LoadError;
use crate::image_loader::LoadedImage;

const SIDE: usize = 1 << SIGNIFICANT_BITS;
const SHIFT: u32 = 8 - SIGNIFICANT_BITS;

/// Pixel counts per quantized color cell
struct Histogram {
    counts: Vec<u32>,
}

impl Histogram {
    fn new() -> Self {
        Self {
            counts: vec![0; SIDE * SIDE * SIDE],
        }
    }

    fn index(cell: [usize; 3]) -> usize {
        (cell[0] * SIDE + cell[1]) * SIDE + cell[2]
    }

    fn add(&mut self, rgb: [u8; 3]) {
        let cell = rgb.map(|c| usize::from(c >> SHIFT));
        self.counts[Self::index(cell)] += 1;
    }

    fn count(&self, cell: [usize; 3]) -> u64 {
        u64::from(self.counts[Self::index(cell)])
    }

    fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }
}

/// Axis-aligned box of histogram cells, bounds inclusive and tight around
/// its non-empty cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColorBox {
    min: [usize; 3],
    max: [usize; 3],
    population: u64,
}

impl ColorBox {
    /// Smallest box inside `min..=max` holding every non-empty cell, or
    /// `None` if the range is empty
    fn fit(histogram: &Histogram, min: [usize; 3], max: [usize; 3]) -> Option<Self> {
        let mut lo = [usize::MAX; 3];
        let mut hi = [0usize; 3];
        let mut population = 0u64;

        for r in min[0]..=max[0] {
            for g in min[1]..=max[1] {
                for b in min[2]..=max[2] {
                    let count = histogram.count([r, g, b]);
                    if count == 0 {
                        continue;
                    }
                    population += count;
                    for (axis, value) in [r, g, b].into_iter().enumerate() {
                        lo[axis] = lo[axis].min(value);
                        hi[axis] = hi[axis].max(value);
                    }
                }
            }
        }

        (population > 0).then_some(Self {
            min: lo,
            max: hi,
            population,
        })
    }

    fn extent(&self, axis: usize) -> usize {
        self.max[axis] - self.min[axis]
    }

    fn volume(&self) -> u64 {
        (0..3).map(|axis| self.extent(axis) as u64 + 1).product()
    }

    fn is_splittable(&self) -> bool {
        (0..3).any(|axis| self.extent(axis) > 0)
    }

    /// Split at the weighted median of the longest axis.
    ///
    /// Both halves are non-empty because the bounds are tight.
    fn split(&self, histogram: &Histogram) -> Option<(Self, Self)> {
        let axis = (0..3).max_by_key(|&axis| (self.extent(axis), 2 - axis))?;
        if self.extent(axis) == 0 {
            return None;
        }

        let half = self.population.div_ceil(2);
        let mut cumulative = 0u64;
        let mut cut = self.min[axis];
        for value in self.min[axis]..self.max[axis] {
            cumulative += self.slice_population(histogram, axis, value);
            cut = value;
            if cumulative >= half {
                break;
            }
        }

        let mut left_max = self.max;
        left_max[axis] = cut;
        let mut right_min = self.min;
        right_min[axis] = cut + 1;

        let left = Self::fit(histogram, self.min, left_max)?;
        let right = Self::fit(histogram, right_min, self.max)?;
        Some((left, right))
    }

    fn slice_population(&self, histogram: &Histogram, axis: usize, value: usize) -> u64 {
        let mut min = self.min;
        let mut max = self.max;
        min[axis] = value;
        max[axis] = value;

        let mut total = 0;
        for r in min[0]..=max[0] {
            for g in min[1]..=max[1] {
                for b in min[2]..=max[2] {
                    total += histogram.count([r, g, b]);
                }
            }
        }
        total
    }

    /// Population-weighted mean of the cell centers, on the 0–255 scale
    fn average(&self, histogram: &Histogram) -> Color {
        let scale = f64::from(1u32 << SHIFT);
        let mut sums = [0f64; 3];

        for r in self.min[0]..=self.max[0] {
            for g in self.min[1]..=self.max[1] {
                for b in self.min[2]..=self.max[2] {
                    let count = histogram.count([r, g, b]) as f64;
                    if count == 0.0 {
                        continue;
                    }
                    for (sum, cell) in sums.iter_mut().zip([r, g, b]) {
                        *sum += count * (cell as f64 + 0.5) * scale;
                    }
                }
            }
        }

        let n = self.population as f64;
        Color::from_channels(sums[0] / n, sums[1] / n, sums[2] / n)
    }
}

/// Median-cut palette extractor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MedianCutExtractor;

impl MedianCutExtractor {
    pub fn new() -> Self {
        Self
    }

    fn build_histogram(image: &LoadedImage, quality: u32) -> Histogram {
        let mut histogram = Histogram::new();
        for [r, g, b, a] in image.rgba_pixels().step_by(quality as usize) {
            if a < MIN_ALPHA {
                continue;
            }
            if r > WHITE_CUTOFF && g > WHITE_CUTOFF && b > WHITE_CUTOFF {
                continue;
            }
            histogram.add([r, g, b]);
        }
        histogram
    }

    /// Split boxes in order of `priority` until there are `target` boxes or
    /// none can be split
    fn split_until<F>(boxes: &mut Vec<ColorBox>, histogram: &Histogram, target: usize, priority: F)
    where
        F: Fn(&ColorBox) -> u64,
    {
        while boxes.len() < target {
            let candidate = boxes
                .iter()
                .enumerate()
                .filter(|(_, b)| b.is_splittable())
                .max_by_key(|(_, b)| priority(b))
                .map(|(index, _)| index);

            let Some(index) = candidate else { break };
            let Some((left, right)) = boxes[index].split(histogram) else {
                break;
            };
            boxes[index] = left;
            boxes.push(right);
        }
    }
}

impl PaletteExtractor for MedianCutExtractor {
    fn extract(
        &self,
        image: &LoadedImage,
        color_count: usize,
        quality: u32,
    ) -> Result<Vec<Color>, LoadError> {
        if color_count == 0 || color_count > MAX_COLOR_COUNT {
            return Err(LoadError::extraction(format!(
                "color_count must be between 1 and {MAX_COLOR_COUNT}, got {color_count}"
            )));
        }
        if quality == 0 {
            return Err(LoadError::extraction("quality must be at least 1"));
        }

        let histogram = Self::build_histogram(image, quality);
        let sampled = histogram.total();
        let Some(root) = ColorBox::fit(&histogram, [0; 3], [SIDE - 1; 3]) else {
            debug!(quality, "no eligible pixels for palette extraction");
            return Ok(Vec::new());
        };

        let mut boxes = vec![root];
        let population_target =
            ((color_count as f64 * POPULATION_SPLIT_FRACTION).ceil() as usize).max(1);
        Self::split_until(&mut boxes, &histogram, population_target, |b| b.population);
        Self::split_until(&mut boxes, &histogram, color_count, |b| {
            b.population * b.volume()
        });

        // Stable: equal populations keep split order
        boxes.sort_by(|a, b| b.population.cmp(&a.population));
        trace!(boxes = ?boxes, "median cut boxes");

        let palette: Vec<Color> = boxes.iter().map(|b| b.average(&histogram)).collect();
        debug!(
            sampled,
            requested = color_count,
            extracted = palette.len(),
            "palette extracted"
        );
        Ok(palette)
    }
}
