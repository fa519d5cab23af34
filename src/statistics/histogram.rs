/// One histogram bucket, `[lower, upper)` except the last which is closed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    bins: Vec<Bin>,
}

impl Histogram {
    /// Bins `values` with Scott's rule, `width = 3.49 * sigma * n^(-1/3)`.
    ///
    /// Returns `None` for an empty input. A zero spread yields a single bin.
    pub fn scott(values: &[f64]) -> Option<Self> {
        let n = values.len();
        if n == 0 {
            return None;
        }
        let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let mean = values.iter().sum::<f64>() / n as f64;
        let var = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n as f64;
        let width = 3.49 * var.sqrt() * (n as f64).powf(-1.0 / 3.0);

        let count = if width > 0.0 && hi > lo {
            (((hi - lo) / width).ceil() as usize).max(1)
        } else {
            1
        };
        Some(Self::with_bins(values, lo, hi, count))
    }

    fn with_bins(values: &[f64], lo: f64, hi: f64, count: usize) -> Self {
        let step = (hi - lo) / count as f64;
        let mut bins: Vec<Bin> = (0..count)
            .map(|i| Bin {
                lower: lo + step * i as f64,
                upper: if i + 1 == count { hi } else { lo + step * (i + 1) as f64 },
                count: 0,
            })
            .collect();

        for &v in values {
            let idx = if step > 0.0 {
                (((v - lo) / step) as usize).min(count - 1)
            } else {
                0
            };
            bins[idx].count += 1;
        }
        Self { bins }
    }

    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// Horizontal bar chart, the tallest bin spanning `width` characters.
    pub fn render(&self, width: usize) -> String {
        let peak = self.bins.iter().map(|b| b.count).max().unwrap_or(0).max(1);
        self.bins
            .iter()
            .map(|b| {
                let bar = "#".repeat(b.count * width / peak);
                format!(
                    "{:>10.6} .. {:<10.6} | {bar:<width$} {}\n",
                    b.lower, b.upper, b.count
                )
            })
            .collect()
    }
}
