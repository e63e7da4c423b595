//! Descriptive statistics over numeric columns.

use std::fmt;

use rust_decimal::Decimal;

/// Summary statistics of a numeric column, missing values dropped.
///
/// `std` is the sample standard deviation and is `None` for fewer than two
/// values; every other statistic is `None` for an empty column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Describe {
    /// Number of present values.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: Option<f64>,
    /// Sample standard deviation (n - 1).
    pub std: Option<f64>,
    /// Minimum.
    pub min: Option<f64>,
    /// First quartile.
    pub q25: Option<f64>,
    /// Median.
    pub q50: Option<f64>,
    /// Third quartile.
    pub q75: Option<f64>,
    /// Maximum.
    pub max: Option<f64>,
}

impl Describe {
    /// Describes the present values of `values`.
    ///
    /// Quantiles interpolate linearly between the closest ranks.
    ///
    /// # Example
    ///
    /// ```
    /// use fund_audit::aggregation::Describe;
    ///
    /// let d = Describe::from_values([Some(1.0), None, Some(2.0), Some(3.0), Some(4.0)]);
    /// assert_eq!(d.count, 4);
    /// assert_eq!(d.mean, Some(2.5));
    /// assert_eq!(d.q25, Some(1.75));
    /// assert_eq!(d.q50, Some(2.5));
    /// ```
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        let mut sorted: Vec<f64> = values.into_iter().flatten().filter(|v| !v.is_nan()).collect();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        if count == 0 {
            return Self {
                count,
                mean: None,
                std: None,
                min: None,
                q25: None,
                q50: None,
                q75: None,
                max: None,
            };
        }

        let n = count as f64;
        let mean = sorted.iter().sum::<f64>() / n;
        let std = (count > 1).then(|| {
            let squares: f64 = sorted.iter().map(|v| (v - mean).powi(2)).sum();
            (squares / (n - 1.0)).sqrt()
        });

        Self {
            count,
            mean: Some(mean),
            std,
            min: sorted.first().copied(),
            q25: Some(quantile(&sorted, 0.25)),
            q50: Some(quantile(&sorted, 0.5)),
            q75: Some(quantile(&sorted, 0.75)),
            max: sorted.last().copied(),
        }
    }

    fn rows(&self) -> [(&'static str, Option<f64>); 8] {
        [
            ("count", Some(self.count as f64)),
            ("mean", self.mean),
            ("std", self.std),
            ("min", self.min),
            ("25%", self.q25),
            ("50%", self.q50),
            ("75%", self.q75),
            ("max", self.max),
        ]
    }
}

/// Linear-interpolation quantile of a sorted, non-empty slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

impl fmt::Display for Describe {
    /// Renders one `name value` line per statistic, values right-aligned with
    /// six decimals and missing ones as `NaN`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<(&str, String)> = self
            .rows()
            .iter()
            .map(|(name, value)| {
                let text = value.map_or_else(|| "NaN".to_string(), |v| format!("{v:.6}"));
                (*name, text)
            })
            .collect();
        let width = cells.iter().map(|(_, t)| t.len()).max().unwrap_or(0);
        for (i, (name, text)) in cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{name:<5}  {text:>width$}")?;
        }
        Ok(())
    }
}

/// Sums the present values; an empty sum is zero.
pub fn sum_present<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = Option<Decimal>>,
{
    values.into_iter().flatten().sum()
}
