use crate::config::StdDevKind;
use crate::statistics::{ConvergencePoint, Estimator, WelfordEstimator};
use std::f64::consts::PI;
use std::fs::File;
use std::io::{BufWriter, Error, Write};
use std::path::Path;

/// Fewer completed runs than this make the error and spread charts meaningless.
pub const MIN_CHART_POINTS: usize = 50;

pub enum CurveFormat {
    Csv,
    Tsv,
    Json,
}

/// Error and spread of the running mean as runs accumulate.
#[derive(Debug, Default, Clone)]
pub struct ConvergenceCurve {
    entries: Vec<ConvergencePoint>,
}

impl ConvergenceCurve {
    /// One point per prefix of `pi_results`, in completion order.
    pub fn from_results(pi_results: &[f64], kind: StdDevKind) -> Self {
        let mut acc = WelfordEstimator::default();
        let entries = pi_results
            .iter()
            .map(|&v| {
                acc.add(v);
                ConvergencePoint {
                    runs: acc.count(),
                    pi_mean: acc.estimation(),
                    pi_error: acc.estimation() - PI,
                    pi_std_dev: acc.std_dev(kind),
                }
            })
            .collect();
        Self { entries }
    }

    pub fn push(&mut self, point: ConvergencePoint) {
        self.entries.push(point)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<ConvergencePoint> {
        self.entries.last().cloned()
    }

    pub fn points(&self) -> &[ConvergencePoint] {
        &self.entries
    }

    pub fn is_chartable(&self) -> bool {
        self.entries.len() >= MIN_CHART_POINTS
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: CurveFormat) -> Result<(), Error> {
        match fmt {
            CurveFormat::Csv => self.export_with_delimiter(path, ','),
            CurveFormat::Tsv => self.export_with_delimiter(path, '\t'),
            CurveFormat::Json => self.export_json(path),
        }
    }

    fn export_with_delimiter<P: AsRef<Path>>(&self, path: P, delimiter: char) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        writeln!(w, "runs{d}pi_mean{d}pi_error{d}pi_std_dev", d = delimiter)?;
        for p in &self.entries {
            writeln!(
                w,
                "{}{d}{:.12}{d}{:.12}{d}{:.12}",
                p.runs,
                p.pi_mean,
                p.pi_error,
                p.pi_std_dev,
                d = delimiter
            )?;
        }
        w.flush()
    }

    fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut w, &self.entries)?;
        writeln!(w)?;
        w.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::Value;
    use std::fs;
    use tempfile::NamedTempFile;

    fn point(runs: usize, mean: f64, sd: f64) -> ConvergencePoint {
        ConvergencePoint {
            runs,
            pi_mean: mean,
            pi_error: mean - PI,
            pi_std_dev: sd,
        }
    }

    #[test]
    fn default_is_empty_and_latest_none() {
        let c = ConvergenceCurve::default();
        assert!(c.is_empty());
        assert!(c.latest().is_none());
        assert!(!c.is_chartable());
    }

    #[test]
    fn prefixes_track_running_mean_and_spread() {
        let c = ConvergenceCurve::from_results(&[3.0, 3.2, 3.4], StdDevKind::Population);
        assert_eq!(c.len(), 3);

        let first = c.points()[0];
        assert_eq!(first.runs, 1);
        assert_eq!(first.pi_mean, 3.0);
        assert_eq!(first.pi_std_dev, 0.0);
        assert_relative_eq!(first.pi_error, 3.0 - PI);

        let second = c.points()[1];
        assert_relative_eq!(second.pi_mean, 3.1, epsilon = 1e-12);
        assert_relative_eq!(second.pi_std_dev, 0.1, epsilon = 1e-12);

        let last = c.latest().unwrap();
        assert_eq!(last.runs, 3);
        assert_relative_eq!(last.pi_mean, 3.2, epsilon = 1e-12);
    }

    #[test]
    fn chartable_from_fifty_points() {
        let values = vec![3.14; MIN_CHART_POINTS - 1];
        let mut c = ConvergenceCurve::from_results(&values, StdDevKind::Population);
        assert!(!c.is_chartable());
        c.push(point(MIN_CHART_POINTS, 3.14, 0.0));
        assert!(c.is_chartable());
    }

    #[test]
    fn export_csv_with_two_rows() {
        let mut c = ConvergenceCurve::default();
        c.push(point(1, 3.0, 0.0));
        c.push(point(2, 3.5, 0.5));

        let tf = NamedTempFile::new().unwrap();
        c.export(tf.path(), CurveFormat::Csv).unwrap();

        let got = fs::read_to_string(tf.path()).unwrap();
        let exp = format!(
            "runs,pi_mean,pi_error,pi_std_dev\n\
             1,3.000000000000,{:.12},0.000000000000\n\
             2,3.500000000000,{:.12},0.500000000000\n",
            3.0 - PI,
            3.5 - PI
        );
        assert_eq!(got, exp);
    }

    #[test]
    fn export_tsv_header_only_when_empty() {
        let c = ConvergenceCurve::default();
        let tf = NamedTempFile::new().unwrap();
        c.export(tf.path(), CurveFormat::Tsv).unwrap();
        let got = fs::read_to_string(tf.path()).unwrap();
        assert_eq!(got, "runs\tpi_mean\tpi_error\tpi_std_dev\n");
    }

    #[test]
    fn export_json_is_an_array_of_points() {
        let mut c = ConvergenceCurve::default();
        c.push(point(1, 3.0, 0.0));
        c.push(point(2, 3.5, 0.5));

        let tf = NamedTempFile::new().unwrap();
        c.export(tf.path(), CurveFormat::Json).unwrap();

        let v: Value = serde_json::from_str(&fs::read_to_string(tf.path()).unwrap()).unwrap();
        let arr = v.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[1]["runs"], 2);
        assert_eq!(arr[1]["pi_mean"], 3.5);
        assert_eq!(arr[1]["pi_std_dev"], 0.5);
    }
}
