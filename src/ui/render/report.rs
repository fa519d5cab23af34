use crate::config::AnimationLevel;
use crate::session::SessionResult;
use crate::statistics::{ConvergenceCurve, Histogram, MIN_CHART_POINTS};
use std::time::Duration;

const HISTOGRAM_WIDTH: usize = 40;
const CURVE_ROWS: usize = 10;

/// `HH:MM:SS`, hours not wrapped at 24.
pub fn format_elapsed(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}:{:02}", secs / 3600, secs % 3600 / 60, secs % 60)
}

/// End-of-session text report.
pub fn format_summary(result: &SessionResult, animation: AnimationLevel) -> String {
    let mut lines = Vec::new();
    let runs = result.completed_runs();

    if result.is_cancelled() {
        lines.push("Interrupted runs before end".to_string());
    }
    match result.aggregate() {
        Ok(a) => {
            lines.push(if runs == 1 {
                format!("Made one run with {} dots", result.dots)
            } else {
                format!("Made a total of {runs} runs, each one with {} dots", result.dots)
            });
            lines.push(format!("Estimated pi = {:.8}", a.pi_mean));
            lines.push(format!("Error = {:.8}", a.pi_error));
            lines.push(format!("St.dev = {:.8}", a.pi_std_dev));
        }
        Err(_) => lines.push("No run completed, nothing to estimate".to_string()),
    }
    lines.push(format!(
        "Total time = {} (animation = {animation})",
        format_elapsed(result.elapsed)
    ));

    let mut out = lines.join("\n");
    out.push('\n');
    if runs >= MIN_CHART_POINTS {
        out.push_str(&charts(result));
    }
    out
}

fn charts(result: &SessionResult) -> String {
    let mut out = String::new();
    if let Some(a) = result.aggregate {
        let curve = ConvergenceCurve::from_results(&result.pi_results, a.std_dev_kind);
        let step = (curve.len() / CURVE_ROWS).max(1);
        out.push_str("\nConvergence (runs, error, st.dev):\n");
        for p in curve.points().iter().skip(step - 1).step_by(step) {
            out.push_str(&format!("{p}\n"));
        }
    }
    if let Some(h) = Histogram::scott(&result.pi_results) {
        out.push_str("\nDistribution of the run estimates:\n");
        out.push_str(&h.render(HISTOGRAM_WIDTH));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StdDevKind;
    use crate::session::{LogOutcome, SessionState};
    use crate::statistics::Aggregate;

    fn result(state: SessionState, pi_results: Vec<f64>) -> SessionResult {
        SessionResult {
            state,
            aggregate: Aggregate::from_results(&pi_results, StdDevKind::Population).ok(),
            timestamp: "20250101_120000".into(),
            requested_runs: 100,
            dots: 1000,
            elapsed: Duration::from_secs(3725),
            log: LogOutcome::Skipped,
            pi_results,
        }
    }

    #[test]
    fn elapsed_is_zero_padded() {
        assert_eq!(format_elapsed(Duration::from_secs(0)), "00:00:00");
        assert_eq!(format_elapsed(Duration::from_millis(61_900)), "00:01:01");
        assert_eq!(format_elapsed(Duration::from_secs(3725)), "01:02:05");
        assert_eq!(format_elapsed(Duration::from_secs(90_000)), "25:00:00");
    }

    #[test]
    fn completed_summary_lines() {
        let text = format_summary(
            &result(SessionState::Completed, vec![3.0, 3.2]),
            AnimationLevel::Med,
        );
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Made a total of 2 runs, each one with 1000 dots");
        assert_eq!(lines[1], "Estimated pi = 3.10000000");
        assert!(lines[2].starts_with("Error = -0.0415"));
        assert_eq!(lines[3], "St.dev = 0.10000000");
        assert_eq!(lines[4], "Total time = 01:02:05 (animation = med)");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn single_run_uses_singular_form() {
        let text = format_summary(&result(SessionState::Completed, vec![3.2]), AnimationLevel::Min);
        assert!(text.starts_with("Made one run with 1000 dots\n"));
    }

    #[test]
    fn cancelled_summary_is_flagged() {
        let text = format_summary(&result(SessionState::Cancelled, vec![3.0]), AnimationLevel::Max);
        assert!(text.starts_with("Interrupted runs before end\n"));

        let empty = format_summary(&result(SessionState::Cancelled, vec![]), AnimationLevel::Max);
        assert!(empty.contains("No run completed"));
        assert!(!empty.contains("Estimated pi"));
    }

    #[test]
    fn charts_appear_from_fifty_runs() {
        let values: Vec<f64> = (0..MIN_CHART_POINTS).map(|i| 3.1 + (i % 7) as f64 * 0.01).collect();
        let text = format_summary(&result(SessionState::Completed, values), AnimationLevel::Med);
        assert!(text.contains("Convergence"));
        assert!(text.contains("Distribution"));
        assert_eq!(text.lines().filter(|l| l.starts_with("runs=")).count(), 10);

        let short = format_summary(
            &result(SessionState::Completed, vec![3.1; MIN_CHART_POINTS - 1]),
            AnimationLevel::Med,
        );
        assert!(!short.contains("Convergence"));
    }
}
