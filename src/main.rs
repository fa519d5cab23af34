use anyhow::{Context, Result, anyhow};
use montepi::persistence::{SETTINGS_FILE_NAME, Settings};
use montepi::session::{CancellationToken, LogOutcome};
use montepi::statistics::{ConvergenceCurve, CurveFormat};
use montepi::tasks::RunOrchestrator;
use montepi::ui::cli::drivers::InquireDriver;
use montepi::ui::cli::wizard::configure_session;
use montepi::ui::render::{ProgressRenderer, format_summary, spawn_stdin_watch};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use tracing::{info, warn};

fn init_tracing() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{EnvFilter, fmt};
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn curve_format(path: &Path) -> CurveFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some("tsv") => CurveFormat::Tsv,
        Some("json") => CurveFormat::Json,
        _ => CurveFormat::Csv,
    }
}

fn main() -> Result<()> {
    init_tracing();

    let settings = Settings::load_or_default(SETTINGS_FILE_NAME).unwrap_or_else(|e| {
        warn!(error = %e, "could not load settings, using defaults");
        Settings::default()
    });

    let outcome = configure_session(&InquireDriver, &settings)?;
    if outcome.save_settings {
        outcome
            .updated_settings(&settings)
            .save(SETTINGS_FILE_NAME)
            .with_context(|| format!("saving {SETTINGS_FILE_NAME}"))?;
        info!(file = SETTINGS_FILE_NAME, "settings saved");
    }
    let plan = outcome.plan;
    let animation = plan.config.animation;

    let cancel = CancellationToken::new();
    let (tx, rx) = mpsc::channel();
    let mut orchestrator = RunOrchestrator::new(plan.config.clone())?
        .with_progress(tx)
        .with_cancellation(cancel.clone());

    let renderer = ProgressRenderer::new(animation, plan.config.run_count).spawn(rx);
    let _stdin = spawn_stdin_watch(cancel);
    println!("Press Enter to stop early.");

    let result = thread::spawn(move || orchestrator.estimate())
        .join()
        .map_err(|_| anyhow!("estimation thread panicked"))??;

    match renderer.join() {
        Ok(Ok(_)) => {}
        Ok(Err(e)) => warn!(error = %e, "progress output failed"),
        Err(_) => warn!("progress renderer panicked"),
    }

    println!();
    print!("{}", format_summary(&result, animation));
    match &result.log {
        LogOutcome::Written(path) => println!("Results saved to {}", path.display()),
        LogOutcome::Failed(reason) => println!("Results not saved: {reason}"),
        LogOutcome::Skipped => {}
    }

    if let Some(path) = plan.curve_export.as_deref() {
        match result.aggregate {
            Some(a) => {
                ConvergenceCurve::from_results(&result.pi_results, a.std_dev_kind)
                    .export(path, curve_format(path))
                    .with_context(|| format!("exporting convergence curve to {}", path.display()))?;
                println!("Convergence curve written to {}", path.display());
            }
            None => warn!("no completed runs, convergence curve not written"),
        }
    }
    Ok(())
}
