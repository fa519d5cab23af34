use crate::config::AnimationLevel;
use crate::session::{Notification, NotificationScope};
use std::io::{self, Write};
use std::sync::mpsc::Receiver;
use std::thread::{self, JoinHandle};

/// Counts of what the renderer saw and printed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderStats {
    pub received: usize,
    pub rendered: usize,
}

/// Prints progress notifications, filtered by animation level.
#[derive(Debug, Clone, Copy)]
pub struct ProgressRenderer {
    animation: AnimationLevel,
    requested_runs: usize,
}

impl ProgressRenderer {
    pub fn new(animation: AnimationLevel, requested_runs: usize) -> Self {
        Self {
            animation,
            requested_runs,
        }
    }

    /// Whether `n` is visible at this renderer's animation level.
    pub fn shows(&self, n: &Notification) -> bool {
        match n.scope {
            NotificationScope::Session => true,
            NotificationScope::Run => match self.animation {
                AnimationLevel::Min => {
                    n.run_index == 0 || n.run_index + 1 == self.requested_runs
                }
                AnimationLevel::Med | AnimationLevel::Max => true,
            },
            NotificationScope::Batch => self.animation == AnimationLevel::Max,
        }
    }

    pub fn render(&self, n: &Notification) -> Option<String> {
        self.shows(n).then(|| self.line(n))
    }

    fn line(&self, n: &Notification) -> String {
        match n.scope {
            NotificationScope::Batch => format!("  {n}"),
            NotificationScope::Run => format!("[{}/{}] {n}", n.run_index + 1, self.requested_runs),
            NotificationScope::Session => n.to_string(),
        }
    }

    /// Writes every visible notification until all senders are gone.
    ///
    /// At `min`, a session that stops early still shows its last completed
    /// run, just before the final line.
    pub fn drain<W: Write>(&self, rx: Receiver<Notification>, out: &mut W) -> io::Result<RenderStats> {
        let mut stats = RenderStats::default();
        let mut held: Option<Notification> = None;
        for n in rx {
            stats.received += 1;
            if n.scope == NotificationScope::Run {
                held = (!self.shows(&n)).then(|| n.clone());
            }
            if n.scope == NotificationScope::Session {
                if let Some(last) = held.take() {
                    writeln!(out, "{}", self.line(&last))?;
                    stats.rendered += 1;
                }
            }
            if let Some(line) = self.render(&n) {
                writeln!(out, "{line}")?;
                stats.rendered += 1;
            }
        }
        if let Some(last) = held {
            writeln!(out, "{}", self.line(&last))?;
            stats.rendered += 1;
        }
        out.flush()?;
        Ok(stats)
    }

    /// Renders to stdout on a background thread.
    pub fn spawn(self, rx: Receiver<Notification>) -> JoinHandle<io::Result<RenderStats>> {
        thread::spawn(move || self.drain(rx, &mut io::stdout().lock()))
    }
}
