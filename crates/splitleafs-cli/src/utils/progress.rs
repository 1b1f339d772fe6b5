use splitleafs::engine::progress::{Progress, ProgressCallback};
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Turns workflow progress events into log records, timing each phase.
#[derive(Clone, Default)]
pub struct CliProgressHandler {
    current: Arc<Mutex<Option<(&'static str, Instant)>>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let current = self.current.clone();

        Box::new(move |progress: Progress| {
            let Ok(mut phase) = current.lock() else {
                warn!("Progress state mutex was poisoned. Cannot report progress.");
                return;
            };

            match progress {
                Progress::PhaseStart { name } => {
                    debug!("Phase '{}' started.", name);
                    *phase = Some((name, Instant::now()));
                }
                Progress::PhaseFinish => {
                    if let Some((name, started)) = phase.take() {
                        debug!("Phase '{}' finished in {:.2?}.", name, started.elapsed());
                    }
                }
                Progress::Message(msg) => info!("{}", msg),
            }
        })
    }

    /// Name of the phase currently running, if any.
    #[cfg(test)]
    pub fn current_phase(&self) -> Option<&'static str> {
        self.current
            .lock()
            .ok()
            .and_then(|phase| (*phase).map(|(name, _)| name))
    }
}
