use std::{
    io,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
    time::Duration,
};

/// Repeating background action with a one-shot stop signal.
///
/// The action runs on its own thread once per interval. The thread is never
/// joined, so it does not hold the process open.
pub(crate) struct PeriodicTicker;

impl PeriodicTicker {
    pub(crate) fn start<F>(
        name: &str,
        interval: Duration,
        mut action: F,
    ) -> io::Result<TickerHandle>
    where
        F: FnMut() + Send + 'static,
    {
        let stopped = Arc::new(AtomicBool::new(false));
        let thread_stopped = Arc::clone(&stopped);

        thread::Builder::new()
            .name(name.to_string())
            .spawn(move || loop {
                thread::sleep(interval);
                if thread_stopped.load(Ordering::Acquire) {
                    break;
                }
                action();
            })?;

        Ok(TickerHandle { stopped })
    }
}

/// Dropping the handle leaves the ticker running; only `stop` ends it.
#[derive(Debug, Clone)]
pub(crate) struct TickerHandle {
    stopped: Arc<AtomicBool>,
}

impl TickerHandle {
    pub(crate) fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
    }

    pub(crate) fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }
}
