use std::future::Future;

use tracing::{error, trace};

/// Schedule a detached continuation on the ambient tokio runtime.
///
/// Timers and deferred callbacks are not cancellable once scheduled. Without
/// a runtime the continuation is dropped and logged; interaction methods
/// never panic because of it.
pub(crate) fn spawn_detached<F>(task: &'static str, future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => {
            trace!(task, "Scheduling continuation");
            handle.spawn(future);
        }
        Err(e) => error!(task, error = %e, "No async runtime; continuation dropped"),
    }
}
