use std::sync::Arc;

use tokio::sync::watch;

/// Lifetime of the presentation surface a run reports to.
///
/// Closing a session cancels every run still bound to it. Clones share the same state.
#[derive(Clone)]
pub struct Session {
    closer: Arc<watch::Sender<bool>>,
    closed: watch::Receiver<bool>,
}

impl Session {
    pub fn new() -> Self {
        let (closer, closed) = watch::channel(false);
        Self {
            closer: Arc::new(closer),
            closed,
        }
    }

    pub fn close(&self) {
        self.closer.send_replace(true);
    }

    pub fn is_closed(&self) -> bool {
        *self.closed.borrow()
    }

    /// Resolves once [`Session::close`] has been called, immediately if it already was.
    pub async fn closed(&self) {
        let mut closed = self.closed.clone();
        if closed.wait_for(|is_closed| *is_closed).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
