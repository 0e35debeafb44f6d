//! Fire-and-forget persistence of chat exchanges.

use isla_core::assistant::Answer;
use isla_core::chat::{InteractionRecord, InteractionRepository};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::task::TaskTracker;

/// Records question/answer pairs without holding up the answer.
///
/// Write failures go to the `interaction_log` tracing target only. Pending
/// writes are tracked so [`InteractionLogger::drain`] can wait for them
/// before the runtime goes away. Clones share the tracker.
#[derive(Clone)]
pub struct InteractionLogger {
    repository: Arc<dyn InteractionRepository>,
    tracker: TaskTracker,
}

impl InteractionLogger {
    pub fn new(repository: Arc<dyn InteractionRepository>) -> Self {
        Self {
            repository,
            tracker: TaskTracker::new(),
        }
    }

    /// Spawns the write and returns immediately.
    pub fn log(
        &self,
        session_id: &str,
        island_id: Option<String>,
        question: &str,
        answer: &Answer,
    ) -> JoinHandle<()> {
        let record = InteractionRecord::new(
            session_id,
            island_id,
            question,
            answer.text.clone(),
            answer.source,
        );
        let repository = Arc::clone(&self.repository);

        self.tracker.spawn(async move {
            match repository.append(&record).await {
                Ok(()) => tracing::debug!(
                    target: "interaction_log",
                    session_id = %record.session_id,
                    "Interaction recorded"
                ),
                Err(e) => tracing::warn!(
                    target: "interaction_log",
                    session_id = %record.session_id,
                    "Failed to record interaction: {}",
                    e
                ),
            }
        })
    }

    /// Waits for every write spawned so far. Logging keeps working afterwards.
    pub async fn drain(&self) {
        self.tracker.close();
        self.tracker.wait().await;
        self.tracker.reopen();
    }

    pub fn pending(&self) -> usize {
        self.tracker.len()
    }
}
