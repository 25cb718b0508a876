use std::{
    future::Future,
    path::PathBuf,
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;
use tracing::{
    debug,
    error,
};

use super::TaskResult;
use crate::core::{
    http::ApiClient,
    models::LessonSummary,
    NotesError,
};

type Repaint = Arc<dyn Fn() + Send + Sync>;

/// Runs service requests off the UI thread and queues their results.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    client: ApiClient,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
    repaint: Option<Repaint>,
}

impl TaskManager {
    pub fn new(client: ApiClient) -> Result<Self, NotesError> {
        let runtime = Arc::new(Runtime::new()?);
        let (sender, receiver) = mpsc::channel();

        Ok(Self { runtime, client, receiver, sender, repaint: None })
    }

    /// Called after every result is queued so the UI wakes up to drain it.
    pub fn with_repaint(mut self, repaint: impl Fn() + Send + Sync + 'static) -> Self {
        self.repaint = Some(Arc::new(repaint));
        self
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            debug!("Task finished: {}", result.task_type());
            results.push(result);
        }

        results
    }

    fn spawn<F, Fut>(&self, job: F)
    where
        F: FnOnce(ApiClient) -> Fut + Send + 'static,
        Fut: Future<Output = TaskResult>,
    {
        let sender = self.sender.clone();
        let runtime = self.runtime.clone();
        let client = self.client.clone();
        let repaint = self.repaint.clone();

        thread::spawn(move || {
            let result = runtime.block_on(job(client));

            if sender.send(result).is_err() {
                error!("Task result dropped: receiver is gone");
                return;
            }
            if let Some(repaint) = repaint {
                repaint();
            }
        });
    }

    pub fn upload(&self, file: PathBuf) {
        self.spawn(move |client| async move {
            let result = client.upload(&file).await;
            TaskResult::Upload { file, result }
        });
    }

    pub fn check_health(&self) {
        self.spawn(|client| async move {
            let reachable = client.health().await.unwrap_or(false);
            TaskResult::Health(reachable)
        });
    }

    pub fn load_lessons(&self) {
        self.spawn(|client| async move {
            TaskResult::Lessons(client.list_lessons().await.map_err(|e| e.user_message()))
        });
    }

    pub fn load_lesson_notions(&self, summary: LessonSummary) {
        self.spawn(move |client| async move {
            let result = client
                .lesson_notions(summary.id)
                .await
                .map(|notions| notions.into_document(&summary))
                .map_err(|e| e.user_message());
            TaskResult::LessonNotions { summary, result }
        });
    }
}
