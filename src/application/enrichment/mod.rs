//! Best-effort enrichment of freshly created songs.
//!
//! Jobs go through a bounded queue drained by a single background worker.
//! Nothing is retried and nothing is reported back to the client: a full
//! queue, a provider failure or a failed write is logged and the job is
//! dropped. Callers must not rely on a song being enriched.

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::Span;

use super::song::Service;
use crate::domain::song::Song;
use crate::domain::song::enrichment::MetadataProvider;
use crate::domain::song::repo::Repo;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnrichmentJob {
    pub song_id: i32,
    pub group: String,
    pub song: String,
}

impl From<&Song> for EnrichmentJob {
    fn from(song: &Song) -> Self {
        Self {
            song_id: song.id,
            group: song.group.clone(),
            song: song.song.clone(),
        }
    }
}

/// Sending half of the enrichment queue
#[derive(Clone)]
pub struct Queue {
    sender: mpsc::Sender<EnrichmentJob>,
    span: Span,
}

impl Queue {
    pub fn channel(
        capacity: usize,
        span: Span,
    ) -> (Self, mpsc::Receiver<EnrichmentJob>) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));

        (Self { sender, span }, receiver)
    }

    /// Never waits. Returns `false` when the job was dropped.
    pub fn submit(&self, job: EnrichmentJob) -> bool {
        match self.sender.try_send(job) {
            Ok(()) => true,
            Err(TrySendError::Full(job)) => {
                tracing::warn!(
                    parent: &self.span,
                    song_id = job.song_id,
                    "enrichment queue is full, job dropped"
                );
                false
            }
            Err(TrySendError::Closed(job)) => {
                tracing::error!(
                    parent: &self.span,
                    song_id = job.song_id,
                    "enrichment worker is gone, job dropped"
                );
                false
            }
        }
    }
}

pub struct Worker<R, P> {
    service: Service<R>,
    provider: P,
    span: Span,
}

impl<R, P> Worker<R, P>
where
    R: Repo,
    P: MetadataProvider,
{
    pub const fn new(service: Service<R>, provider: P, span: Span) -> Self {
        Self {
            service,
            provider,
            span,
        }
    }

    pub async fn run(self, mut receiver: mpsc::Receiver<EnrichmentJob>) {
        while let Some(job) = receiver.recv().await {
            self.process(job).await;
        }

        tracing::info!(parent: &self.span, "enrichment worker stopped");
    }

    pub async fn process(&self, job: EnrichmentJob) {
        let info = match self.provider.fetch(&job.group, &job.song).await {
            Ok(info) => info,
            Err(err) => {
                tracing::error!(
                    parent: &self.span,
                    song_id = job.song_id,
                    "Error request to API: {err}"
                );
                return;
            }
        };

        match self.service.update_info(job.song_id.into(), info).await {
            Ok(_) => tracing::info!(
                parent: &self.span,
                song_id = job.song_id,
                "Update song info successful"
            ),
            Err(err) => tracing::error!(
                parent: &self.span,
                song_id = job.song_id,
                "Error updating song in DB: {err}"
            ),
        }
    }
}

/// Starts the worker on the current runtime and returns the queue feeding it
#[bon::builder]
pub fn spawn<R, P>(
    service: Service<R>,
    provider: P,
    capacity: usize,
    span: Span,
) -> Queue
where
    R: Repo + 'static,
    P: MetadataProvider + 'static,
{
    let (queue, receiver) = Queue::channel(capacity, span.clone());
    let worker = Worker::new(service, provider, span);

    tokio::spawn(worker.run(receiver));

    queue
}
