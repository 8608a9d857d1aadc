// THEORY:
// Smoothing one outline is a short, pure computation, but a host frequently holds
// many of them (one snake per cell, per frame). Those calls are independent, so
// the `ParallelSmoother` fans them out to a fixed pool of worker tasks.
//
// - A single dispatcher receives jobs and hands them to workers round-robin.
// - Each job carries its own `oneshot` reply channel, so results can never be
//   mixed up between callers and `smooth_all` returns them in input order.
// - Parallelism is across outlines only; a single outline is always smoothed by
//   one worker with the ordinary `smooth` function.

use crate::core_modules::filter_error::{FilterError, FilterResult};
use crate::core_modules::median_smoother::smooth;
use crate::core_modules::point::Point;
use futures::future::join_all;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

pub struct SmoothTask {
    pub job_id: u64,
    pub points: Vec<Point>,
    pub window: i64,
    pub result_sender: oneshot::Sender<FilterResult<Vec<Point>>>,
}

pub struct ParallelSmoother {
    task_sender: mpsc::UnboundedSender<SmoothTask>,
    workers: Vec<tokio::task::JoinHandle<()>>,
    next_job_id: AtomicU64,
}

impl ParallelSmoother {
    /// Starts a pool with one worker per CPU. Must be called inside a tokio runtime.
    pub fn new() -> Self {
        Self::with_workers(num_cpus::get())
    }

    pub fn with_workers(worker_count: usize) -> Self {
        let worker_count = worker_count.max(1);
        let (task_sender, mut task_receiver) = mpsc::unbounded_channel::<SmoothTask>();
        let mut workers = Vec::with_capacity(worker_count);

        let (worker_senders, worker_receivers): (Vec<_>, Vec<_>) = (0..worker_count)
            .map(|_| mpsc::unbounded_channel::<SmoothTask>())
            .unzip();

        // Dispatcher
        tokio::spawn(async move {
            let mut worker_idx = 0;
            while let Some(task) = task_receiver.recv().await {
                if worker_senders[worker_idx].send(task).is_err() {
                    warn!(worker = worker_idx, "smoothing worker is gone, dropping task");
                }
                worker_idx = (worker_idx + 1) % worker_count;
            }
        });

        for (worker_idx, mut worker_receiver) in worker_receivers.into_iter().enumerate() {
            let worker = tokio::spawn(async move {
                while let Some(task) = worker_receiver.recv().await {
                    let SmoothTask {
                        job_id,
                        points,
                        window,
                        result_sender,
                    } = task;

                    // The median itself runs on the blocking pool, off the async threads.
                    let result = match tokio::task::spawn_blocking(move || smooth(&points, window)).await {
                        Ok(result) => result,
                        Err(e) => {
                            warn!(worker = worker_idx, job = job_id, error = %e, "smoothing job panicked");
                            Err(FilterError::WorkerUnavailable)
                        }
                    };
                    if let Err(e) = &result {
                        debug!(worker = worker_idx, job = job_id, error = %e, "smoothing rejected");
                    }
                    let _ = result_sender.send(result);
                }
            });
            workers.push(worker);
        }

        debug!(workers = worker_count, "parallel smoother started");
        Self {
            task_sender,
            workers,
            next_job_id: AtomicU64::new(0),
        }
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Smooths a single outline on the pool.
    pub async fn smooth(&self, points: Vec<Point>, window: i64) -> FilterResult<Vec<Point>> {
        let job_id = self.next_job_id.fetch_add(1, Ordering::Relaxed);
        let (result_sender, result_receiver) = oneshot::channel();

        let task = SmoothTask {
            job_id,
            points,
            window,
            result_sender,
        };

        self.task_sender
            .send(task)
            .map_err(|_| FilterError::WorkerUnavailable)?;

        result_receiver
            .await
            .map_err(|_| FilterError::WorkerUnavailable)?
    }

    /// Smooths every outline with the same window. Results keep the input order.
    pub async fn smooth_all(
        &self,
        outlines: Vec<Vec<Point>>,
        window: i64,
    ) -> Vec<FilterResult<Vec<Point>>> {
        join_all(
            outlines
                .into_iter()
                .map(|points| self.smooth(points, window)),
        )
        .await
    }
}
