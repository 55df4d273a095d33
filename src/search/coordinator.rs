//! Search coordination: candidate enumeration, worker fan-out, result collection.

use std::sync::Arc;

use log::{debug, info};
use tokio::task;

use super::channels::create_result_channel;
use super::config::SearchConfig;
use super::matcher::matches_at;
use super::partition::WorkerPartition;
use super::types::{MatchResult, Template};
use crate::error::SearchError;
use crate::raster::Image;

/// Drives the exhaustive (template x scale x anchor) enumeration over a
/// reference image.
///
/// The reference is shared read-only; workers never need locking.
pub struct SearchCoordinator {
    reference: Arc<Image>,
    config: SearchConfig,
}

impl SearchCoordinator {
    pub fn new(reference: Image, config: SearchConfig) -> Self {
        Self {
            reference: Arc::new(reference),
            config,
        }
    }

    pub fn reference(&self) -> &Image {
        &self.reference
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Scan one worker's share of the candidate space for a single template.
    ///
    /// Enumeration order: scale 1..=`max_scale` (the template is scaled
    /// once per factor), then the partition's reference columns, then
    /// every reference row. Each successful candidate is handed to
    /// `emit`. The closure is the seam between enumeration and
    /// transport: the in-process runner wires it to a channel sender and
    /// a distributed host can substitute its own.
    pub fn scan_partition(
        reference: &Image,
        template: &Template,
        max_scale: u32,
        partition: WorkerPartition,
        mut emit: impl FnMut(MatchResult),
    ) {
        for scale in 1..=max_scale {
            let scaled = template.image.scale(scale);
            for column in partition.column_range(reference.width()) {
                for row in 0..reference.height() {
                    if matches_at(reference, &scaled, row, column) {
                        emit(MatchResult {
                            template_id: template.id,
                            position_x: column,
                            position_y: row,
                        });
                    }
                }
            }
        }
    }

    /// Single-worker baseline: the full candidate space in enumeration
    /// order, sorted for presentation.
    pub fn run_sequential(&self, templates: &[Template]) -> Vec<MatchResult> {
        let mut results = Vec::new();
        for template in templates {
            Self::scan_partition(
                &self.reference,
                template,
                self.config.max_scale,
                WorkerPartition::solo(),
                |result| results.push(result),
            );
        }
        results.sort_unstable();
        results
    }

    /// Fan the candidate space out across the configured workers and
    /// collect every match, globally sorted.
    ///
    /// Each worker owns a disjoint column slice of the reference;
    /// together the slices cover the full enumeration exactly once, so a
    /// single-worker run takes the same path as the baseline. The
    /// collector's `recv` loop ends when the last sender drops, so a
    /// worker that finds nothing cannot stall the run. A worker panic
    /// surfaces as [`SearchError::WorkerJoin`], distinct from an empty
    /// result set.
    pub async fn run(&self, templates: Vec<Template>) -> Result<Vec<MatchResult>, SearchError> {
        let worker_count = self.config.worker_count.max(1);
        let templates = Arc::new(templates);
        let (sender, mut receiver) = create_result_channel();

        info!(
            "searching {} template(s) with {} worker(s), scales 1..={}",
            templates.len(),
            worker_count,
            self.config.max_scale
        );

        let mut workers = Vec::with_capacity(worker_count);
        for index in 0..worker_count {
            let partition = WorkerPartition::new(index, worker_count);
            let reference = Arc::clone(&self.reference);
            let templates = Arc::clone(&templates);
            let sender = sender.clone();
            let max_scale = self.config.max_scale;
            workers.push(task::spawn_blocking(move || {
                let mut emitted = 0usize;
                for template in templates.iter() {
                    Self::scan_partition(&reference, template, max_scale, partition, |result| {
                        // A send only fails once the collector is gone;
                        // nobody is left to report to then.
                        if sender.blocking_send(result).is_ok() {
                            emitted += 1;
                        }
                    });
                }
                debug!("worker {}/{} done, {} match(es)", index, worker_count, emitted);
            }));
        }
        // Drop the local sender so recv() ends when the workers finish.
        drop(sender);

        let mut results = Vec::new();
        while let Some(result) = receiver.recv().await {
            results.push(result);
        }

        for worker in workers {
            worker.await?;
        }

        results.sort_unstable();
        Ok(results)
    }
}
