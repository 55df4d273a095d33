// Result transport between scan workers and the collector.
use tokio::sync::mpsc;

use super::types::MatchResult;

/// Buffered capacity for in-flight results.
const RESULT_CHANNEL_CAPACITY: usize = 256;

/// Helper function to create the worker-to-collector result channel
pub fn create_result_channel() -> (mpsc::Sender<MatchResult>, mpsc::Receiver<MatchResult>) {
    mpsc::channel(RESULT_CHANNEL_CAPACITY)
}
