use crate::models::ProbeResult;

/// Observer the sweep engine notifies as it works, so presentation stays out
/// of the engine. All notifications are optional.
pub trait ProgressSink {
    fn begin(&self, _total: u64) {}
    fn probe(&self, _result: &ProbeResult) {}
    fn finish(&self) {}
}

/// Sink that swallows every notification.
pub struct NullSink;

impl ProgressSink for NullSink {}
