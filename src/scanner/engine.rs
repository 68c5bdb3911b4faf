use futures::StreamExt;

use crate::http::Transport;
use crate::models::{ProbeResult, ScanConfig, ScanOutcome};

use super::ProgressSink;

/// The identifier-sweep engine: one request per candidate identifier, each
/// response classified and appended in ascending identifier order.
pub struct Sweeper<T> {
    transport: T,
    config: ScanConfig,
    concurrency: usize,
}

impl<T: Transport> Sweeper<T> {
    pub fn new(transport: T, config: ScanConfig) -> Self {
        Self {
            transport,
            config,
            concurrency: 1,
        }
    }

    /// Cap on in-flight requests. The default of 1 keeps the sweep strictly
    /// sequential; higher caps overlap requests but results are still
    /// delivered in ascending identifier order.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub async fn run(&self, sink: &dyn ProgressSink) -> ScanOutcome {
        let total = self.config.total_ids();
        sink.begin(total);

        let mut outcome = ScanOutcome::with_capacity(usize::try_from(total).unwrap_or(0));
        let mut probes = futures::stream::iter(self.config.ids())
            .map(|id| self.probe(id))
            .buffered(self.concurrency);

        while let Some(result) = probes.next().await {
            sink.probe(&result);
            outcome.push(result);
        }

        sink.finish();
        outcome
    }

    async fn probe(&self, id: i64) -> ProbeResult {
        let url = self.config.resolve_url(id);

        match self
            .transport
            .dispatch(self.config.method, &url, &self.config.headers)
            .await
        {
            Ok(exchange) => ProbeResult::classified(id, url, exchange.status, exchange.body_bytes),
            Err(err) => ProbeResult::transport_error(id, url, err.to_string()),
        }
    }
}
