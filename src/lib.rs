pub mod cli;
pub mod error;
pub mod http;
pub mod models;
pub mod reporter;
pub mod scanner;

pub use error::{ConfigError, TransportError};
pub use http::{Exchange, HttpClient, Transport};
pub use models::{Classification, HttpMethod, ProbeResult, ScanConfig, ScanOutcome};
pub use reporter::{ConsoleReporter, ConsoleSink, Report};
pub use scanner::{NullSink, ProgressSink, Sweeper};
