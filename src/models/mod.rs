mod config;
mod outcome;
mod probe;

pub use config::{DEFAULT_TIMEOUT_SECS, HttpMethod, ID_MARKER, ScanConfig};
pub use outcome::ScanOutcome;
pub use probe::{Classification, ProbeResult};
