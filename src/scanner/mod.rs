mod engine;
mod progress;

pub use engine::Sweeper;
pub use progress::{NullSink, ProgressSink};
