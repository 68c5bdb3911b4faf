mod console;
mod text;

pub use console::{ConsoleReporter, ConsoleSink};
pub use text::Report;
