//! Recording adapters that capture interactions to cassettes.

pub mod scanner;

pub use scanner::RecordingScanner;
