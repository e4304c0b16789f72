//! Live adapters for real external interactions.

pub mod resolver;
pub mod scanner;

pub use resolver::TableResolver;
pub use scanner::WalkdirScanner;
