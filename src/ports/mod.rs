//! Port traits defining external boundaries.
//!
//! Each trait is a boundary between the manifest builder and something it
//! does not own: the project table and the filesystem walk. Implementations
//! live in `src/adapters/`.

pub mod resolver;
pub mod scanner;

pub use resolver::ProjectResolver;
pub use scanner::SourceScanner;
