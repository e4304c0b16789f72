//! Replaying adapters that serve recorded interactions.

pub mod scanner;

pub use scanner::ReplayingScanner;
