// Base trait and utilities for source-specific mappers
pub mod base;

// Individual mapper implementations
pub mod alpha;
pub mod bravo;
pub mod charlie;

// Re-export the main components
pub use alpha::AlphaMapper;
pub use base::{MapperUtils, PostalAddress, SourceMapper};
pub use bravo::BravoMapper;
pub use charlie::CharlieMapper;
