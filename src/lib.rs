pub mod common;
pub mod config;
pub mod domain;
pub mod feeds;
pub mod observability;
pub mod pipeline;
pub mod repository;
pub mod server;

pub use domain::{Company, SourceKind, TaggedRecord};
