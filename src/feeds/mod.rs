pub mod base;
pub mod demo;
pub mod factory;

pub use base::{CompanyFeed, HttpFeed, StaticFeed};
pub use demo::demo_feeds;
pub use factory::create_feeds;
