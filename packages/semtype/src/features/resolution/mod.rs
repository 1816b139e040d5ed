//! Resolution: greedy, first-match-wins descent through the relation graph

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::{Resolution, ResolveMode};
pub use infrastructure::GraphResolver;
pub use ports::Resolver;
