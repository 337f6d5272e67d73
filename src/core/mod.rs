//! Core business logic - framework-agnostic normalization, aggregation and
//! projection over already-loaded data. Nothing here reads files or the clock.

pub mod aggregate;
pub mod projection;
pub mod ranking;
pub mod report;
pub mod resolver;
pub mod title;

pub use aggregate::{goal_display, percent, totals};
pub use projection::{Classification, Projection, Status, project};
pub use ranking::{SortField, SortValue, rank};
pub use resolver::{ResolvedItem, resolve};
pub use title::format_title;
