//! Domain models for the subway network
//!
//! - [`Station`]: a named stop, identified by [`StationId`]
//! - [`Section`]: a directed edge between two stations with a [`Distance`]
//! - [`SectionChain`]: the ordered path of sections that makes up a line
//! - [`Line`]: the aggregate owning a chain plus its name and color

pub mod chain;
pub mod error;
pub mod line;
pub mod section;
pub mod station;

pub use chain::{OrderedSections, SectionChain};
pub use error::SectionError;
pub use line::{Line, LineId};
pub use section::{Distance, Section};
pub use station::{Station, StationId};
