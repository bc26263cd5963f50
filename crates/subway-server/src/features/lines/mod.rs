//! Line management
//!
//! Lines are created over a single section; their paths grow and shrink
//! through the sections feature.

pub mod commands;
pub mod queries;
pub mod types;

pub use commands::{
    CreateLineCommand, CreateLineError, CreateLineResponse, DeleteLineCommand, DeleteLineError,
    DeleteLineResponse, UpdateLineCommand, UpdateLineError, UpdateLineResponse,
};

pub use queries::{
    GetLineByNameError, GetLineByNameQuery, GetLineByNameResponse, GetLineError, GetLineQuery,
    GetLineResponse, ListLinesError, ListLinesQuery, ListLinesResponse,
};

pub use types::LineResponse;
