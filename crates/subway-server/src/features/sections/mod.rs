//! Section management on a line

pub mod commands;
pub mod queries;
pub mod types;

pub use commands::{
    AddSectionCommand, AddSectionError, AddSectionResponse, RemoveSectionCommand,
    RemoveSectionError, RemoveSectionResponse,
};

pub use queries::{ListSectionsError, ListSectionsQuery, ListSectionsResponse};

pub use types::SectionResponse;
