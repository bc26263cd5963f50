pub mod add;
pub mod remove;

pub use add::{AddSectionCommand, AddSectionError, AddSectionResponse};
pub use remove::{RemoveSectionCommand, RemoveSectionError, RemoveSectionResponse};
