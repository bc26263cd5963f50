pub mod list;

pub use list::{ListSectionsError, ListSectionsQuery, ListSectionsResponse};
