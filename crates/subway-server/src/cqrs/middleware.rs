//! Markers separating write requests from read requests
//!
//! Commands take the store's write lock and change the network; queries only
//! read it. Every request type implements exactly one of the two.

/// A request that mutates the network
pub trait Command {}

/// A request that only reads the network
pub trait Query {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::lines::{CreateLineCommand, GetLineQuery};
    use crate::features::sections::{AddSectionCommand, ListSectionsQuery};
    use crate::features::stations::{DeleteStationCommand, ListStationsQuery};

    fn is_command<T: Command>() {}
    fn is_query<T: Query>() {}

    #[test]
    fn test_requests_are_marked() {
        is_command::<CreateLineCommand>();
        is_command::<AddSectionCommand>();
        is_command::<DeleteStationCommand>();
        is_query::<GetLineQuery>();
        is_query::<ListSectionsQuery>();
        is_query::<ListStationsQuery>();
    }
}
