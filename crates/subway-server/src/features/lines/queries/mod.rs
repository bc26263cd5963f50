pub mod get;
pub mod get_by_name;
pub mod list;

pub use get::{GetLineError, GetLineQuery, GetLineResponse};
pub use get_by_name::{GetLineByNameError, GetLineByNameQuery, GetLineByNameResponse};
pub use list::{ListLinesError, ListLinesQuery, ListLinesResponse};
