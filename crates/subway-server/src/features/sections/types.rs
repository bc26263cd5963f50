use serde::{Deserialize, Serialize};

use crate::features::stations::types::StationResponse;
use crate::models::Section;

/// One edge of a line's path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionResponse {
    pub up_station: StationResponse,
    pub down_station: StationResponse,
    pub distance: u32,
}

impl From<&Section> for SectionResponse {
    fn from(section: &Section) -> Self {
        Self {
            up_station: StationResponse::from(section.up_station()),
            down_station: StationResponse::from(section.down_station()),
            distance: section.distance().get(),
        }
    }
}
