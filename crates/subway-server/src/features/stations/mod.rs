//! Station management

pub mod commands;
pub mod queries;
pub mod types;

pub use commands::{
    CreateStationCommand, CreateStationError, CreateStationResponse, DeleteStationCommand,
    DeleteStationError, DeleteStationResponse,
};

pub use queries::{
    GetStationError, GetStationQuery, GetStationResponse, ListStationsError, ListStationsQuery,
    ListStationsResponse,
};

pub use types::StationResponse;
