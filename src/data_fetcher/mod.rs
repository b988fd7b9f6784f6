pub mod api;
pub mod models;
pub mod processors;

pub use api::{NflverseSource, WeeklyDataSource};
pub use models::WeeklyTable;
