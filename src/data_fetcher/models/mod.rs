pub mod table;

pub use table::WeeklyTable;
