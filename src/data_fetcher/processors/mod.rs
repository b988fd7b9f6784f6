pub mod csv_decode;

pub use csv_decode::read_weekly_csv;
