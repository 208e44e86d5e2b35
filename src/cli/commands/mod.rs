pub mod config;
pub mod day;
pub mod init;
pub mod overlaps;
pub mod period;
