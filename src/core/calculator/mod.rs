pub mod overlap;
pub mod presence;
pub mod projects;
pub mod status;
pub mod target;
