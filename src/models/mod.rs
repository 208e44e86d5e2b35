pub mod day_status;
pub mod entry;
pub mod entry_type;
pub mod project;
pub mod session;
pub mod stats;

pub use day_status::DayStatus;
pub use entry::PunchEntry;
pub use entry_type::EntryType;
pub use project::Project;
pub use session::ProjectSession;
