pub mod cell;
pub mod date_key;
pub mod day_record;
pub mod entry;
pub mod plan;
pub mod roster;
pub mod stamp;
pub mod summary;

pub use cell::{CellValue, Sheet};
pub use date_key::{DateKey, DateRange};
pub use day_record::{EmployeeDayRecord, Session};
pub use entry::RawEntry;
pub use plan::{ColumnPlan, DateColumn};
pub use roster::{Roster, RosterEntry};
pub use stamp::Stamp;
pub use summary::Summary;
