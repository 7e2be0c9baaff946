pub mod columns;
pub mod records;
pub mod table;

pub use columns::{ColumnMap, Role};
pub use records::{MissingRecord, PresenceRecord, Reconciliation, WatchCheck, WatchOutcome};
pub use table::{Cell, Row, Table};
