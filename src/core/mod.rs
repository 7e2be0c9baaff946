pub mod blank;
pub mod config;
pub mod dates;
pub mod logic;
pub mod reconcile;
pub mod report;
pub mod resolver;
pub mod watch;
