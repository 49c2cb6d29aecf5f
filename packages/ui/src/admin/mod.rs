//! Admin moderation components.

mod queue_section;
mod queue_table;
mod request_row;
mod status_badge;

pub mod pages;

pub use queue_section::QueueSection;
pub use queue_table::QueueTable;
pub use request_row::RequestRow;
pub use status_badge::QueueBadge;
