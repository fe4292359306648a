mod events;
mod page;

pub use events::{Event, EventLog, EventType};
pub use page::{PageState, SortOrder};
