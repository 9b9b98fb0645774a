//! Calendar capabilities.

pub mod booking;
pub mod events;

pub use booking::BookMeetingCapability;
pub use events::DisplayEventsCapability;
