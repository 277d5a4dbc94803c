//! Data models for the guestbook

pub mod guest_entry;
pub mod log_row;
pub mod recap;

// Re-export commonly used types
pub use guest_entry::{GuestEntry, SubmitGuestRequest, SubmitGuestResponse};
pub use log_row::LogRow;
pub use recap::{RecapQuery, RecapResult};
