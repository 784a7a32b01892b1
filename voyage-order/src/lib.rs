pub mod models;
pub mod manager;

pub use models::{Booking, BookingDraft, BookingPatch, BookingStatus, BookingType, Enquiry, StatusCounts};
pub use manager::BookingDesk;
