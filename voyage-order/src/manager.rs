use chrono::Utc;
use tracing::info;
use voyage_store::{Collection, StorageArea, StoreResult};

use crate::models::{Booking, BookingPatch, BookingStatus, Enquiry, StatusCounts};

/// Back-office handling of customer enquiries
#[derive(Debug, Clone)]
pub struct BookingDesk {
    bookings: Collection<Booking>,
}

impl BookingDesk {
    pub fn new(bookings: Collection<Booking>) -> Self {
        Self { bookings }
    }

    pub fn open(area: StorageArea, namespace: &str) -> Self {
        Self::new(Collection::new(area, namespace))
    }

    pub fn collection(&self) -> &Collection<Booking> {
        &self.bookings
    }

    /// Records a new enquiry with status `new`, timestamped now.
    pub fn submit(&self, enquiry: Enquiry) -> StoreResult<Booking> {
        let booking = self.bookings.add(enquiry.into_draft(Utc::now()))?;
        info!(
            "Enquiry {} received from {} <{}> about {:?}",
            booking.id, booking.name, booking.email, booking.kind
        );
        Ok(booking)
    }

    /// Moves an enquiry to `status`, whatever its current status.
    /// `Ok(None)` if no enquiry has that id.
    pub fn set_status(&self, id: &str, status: BookingStatus) -> StoreResult<Option<Booking>> {
        let updated = self.bookings.update(id, BookingPatch::status(status))?;
        if updated.is_some() {
            info!("Enquiry {} marked {}", id, status);
        }
        Ok(updated)
    }

    pub fn start(&self, id: &str) -> StoreResult<Option<Booking>> {
        self.set_status(id, BookingStatus::InProgress)
    }

    pub fn resolve(&self, id: &str) -> StoreResult<Option<Booking>> {
        self.set_status(id, BookingStatus::Resolved)
    }

    pub fn reopen(&self, id: &str) -> StoreResult<Option<Booking>> {
        self.set_status(id, BookingStatus::New)
    }

    pub fn delete(&self, id: &str) -> StoreResult<bool> {
        self.bookings.remove(id)
    }

    pub fn all(&self) -> Vec<Booking> {
        self.bookings.get_all()
    }

    pub fn with_status(&self, status: BookingStatus) -> Vec<Booking> {
        self.all().into_iter().filter(|b| b.status == status).collect()
    }

    pub fn status_counts(&self) -> StatusCounts {
        StatusCounts::tally(&self.all())
    }

    /// Badge count on the admin inbox.
    pub fn new_count(&self) -> usize {
        self.status_counts().new
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> Vec<Booking> {
        let mut bookings = self.all();
        bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        bookings.truncate(limit);
        bookings
    }
}
