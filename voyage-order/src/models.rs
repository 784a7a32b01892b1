use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use voyage_core::{merge_fields, Entity, Violations};
use voyage_shared::Masked;

/// What the customer enquired about
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BookingType {
    Package,
    Visa,
    General,
}

/// Handling status of an enquiry.
///
/// Labels only: any status may follow any other, and resolved enquiries can
/// be reopened.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    #[default]
    New,
    InProgress,
    Resolved,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 3] = [BookingStatus::New, BookingStatus::InProgress, BookingStatus::Resolved];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::New => "new",
            BookingStatus::InProgress => "in-progress",
            BookingStatus::Resolved => "resolved",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown booking status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for BookingStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookingStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// A customer enquiry captured by one of the site's forms
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: BookingType,
    #[serde(default)]
    pub package_name: String,
    #[serde(default)]
    pub destination: String,
    pub name: String,
    pub email: Masked<String>,
    pub phone: Masked<String>,
    #[serde(default)]
    pub message: String,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    #[serde(rename = "type")]
    pub kind: BookingType,
    #[serde(default)]
    pub package_name: String,
    #[serde(default)]
    pub destination: String,
    pub name: String,
    pub email: Masked<String>,
    pub phone: Masked<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingPatch {
    #[serde(rename = "type")]
    pub kind: Option<BookingType>,
    pub package_name: Option<String>,
    pub destination: Option<String>,
    pub name: Option<String>,
    pub email: Option<Masked<String>>,
    pub phone: Option<Masked<String>>,
    pub message: Option<String>,
    pub status: Option<BookingStatus>,
    pub created_at: Option<DateTime<Utc>>,
}

impl BookingPatch {
    pub fn status(status: BookingStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }
}

/// Form fields of a new enquiry; status and timestamp are assigned on submit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Enquiry {
    #[serde(rename = "type")]
    pub kind: BookingType,
    #[serde(default)]
    pub package_name: String,
    #[serde(default)]
    pub destination: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

impl Enquiry {
    pub fn into_draft(self, received_at: DateTime<Utc>) -> BookingDraft {
        BookingDraft {
            kind: self.kind,
            package_name: self.package_name,
            destination: self.destination,
            name: self.name,
            email: Masked(self.email),
            phone: Masked(self.phone),
            message: self.message,
            status: BookingStatus::New,
            created_at: received_at,
        }
    }
}

impl Entity for Booking {
    type Draft = BookingDraft;
    type Patch = BookingPatch;

    const COLLECTION: &'static str = "bookings";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: BookingDraft) -> Self {
        Self {
            id,
            kind: draft.kind,
            package_name: draft.package_name,
            destination: draft.destination,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            message: draft.message,
            status: draft.status,
            created_at: draft.created_at,
        }
    }

    fn apply_patch(&mut self, patch: BookingPatch) {
        merge_fields!(self, patch;
            kind, package_name, destination, name, email, phone,
            message, status, created_at,
        );
    }

    // The enquiry inbox starts empty.
    fn seed() -> Vec<Self> {
        Vec::new()
    }

    fn violations(&self) -> Violations {
        Violations::new()
            .check(!self.name.trim().is_empty(), "enquiry name is required")
            .check(self.email.expose().contains('@'), "enquiry email is not a valid address")
    }
}

/// Number of enquiries per status
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub new: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

impl StatusCounts {
    pub fn tally(bookings: &[Booking]) -> Self {
        bookings.iter().fold(Self::default(), |mut counts, booking| {
            match booking.status {
                BookingStatus::New => counts.new += 1,
                BookingStatus::InProgress => counts.in_progress += 1,
                BookingStatus::Resolved => counts.resolved += 1,
            }
            counts
        })
    }

    pub fn get(&self, status: BookingStatus) -> usize {
        match status {
            BookingStatus::New => self.new,
            BookingStatus::InProgress => self.in_progress,
            BookingStatus::Resolved => self.resolved,
        }
    }

    pub fn total(&self) -> usize {
        self.new + self.in_progress + self.resolved
    }
}
