pub mod flight;
pub mod package;
pub mod tour;
pub mod visa;
pub mod seed;
pub mod search;
pub mod slug;

pub use flight::{Flight, FlightAmenity, FlightDraft, FlightEndpoint, FlightPatch};
pub use package::{HolidayPackage, ItineraryDay, PackageDraft, PackageImage, PackagePatch};
pub use tour::{Tour, TourDraft, TourPatch, TourTiming};
pub use visa::{VisaCountry, VisaCountryDraft, VisaCountryPatch, VisaSubType};
pub use slug::slugify;
