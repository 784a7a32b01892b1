use serde::Serialize;
use tracing::info;
use voyage_catalog::{Flight, HolidayPackage, Tour, VisaCountry};
use voyage_core::views::count_active;
use voyage_core::StorageError;
use voyage_order::BookingDesk;
use voyage_store::app_config::Config;
use voyage_store::{Collection, StorageArea, StoreResult};

/// Counters shown on the admin dashboard
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub flights: usize,
    pub active_flights: usize,
    pub packages: usize,
    pub featured_packages: usize,
    pub tours: usize,
    pub active_tours: usize,
    pub visa_countries: usize,
    pub active_visa_countries: usize,
    pub bookings: usize,
    pub new_bookings: usize,
}

/// Record count of each collection after a reset
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResetReport {
    pub flights: usize,
    pub packages: usize,
    pub tours: usize,
    pub visa_countries: usize,
    pub bookings: usize,
}

/// All five site collections as seen from one context.
#[derive(Debug, Clone)]
pub struct SiteStore {
    area: StorageArea,
    namespace: String,
    flights: Collection<Flight>,
    packages: Collection<HolidayPackage>,
    tours: Collection<Tour>,
    visas: Collection<VisaCountry>,
    bookings: BookingDesk,
}

impl SiteStore {
    pub fn new(area: StorageArea, namespace: &str) -> Self {
        Self {
            flights: Collection::new(area.clone(), namespace),
            packages: Collection::new(area.clone(), namespace),
            tours: Collection::new(area.clone(), namespace),
            visas: Collection::new(area.clone(), namespace),
            bookings: BookingDesk::open(area.clone(), namespace),
            namespace: namespace.to_string(),
            area,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, StorageError> {
        let area = config.open_area()?;
        Ok(Self::new(area, &config.storage.namespace))
    }

    /// The same site in a sibling context sharing storage and notifications.
    pub fn open_context(&self) -> Self {
        Self::new(self.area.open_context(), &self.namespace)
    }

    pub fn area(&self) -> &StorageArea {
        &self.area
    }

    pub fn flights(&self) -> &Collection<Flight> {
        &self.flights
    }

    pub fn packages(&self) -> &Collection<HolidayPackage> {
        &self.packages
    }

    pub fn tours(&self) -> &Collection<Tour> {
        &self.tours
    }

    pub fn visas(&self) -> &Collection<VisaCountry> {
        &self.visas
    }

    pub fn bookings(&self) -> &BookingDesk {
        &self.bookings
    }

    pub fn reset_all(&self) -> StoreResult<ResetReport> {
        let report = ResetReport {
            flights: self.flights.reset()?.len(),
            packages: self.packages.reset()?.len(),
            tours: self.tours.reset()?.len(),
            visa_countries: self.visas.reset()?.len(),
            bookings: self.bookings.collection().reset()?.len(),
        };
        info!("All collections under '{}' reset to seed", self.namespace);
        Ok(report)
    }

    pub fn summary(&self) -> DashboardSummary {
        let flights = self.flights.get_all();
        let packages = self.packages.get_all();
        let tours = self.tours.get_all();
        let visas = self.visas.get_all();
        let counts = self.bookings.status_counts();

        DashboardSummary {
            flights: flights.len(),
            active_flights: count_active(&flights),
            packages: packages.len(),
            featured_packages: packages.iter().filter(|p| p.is_featured).count(),
            tours: tours.len(),
            active_tours: count_active(&tours),
            visa_countries: visas.len(),
            active_visa_countries: count_active(&visas),
            bookings: counts.total(),
            new_bookings: counts.new,
        }
    }
}
