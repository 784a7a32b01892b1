use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use voyage_core::views::into_active;
use voyage_core::Entity;
use voyage_store::Collection;

use crate::error::{AdminError, AdminResult};
use crate::state::SiteStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CollectionName {
    Flights,
    HolidayPackages,
    Tours,
    VisaCountries,
    Bookings,
}

impl CollectionName {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionName::Flights => "flights",
            CollectionName::HolidayPackages => "holiday-packages",
            CollectionName::Tours => "tours",
            CollectionName::VisaCountries => "visa-countries",
            CollectionName::Bookings => "bookings",
        }
    }
}

impl fmt::Display for CollectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn to_json<T: Serialize>(items: &[T]) -> AdminResult<String> {
    Ok(serde_json::to_string_pretty(items)?)
}

/// Records of one collection as a JSON array.
pub fn list(site: &SiteStore, collection: CollectionName, active_only: bool) -> AdminResult<String> {
    match (collection, active_only) {
        (CollectionName::Flights, true) => to_json(&into_active(site.flights().get_all())),
        (CollectionName::Flights, false) => to_json(&site.flights().get_all()),
        (CollectionName::Tours, true) => to_json(&into_active(site.tours().get_all())),
        (CollectionName::Tours, false) => to_json(&site.tours().get_all()),
        (CollectionName::VisaCountries, true) => to_json(&into_active(site.visas().get_all())),
        (CollectionName::VisaCountries, false) => to_json(&site.visas().get_all()),
        (CollectionName::HolidayPackages, false) => to_json(&site.packages().get_all()),
        (CollectionName::Bookings, false) => to_json(&site.bookings().all()),
        (other, true) => Err(AdminError::NoActiveFlag(other)),
    }
}

fn reset_one<T: Entity>(collection: &Collection<T>) -> AdminResult<usize> {
    Ok(collection.reset()?.len())
}

/// Restores one collection, or all of them, to the seed. Returns a report
/// line per collection.
pub fn reset(site: &SiteStore, collection: Option<CollectionName>) -> AdminResult<Vec<String>> {
    let Some(collection) = collection else {
        let report = site.reset_all()?;
        return Ok(vec![
            format!("{}: {}", CollectionName::Flights, report.flights),
            format!("{}: {}", CollectionName::HolidayPackages, report.packages),
            format!("{}: {}", CollectionName::Tours, report.tours),
            format!("{}: {}", CollectionName::VisaCountries, report.visa_countries),
            format!("{}: {}", CollectionName::Bookings, report.bookings),
        ]);
    };

    let count = match collection {
        CollectionName::Flights => reset_one(site.flights())?,
        CollectionName::HolidayPackages => reset_one(site.packages())?,
        CollectionName::Tours => reset_one(site.tours())?,
        CollectionName::VisaCountries => reset_one(site.visas())?,
        CollectionName::Bookings => reset_one(site.bookings().collection())?,
    };
    Ok(vec![format!("{}: {}", collection, count)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use voyage_catalog::{Flight, FlightPatch};
    use voyage_store::StorageArea;

    fn site() -> SiteStore {
        SiteStore::new(StorageArea::in_memory(), "voyage")
    }

    #[test]
    fn test_value_names_match_collection_keys() {
        for name in CollectionName::value_variants() {
            let value = name.to_possible_value().unwrap();
            assert_eq!(value.get_name(), name.as_str());
        }
        assert_eq!(CollectionName::Tours.as_str(), <voyage_catalog::Tour as Entity>::COLLECTION);
    }

    #[test]
    fn test_list_active_flights() {
        let site = site();
        site.flights()
            .update("3", FlightPatch { is_active: Some(false), ..Default::default() })
            .unwrap();

        let all: Vec<Flight> = serde_json::from_str(&list(&site, CollectionName::Flights, false).unwrap()).unwrap();
        let active: Vec<Flight> = serde_json::from_str(&list(&site, CollectionName::Flights, true).unwrap()).unwrap();
        assert_eq!(all.len(), 4);
        assert_eq!(active.len(), 3);
        assert!(active.iter().all(|f| f.id != "3"));
    }

    #[test]
    fn test_active_filter_needs_a_flag() {
        let err = list(&site(), CollectionName::Bookings, true).unwrap_err();
        assert!(matches!(err, AdminError::NoActiveFlag(CollectionName::Bookings)));
        assert_eq!(list(&site(), CollectionName::Bookings, false).unwrap(), "[]");
    }

    #[test]
    fn test_reset_single_collection() {
        let site = site();
        site.flights().remove("1").unwrap();
        site.tours().remove("1").unwrap();

        let lines = reset(&site, Some(CollectionName::Flights)).unwrap();
        assert_eq!(lines, vec!["flights: 4".to_string()]);
        assert_eq!(site.flights().get_all().len(), 4);
        assert_eq!(site.tours().get_all().len(), 3);

        let lines = reset(&site, None).unwrap();
        assert_eq!(lines.len(), 5);
        assert_eq!(site.tours().get_all().len(), 4);
    }
}
