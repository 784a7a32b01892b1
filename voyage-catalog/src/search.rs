//! Sorting and filtering over already-loaded catalogue collections.
//! Results borrow from the input; nothing is read from or written to storage.

use serde::Deserialize;
use voyage_core::Activatable;

use crate::flight::{Flight, FlightAmenity};
use crate::package::HolidayPackage;
use crate::tour::{Tour, TourTiming};

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FlightSort {
    #[default]
    Cheapest,
    Shortest,
    Earliest,
}

/// Criteria for the public flight listing. Inactive flights are always excluded.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FlightQuery {
    pub from_city: Option<String>,
    pub to_city: Option<String>,
    pub direct_only: bool,
    pub max_price: Option<f64>,
    pub amenity: Option<FlightAmenity>,
    pub sort: FlightSort,
}

fn same_place(expected: &Option<String>, city: &str, airport: &str) -> bool {
    expected.as_deref().map_or(true, |wanted| {
        wanted.eq_ignore_ascii_case(city) || wanted.eq_ignore_ascii_case(airport)
    })
}

pub fn search_flights<'a>(flights: &'a [Flight], query: &FlightQuery) -> Vec<&'a Flight> {
    let mut matches: Vec<&Flight> = flights
        .iter()
        .filter(|f| f.is_active())
        .filter(|f| same_place(&query.from_city, &f.departure.city, &f.departure.airport))
        .filter(|f| same_place(&query.to_city, &f.arrival.city, &f.arrival.airport))
        .filter(|f| !query.direct_only || f.is_direct())
        .filter(|f| query.max_price.map_or(true, |max| f.price <= max))
        .filter(|f| query.amenity.map_or(true, |a| f.has_amenity(a)))
        .collect();

    match query.sort {
        FlightSort::Cheapest => sort_cheapest(&mut matches),
        FlightSort::Shortest => sort_shortest(&mut matches),
        FlightSort::Earliest => matches.sort_by(|a, b| a.departure.time.cmp(&b.departure.time)),
    }
    matches
}

fn sort_cheapest(flights: &mut [&Flight]) {
    flights.sort_by(|a, b| a.price.total_cmp(&b.price));
}

// Unparseable duration labels sort last.
fn sort_shortest(flights: &mut [&Flight]) {
    flights.sort_by_key(|f| f.duration_minutes().unwrap_or(u32::MAX));
}

pub fn cheapest_flight(flights: &[Flight]) -> Option<&Flight> {
    flights
        .iter()
        .filter(|f| f.is_active())
        .min_by(|a, b| a.price.total_cmp(&b.price))
}

pub fn shortest_flight(flights: &[Flight]) -> Option<&Flight> {
    flights
        .iter()
        .filter(|f| f.is_active())
        .filter_map(|f| f.duration_minutes().map(|m| (m, f)))
        .min_by_key(|(minutes, _)| *minutes)
        .map(|(_, f)| f)
}

pub fn featured_packages(packages: &[HolidayPackage]) -> Vec<&HolidayPackage> {
    packages.iter().filter(|p| p.is_featured).collect()
}

pub fn find_package_by_slug<'a>(packages: &'a [HolidayPackage], slug: &str) -> Option<&'a HolidayPackage> {
    packages.iter().find(|p| p.slug == slug)
}

/// Packages whose destination or country matches `place`, case-insensitively.
pub fn packages_for<'a>(packages: &'a [HolidayPackage], place: &str) -> Vec<&'a HolidayPackage> {
    packages
        .iter()
        .filter(|p| p.destination.eq_ignore_ascii_case(place) || p.country.eq_ignore_ascii_case(place))
        .collect()
}

pub fn popular_tours(tours: &[Tour]) -> Vec<&Tour> {
    tours.iter().filter(|t| t.is_active() && t.popular).collect()
}

pub fn tours_in_category<'a>(tours: &'a [Tour], category: &str) -> Vec<&'a Tour> {
    tours
        .iter()
        .filter(|t| t.is_active() && t.category.eq_ignore_ascii_case(category))
        .collect()
}

pub fn tours_at(tours: &[Tour], timing: TourTiming) -> Vec<&Tour> {
    tours.iter().filter(|t| t.is_active() && t.timing == timing).collect()
}

/// Distinct categories in first-seen order, for the category filter chips.
pub fn tour_categories(tours: &[Tour]) -> Vec<&str> {
    let mut categories: Vec<&str> = Vec::new();
    for tour in tours.iter().filter(|t| t.is_active()) {
        if !categories.contains(&tour.category.as_str()) {
            categories.push(&tour.category);
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_cheapest_and_shortest() {
        let flights = seed::flights();
        assert_eq!(cheapest_flight(&flights).unwrap().flight_number, "EK 500");
        assert_eq!(shortest_flight(&flights).unwrap().flight_number, "EK 500");
    }

    #[test]
    fn test_inactive_flights_are_never_listed() {
        let mut flights = seed::flights();
        flights[0].is_active = false;

        assert_eq!(cheapest_flight(&flights).unwrap().flight_number, "FZ 1929");
        let listed = search_flights(&flights, &FlightQuery::default());
        assert_eq!(listed.len(), 3);
        assert!(listed.iter().all(|f| f.id != "1"));
    }

    #[test]
    fn test_search_filters_and_sorts() {
        let flights = seed::flights();
        let query = FlightQuery {
            from_city: Some("dxb".to_string()),
            direct_only: true,
            amenity: Some(FlightAmenity::Wifi),
            sort: FlightSort::Shortest,
            ..Default::default()
        };
        let numbers: Vec<&str> = search_flights(&flights, &query)
            .iter()
            .map(|f| f.flight_number.as_str())
            .collect();
        assert_eq!(numbers, vec!["EK 500", "SQ 495"]);

        let query = FlightQuery {
            to_city: Some("London".to_string()),
            max_price: Some(500.0),
            ..Default::default()
        };
        assert!(search_flights(&flights, &query).is_empty());
    }

    #[test]
    fn test_package_helpers() {
        let packages = seed::holiday_packages();
        assert_eq!(featured_packages(&packages).len(), 2);
        assert_eq!(
            find_package_by_slug(&packages, "bali-escape-7-days").map(|p| p.id.as_str()),
            Some("2")
        );
        assert!(find_package_by_slug(&packages, "nowhere").is_none());
        assert_eq!(packages_for(&packages, "turkey").len(), 1);
    }

    #[test]
    fn test_tour_helpers() {
        let mut tours = seed::tours();
        assert_eq!(popular_tours(&tours).len(), 2);
        assert_eq!(tours_in_category(&tours, "sightseeing").len(), 2);
        assert_eq!(tours_at(&tours, TourTiming::Evening).len(), 2);
        assert_eq!(tour_categories(&tours), vec!["Adventure", "Sightseeing", "Cruise"]);

        tours[2].is_active = Some(false);
        assert_eq!(tours_at(&tours, TourTiming::Evening).len(), 1);
        assert_eq!(tour_categories(&tours), vec!["Adventure", "Sightseeing"]);
    }
}
