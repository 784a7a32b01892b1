//! Built-in catalogue content. Written to storage the first time a collection
//! is read and restored verbatim on reset, so every value here must be
//! deterministic.

use std::collections::BTreeSet;

use crate::flight::{Flight, FlightAmenity, FlightEndpoint};
use crate::package::{HolidayPackage, ItineraryDay, PackageImage};
use crate::tour::{Tour, TourTiming};
use crate::visa::{VisaCountry, VisaSubType};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn amenities(items: &[FlightAmenity]) -> BTreeSet<FlightAmenity> {
    items.iter().copied().collect()
}

pub fn flights() -> Vec<Flight> {
    vec![
        Flight {
            id: "1".to_string(),
            airline: "Emirates".to_string(),
            flight_number: "EK 500".to_string(),
            departure: FlightEndpoint::new("08:45", "Dubai", "DXB"),
            arrival: FlightEndpoint::new("13:15", "Mumbai", "BOM"),
            duration: "3h 0m".to_string(),
            stops: 0,
            price: 320.0,
            amenities: amenities(&[FlightAmenity::Wifi, FlightAmenity::Meals, FlightAmenity::Entertainment]),
            is_active: true,
        },
        Flight {
            id: "2".to_string(),
            airline: "Qatar Airways".to_string(),
            flight_number: "QR 1017".to_string(),
            departure: FlightEndpoint::new("10:20", "Dubai", "DXB"),
            arrival: FlightEndpoint::new("19:05", "London", "LHR"),
            duration: "9h 45m".to_string(),
            stops: 1,
            price: 685.0,
            amenities: amenities(&[FlightAmenity::Wifi, FlightAmenity::Meals]),
            is_active: true,
        },
        Flight {
            id: "3".to_string(),
            airline: "flydubai".to_string(),
            flight_number: "FZ 1929".to_string(),
            departure: FlightEndpoint::new("15:30", "Dubai", "DXB"),
            arrival: FlightEndpoint::new("19:40", "Istanbul", "IST"),
            duration: "5h 10m".to_string(),
            stops: 0,
            price: 410.0,
            amenities: amenities(&[FlightAmenity::Meals]),
            is_active: true,
        },
        Flight {
            id: "4".to_string(),
            airline: "Singapore Airlines".to_string(),
            flight_number: "SQ 495".to_string(),
            departure: FlightEndpoint::new("22:05", "Dubai", "DXB"),
            arrival: FlightEndpoint::new("09:30", "Singapore", "SIN"),
            duration: "7h 25m".to_string(),
            stops: 0,
            price: 540.0,
            amenities: amenities(&[FlightAmenity::Wifi, FlightAmenity::Meals, FlightAmenity::Entertainment]),
            is_active: true,
        },
    ]
}

pub fn holiday_packages() -> Vec<HolidayPackage> {
    vec![
        HolidayPackage {
            id: "1".to_string(),
            title: "Magical Maldives".to_string(),
            slug: "magical-maldives-5-days".to_string(),
            destination: "Malé".to_string(),
            country: "Maldives".to_string(),
            duration_days: 5,
            price: 2499.0,
            currency: "USD".to_string(),
            rating: 4.9,
            images: vec![PackageImage {
                url: "/images/packages/maldives.jpg".to_string(),
                alt: "Overwater villas at sunset".to_string(),
                width: 1200,
                height: 800,
            }],
            amenities: strings(&["Flights", "Hotel", "Transfers", "Breakfast"]),
            is_featured: true,
            description: Some("Four nights in an overwater villa with seaplane transfers.".to_string()),
            inclusions: Some(strings(&["Return flights", "Seaplane transfers", "Daily breakfast"])),
            exclusions: Some(strings(&["Travel insurance", "Visa fees"])),
            itinerary: Some(vec![
                ItineraryDay {
                    day: 1,
                    title: "Arrival".to_string(),
                    description: "Seaplane transfer to the resort and welcome dinner.".to_string(),
                },
                ItineraryDay {
                    day: 2,
                    title: "Reef snorkelling".to_string(),
                    description: "Guided snorkelling on the house reef.".to_string(),
                },
            ]),
        },
        HolidayPackage {
            id: "2".to_string(),
            title: "Bali Escape".to_string(),
            slug: "bali-escape-7-days".to_string(),
            destination: "Ubud".to_string(),
            country: "Indonesia".to_string(),
            duration_days: 7,
            price: 1299.0,
            currency: "USD".to_string(),
            rating: 4.7,
            images: vec![PackageImage {
                url: "/images/packages/bali.jpg".to_string(),
                alt: "Rice terraces in Ubud".to_string(),
                width: 1200,
                height: 800,
            }],
            amenities: strings(&["Hotel", "Transfers", "Breakfast", "Tours"]),
            is_featured: true,
            description: Some("Temples, rice terraces and a beach finish in Seminyak.".to_string()),
            inclusions: None,
            exclusions: None,
            itinerary: None,
        },
        HolidayPackage {
            id: "3".to_string(),
            title: "Istanbul City Break".to_string(),
            slug: "istanbul-city-break-4-days".to_string(),
            destination: "Istanbul".to_string(),
            country: "Turkey".to_string(),
            duration_days: 4,
            price: 799.0,
            currency: "USD".to_string(),
            rating: 4.5,
            images: vec![],
            amenities: strings(&["Hotel", "Breakfast"]),
            is_featured: false,
            description: None,
            inclusions: None,
            exclusions: None,
            itinerary: None,
        },
    ]
}

pub fn tours() -> Vec<Tour> {
    vec![
        Tour {
            id: "1".to_string(),
            title: "Desert Safari with BBQ Dinner".to_string(),
            image: "/images/tours/desert-safari.jpg".to_string(),
            duration: "6 hours".to_string(),
            timing: TourTiming::Afternoon,
            rating: 4.8,
            review_count: 1240,
            price: 65.0,
            original_price: Some(85.0),
            highlights: strings(&["Dune bashing", "Camel ride", "Live shows"]),
            category: "Adventure".to_string(),
            popular: true,
            is_active: Some(true),
        },
        Tour {
            id: "2".to_string(),
            title: "Burj Khalifa At The Top".to_string(),
            image: "/images/tours/burj-khalifa.jpg".to_string(),
            duration: "2 hours".to_string(),
            timing: TourTiming::Evening,
            rating: 4.7,
            review_count: 980,
            price: 45.0,
            original_price: None,
            highlights: strings(&["Levels 124 and 125", "Sunset views"]),
            category: "Sightseeing".to_string(),
            popular: true,
            is_active: Some(true),
        },
        Tour {
            id: "3".to_string(),
            title: "Dhow Cruise Marina".to_string(),
            image: "/images/tours/dhow-cruise.jpg".to_string(),
            duration: "2 hours".to_string(),
            timing: TourTiming::Evening,
            rating: 4.5,
            review_count: 430,
            price: 39.0,
            original_price: Some(49.0),
            highlights: strings(&["Buffet dinner", "Marina skyline"]),
            category: "Cruise".to_string(),
            popular: false,
            is_active: None,
        },
        Tour {
            id: "4".to_string(),
            title: "Abu Dhabi City Tour".to_string(),
            image: "/images/tours/abu-dhabi.jpg".to_string(),
            duration: "10 hours".to_string(),
            timing: TourTiming::Morning,
            rating: 4.6,
            review_count: 612,
            price: 55.0,
            original_price: None,
            highlights: strings(&["Sheikh Zayed Mosque", "Louvre Abu Dhabi"]),
            category: "Sightseeing".to_string(),
            popular: false,
            is_active: Some(true),
        },
    ]
}

pub fn visa_countries() -> Vec<VisaCountry> {
    vec![
        VisaCountry {
            id: "1".to_string(),
            country: "United Arab Emirates".to_string(),
            flag: "🇦🇪".to_string(),
            is_active: Some(true),
            types: vec![
                VisaSubType {
                    name: "Tourist Visa 30 Days".to_string(),
                    duration: "30 days".to_string(),
                    price: 95.0,
                    processing_time: "2-3 working days".to_string(),
                    features: strings(&["Single entry", "Extendable"]),
                },
                VisaSubType {
                    name: "Tourist Visa 60 Days".to_string(),
                    duration: "60 days".to_string(),
                    price: 165.0,
                    processing_time: "2-3 working days".to_string(),
                    features: strings(&["Single entry"]),
                },
                VisaSubType {
                    name: "Transit Visa".to_string(),
                    duration: "96 hours".to_string(),
                    price: 45.0,
                    processing_time: "1 working day".to_string(),
                    features: strings(&["Non-extendable"]),
                },
            ],
        },
        VisaCountry {
            id: "2".to_string(),
            country: "Turkey".to_string(),
            flag: "🇹🇷".to_string(),
            is_active: Some(true),
            types: vec![VisaSubType {
                name: "e-Visa".to_string(),
                duration: "90 days".to_string(),
                price: 60.0,
                processing_time: "24 hours".to_string(),
                features: strings(&["Multiple entry"]),
            }],
        },
        VisaCountry {
            id: "3".to_string(),
            country: "Singapore".to_string(),
            flag: "🇸🇬".to_string(),
            is_active: None,
            types: vec![VisaSubType {
                name: "Tourist Visa".to_string(),
                duration: "30 days".to_string(),
                price: 80.0,
                processing_time: "3-5 working days".to_string(),
                features: strings(&["Single entry", "Passport scan required"]),
            }],
        },
    ]
}
