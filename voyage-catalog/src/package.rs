use serde::{Deserialize, Serialize};
use voyage_core::{merge_fields, merge_optional_fields, Entity, Violations};

use crate::slug::slugify;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackageImage {
    pub url: String,
    pub alt: String,
    pub width: u32,
    pub height: u32,
}

/// One day of a package itinerary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItineraryDay {
    pub day: u32,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HolidayPackage {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub destination: String,
    pub country: String,
    pub duration_days: u32,
    pub price: f64,
    pub currency: String,
    pub rating: f32,
    pub images: Vec<PackageImage>,
    pub amenities: Vec<String>,
    pub is_featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inclusions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub itinerary: Option<Vec<ItineraryDay>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PackageDraft {
    pub title: String,
    /// Derived from title and duration when missing or empty.
    #[serde(default)]
    pub slug: Option<String>,
    pub destination: String,
    pub country: String,
    pub duration_days: u32,
    pub price: f64,
    pub currency: String,
    pub rating: f32,
    #[serde(default)]
    pub images: Vec<PackageImage>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub inclusions: Option<Vec<String>>,
    #[serde(default)]
    pub exclusions: Option<Vec<String>>,
    #[serde(default)]
    pub itinerary: Option<Vec<ItineraryDay>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PackagePatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub destination: Option<String>,
    pub country: Option<String>,
    pub duration_days: Option<u32>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub rating: Option<f32>,
    pub images: Option<Vec<PackageImage>>,
    pub amenities: Option<Vec<String>>,
    pub is_featured: Option<bool>,
    pub description: Option<String>,
    pub inclusions: Option<Vec<String>>,
    pub exclusions: Option<Vec<String>>,
    pub itinerary: Option<Vec<ItineraryDay>>,
}

impl HolidayPackage {
    pub fn cover_image(&self) -> Option<&PackageImage> {
        self.images.first()
    }

    pub fn price_per_day(&self) -> f64 {
        self.price / f64::from(self.duration_days.max(1))
    }
}

impl Entity for HolidayPackage {
    type Draft = PackageDraft;
    type Patch = PackagePatch;

    const COLLECTION: &'static str = "holiday-packages";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: PackageDraft) -> Self {
        let slug = match draft.slug {
            Some(slug) if !slug.trim().is_empty() => slug,
            _ => slugify(&draft.title, draft.duration_days),
        };

        Self {
            id,
            title: draft.title,
            slug,
            destination: draft.destination,
            country: draft.country,
            duration_days: draft.duration_days,
            price: draft.price,
            currency: draft.currency,
            rating: draft.rating,
            images: draft.images,
            amenities: draft.amenities,
            is_featured: draft.is_featured,
            description: draft.description,
            inclusions: draft.inclusions,
            exclusions: draft.exclusions,
            itinerary: draft.itinerary,
        }
    }

    fn apply_patch(&mut self, patch: PackagePatch) {
        merge_fields!(self, patch;
            title, slug, destination, country, duration_days, price,
            currency, rating, images, amenities, is_featured,
        );
        merge_optional_fields!(self, patch; description, inclusions, exclusions, itinerary);
    }

    fn seed() -> Vec<Self> {
        crate::seed::holiday_packages()
    }

    fn violations(&self) -> Violations {
        Violations::new()
            .check(!self.title.trim().is_empty(), "package title is required")
            .check(self.duration_days >= 1, "package must last at least one day")
            .check(
                (0.0..=5.0).contains(&self.rating),
                format!("package rating must be between 0 and 5, got {}", self.rating),
            )
            .check(
                self.price.is_finite() && self.price >= 0.0,
                format!("package price must be a non-negative number, got {}", self.price),
            )
    }
}
