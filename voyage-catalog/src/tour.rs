use serde::{Deserialize, Serialize};
use voyage_core::{merge_fields, merge_optional_fields, Activatable, Entity, Violations};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TourTiming {
    Morning,
    Afternoon,
    Evening,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    pub id: String,
    pub title: String,
    pub image: String,
    /// Display label such as `"6 hours"`.
    pub duration: String,
    pub timing: TourTiming,
    pub rating: f32,
    pub review_count: u32,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    pub highlights: Vec<String>,
    pub category: String,
    pub popular: bool,
    /// Unset means active. Kept as `Option` so records without the field
    /// round-trip unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TourDraft {
    pub title: String,
    pub image: String,
    pub duration: String,
    pub timing: TourTiming,
    pub rating: f32,
    #[serde(default)]
    pub review_count: u32,
    pub price: f64,
    #[serde(default)]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub highlights: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub popular: bool,
    #[serde(default)]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TourPatch {
    pub title: Option<String>,
    pub image: Option<String>,
    pub duration: Option<String>,
    pub timing: Option<TourTiming>,
    pub rating: Option<f32>,
    pub review_count: Option<u32>,
    pub price: Option<f64>,
    pub original_price: Option<f64>,
    pub highlights: Option<Vec<String>>,
    pub category: Option<String>,
    pub popular: Option<bool>,
    pub is_active: Option<bool>,
}

impl Tour {
    /// Whole-percent saving against `original_price`, if the tour is discounted.
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        if original <= 0.0 || self.price >= original {
            return None;
        }
        let percent = ((original - self.price) / original * 100.0).round();
        Some(percent as u32)
    }
}

impl Entity for Tour {
    type Draft = TourDraft;
    type Patch = TourPatch;

    const COLLECTION: &'static str = "tours";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: TourDraft) -> Self {
        Self {
            id,
            title: draft.title,
            image: draft.image,
            duration: draft.duration,
            timing: draft.timing,
            rating: draft.rating,
            review_count: draft.review_count,
            price: draft.price,
            original_price: draft.original_price,
            highlights: draft.highlights,
            category: draft.category,
            popular: draft.popular,
            is_active: draft.is_active,
        }
    }

    fn apply_patch(&mut self, patch: TourPatch) {
        merge_fields!(self, patch;
            title, image, duration, timing, rating, review_count,
            price, highlights, category, popular,
        );
        merge_optional_fields!(self, patch; original_price, is_active);
    }

    fn seed() -> Vec<Self> {
        crate::seed::tours()
    }

    fn violations(&self) -> Violations {
        Violations::new()
            .check(!self.title.trim().is_empty(), "tour title is required")
            .check(
                (0.0..=5.0).contains(&self.rating),
                format!("tour rating must be between 0 and 5, got {}", self.rating),
            )
            .check(
                self.price.is_finite() && self.price >= 0.0,
                format!("tour price must be a non-negative number, got {}", self.price),
            )
            .check(
                self.original_price.map_or(true, |p| p.is_finite() && p >= 0.0),
                "tour original price must be a non-negative number",
            )
    }
}

impl Activatable for Tour {
    fn active_flag(&self) -> Option<bool> {
        self.is_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voyage_core::views::active_only;

    #[test]
    fn test_tri_state_active_flag() {
        let mut tours = crate::seed::tours();
        tours.truncate(3);
        tours[0].is_active = Some(true);
        tours[1].is_active = Some(false);
        tours[2].is_active = None;

        let visible: Vec<&str> = active_only(&tours).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(visible, vec![tours[0].id.as_str(), tours[2].id.as_str()]);
    }

    #[test]
    fn test_unset_flag_round_trips_as_absent() {
        let mut tour = crate::seed::tours().remove(0);
        tour.is_active = None;

        let json = serde_json::to_value(&tour).unwrap();
        assert!(json.get("isActive").is_none());

        let back: Tour = serde_json::from_value(json).unwrap();
        assert_eq!(back.is_active, None);
        assert!(back.is_active());
    }

    #[test]
    fn test_discount_percent() {
        let mut tour = crate::seed::tours().remove(0);
        tour.price = 75.0;
        tour.original_price = Some(100.0);
        assert_eq!(tour.discount_percent(), Some(25));

        tour.original_price = Some(60.0);
        assert_eq!(tour.discount_percent(), None);

        tour.original_price = None;
        assert_eq!(tour.discount_percent(), None);
    }
}
