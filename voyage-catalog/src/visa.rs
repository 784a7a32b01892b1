use serde::{Deserialize, Serialize};
use voyage_core::{merge_fields, merge_optional_fields, Activatable, Entity, Violations};

/// One visa product offered for a country (tourist 30 days, transit, ...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VisaSubType {
    pub name: String,
    pub duration: String,
    pub price: f64,
    pub processing_time: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VisaCountry {
    pub id: String,
    pub country: String,
    /// Flag emoji shown next to the country name.
    pub flag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    pub types: Vec<VisaSubType>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VisaCountryDraft {
    pub country: String,
    pub flag: String,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub types: Vec<VisaSubType>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct VisaCountryPatch {
    pub country: Option<String>,
    pub flag: Option<String>,
    pub is_active: Option<bool>,
    pub types: Option<Vec<VisaSubType>>,
}

impl VisaCountry {
    pub fn cheapest_type(&self) -> Option<&VisaSubType> {
        self.types
            .iter()
            .min_by(|a, b| a.price.total_cmp(&b.price))
    }

    pub fn starting_price(&self) -> Option<f64> {
        self.cheapest_type().map(|t| t.price)
    }
}

impl Entity for VisaCountry {
    type Draft = VisaCountryDraft;
    type Patch = VisaCountryPatch;

    const COLLECTION: &'static str = "visa-countries";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: VisaCountryDraft) -> Self {
        Self {
            id,
            country: draft.country,
            flag: draft.flag,
            is_active: draft.is_active,
            types: draft.types,
        }
    }

    fn apply_patch(&mut self, patch: VisaCountryPatch) {
        merge_fields!(self, patch; country, flag, types);
        merge_optional_fields!(self, patch; is_active);
    }

    fn seed() -> Vec<Self> {
        crate::seed::visa_countries()
    }

    fn violations(&self) -> Violations {
        let violations =
            Violations::new().check(!self.country.trim().is_empty(), "visa country name is required");
        self.types.iter().fold(violations, |violations, visa| {
            violations.check(
                visa.price.is_finite() && visa.price >= 0.0,
                format!("visa '{}' price must be a non-negative number", visa.name),
            )
        })
    }
}

impl Activatable for VisaCountry {
    fn active_flag(&self) -> Option<bool> {
        self.is_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cheapest_type() {
        let uae = crate::seed::visa_countries().remove(0);
        let cheapest = uae.cheapest_type().expect("seed has visa types");
        assert!(uae.types.iter().all(|t| t.price >= cheapest.price));

        let empty = VisaCountry::from_draft(
            "x".to_string(),
            VisaCountryDraft {
                country: "Nowhere".to_string(),
                flag: String::new(),
                is_active: None,
                types: vec![],
            },
        );
        assert_eq!(empty.starting_price(), None);
        assert!(empty.is_active());
    }

    #[test]
    fn test_patch_replaces_types_wholesale() {
        let mut country = crate::seed::visa_countries().remove(0);
        let name = country.country.clone();
        country.apply_patch(VisaCountryPatch {
            types: Some(vec![]),
            is_active: Some(false),
            ..Default::default()
        });
        assert!(country.types.is_empty());
        assert_eq!(country.country, name);
        assert!(!country.is_active());
    }
}
