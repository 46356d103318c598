//! # Form Domain Enums
//!
//! The two closed sets that drive conditional rendering: the branch chosen
//! in question 1.1 ([`BrandType`]) and the top-level form sections
//! ([`SectionKey`]). Both carry the exact wire spellings the rendering
//! layer uses.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::QacError;

/// The branch selected in question 1.1.
///
/// `Brand` leads to the restaurant questions and the brand product
/// section; `WhDc` leads to the warehouse / distribution-center questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrandType {
    #[serde(rename = "Brand")]
    Brand,
    #[serde(rename = "WH DC")]
    WhDc,
}

impl BrandType {
    /// The spelling used by the rendering layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Brand => "Brand",
            Self::WhDc => "WH DC",
        }
    }
}

impl std::fmt::Display for BrandType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrandType {
    type Err = QacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Brand" => Ok(Self::Brand),
            "WH DC" => Ok(Self::WhDc),
            other => Err(QacError::UnknownBrandType(other.to_string())),
        }
    }
}

/// Top-level form sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKey {
    /// Section 1, filled in by restaurants and warehouses alike.
    RestaurantDetails,
    /// Section 3, shown on the Brand branch.
    BrandNames,
    /// Section 2, shown on the WH DC branch.
    WhDc,
    OtherComplaintType,
}

impl SectionKey {
    /// All sections in the order they appear in the state tree.
    pub fn all() -> &'static [SectionKey] {
        &[
            Self::RestaurantDetails,
            Self::BrandNames,
            Self::WhDc,
            Self::OtherComplaintType,
        ]
    }

    /// The camelCase key used in the state tree.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RestaurantDetails => "restaurantDetails",
            Self::BrandNames => "brandNames",
            Self::WhDc => "whDc",
            Self::OtherComplaintType => "otherComplaintType",
        }
    }

    /// Human-readable section title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::RestaurantDetails => "Restaurant Details",
            Self::BrandNames => "Brand Names",
            Self::WhDc => "WH / DC Details",
            Self::OtherComplaintType => "Other Complaint Type",
        }
    }
}

impl std::fmt::Display for SectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKey {
    type Err = QacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| QacError::UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_type_wire_spelling() {
        assert_eq!(serde_json::to_string(&BrandType::Brand).unwrap(), "\"Brand\"");
        assert_eq!(serde_json::to_string(&BrandType::WhDc).unwrap(), "\"WH DC\"");
        let parsed: BrandType = serde_json::from_str("\"WH DC\"").unwrap();
        assert_eq!(parsed, BrandType::WhDc);
    }

    #[test]
    fn brand_type_from_str() {
        assert_eq!("Brand".parse::<BrandType>().unwrap(), BrandType::Brand);
        assert_eq!("WH DC".parse::<BrandType>().unwrap(), BrandType::WhDc);
        assert!(matches!(
            "brand".parse::<BrandType>(),
            Err(QacError::UnknownBrandType(_))
        ));
    }

    #[test]
    fn section_key_from_str_matches_serde() {
        for key in SectionKey::all() {
            let json = serde_json::to_string(key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
            assert_eq!(key.as_str().parse::<SectionKey>().unwrap(), *key);
        }
    }

    #[test]
    fn section_key_rejects_unknown() {
        let err = "whdc".parse::<SectionKey>().unwrap_err();
        assert_eq!(err.to_string(), "unknown section: \"whdc\"");
    }
}
