//! # Option Catalogs
//!
//! Fixed, ordered option lists offered by the form's dropdowns and button
//! groups. These are static configuration data: the rendering layer reads
//! them, the core never computes them.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QacError;

pub const BRAND_OPTIONS: &[&str] = &[
    "KFC",
    "PHUT",
    "Hardees",
    "KKD",
    "Costa Coffee",
    "Wimpy",
    "Peets",
    "Chicken Tikka",
    "Fish Market",
    "Baskin Robbins",
    "Grand Cafe",
    "TGIF",
    "Others",
];

pub const BRAND_PRODUCT_OPTIONS: &[&str] =
    &["KFC", "Hardees", "TGIF", "Krispy Kreme", "Pizza Hut", "ACP"];

pub const PRODUCT_TYPE_OPTIONS: &[&str] =
    &["Food Items", "Beverages", "Desserts", "Snacks", "Others"];

pub const SUPPLIER_OPTIONS: &[&str] = &[
    "Supplier A",
    "Supplier B",
    "Supplier C",
    "Local Supplier",
    "International Supplier",
];

pub const KFC_PRODUCT_OPTIONS: &[&str] = &[
    "Original Recipe Chicken",
    "Hot & Spicy Chicken",
    "Zinger Burger",
    "Popcorn Chicken",
    "Coleslaw",
    "Fries",
];

pub const HARDEES_PRODUCT_OPTIONS: &[&str] = &[
    "Charbroiled Burgers",
    "Hand-Breaded Chicken",
    "Breakfast Biscuits",
    "Thick Shakes",
    "Curly Fries",
    "Apple Turnovers",
];

pub const TGIF_PRODUCT_OPTIONS: &[&str] = &[
    "Jack Daniel's Ribs",
    "Loaded Potato Skins",
    "Sesame Chicken Strips",
    "Ultimate Mudslide",
    "Spinach & Artichoke Dip",
    "Friday's Signature Burger",
];

pub const KRISPY_KREME_PRODUCT_OPTIONS: &[&str] = &[
    "Original Glazed",
    "Chocolate Iced Glazed",
    "Strawberry Iced",
    "Boston Kreme",
    "Chocolate Iced Custard",
    "Glazed Raspberry Filled",
];

pub const PIZZA_HUT_PRODUCT_OPTIONS: &[&str] = &[
    "Supreme Pizza",
    "Pepperoni Pizza",
    "Meat Lovers",
    "Veggie Lovers",
    "Stuffed Crust",
    "Personal Pan Pizza",
];

pub const ACP_PRODUCT_OPTIONS: &[&str] = &[
    "Grilled Chicken",
    "Fried Chicken",
    "Chicken Wings",
    "Chicken Tenders",
    "Coleslaw",
    "Mashed Potatoes",
];

pub const DC_WH_POSITION_OPTIONS: &[&str] = &[
    "Distribution Center",
    "Warehouse",
    "Regional Hub",
    "Central Storage",
    "Local Depot",
];

pub const COMPLAINT_TYPE_OPTIONS: &[&str] = &[
    "Quality Issue",
    "Damaged Product",
    "Wrong Product",
    "Missing Items",
    "Temperature Issue",
    "Packaging Problem",
    "Expired Product",
    "Contamination",
    "Other",
];

/// Maximum number of photos the presentation layer accepts for 3.13.
///
/// The store does not enforce this.
pub const MAX_ATTACHED_PHOTOS: usize = 5;

/// A named option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Catalog {
    Brands,
    BrandProducts,
    ProductTypes,
    Suppliers,
    KfcProducts,
    HardeesProducts,
    TgifProducts,
    KrispyKremeProducts,
    PizzaHutProducts,
    AcpProducts,
    DcWhPositions,
    ComplaintTypes,
}

impl Catalog {
    /// Every catalog, in the order they are listed to users.
    pub fn all() -> &'static [Catalog] {
        &[
            Self::Brands,
            Self::BrandProducts,
            Self::ProductTypes,
            Self::Suppliers,
            Self::KfcProducts,
            Self::HardeesProducts,
            Self::TgifProducts,
            Self::KrispyKremeProducts,
            Self::PizzaHutProducts,
            Self::AcpProducts,
            Self::DcWhPositions,
            Self::ComplaintTypes,
        ]
    }

    /// Kebab-case catalog name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Brands => "brands",
            Self::BrandProducts => "brand-products",
            Self::ProductTypes => "product-types",
            Self::Suppliers => "suppliers",
            Self::KfcProducts => "kfc-products",
            Self::HardeesProducts => "hardees-products",
            Self::TgifProducts => "tgif-products",
            Self::KrispyKremeProducts => "krispy-kreme-products",
            Self::PizzaHutProducts => "pizza-hut-products",
            Self::AcpProducts => "acp-products",
            Self::DcWhPositions => "dc-wh-positions",
            Self::ComplaintTypes => "complaint-types",
        }
    }

    /// The ordered options of this catalog.
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            Self::Brands => BRAND_OPTIONS,
            Self::BrandProducts => BRAND_PRODUCT_OPTIONS,
            Self::ProductTypes => PRODUCT_TYPE_OPTIONS,
            Self::Suppliers => SUPPLIER_OPTIONS,
            Self::KfcProducts => KFC_PRODUCT_OPTIONS,
            Self::HardeesProducts => HARDEES_PRODUCT_OPTIONS,
            Self::TgifProducts => TGIF_PRODUCT_OPTIONS,
            Self::KrispyKremeProducts => KRISPY_KREME_PRODUCT_OPTIONS,
            Self::PizzaHutProducts => PIZZA_HUT_PRODUCT_OPTIONS,
            Self::AcpProducts => ACP_PRODUCT_OPTIONS,
            Self::DcWhPositions => DC_WH_POSITION_OPTIONS,
            Self::ComplaintTypes => COMPLAINT_TYPE_OPTIONS,
        }
    }

    /// Whether `value` is one of this catalog's options.
    pub fn contains(&self, value: &str) -> bool {
        self.options().contains(&value)
    }
}

impl std::fmt::Display for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Catalog {
    type Err = QacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name() == s)
            .ok_or_else(|| QacError::UnknownCatalog(s.to_string()))
    }
}

/// A brand product line selectable in question 3.2.
///
/// Each line unlocks exactly one follow-up product question (3.3 – 3.8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductLine {
    Kfc,
    Hardees,
    Tgif,
    KrispyKreme,
    PizzaHut,
    Acp,
}

impl ProductLine {
    pub fn all() -> &'static [ProductLine] {
        &[
            Self::Kfc,
            Self::Hardees,
            Self::Tgif,
            Self::KrispyKreme,
            Self::PizzaHut,
            Self::Acp,
        ]
    }

    /// The label shown in [`BRAND_PRODUCT_OPTIONS`].
    pub fn label(&self) -> &'static str {
        match self {
            Self::Kfc => "KFC",
            Self::Hardees => "Hardees",
            Self::Tgif => "TGIF",
            Self::KrispyKreme => "Krispy Kreme",
            Self::PizzaHut => "Pizza Hut",
            Self::Acp => "ACP",
        }
    }

    /// Resolve the line selected in 3.2. Unknown labels select nothing.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|line| line.label() == label)
    }

    /// The catalog offered by the follow-up question.
    pub fn catalog(&self) -> Catalog {
        match self {
            Self::Kfc => Catalog::KfcProducts,
            Self::Hardees => Catalog::HardeesProducts,
            Self::Tgif => Catalog::TgifProducts,
            Self::KrispyKreme => Catalog::KrispyKremeProducts,
            Self::PizzaHut => Catalog::PizzaHutProducts,
            Self::Acp => Catalog::AcpProducts,
        }
    }

    /// Label of the follow-up question.
    pub fn question_id(&self) -> &'static str {
        match self {
            Self::Kfc => "3.3",
            Self::Hardees => "3.4",
            Self::Tgif => "3.5",
            Self::KrispyKreme => "3.6",
            Self::PizzaHut => "3.7",
            Self::Acp => "3.8",
        }
    }
}
