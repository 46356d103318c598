//! # Question Schema
//!
//! A declarative table of every question on the form: which section it
//! belongs to, how it is answered, which annotations it offers, and when
//! it is shown.
//!
//! The table drives the required-field report. Completion metrics do not
//! read it; they keep their fixed mandatory totals.
//!
//! ```text
//! 1.1            always
//! 1.2 – 1.4      Brand branch
//! 1.9 – 1.10     WH DC branch
//! 2.1 – 2.12     WH DC branch          (N/A + file upload on each)
//! 3.1 – 3.2      Brand branch
//! 3.3 – 3.8      Brand branch, matching product line selected in 3.2
//! 3.9 – 3.13     Brand branch
//! ```

use crate::catalog::{Catalog, ProductLine};
use crate::domain::{BrandType, SectionKey};

/// How a question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerKind {
    /// One value from a fixed option list.
    Choice,
    ShortText,
    LongText,
    /// ISO-8601 date string.
    Date,
    Time,
    /// A list of photo file handles.
    Photos,
}

/// When a question is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Always,
    /// Shown when question 1.1 selected this branch.
    Branch(BrandType),
    /// Shown on the Brand branch when 3.2 selected this product line.
    ProductLine(ProductLine),
}

impl Visibility {
    /// Evaluate against the answers to 1.1 and 3.2.
    pub fn is_visible(
        &self,
        brand_type: Option<BrandType>,
        selected_line: Option<ProductLine>,
    ) -> bool {
        match self {
            Self::Always => true,
            Self::Branch(branch) => brand_type == Some(*branch),
            Self::ProductLine(line) => {
                brand_type == Some(BrandType::Brand) && selected_line == Some(*line)
            }
        }
    }
}

/// One row of the question table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionSpec {
    pub id: &'static str,
    pub section: SectionKey,
    pub label: &'static str,
    pub kind: AnswerKind,
    /// Option list for [`AnswerKind::Choice`] questions, when static.
    pub catalog: Option<Catalog>,
    /// Whether an empty answer is flagged once submit has been attempted.
    pub required: bool,
    /// Whether the question offers a "not applicable" toggle.
    pub allows_na: bool,
    /// Whether the question offers per-question file upload.
    pub accepts_files: bool,
    pub visibility: Visibility,
}

const fn question(
    id: &'static str,
    section: SectionKey,
    label: &'static str,
    kind: AnswerKind,
    catalog: Option<Catalog>,
    visibility: Visibility,
) -> QuestionSpec {
    QuestionSpec {
        id,
        section,
        label,
        kind,
        catalog,
        required: true,
        allows_na: false,
        accepts_files: false,
        visibility,
    }
}

const fn wh_dc(
    id: &'static str,
    label: &'static str,
    kind: AnswerKind,
    catalog: Option<Catalog>,
) -> QuestionSpec {
    QuestionSpec {
        allows_na: true,
        accepts_files: true,
        ..question(id, SectionKey::WhDc, label, kind, catalog, ON_WH_DC)
    }
}

const fn brand(
    id: &'static str,
    label: &'static str,
    kind: AnswerKind,
    catalog: Option<Catalog>,
) -> QuestionSpec {
    question(id, SectionKey::BrandNames, label, kind, catalog, ON_BRAND)
}

const fn product(
    line: ProductLine,
    id: &'static str,
    label: &'static str,
    catalog: Catalog,
) -> QuestionSpec {
    question(
        id,
        SectionKey::BrandNames,
        label,
        AnswerKind::Choice,
        Some(catalog),
        Visibility::ProductLine(line),
    )
}

const RD: SectionKey = SectionKey::RestaurantDetails;
const ON_BRAND: Visibility = Visibility::Branch(BrandType::Brand);
const ON_WH_DC: Visibility = Visibility::Branch(BrandType::WhDc);

/// Every question on the form, in display order.
pub static QUESTIONS: &[QuestionSpec] = &[
    question("1.1", RD, "Brand type", AnswerKind::Choice, None, Visibility::Always),
    question("1.2", RD, "Brands", AnswerKind::Choice, Some(Catalog::Brands), ON_BRAND),
    question("1.3", RD, "Restaurant name", AnswerKind::ShortText, None, ON_BRAND),
    question("1.4", RD, "Store ID", AnswerKind::ShortText, None, ON_BRAND),
    question(
        "1.9",
        RD,
        "DC / WH position",
        AnswerKind::Choice,
        Some(Catalog::DcWhPositions),
        ON_WH_DC,
    ),
    QuestionSpec {
        allows_na: true,
        ..question("1.10", RD, "WH/DC location or name", AnswerKind::ShortText, None, ON_WH_DC)
    },
    wh_dc("2.1", "Products details", AnswerKind::ShortText, None),
    wh_dc("2.2", "Product name as per label", AnswerKind::ShortText, None),
    wh_dc("2.3", "Product code on the system", AnswerKind::ShortText, None),
    wh_dc("2.4", "Production date", AnswerKind::Date, None),
    wh_dc("2.5", "Expiration date", AnswerKind::Date, None),
    wh_dc("2.6", "Supplier name", AnswerKind::ShortText, None),
    wh_dc("2.7", "Container number", AnswerKind::ShortText, None),
    wh_dc("2.8", "Arrival date", AnswerKind::Date, None),
    wh_dc("2.9", "Arrival time", AnswerKind::Time, None),
    wh_dc("2.10", "Type of complaint", AnswerKind::Choice, Some(Catalog::ComplaintTypes)),
    wh_dc("2.11", "Describe the issue in details", AnswerKind::LongText, None),
    wh_dc("2.12", "Initial action taken by WH", AnswerKind::LongText, None),
    brand("3.1", "Product type", AnswerKind::Choice, Some(Catalog::ProductTypes)),
    QuestionSpec {
        required: false,
        ..brand(
            "3.2",
            "Select brand product list",
            AnswerKind::Choice,
            Some(Catalog::BrandProducts),
        )
    },
    product(ProductLine::Kfc, "3.3", "KFC products", Catalog::KfcProducts),
    product(ProductLine::Hardees, "3.4", "Hardees products", Catalog::HardeesProducts),
    product(ProductLine::Tgif, "3.5", "TGIF products", Catalog::TgifProducts),
    product(ProductLine::KrispyKreme, "3.6", "Krispy Kreme products", Catalog::KrispyKremeProducts),
    product(ProductLine::PizzaHut, "3.7", "Pizza Hut products", Catalog::PizzaHutProducts),
    product(ProductLine::Acp, "3.8", "ACP products", Catalog::AcpProducts),
    brand("3.9", "Supplier", AnswerKind::Choice, Some(Catalog::Suppliers)),
    brand("3.10", "Production date", AnswerKind::Date, None),
    brand("3.11", "Expiration date", AnswerKind::Date, None),
    brand("3.12", "Batch no", AnswerKind::ShortText, None),
    brand("3.13", "Attached photo", AnswerKind::Photos, None),
];

/// Look up a question by label.
pub fn find(id: &str) -> Option<&'static QuestionSpec> {
    QUESTIONS.iter().find(|q| q.id == id)
}

/// Questions belonging to `section`, in display order.
pub fn in_section(section: SectionKey) -> impl Iterator<Item = &'static QuestionSpec> {
    QUESTIONS.iter().filter(move |q| q.section == section)
}

/// The presentation-level required check: absent, or empty after trimming.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}
