//! # Form Sections
//!
//! The four sections of the form and their answer data. Each section is a
//! [`Section`] wrapping its data with a metrics block and an expansion
//! flag. Expansion is a UI concern and never affects data.
//!
//! Brand-names and WH/DC fields are addressed through the
//! [`BrandNamesField`] and [`WhDcField`] enums so that one setter per
//! section covers every field, and so the field set is closed.

use serde::{Deserialize, Serialize};

use qac_core::{BrandType, FileHandle, ProductLine, SectionKey};

use crate::metrics::{BRAND_NAMES_MANDATORY, OTHER_COMPLAINT_MANDATORY, WH_DC_SECTION_MANDATORY};

// ─── Metrics ─────────────────────────────────────────────────────────

/// Per-section completion numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionMetrics {
    pub section_score: u32,
    /// Percentage in `0.0..=100.0`.
    pub section_compliance: f64,
    pub remaining_mandatory_questions: u32,
}

impl SectionMetrics {
    /// Metrics for an untouched section with `remaining` mandatory questions.
    pub fn seeded(remaining: u32) -> Self {
        Self {
            section_score: 0,
            section_compliance: 100.0,
            remaining_mandatory_questions: remaining,
        }
    }
}

/// A form section: its data, metrics, and whether it is expanded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section<T> {
    pub metrics: SectionMetrics,
    pub data: T,
    pub is_expanded: bool,
}

impl<T: Default> Section<T> {
    fn seeded(remaining: u32, is_expanded: bool) -> Self {
        Self {
            metrics: SectionMetrics::seeded(remaining),
            data: T::default(),
            is_expanded,
        }
    }
}

// ─── Restaurant Details (section 1) ──────────────────────────────────

/// Answers to questions 1.1 – 1.10.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDetails {
    /// 1.1
    pub brand_type: Option<BrandType>,
    /// 1.2
    pub selected_brand: Option<String>,
    /// 1.3
    pub restaurant_name: String,
    /// 1.4
    pub store_id: String,
    /// 1.9
    pub dc_wh_position: String,
    /// 1.10
    pub wh_dc_location_name: String,
}

// ─── Brand Names (section 3) ─────────────────────────────────────────

/// Answers to questions 3.1 – 3.13.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandNames {
    pub product_type: String,
    pub selected_brand_product: String,
    pub kfc_products: String,
    pub hardees_products: String,
    pub tgif_products: String,
    pub krispy_kreme_products: String,
    pub pizza_hut_products: String,
    pub acp_products: String,
    pub supplier: String,
    pub production_date: String,
    pub expiration_date: String,
    pub batch_no: String,
    pub attached_photos: Vec<FileHandle>,
}

/// A text field of [`BrandNames`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BrandNamesField {
    ProductType,
    SelectedBrandProduct,
    KfcProducts,
    HardeesProducts,
    TgifProducts,
    KrispyKremeProducts,
    PizzaHutProducts,
    AcpProducts,
    Supplier,
    ProductionDate,
    ExpirationDate,
    BatchNo,
}

impl BrandNamesField {
    pub fn all() -> &'static [BrandNamesField] {
        &[
            Self::ProductType,
            Self::SelectedBrandProduct,
            Self::KfcProducts,
            Self::HardeesProducts,
            Self::TgifProducts,
            Self::KrispyKremeProducts,
            Self::PizzaHutProducts,
            Self::AcpProducts,
            Self::Supplier,
            Self::ProductionDate,
            Self::ExpirationDate,
            Self::BatchNo,
        ]
    }

    /// Label of the question this field answers.
    pub fn question_id(&self) -> &'static str {
        match self {
            Self::ProductType => "3.1",
            Self::SelectedBrandProduct => "3.2",
            Self::KfcProducts => "3.3",
            Self::HardeesProducts => "3.4",
            Self::TgifProducts => "3.5",
            Self::KrispyKremeProducts => "3.6",
            Self::PizzaHutProducts => "3.7",
            Self::AcpProducts => "3.8",
            Self::Supplier => "3.9",
            Self::ProductionDate => "3.10",
            Self::ExpirationDate => "3.11",
            Self::BatchNo => "3.12",
        }
    }

    pub fn from_question_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|f| f.question_id() == id)
    }

    /// The field holding the follow-up answer for a product line.
    pub fn for_product_line(line: ProductLine) -> Self {
        match line {
            ProductLine::Kfc => Self::KfcProducts,
            ProductLine::Hardees => Self::HardeesProducts,
            ProductLine::Tgif => Self::TgifProducts,
            ProductLine::KrispyKreme => Self::KrispyKremeProducts,
            ProductLine::PizzaHut => Self::PizzaHutProducts,
            ProductLine::Acp => Self::AcpProducts,
        }
    }
}

impl BrandNames {
    pub fn field(&self, field: BrandNamesField) -> &str {
        match field {
            BrandNamesField::ProductType => &self.product_type,
            BrandNamesField::SelectedBrandProduct => &self.selected_brand_product,
            BrandNamesField::KfcProducts => &self.kfc_products,
            BrandNamesField::HardeesProducts => &self.hardees_products,
            BrandNamesField::TgifProducts => &self.tgif_products,
            BrandNamesField::KrispyKremeProducts => &self.krispy_kreme_products,
            BrandNamesField::PizzaHutProducts => &self.pizza_hut_products,
            BrandNamesField::AcpProducts => &self.acp_products,
            BrandNamesField::Supplier => &self.supplier,
            BrandNamesField::ProductionDate => &self.production_date,
            BrandNamesField::ExpirationDate => &self.expiration_date,
            BrandNamesField::BatchNo => &self.batch_no,
        }
    }

    pub fn field_mut(&mut self, field: BrandNamesField) -> &mut String {
        match field {
            BrandNamesField::ProductType => &mut self.product_type,
            BrandNamesField::SelectedBrandProduct => &mut self.selected_brand_product,
            BrandNamesField::KfcProducts => &mut self.kfc_products,
            BrandNamesField::HardeesProducts => &mut self.hardees_products,
            BrandNamesField::TgifProducts => &mut self.tgif_products,
            BrandNamesField::KrispyKremeProducts => &mut self.krispy_kreme_products,
            BrandNamesField::PizzaHutProducts => &mut self.pizza_hut_products,
            BrandNamesField::AcpProducts => &mut self.acp_products,
            BrandNamesField::Supplier => &mut self.supplier,
            BrandNamesField::ProductionDate => &mut self.production_date,
            BrandNamesField::ExpirationDate => &mut self.expiration_date,
            BrandNamesField::BatchNo => &mut self.batch_no,
        }
    }

    /// The product line chosen in 3.2, if it names one.
    pub fn selected_product_line(&self) -> Option<ProductLine> {
        ProductLine::from_label(&self.selected_brand_product)
    }
}

// ─── WH / DC (section 2) ─────────────────────────────────────────────

/// Answers to questions 2.1 – 2.12.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhDcDetails {
    pub products_details: String,
    pub product_name_as_per_label: String,
    pub product_code_on_system: String,
    pub production_date: String,
    pub expiration_date: String,
    pub supplier_name: String,
    pub container_number: String,
    pub arrival_date: String,
    pub arrival_time: String,
    pub type_of_complaint: String,
    pub describe_issue_in_details: String,
    pub initial_action_taken_by_wh: String,
}

/// A field of [`WhDcDetails`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WhDcField {
    ProductsDetails,
    ProductNameAsPerLabel,
    ProductCodeOnSystem,
    ProductionDate,
    ExpirationDate,
    SupplierName,
    ContainerNumber,
    ArrivalDate,
    ArrivalTime,
    TypeOfComplaint,
    DescribeIssueInDetails,
    InitialActionTakenByWh,
}

impl WhDcField {
    pub fn all() -> &'static [WhDcField] {
        &[
            Self::ProductsDetails,
            Self::ProductNameAsPerLabel,
            Self::ProductCodeOnSystem,
            Self::ProductionDate,
            Self::ExpirationDate,
            Self::SupplierName,
            Self::ContainerNumber,
            Self::ArrivalDate,
            Self::ArrivalTime,
            Self::TypeOfComplaint,
            Self::DescribeIssueInDetails,
            Self::InitialActionTakenByWh,
        ]
    }

    pub fn question_id(&self) -> &'static str {
        match self {
            Self::ProductsDetails => "2.1",
            Self::ProductNameAsPerLabel => "2.2",
            Self::ProductCodeOnSystem => "2.3",
            Self::ProductionDate => "2.4",
            Self::ExpirationDate => "2.5",
            Self::SupplierName => "2.6",
            Self::ContainerNumber => "2.7",
            Self::ArrivalDate => "2.8",
            Self::ArrivalTime => "2.9",
            Self::TypeOfComplaint => "2.10",
            Self::DescribeIssueInDetails => "2.11",
            Self::InitialActionTakenByWh => "2.12",
        }
    }

    pub fn from_question_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|f| f.question_id() == id)
    }
}

impl WhDcDetails {
    pub fn field(&self, field: WhDcField) -> &str {
        match field {
            WhDcField::ProductsDetails => &self.products_details,
            WhDcField::ProductNameAsPerLabel => &self.product_name_as_per_label,
            WhDcField::ProductCodeOnSystem => &self.product_code_on_system,
            WhDcField::ProductionDate => &self.production_date,
            WhDcField::ExpirationDate => &self.expiration_date,
            WhDcField::SupplierName => &self.supplier_name,
            WhDcField::ContainerNumber => &self.container_number,
            WhDcField::ArrivalDate => &self.arrival_date,
            WhDcField::ArrivalTime => &self.arrival_time,
            WhDcField::TypeOfComplaint => &self.type_of_complaint,
            WhDcField::DescribeIssueInDetails => &self.describe_issue_in_details,
            WhDcField::InitialActionTakenByWh => &self.initial_action_taken_by_wh,
        }
    }

    pub fn field_mut(&mut self, field: WhDcField) -> &mut String {
        match field {
            WhDcField::ProductsDetails => &mut self.products_details,
            WhDcField::ProductNameAsPerLabel => &mut self.product_name_as_per_label,
            WhDcField::ProductCodeOnSystem => &mut self.product_code_on_system,
            WhDcField::ProductionDate => &mut self.production_date,
            WhDcField::ExpirationDate => &mut self.expiration_date,
            WhDcField::SupplierName => &mut self.supplier_name,
            WhDcField::ContainerNumber => &mut self.container_number,
            WhDcField::ArrivalDate => &mut self.arrival_date,
            WhDcField::ArrivalTime => &mut self.arrival_time,
            WhDcField::TypeOfComplaint => &mut self.type_of_complaint,
            WhDcField::DescribeIssueInDetails => &mut self.describe_issue_in_details,
            WhDcField::InitialActionTakenByWh => &mut self.initial_action_taken_by_wh,
        }
    }
}

// ─── Other Complaint Type ────────────────────────────────────────────

/// Placeholder section with no questions yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherComplaintType {}

// ─── Sections ────────────────────────────────────────────────────────

/// All four sections, keyed the way the state tree names them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sections {
    pub restaurant_details: Section<RestaurantDetails>,
    pub brand_names: Section<BrandNames>,
    pub wh_dc: Section<WhDcDetails>,
    pub other_complaint_type: Section<OtherComplaintType>,
}

impl Default for Sections {
    /// Restaurant details starts expanded; the rest start collapsed.
    fn default() -> Self {
        Self {
            restaurant_details: Section::seeded(0, true),
            brand_names: Section::seeded(BRAND_NAMES_MANDATORY, false),
            wh_dc: Section::seeded(WH_DC_SECTION_MANDATORY, false),
            other_complaint_type: Section::seeded(OTHER_COMPLAINT_MANDATORY, false),
        }
    }
}

impl Sections {
    pub fn is_expanded(&self, key: SectionKey) -> bool {
        match key {
            SectionKey::RestaurantDetails => self.restaurant_details.is_expanded,
            SectionKey::BrandNames => self.brand_names.is_expanded,
            SectionKey::WhDc => self.wh_dc.is_expanded,
            SectionKey::OtherComplaintType => self.other_complaint_type.is_expanded,
        }
    }

    /// Flip the expansion flag of `key`, returning the new value.
    pub fn toggle(&mut self, key: SectionKey) -> bool {
        let flag = match key {
            SectionKey::RestaurantDetails => &mut self.restaurant_details.is_expanded,
            SectionKey::BrandNames => &mut self.brand_names.is_expanded,
            SectionKey::WhDc => &mut self.wh_dc.is_expanded,
            SectionKey::OtherComplaintType => &mut self.other_complaint_type.is_expanded,
        };
        *flag = !*flag;
        *flag
    }

    pub fn metrics(&self, key: SectionKey) -> &SectionMetrics {
        match key {
            SectionKey::RestaurantDetails => &self.restaurant_details.metrics,
            SectionKey::BrandNames => &self.brand_names.metrics,
            SectionKey::WhDc => &self.wh_dc.metrics,
            SectionKey::OtherComplaintType => &self.other_complaint_type.metrics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_expansion() {
        let sections = Sections::default();
        assert!(sections.is_expanded(SectionKey::RestaurantDetails));
        assert!(!sections.is_expanded(SectionKey::BrandNames));
        assert!(!sections.is_expanded(SectionKey::WhDc));
        assert!(!sections.is_expanded(SectionKey::OtherComplaintType));
    }

    #[test]
    fn toggle_is_per_section() {
        let mut sections = Sections::default();
        assert!(sections.toggle(SectionKey::WhDc));
        assert!(sections.is_expanded(SectionKey::WhDc));
        assert!(!sections.is_expanded(SectionKey::BrandNames));
        assert!(!sections.toggle(SectionKey::WhDc));
        assert!(!sections.is_expanded(SectionKey::WhDc));
    }

    #[test]
    fn seeded_section_metrics() {
        let sections = Sections::default();
        assert_eq!(sections.metrics(SectionKey::BrandNames).remaining_mandatory_questions, 12);
        assert_eq!(sections.metrics(SectionKey::WhDc).remaining_mandatory_questions, 12);
        assert_eq!(
            sections.metrics(SectionKey::OtherComplaintType).remaining_mandatory_questions,
            2
        );
        assert_eq!(sections.metrics(SectionKey::WhDc).section_compliance, 100.0);
    }

    #[test]
    fn brand_names_field_accessors_agree() {
        let mut data = BrandNames::default();
        for (i, field) in BrandNamesField::all().iter().enumerate() {
            *data.field_mut(*field) = format!("value-{i}");
        }
        for (i, field) in BrandNamesField::all().iter().enumerate() {
            assert_eq!(data.field(*field), format!("value-{i}"));
            assert_eq!(BrandNamesField::from_question_id(field.question_id()), Some(*field));
        }
    }

    #[test]
    fn wh_dc_field_accessors_agree() {
        let mut data = WhDcDetails::default();
        for (i, field) in WhDcField::all().iter().enumerate() {
            *data.field_mut(*field) = format!("v{i}");
        }
        for (i, field) in WhDcField::all().iter().enumerate() {
            assert_eq!(data.field(*field), format!("v{i}"));
            assert_eq!(WhDcField::from_question_id(field.question_id()), Some(*field));
        }
        assert_eq!(WhDcField::from_question_id("3.1"), None);
    }

    #[test]
    fn product_line_fields() {
        let mut data = BrandNames::default();
        assert_eq!(data.selected_product_line(), None);
        data.selected_brand_product = "Krispy Kreme".into();
        let line = data.selected_product_line().unwrap();
        assert_eq!(BrandNamesField::for_product_line(line), BrandNamesField::KrispyKremeProducts);
        assert_eq!(
            BrandNamesField::for_product_line(line).question_id(),
            line.question_id()
        );
    }

    #[test]
    fn other_complaint_type_serializes_as_empty_object() {
        let json = serde_json::to_string(&OtherComplaintType::default()).unwrap();
        assert_eq!(json, "{}");
    }
}
