//! # qac-core — Foundational Types for the QA Compliance Form
//!
//! This crate defines the vocabulary shared by every other crate in the
//! workspace. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Typed enums for closed sets.** `BrandType` and `SectionKey` are
//!    enums with exhaustive `match`; only the rendering layer deals in raw
//!    strings, and it goes through `FromStr`.
//!
//! 2. **Question ids are opaque.** `QuestionId` wraps the caller-supplied
//!    label ("1.1", "2.4", ...) without validating it.
//!
//! 3. **File handles are opaque.** `FileHandle` carries a name, a media
//!    type and a size. File contents never enter the core.
//!
//! 4. **Static configuration is data.** Option catalogs and the question
//!    schema are `&'static` tables, never computed.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `qac-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod attachment;
pub mod catalog;
pub mod domain;
pub mod error;
pub mod identity;
pub mod schema;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use attachment::FileHandle;
pub use catalog::{Catalog, ProductLine};
pub use domain::{BrandType, SectionKey};
pub use error::QacError;
pub use identity::{QuestionId, StoreInfo};
pub use schema::{is_blank, AnswerKind, QuestionSpec, Visibility, QUESTIONS};
