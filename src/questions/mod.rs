//! Question selection — the core of the service.
//!
//! A fixed, ordered catalog of transparency-report questions, some gated on
//! earlier answers, and a pure selector that returns whatever is still
//! outstanding for a given answer map. The HTTP layer is a thin adapter
//! around [`Catalog::select`].

pub mod catalog;
pub mod model;
pub mod routes;
pub mod selector;

pub use catalog::{Catalog, CatalogEntry, Gate};
pub use model::{AnswerMap, ChoiceOption, Question, QuestionType};
pub use routes::{AppState, question_routes};
pub use selector::{Selection, TOTAL_CATALOG_SIZE};
