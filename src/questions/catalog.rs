//! The fixed question catalog.
//!
//! Hand-authored, ordered, and immutable: built once at startup by
//! [`Catalog::standard`] and shared read-only across requests. Entries are
//! either unconditional or gated — category follow-ups that only surface
//! once `product_category` has been answered with a matching value, and a
//! free-form notes entry that only surfaces late in the flow.

use super::model::{AnswerMap, ChoiceOption, Question, QuestionType};

/// Answer key that gates the category-specific follow-ups.
pub const CATEGORY_ID: &str = "product_category";

/// How many answers must be present before the additional-notes entry
/// surfaces.
pub const ADDITIONAL_NOTES_THRESHOLD: usize = 8;

/// Condition under which a catalog entry is eligible for selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    /// Always eligible.
    Always,
    /// Eligible when `product_category` equals this value.
    Category(&'static str),
    /// Eligible once at least this many answer keys are present.
    MinAnswered(usize),
}

impl Gate {
    /// Whether this gate holds for the given answers.
    ///
    /// Category gates compare against the raw string value; a non-string or
    /// mismatched category never matches. The count gate looks at the raw
    /// key count, not at which values are truthy.
    pub fn holds(&self, answers: &AnswerMap) -> bool {
        match self {
            Self::Always => true,
            Self::Category(category) => {
                answers.get(CATEGORY_ID).and_then(|v| v.as_str()) == Some(category)
            }
            Self::MinAnswered(min) => answers.len() >= *min,
        }
    }
}

/// A question plus the condition under which it is asked.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub question: Question,
    pub gate: Gate,
}

impl CatalogEntry {
    fn always(question: Question) -> Self {
        Self {
            question,
            gate: Gate::Always,
        }
    }

    fn category(category: &'static str, question: Question) -> Self {
        Self {
            question,
            gate: Gate::Category(category),
        }
    }

    fn min_answered(min: usize, question: Question) -> Self {
        Self {
            question,
            gate: Gate::MinAnswered(min),
        }
    }
}

/// The ordered question catalog.
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build the standard transparency-report catalog.
    ///
    /// Declaration order here is output order — the selector walks the list
    /// as-is and never reorders.
    pub fn standard() -> Self {
        let entries = vec![
            CatalogEntry::always(
                Question::new(
                    CATEGORY_ID,
                    "Which category best describes this product?",
                    QuestionType::Dropdown,
                )
                .with_options(vec![
                    ChoiceOption::new("clothing", "Clothing & textiles"),
                    ChoiceOption::new("electronics", "Electronics"),
                    ChoiceOption::new("food", "Food & beverage"),
                    ChoiceOption::new("other", "Other"),
                ]),
            ),
            CatalogEntry::always(
                Question::new(
                    "origin_country",
                    "What is the country of origin?",
                    QuestionType::Text,
                )
                .with_placeholder("e.g. Portugal"),
            ),
            CatalogEntry::always(
                Question::new(
                    "materials",
                    "List the primary materials used.",
                    QuestionType::Textarea,
                )
                .with_help_text("One material per line, most significant first."),
            ),
            CatalogEntry::always(Question::new(
                "manufacturer_name",
                "Who manufactures this product?",
                QuestionType::Text,
            )),
            CatalogEntry::always(
                Question::new(
                    "manufacturing_process",
                    "Describe the manufacturing process.",
                    QuestionType::Textarea,
                )
                .with_help_text("Key production steps, from raw material to finished product."),
            ),
            CatalogEntry::always(
                Question::new(
                    "certifications",
                    "Which sustainability certifications does this product hold?",
                    QuestionType::MultipleChoice,
                )
                .with_options(vec![
                    ChoiceOption::new("gots", "GOTS"),
                    ChoiceOption::new("fair_trade", "Fair Trade"),
                    ChoiceOption::new("fsc", "FSC"),
                    ChoiceOption::new("iso_14001", "ISO 14001"),
                    ChoiceOption::new("none", "None yet"),
                ]),
            ),
            CatalogEntry::always(
                Question::new(
                    "supplier_contact",
                    "Primary supplier contact email",
                    QuestionType::Email,
                )
                .with_placeholder("name@supplier.com"),
            ),
            CatalogEntry::always(Question::new(
                "production_date",
                "When did production of the current batch start?",
                QuestionType::Date,
            )),
            CatalogEntry::always(Question::new(
                "annual_volume",
                "Approximate annual production volume (units)",
                QuestionType::Number,
            )),
            CatalogEntry::always(
                Question::new(
                    "supply_chain_doc",
                    "Upload a supplier list or chain-of-custody document.",
                    QuestionType::FileUpload,
                )
                .optional(),
            ),
            CatalogEntry::always(Question::new(
                "packaging_materials",
                "What materials is the packaging made of?",
                QuestionType::Text,
            )),
            // Category follow-ups. These sit after the unconditional block
            // and the selector appends them after its unconditional pass, so
            // output order stays stable as answers accumulate.
            CatalogEntry::category(
                "clothing",
                Question::new(
                    "fabric_composition",
                    "Break down the fabric composition.",
                    QuestionType::Textarea,
                )
                .with_placeholder("e.g. 60% organic cotton, 40% recycled polyester"),
            ),
            CatalogEntry::category(
                "electronics",
                Question::new(
                    "energy_efficiency",
                    "What is the product's energy efficiency rating?",
                    QuestionType::Dropdown,
                )
                .with_options(vec![
                    ChoiceOption::new("a", "A (most efficient)"),
                    ChoiceOption::new("b", "B"),
                    ChoiceOption::new("c", "C"),
                    ChoiceOption::new("d", "D"),
                    ChoiceOption::new("unrated", "Not rated"),
                ]),
            ),
            CatalogEntry::category(
                "food",
                Question::new(
                    "ingredients_source",
                    "Where are the primary ingredients sourced from?",
                    QuestionType::Textarea,
                ),
            ),
            CatalogEntry::min_answered(
                ADDITIONAL_NOTES_THRESHOLD,
                Question::new(
                    "additional_notes",
                    "Anything else readers of the transparency report should know?",
                    QuestionType::Textarea,
                )
                .optional(),
            ),
        ];

        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }
}
