//! The question-selection engine.
//!
//! Pure and stateless: given the answers collected so far, walk the catalog
//! and return every question still outstanding, plus a completion-progress
//! fraction. Every call is independent; the only shared data is the
//! read-only [`Catalog`].

use serde_json::Value;

use super::catalog::{Catalog, Gate};
use super::model::{AnswerMap, Question, QuestionType};

/// Fixed progress denominator.
///
/// Deliberately decoupled from the actual catalog length: progress is an
/// approximation against the nominal full-catalog size and must not shift
/// when the catalog changes.
pub const TOTAL_CATALOG_SIZE: usize = 15;

/// Result of a selection pass: the next batch of questions and how far
/// along the flow is.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub questions: Vec<Question>,
    pub progress: f64,
}

/// Whether an answer value counts as "answered".
///
/// Presence alone is not enough: `null`, `false`, `0`, `""`, `[]` and `{}`
/// all count as unanswered, so a caller can clear an answer by resubmitting
/// an empty value.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn is_answered(answers: &AnswerMap, id: &str) -> bool {
    answers.get(id).is_some_and(is_truthy)
}

/// Synthetic terminal question, emitted only when nothing is outstanding.
fn completion_question() -> Question {
    Question::new(
        "completion",
        "All questions complete! You're ready to generate your transparency report.",
        QuestionType::Text,
    )
    .optional()
}

impl Catalog {
    /// Select the next batch of outstanding questions.
    ///
    /// Two passes over the catalog, both in declaration order: first every
    /// unconditional entry whose id is unanswered, then every gated entry
    /// whose gate holds and whose id is unanswered. Gated entries are
    /// always appended after the full unconditional pass — output order is
    /// catalog order, not interleaved by dependency, and callers rely on
    /// that.
    ///
    /// `product_name` is informational only; no current rule branches on it.
    pub fn select(&self, product_name: &str, answers: &AnswerMap) -> Selection {
        let mut pending: Vec<Question> = Vec::new();

        for entry in self.entries() {
            if entry.gate == Gate::Always && !is_answered(answers, &entry.question.id) {
                pending.push(entry.question.clone());
            }
        }
        for entry in self.entries() {
            if entry.gate == Gate::Always {
                continue;
            }
            if entry.gate.holds(answers) && !is_answered(answers, &entry.question.id) {
                pending.push(entry.question.clone());
            }
        }

        // Progress counts submitted keys against the nominal catalog size,
        // independent of which questions were just selected.
        let progress = (answers.len() as f64 / TOTAL_CATALOG_SIZE as f64).min(1.0);

        tracing::debug!(
            product = product_name,
            answered = answers.len(),
            pending = pending.len(),
            "selected questions"
        );

        if pending.is_empty() {
            return Selection {
                questions: vec![completion_question()],
                progress: 1.0,
            };
        }

        Selection {
            questions: pending,
            progress,
        }
    }
}
