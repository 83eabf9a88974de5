//! Question and answer data models.

use serde::{Deserialize, Serialize};

/// Answers collected so far: question id → arbitrary JSON answer value.
///
/// The caller resubmits the full map on every request; a missing key means
/// the question has not been answered yet.
pub type AnswerMap = serde_json::Map<String, serde_json::Value>;

/// Input widget a question renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Text,
    Textarea,
    MultipleChoice,
    Dropdown,
    FileUpload,
    Number,
    Email,
    Date,
}

impl QuestionType {
    /// Whether this type carries an `options` list.
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::MultipleChoice | Self::Dropdown)
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::MultipleChoice => "multiple_choice",
            Self::Dropdown => "dropdown",
            Self::FileUpload => "file_upload",
            Self::Number => "number",
            Self::Email => "email",
            Self::Date => "date",
        };
        write!(f, "{s}")
    }
}

/// One selectable option of a choice-like question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

impl ChoiceOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// A single catalog question as it appears on the wire.
///
/// Optional fields are omitted from JSON when absent. `validation` is an
/// opaque constraint bag reserved for clients; the current catalog never
/// sets it, but it stays part of the contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ChoiceOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<serde_json::Value>,
}

impl Question {
    /// Create a required question with no options or hints.
    pub fn new(id: &str, text: &str, question_type: QuestionType) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            question_type,
            required: true,
            options: None,
            placeholder: None,
            help_text: None,
            validation: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn with_options(mut self, options: Vec<ChoiceOption>) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    pub fn with_help_text(mut self, help_text: &str) -> Self {
        self.help_text = Some(help_text.to_string());
        self
    }
}
