//! Entry form state machine and field validation.
//!
//! The form collects one new transaction record through four named fields.
//! It is either `Closed` or `Open` over a draft; saving validates every
//! field, and any failure keeps the form open with the draft intact.

use std::fmt;

use chrono::NaiveDate;

use crate::cli::output;
use crate::cli::CommandError;
use crate::ledger::{RecordKind, TransactionRecord};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// High-level lifecycle outcomes emitted by the form runner.
#[derive(Debug, Clone, PartialEq)]
pub enum FormResult<T> {
    Completed(T),
    Cancelled,
}

/// Describes how prompts can be answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResponse {
    /// User supplied a concrete value.
    Value(String),
    /// User chose to keep the current value.
    Keep,
    /// Abort the entire entry immediately.
    Cancel,
}

/// Field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Identifiers for the four entry fields, matched exhaustively everywhere
/// a field is read or written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Kind,
    Description,
    Date,
    Amount,
}

impl FieldId {
    pub const ALL: [FieldId; 4] = [
        FieldId::Kind,
        FieldId::Description,
        FieldId::Date,
        FieldId::Amount,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Kind => "Type",
            FieldId::Description => "Description",
            FieldId::Date => "Date",
            FieldId::Amount => "Amount",
        }
    }

    fn validator(&self) -> Validator {
        match self {
            FieldId::Kind => Validator::OneOf(&["income", "expense"]),
            FieldId::Description => Validator::NonEmpty,
            FieldId::Date => Validator::Date,
            FieldId::Amount => Validator::Decimal,
        }
    }
}

/// Built-in validation helpers for raw field input.
enum Validator {
    NonEmpty,
    Decimal,
    Date,
    OneOf(&'static [&'static str]),
}

impl Validator {
    fn validate(&self, input: &str) -> Result<String, ValidationError> {
        let trimmed = input.trim();
        match self {
            Validator::NonEmpty => {
                if trimmed.is_empty() {
                    Err(ValidationError::new("value cannot be empty"))
                } else {
                    Ok(trimmed.to_string())
                }
            }
            Validator::Decimal => {
                let amount: f64 = trimmed
                    .parse()
                    .map_err(|_| ValidationError::new("enter a decimal number"))?;
                if !amount.is_finite() || amount < 0.0 {
                    return Err(ValidationError::new("amount must not be negative"));
                }
                Ok(trimmed.to_string())
            }
            Validator::Date => NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
                .map(|_| trimmed.to_string())
                .map_err(|_| ValidationError::new("enter a date as YYYY-MM-DD")),
            Validator::OneOf(options) => {
                let lowered = trimmed.to_ascii_lowercase();
                if options.contains(&lowered.as_str()) {
                    Ok(lowered)
                } else {
                    Err(ValidationError::new(format!(
                        "expected one of: {}",
                        options.join(", ")
                    )))
                }
            }
        }
    }
}

/// Raw string state of the four inputs, one struct field per named input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub kind: String,
    pub description: String,
    pub date: String,
    pub amount: String,
}

impl EntryDraft {
    /// Draft defaults: income, empty description, today's date, no amount.
    pub fn with_defaults(today: NaiveDate) -> Self {
        Self {
            kind: RecordKind::Income.as_str().to_string(),
            description: String::new(),
            date: today.format(DATE_FORMAT).to_string(),
            amount: String::new(),
        }
    }

    pub fn field(&self, field: FieldId) -> &str {
        match field {
            FieldId::Kind => &self.kind,
            FieldId::Description => &self.description,
            FieldId::Date => &self.date,
            FieldId::Amount => &self.amount,
        }
    }

    pub fn set_field(&mut self, field: FieldId, value: String) {
        match field {
            FieldId::Kind => self.kind = value,
            FieldId::Description => self.description = value,
            FieldId::Date => self.date = value,
            FieldId::Amount => self.amount = value,
        }
    }

    /// Validates every field and parses the draft into a record.
    pub fn to_record(&self) -> Result<TransactionRecord, ValidationError> {
        for field in FieldId::ALL {
            field.validator().validate(self.field(field))?;
        }
        let kind = RecordKind::parse(&self.kind)
            .ok_or_else(|| ValidationError::new("expected income or expense"))?;
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT)
            .map_err(|_| ValidationError::new("enter a date as YYYY-MM-DD"))?;
        let amount: f64 = self
            .amount
            .trim()
            .parse()
            .map_err(|_| ValidationError::new("enter a decimal number"))?;
        Ok(TransactionRecord::new(
            kind,
            self.description.trim(),
            date,
            amount,
        ))
    }
}

/// Two-state entry surface: `Closed` (idle) or `Open` over a draft.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EntryForm {
    #[default]
    Closed,
    Open(EntryDraft),
}

impl EntryForm {
    pub fn new() -> Self {
        EntryForm::Closed
    }

    pub fn is_open(&self) -> bool {
        matches!(self, EntryForm::Open(_))
    }

    /// Opens the form with default field values. Re-opening an already
    /// open form keeps the current draft.
    pub fn open(&mut self, today: NaiveDate) {
        if let EntryForm::Closed = self {
            *self = EntryForm::Open(EntryDraft::with_defaults(today));
        }
    }

    /// Discards the draft and returns to `Closed` without appending.
    pub fn cancel(&mut self) {
        *self = EntryForm::Closed;
    }

    pub fn draft(&self) -> Option<&EntryDraft> {
        match self {
            EntryForm::Open(draft) => Some(draft),
            EntryForm::Closed => None,
        }
    }

    pub fn set_field(&mut self, field: FieldId, value: String) -> Result<(), ValidationError> {
        match self {
            EntryForm::Open(draft) => {
                draft.set_field(field, value);
                Ok(())
            }
            EntryForm::Closed => Err(ValidationError::new("no entry form is open")),
        }
    }

    /// Validated save: on success the record is returned and the form
    /// closes; on failure the form stays open with the draft untouched.
    pub fn save(&mut self) -> Result<TransactionRecord, ValidationError> {
        match self {
            EntryForm::Open(draft) => {
                let record = draft.to_record()?;
                *self = EntryForm::Closed;
                Ok(record)
            }
            EntryForm::Closed => Err(ValidationError::new("no entry form is open")),
        }
    }
}

/// Drives interactive prompting for the entry form. Implementations decide
/// how a single field is asked for; the runner owns ordering, validation,
/// and state transitions.
pub trait WizardInteraction {
    fn prompt(&mut self, field: FieldId, current: &str) -> Result<PromptResponse, CommandError>;
}

/// Walks the open form field by field. Invalid input re-prompts the same
/// field; `Cancel` resets the form and stops.
pub fn run_entry_wizard<I: WizardInteraction>(
    form: &mut EntryForm,
    interaction: &mut I,
) -> Result<FormResult<TransactionRecord>, CommandError> {
    let mut index = 0;
    while index < FieldId::ALL.len() {
        let field = FieldId::ALL[index];
        let current = match form.draft() {
            Some(draft) => draft.field(field).to_string(),
            None => {
                return Err(CommandError::InvalidArguments(
                    "no entry form is open".into(),
                ))
            }
        };
        let response = interaction.prompt(field, &current)?;
        let candidate = match response {
            PromptResponse::Cancel => {
                form.cancel();
                return Ok(FormResult::Cancelled);
            }
            PromptResponse::Keep => current,
            PromptResponse::Value(value) => value,
        };
        match field.validator().validate(&candidate) {
            Ok(normalized) => {
                form.set_field(field, normalized)
                    .map_err(|err| CommandError::InvalidArguments(err.message))?;
                index += 1;
            }
            Err(err) => {
                output::warning(format!("{}: {}", field.label(), err));
            }
        }
    }
    let record = form
        .save()
        .map_err(|err| CommandError::InvalidArguments(err.message))?;
    Ok(FormResult::Completed(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    struct ScriptedInteraction {
        responses: VecDeque<PromptResponse>,
    }

    impl ScriptedInteraction {
        fn new(responses: Vec<PromptResponse>) -> Self {
            Self {
                responses: responses.into(),
            }
        }
    }

    impl WizardInteraction for ScriptedInteraction {
        fn prompt(
            &mut self,
            _field: FieldId,
            _current: &str,
        ) -> Result<PromptResponse, CommandError> {
            Ok(self
                .responses
                .pop_front()
                .unwrap_or(PromptResponse::Cancel))
        }
    }

    #[test]
    fn open_applies_default_field_values() {
        let mut form = EntryForm::new();
        form.open(today());
        let draft = form.draft().expect("form open");
        assert_eq!(draft.kind, "income");
        assert_eq!(draft.description, "");
        assert_eq!(draft.date, "2024-01-01");
        assert_eq!(draft.amount, "");
    }

    #[test]
    fn cancel_after_partial_input_resets_to_closed() {
        let mut form = EntryForm::new();
        form.open(today());
        form.set_field(FieldId::Description, "Groceries".into())
            .unwrap();
        form.cancel();
        assert!(!form.is_open());

        form.open(today());
        assert_eq!(form.draft().unwrap().description, "");
    }

    #[test]
    fn save_with_empty_description_keeps_form_open() {
        let mut form = EntryForm::new();
        form.open(today());
        form.set_field(FieldId::Amount, "100".into()).unwrap();
        let err = form.save().expect_err("empty description must fail");
        assert!(err.message.contains("empty"));
        assert!(form.is_open());
        assert_eq!(form.draft().unwrap().amount, "100");
    }

    #[test]
    fn save_returns_parsed_record_and_closes() {
        let mut form = EntryForm::new();
        form.open(today());
        form.set_field(FieldId::Kind, "expense".into()).unwrap();
        form.set_field(FieldId::Description, "Rent".into()).unwrap();
        form.set_field(FieldId::Date, "2024-01-02".into()).unwrap();
        form.set_field(FieldId::Amount, "1500".into()).unwrap();

        let record = form.save().expect("valid draft saves");
        assert!(!form.is_open());
        assert_eq!(record.kind, RecordKind::Expense);
        assert_eq!(record.description, "Rent");
        assert_eq!(record.amount, 1500.0);
    }

    #[test]
    fn closed_form_rejects_edits_and_saves() {
        let mut form = EntryForm::new();
        assert!(form.set_field(FieldId::Amount, "5".into()).is_err());
        assert!(form.save().is_err());
    }

    #[test]
    fn wizard_completes_with_scripted_values() {
        let mut form = EntryForm::new();
        form.open(today());
        let mut interaction = ScriptedInteraction::new(vec![
            PromptResponse::Keep,
            PromptResponse::Value("Salary".into()),
            PromptResponse::Keep,
            PromptResponse::Value("5000".into()),
        ]);

        let result = run_entry_wizard(&mut form, &mut interaction).expect("wizard runs");
        match result {
            FormResult::Completed(record) => {
                assert_eq!(record.kind, RecordKind::Income);
                assert_eq!(record.description, "Salary");
                assert_eq!(record.amount, 5000.0);
            }
            FormResult::Cancelled => panic!("expected completion"),
        }
        assert!(!form.is_open());
    }

    #[test]
    fn wizard_reprompts_invalid_input_then_accepts() {
        let mut form = EntryForm::new();
        form.open(today());
        let mut interaction = ScriptedInteraction::new(vec![
            PromptResponse::Keep,
            PromptResponse::Keep, // empty description, re-prompted
            PromptResponse::Value("Rent".into()),
            PromptResponse::Keep,
            PromptResponse::Value("-5".into()), // negative, re-prompted
            PromptResponse::Value("1500".into()),
        ]);

        let result = run_entry_wizard(&mut form, &mut interaction).expect("wizard runs");
        assert!(matches!(result, FormResult::Completed(_)));
    }

    #[test]
    fn wizard_cancel_resets_form_without_record() {
        let mut form = EntryForm::new();
        form.open(today());
        let mut interaction = ScriptedInteraction::new(vec![
            PromptResponse::Keep,
            PromptResponse::Value("Groceries".into()),
            PromptResponse::Cancel,
        ]);

        let result = run_entry_wizard(&mut form, &mut interaction).expect("wizard runs");
        assert_eq!(result, FormResult::Cancelled);
        assert!(!form.is_open());
    }
}
