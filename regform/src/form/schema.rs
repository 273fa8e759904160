use super::field::{FieldName, FieldValue};
use super::messages::*;
use super::options::{FavFood, FavLanguage};
use super::values::{FieldErrors, FormValues};
use crate::RegformError;

pub const USERNAME_MIN_LENGTH: usize = 3;
pub const USERNAME_MAX_LENGTH: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    Required(String),
    MinLength(usize, String),
    MaxLength(usize, String),
    OneOf(Vec<String>, String),
    /// value must be the boolean `true`
    Accepted(String),
}

impl Rule {
    pub fn message(&self) -> &str {
        match self {
            Rule::Required(msg)
            | Rule::MinLength(_, msg)
            | Rule::MaxLength(_, msg)
            | Rule::OneOf(_, msg)
            | Rule::Accepted(msg) => msg,
        }
    }

    pub fn check(&self, value: &FieldValue) -> Result<(), &str> {
        let passed = match self {
            Rule::Required(_) => !value.is_empty(),
            // length rules only apply to text, emptiness is left to Required
            Rule::MinLength(min, _) => match value {
                FieldValue::Text(text) => text.chars().count() >= *min,
                _ => true,
            },
            Rule::MaxLength(max, _) => match value {
                FieldValue::Text(text) => text.chars().count() <= *max,
                _ => true,
            },
            Rule::OneOf(options, _) => match value {
                FieldValue::Text(text) => options.iter().any(|o| o == text),
                FieldValue::Flag(flag) => {
                    options.iter().any(|o| *o == flag.to_string())
                }
                FieldValue::Unset => false,
            },
            Rule::Accepted(_) => value.as_flag() == Some(true),
        };
        if passed {
            Ok(())
        } else {
            Err(self.message())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    field: FieldName,
    rules: Vec<Rule>,
}

impl FieldSchema {
    pub fn new(field: FieldName) -> Self {
        Self {
            field,
            rules: Vec::new(),
        }
    }

    pub fn required<S: Into<String>>(mut self, message: S) -> Self {
        self.rules.push(Rule::Required(message.into()));
        self
    }

    pub fn min<S: Into<String>>(mut self, min: usize, message: S) -> Self {
        self.rules.push(Rule::MinLength(min, message.into()));
        self
    }

    pub fn max<S: Into<String>>(mut self, max: usize, message: S) -> Self {
        self.rules.push(Rule::MaxLength(max, message.into()));
        self
    }

    pub fn one_of<S: Into<String>>(
        mut self,
        options: &[&str],
        message: S,
    ) -> Self {
        let options = options.iter().map(|o| o.to_string()).collect();
        self.rules.push(Rule::OneOf(options, message.into()));
        self
    }

    pub fn accepted<S: Into<String>>(mut self, message: S) -> Self {
        self.rules.push(Rule::Accepted(message.into()));
        self
    }

    pub fn field(&self) -> FieldName {
        self.field
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Runs the rules in order, the first failing rule decides the message.
    pub fn validate(&self, value: &FieldValue) -> Result<(), RegformError> {
        for rule in &self.rules {
            rule.check(value).map_err(|msg| RegformError::Validation {
                field: self.field.to_string(),
                details: msg.to_string(),
            })?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSchema {
    fields: Vec<FieldSchema>,
}

impl Default for FormSchema {
    fn default() -> Self {
        Self::registration()
    }
}

impl FormSchema {
    pub fn new(fields: Vec<FieldSchema>) -> Self {
        Self { fields }
    }

    pub fn registration() -> Self {
        Self::new(vec![
            FieldSchema::new(FieldName::Username)
                .required(USERNAME_REQUIRED)
                .min(USERNAME_MIN_LENGTH, USERNAME_MIN)
                .max(USERNAME_MAX_LENGTH, USERNAME_MAX),
            FieldSchema::new(FieldName::FavLanguage)
                .required(FAV_LANGUAGE_REQUIRED)
                .one_of(FavLanguage::VALUES, FAV_LANGUAGE_OPTIONS),
            FieldSchema::new(FieldName::FavFood)
                .required(FAV_FOOD_REQUIRED)
                .one_of(FavFood::VALUES, FAV_FOOD_OPTIONS),
            FieldSchema::new(FieldName::Agreement)
                .required(AGREEMENT_REQUIRED)
                .accepted(AGREEMENT_OPTIONS),
        ])
    }

    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    pub fn reach(&self, field: FieldName) -> Option<&FieldSchema> {
        self.fields.iter().find(|schema| schema.field() == field)
    }

    /// Validates one value against the rules of `field`. Fields without
    /// rules always pass.
    pub fn validate_field(
        &self,
        field: FieldName,
        value: &FieldValue,
    ) -> Result<(), RegformError> {
        match self.reach(field) {
            Some(schema) => schema.validate(value),
            None => Ok(()),
        }
    }

    pub fn validate(&self, values: &FormValues) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        for schema in &self.fields {
            let field = schema.field();
            if let Err(RegformError::Validation { details, .. }) =
                schema.validate(&values.get(field))
            {
                errors.set(field, details);
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn is_valid(&self, values: &FormValues) -> bool {
        self.validate(values).is_ok()
    }
}
