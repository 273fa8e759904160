use std::fmt;
use std::str::FromStr;

use crate::RegformError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    Username,
    FavLanguage,
    FavFood,
    Agreement,
}

impl FieldName {
    pub const ALL: [FieldName; 4] = [
        FieldName::Username,
        FieldName::FavLanguage,
        FieldName::FavFood,
        FieldName::Agreement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Username => "username",
            FieldName::FavLanguage => "favLanguage",
            FieldName::FavFood => "favFood",
            FieldName::Agreement => "agreement",
        }
    }
}

impl FromStr for FieldName {
    type Err = RegformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| RegformError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single field value as the schema sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Unset,
}

impl FieldValue {
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.is_empty(),
            FieldValue::Flag(_) => false,
            FieldValue::Unset => true,
        }
    }

    /// Reads the value as a boolean, accepting the strings "true" and "false".
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(flag) => Some(*flag),
            FieldValue::Text(text) => text.parse::<bool>().ok(),
            FieldValue::Unset => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Radio,
    Select,
    Checkbox,
}

impl InputKind {
    /// Maps the `type` of an html input (or select) element.
    pub fn from_html_type(html_type: &str) -> Self {
        match html_type {
            "checkbox" => InputKind::Checkbox,
            "radio" => InputKind::Radio,
            "select-one" | "select-multiple" | "select" => InputKind::Select,
            _ => InputKind::Text,
        }
    }
}

/// What a change event carries before it is applied to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInput {
    kind: InputKind,
    value: String,
    checked: bool,
}

impl RawInput {
    pub fn new<S: Into<String>>(kind: InputKind, value: S, checked: bool) -> Self {
        Self {
            kind,
            value: value.into(),
            checked,
        }
    }

    pub fn text<S: Into<String>>(value: S) -> Self {
        Self::new(InputKind::Text, value, false)
    }

    pub fn radio<S: Into<String>>(value: S) -> Self {
        Self::new(InputKind::Radio, value, true)
    }

    pub fn select<S: Into<String>>(value: S) -> Self {
        Self::new(InputKind::Select, value, false)
    }

    pub fn checkbox(checked: bool) -> Self {
        Self::new(InputKind::Checkbox, "on", checked)
    }

    pub fn kind(&self) -> InputKind {
        self.kind
    }

    pub fn into_field_value(self) -> FieldValue {
        // a checkbox reports its checked state, not its value attribute
        match self.kind {
            InputKind::Checkbox => FieldValue::Flag(self.checked),
            _ => FieldValue::Text(self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_name_roundtrip() {
        for field in FieldName::ALL {
            assert_eq!(field.as_str().parse::<FieldName>().unwrap(), field);
        }
    }

    #[test]
    fn test_unknown_field_name() {
        let err = "fav_food".parse::<FieldName>().unwrap_err();
        assert!(matches!(err, RegformError::UnknownField(ref s) if s == "fav_food"));
    }

    #[test]
    fn test_checkbox_uses_checked_state() {
        assert_eq!(RawInput::checkbox(true).into_field_value(), FieldValue::Flag(true));
        assert_eq!(
            RawInput::new(InputKind::Checkbox, "on", false).into_field_value(),
            FieldValue::Flag(false)
        );
        assert_eq!(
            RawInput::radio("rust").into_field_value(),
            FieldValue::Text("rust".to_string())
        );
    }

    #[test]
    fn test_input_kind_from_html_type() {
        assert_eq!(InputKind::from_html_type("checkbox"), InputKind::Checkbox);
        assert_eq!(InputKind::from_html_type("radio"), InputKind::Radio);
        assert_eq!(InputKind::from_html_type("select-one"), InputKind::Select);
        assert_eq!(InputKind::from_html_type("text"), InputKind::Text);
        assert_eq!(InputKind::from_html_type("password"), InputKind::Text);
    }

    #[test]
    fn test_as_flag() {
        assert_eq!(FieldValue::Text("true".into()).as_flag(), Some(true));
        assert_eq!(FieldValue::Text("yes".into()).as_flag(), None);
        assert_eq!(FieldValue::Unset.as_flag(), None);
        assert!(!FieldValue::Flag(false).is_empty());
        assert!(FieldValue::Text(String::new()).is_empty());
    }
}
