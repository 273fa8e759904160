use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::field::{FieldName, FieldValue};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub username: String,
    pub fav_language: String,
    pub fav_food: String,
    pub agreement: bool,
}

impl FormValues {
    pub fn get(&self, field: FieldName) -> FieldValue {
        match field {
            FieldName::Username => FieldValue::Text(self.username.clone()),
            FieldName::FavLanguage => FieldValue::Text(self.fav_language.clone()),
            FieldName::FavFood => FieldValue::Text(self.fav_food.clone()),
            FieldName::Agreement => FieldValue::Flag(self.agreement),
        }
    }

    pub fn set(&mut self, field: FieldName, value: FieldValue) {
        match field {
            FieldName::Username => self.username = into_text(value),
            FieldName::FavLanguage => self.fav_language = into_text(value),
            FieldName::FavFood => self.fav_food = into_text(value),
            FieldName::Agreement => {
                self.agreement = value.as_flag().unwrap_or(false)
            }
        }
    }

    pub fn reset(&mut self) {
        *self = FormValues::default();
    }
}

fn into_text(value: FieldValue) -> String {
    match value {
        FieldValue::Text(text) => text,
        FieldValue::Flag(flag) => flag.to_string(),
        FieldValue::Unset => String::new(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<FieldName, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn set<S: Into<String>>(&mut self, field: FieldName, message: S) {
        self.errors.insert(field, message.into());
    }

    pub fn clear(&mut self, field: FieldName) {
        self.errors.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_default_values() {
        let values = FormValues::default();
        assert_eq!(values.username, "");
        assert_eq!(values.fav_language, "");
        assert_eq!(values.fav_food, "");
        assert!(!values.agreement);
    }

    #[test]
    fn test_json_payload_keys() {
        let values = FormValues {
            username: "ferris".to_string(),
            fav_language: "rust".to_string(),
            fav_food: "pizza".to_string(),
            agreement: true,
        };
        let payload = serde_json::to_value(&values).unwrap();
        assert_eq!(
            payload,
            json!({
                "username": "ferris",
                "favLanguage": "rust",
                "favFood": "pizza",
                "agreement": true,
            })
        );
    }

    #[test]
    fn test_set_and_get() {
        let mut values = FormValues::default();
        values.set(FieldName::FavFood, FieldValue::Text("pizza".into()));
        values.set(FieldName::Agreement, FieldValue::Text("true".into()));
        assert_eq!(values.get(FieldName::FavFood), FieldValue::Text("pizza".into()));
        assert_eq!(values.get(FieldName::Agreement), FieldValue::Flag(true));

        values.set(FieldName::Agreement, FieldValue::Text("nope".into()));
        assert!(!values.agreement);

        values.reset();
        assert_eq!(values, FormValues::default());
    }

    #[test]
    fn test_field_errors() {
        let mut errors = FieldErrors::new();
        errors.set(FieldName::Username, "username is required");
        errors.set(FieldName::Agreement, "agreement must be accepted");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(FieldName::Username), Some("username is required"));

        errors.clear(FieldName::Username);
        assert_eq!(errors.get(FieldName::Username), None);
        let fields: Vec<FieldName> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec![FieldName::Agreement]);
    }
}
