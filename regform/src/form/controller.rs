use log::debug;

use super::field::{FieldName, RawInput};
use super::schema::FormSchema;
use super::submission::{ServerResponse, SubmissionResult};
use super::values::{FieldErrors, FormValues};
use crate::handlers::RegistrationClient;
use crate::RegformError;

/// State behind the registration form: current values, per-field errors
/// and the outcome of the last submission.
#[derive(Debug, Clone, PartialEq)]
pub struct FormController {
    schema: FormSchema,
    values: FormValues,
    errors: FieldErrors,
    result: Option<SubmissionResult>,
    is_submitting: bool,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    pub fn new() -> Self {
        Self::with_schema(FormSchema::registration())
    }

    pub fn with_schema(schema: FormSchema) -> Self {
        Self {
            schema,
            values: FormValues::default(),
            errors: FieldErrors::new(),
            result: None,
            is_submitting: false,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: FieldName) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn result(&self) -> Option<&SubmissionResult> {
        self.result.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Stores the new value and re-validates only the changed field.
    pub fn on_field_change(&mut self, field: FieldName, input: RawInput) {
        let value = input.into_field_value();
        debug!("Field changed: {} = {:?}", field, value);

        match self.schema.validate_field(field, &value) {
            Ok(()) => self.errors.clear(field),
            Err(RegformError::Validation { details, .. }) => {
                self.errors.set(field, details)
            }
            Err(err) => self.errors.set(field, err.to_string()),
        }
        self.values.set(field, value);
    }

    /// Same as [`Self::on_field_change`], for callers that only know the
    /// field by its html name.
    pub fn on_named_change(
        &mut self,
        name: &str,
        input: RawInput,
    ) -> Result<(), RegformError> {
        let field = name.parse::<FieldName>()?;
        self.on_field_change(field, input);
        Ok(())
    }

    pub fn is_submittable(&self) -> bool {
        self.schema.is_valid(&self.values)
    }

    /// Takes the current values as request payload and resets the form.
    pub fn begin_submit(&mut self) -> FormValues {
        let payload = std::mem::take(&mut self.values);
        self.is_submitting = true;
        debug!("Submitting registration for {:?}", payload.username);
        payload
    }

    pub fn finish_submit(
        &mut self,
        outcome: Result<ServerResponse, RegformError>,
    ) -> &SubmissionResult {
        let result = SubmissionResult::from(outcome);
        debug!("Submission finished: {:?}", result);
        self.is_submitting = false;
        self.result.insert(result)
    }

    pub async fn submit<C>(&mut self, client: &C) -> &SubmissionResult
    where
        C: RegistrationClient + ?Sized,
    {
        let payload = self.begin_submit();
        let outcome = client.register(&payload).await;
        self.finish_submit(outcome)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use async_trait::async_trait;

    use super::*;
    use crate::form::messages::*;

    struct MockClient {
        outcome: fn() -> Result<ServerResponse, RegformError>,
        received: RefCell<Vec<FormValues>>,
    }

    impl MockClient {
        fn new(outcome: fn() -> Result<ServerResponse, RegformError>) -> Self {
            Self {
                outcome,
                received: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl RegistrationClient for MockClient {
        async fn register(
            &self,
            values: &FormValues,
        ) -> Result<ServerResponse, RegformError> {
            self.received.borrow_mut().push(values.clone());
            (self.outcome)()
        }
    }

    fn accepted() -> Result<ServerResponse, RegformError> {
        Ok(ServerResponse::new(201, r#"{"message":"Welcome ferris"}"#))
    }

    fn rejected() -> Result<ServerResponse, RegformError> {
        Ok(ServerResponse::new(422, r#"{"message":"username is taken"}"#))
    }

    fn unreachable_server() -> Result<ServerResponse, RegformError> {
        Err(RegformError::Message("connection refused".into()))
    }

    fn filled_in() -> FormController {
        let mut controller = FormController::new();
        controller.on_field_change(FieldName::Username, RawInput::text("ferris"));
        controller.on_field_change(FieldName::FavLanguage, RawInput::radio("rust"));
        controller.on_field_change(FieldName::FavFood, RawInput::select("pizza"));
        controller.on_field_change(FieldName::Agreement, RawInput::checkbox(true));
        controller
    }

    #[test]
    fn test_new_form_is_not_submittable() {
        let controller = FormController::new();
        assert!(!controller.is_submittable());
        assert!(controller.errors().is_empty());
        assert!(controller.result().is_none());
    }

    #[test]
    fn test_username_error_updates() {
        let mut controller = FormController::new();
        controller.on_field_change(FieldName::Username, RawInput::text("ab"));
        assert_eq!(
            controller.error(FieldName::Username),
            Some("username must be at least 3 characters")
        );
        controller.on_field_change(FieldName::Username, RawInput::text("abc"));
        assert_eq!(controller.error(FieldName::Username), None);
        assert_eq!(controller.values().username, "abc");
    }

    #[test]
    fn test_change_only_touches_its_own_error() {
        let mut controller = FormController::new();
        controller.on_field_change(FieldName::Username, RawInput::text("ab"));
        controller.on_field_change(FieldName::FavFood, RawInput::select("tacos"));
        assert_eq!(controller.error(FieldName::FavFood), Some(FAV_FOOD_OPTIONS));

        controller.on_field_change(FieldName::FavFood, RawInput::select("pizza"));
        assert_eq!(controller.error(FieldName::FavFood), None);
        assert_eq!(controller.error(FieldName::Username), Some(USERNAME_MIN));
        assert_eq!(controller.error(FieldName::FavLanguage), None);
        assert_eq!(controller.error(FieldName::Agreement), None);
    }

    #[test]
    fn test_agreement_gates_submission() {
        let mut controller = filled_in();
        assert!(controller.is_submittable());

        controller.on_field_change(FieldName::Agreement, RawInput::checkbox(false));
        assert!(!controller.is_submittable());
        assert_eq!(controller.error(FieldName::Agreement), Some(AGREEMENT_OPTIONS));

        controller.on_field_change(FieldName::Agreement, RawInput::checkbox(true));
        assert!(controller.is_submittable());
        assert_eq!(controller.error(FieldName::Agreement), None);
    }

    #[test]
    fn test_on_named_change() {
        let mut controller = FormController::new();
        controller
            .on_named_change("favLanguage", RawInput::radio("javascript"))
            .unwrap();
        assert_eq!(controller.values().fav_language, "javascript");

        let err = controller
            .on_named_change("email", RawInput::text("a@b.c"))
            .unwrap_err();
        assert!(matches!(err, RegformError::UnknownField(_)));
    }

    #[test]
    fn test_begin_submit_resets_values() {
        let mut controller = filled_in();
        let payload = controller.begin_submit();
        assert_eq!(payload.username, "ferris");
        assert!(payload.agreement);
        assert_eq!(controller.values(), &FormValues::default());
        assert!(controller.is_submitting());
        assert!(!controller.is_submittable());
    }

    #[tokio::test]
    async fn test_submit_success() {
        let client = MockClient::new(accepted);
        let mut controller = filled_in();

        let result = controller.submit(&client).await.clone();
        assert_eq!(result, SubmissionResult::Success("Welcome ferris".into()));
        assert_eq!(controller.values(), &FormValues::default());
        assert!(!controller.is_submitting());

        let received = client.received.borrow();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].fav_food, "pizza");
    }

    #[tokio::test]
    async fn test_submit_failure_replaces_success() {
        let mut controller = filled_in();
        controller.submit(&MockClient::new(accepted)).await;
        assert!(controller.result().unwrap().is_success());

        controller.submit(&MockClient::new(rejected)).await;
        let result = controller.result().unwrap();
        assert_eq!(result.failure(), Some("username is taken"));
        assert_eq!(result.success(), None);
        assert_eq!(controller.values(), &FormValues::default());
    }

    #[tokio::test]
    async fn test_submit_transport_error() {
        let mut controller = filled_in();
        controller.submit(&MockClient::new(unreachable_server)).await;
        assert_eq!(
            controller.result(),
            Some(&SubmissionResult::Failure("connection refused".into()))
        );
        assert_eq!(controller.values(), &FormValues::default());
    }

    #[tokio::test]
    async fn test_submit_keeps_field_errors() {
        let mut controller = filled_in();
        controller.on_field_change(FieldName::Username, RawInput::text("ab"));
        controller.submit(&MockClient::new(rejected)).await;
        assert_eq!(controller.error(FieldName::Username), Some(USERNAME_MIN));
    }
}
