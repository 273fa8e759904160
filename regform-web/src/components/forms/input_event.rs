use regform::{FieldName, InputKind, RawInput, RegformError};
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlInputElement, HtmlSelectElement};

/// Reads the name and current state of the element that fired `ev`.
pub fn read_input_event(
    ev: &Event,
) -> Result<(FieldName, RawInput), RegformError> {
    let target = ev
        .target()
        .ok_or_else(|| RegformError::Message("Event has no target".into()))?;
    read_input_target(&target)
}

pub fn read_input_target(
    target: &EventTarget,
) -> Result<(FieldName, RawInput), RegformError> {
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        let field = input.name().parse::<FieldName>()?;
        let kind = InputKind::from_html_type(&input.type_());
        Ok((field, RawInput::new(kind, input.value(), input.checked())))
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        let field = select.name().parse::<FieldName>()?;
        Ok((field, RawInput::select(select.value())))
    } else {
        Err(RegformError::Message(
            "Change event from an unsupported element".into(),
        ))
    }
}
