use leptos::*;

use super::button_type::ButtonType;

#[component]
pub fn SubmitButton(
    #[prop(into)] enabled: Signal<bool>,
    #[prop(optional)] text: Option<&'static str>,
) -> impl IntoView {
    let button_type = ButtonType::Submit;
    let text = text.unwrap_or_else(|| button_type.button_text());

    view! {
        <button
            type="submit"
            class=move || button_type.button_class(!enabled.get())
            disabled=move || !enabled.get()
        >
            {text}
        </button>
    }
}
