use leptos::*;

/// Validation message shown beneath an input, if any.
#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|message| {
            view! {
                <div class="validation text-red-500 text-sm">{message}</div>
            }
        })
    }
}
