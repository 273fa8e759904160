use leptos::*;
use leptos_meta::*;

use crate::components::forms::RegistrationForm;
use crate::vars::PAGE_TITLE;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=PAGE_TITLE/>
        <div class="my-0 mx-auto px-8 max-w-7xl text-left">
            <main>
                <h2>"Create an Account"</h2>
                <RegistrationForm/>
            </main>
        </div>
    }
}
