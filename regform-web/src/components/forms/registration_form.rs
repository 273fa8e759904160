use leptos::ev::SubmitEvent;
use leptos::*;
use regform::{
    FavFood, FavLanguage, FieldName, FormController, RegistrationClient,
    RegistrationHandler,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::Event;

use super::field_error::FieldError;
use super::helpers::SubmissionStatusView;
use super::input_event::read_input_event;
use crate::components::buttons::SubmitButton;
use crate::vars::registration_config;

const FOOD_PLACEHOLDER: &str = "-- Select Favorite Food --";

#[component]
pub fn RegistrationForm() -> impl IntoView {
    let controller = create_rw_signal(FormController::new());

    let is_submittable =
        create_memo(move |_| controller.with(|c| c.is_submittable()));
    let is_submitting =
        Signal::derive(move || controller.with(|c| c.is_submitting()));
    let result = Signal::derive(move || controller.with(|c| c.result().cloned()));

    let error_for = move |field: FieldName| {
        Signal::derive(move || {
            controller.with(|c| c.error(field).map(str::to_string))
        })
    };

    let on_change = move |ev: Event| match read_input_event(&ev) {
        Ok((field, input)) => {
            controller.update(|c| c.on_field_change(field, input))
        }
        Err(err) => log::error!("{}", err),
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if !is_submittable.get_untracked() {
            return;
        }
        let Some(payload) = controller.try_update(|c| c.begin_submit()) else {
            return;
        };
        spawn_local(async move {
            let outcome = match RegistrationHandler::new(registration_config())
            {
                Ok(handler) => handler.register(&payload).await,
                Err(err) => Err(err),
            };
            if let Err(err) = &outcome {
                log::error!("Registration failed: {}", err);
            }
            controller.update(|c| {
                c.finish_submit(outcome);
            });
        });
    };

    view! {
        <form on:submit=on_submit>
            <SubmissionStatusView is_submitting result/>

            <div class="inputGroup">
                <label for="username">"Username:"</label>
                <input
                    id="username"
                    name="username"
                    type="text"
                    placeholder="Type Username"
                    prop:value=move || controller.with(|c| c.values().username.clone())
                    on:input=on_change
                />
                <FieldError message=error_for(FieldName::Username)/>
            </div>

            <div class="inputGroup">
                <fieldset>
                    <legend>"Favorite Language:"</legend>
                    {FavLanguage::ALL
                        .into_iter()
                        .map(|language| view! {
                            <label>
                                <input
                                    type="radio"
                                    name="favLanguage"
                                    value=language.as_str()
                                    prop:checked=move || controller.with(|c| {
                                        c.values().fav_language == language.as_str()
                                    })
                                    on:change=on_change
                                />
                                {language.label()}
                            </label>
                        })
                        .collect_view()}
                </fieldset>
                <FieldError message=error_for(FieldName::FavLanguage)/>
            </div>

            <div class="inputGroup">
                <label for="favFood">"Favorite Food:"</label>
                <select
                    id="favFood"
                    name="favFood"
                    prop:value=move || controller.with(|c| c.values().fav_food.clone())
                    on:change=on_change
                >
                    <option value="">{FOOD_PLACEHOLDER}</option>
                    {FavFood::ALL
                        .into_iter()
                        .map(|food| view! {
                            <option value=food.as_str()>{food.label()}</option>
                        })
                        .collect_view()}
                </select>
                <FieldError message=error_for(FieldName::FavFood)/>
            </div>

            <div class="inputGroup">
                <label>
                    <input
                        type="checkbox"
                        name="agreement"
                        prop:checked=move || controller.with(|c| c.values().agreement)
                        on:change=on_change
                    />
                    "Agree to our terms"
                </label>
                <FieldError message=error_for(FieldName::Agreement)/>
            </div>

            <div>
                <SubmitButton enabled=is_submittable/>
            </div>
        </form>
    }
}
