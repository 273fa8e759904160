use leptos::*;
use regform::SubmissionResult;

#[component]
pub fn SubmissionStatusView(
    #[prop(into)] is_submitting: Signal<bool>,
    #[prop(into)] result: Signal<Option<SubmissionResult>>,
) -> impl IntoView {
    view! {
       // Show a loading message while the request is in flight
       { move || if is_submitting.get() {
           view! {
               <div>
                   "Submitting..."
               </div>
           }.into_view()
       } else {
           view! { }.into_view()
       }}

       // last outcome, replaced by the next submit
       { move || match result.get() {
           Some(result @ SubmissionResult::Success(_)) => view! {
               <h4 class="success text-green-600">{result.to_string()}</h4>
           }.into_view(),
           Some(result @ SubmissionResult::Failure(_)) => view! {
               <h4 class="error text-red-500">{result.to_string()}</h4>
           }.into_view(),
           None => view! { }.into_view(),
       }}
    }
}
