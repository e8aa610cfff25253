use super::view_model::use_change_password_view_model;
use crate::components::layout::LoadingOverlay;
use crate::components::text_field::TextField;
use crate::components::toast::use_toasts;
use crate::forms::validation::{CONFIRM_PASSWORD, CURRENT_PASSWORD, NEW_PASSWORD};
use crate::router::routes;
use leptos::*;

#[component]
pub fn ChangePasswordPanel() -> impl IntoView {
    let vm = use_change_password_view_model();
    let form = vm.form.clone();
    let submission = vm.submission;
    let toasts = use_toasts();

    // A changed password invalidates the session, so success routes back
    // through login.
    create_effect(move |_| {
        let state = submission.state();
        if !state.is_success() && !state.is_error() {
            return;
        }
        if let Some(outcome) = submission.consume() {
            if outcome.success {
                toasts.success(outcome.message);
                if let Some(win) = web_sys::window() {
                    let _ = win.location().set_href(routes::LOGIN);
                }
            } else {
                toasts.error(outcome.message);
            }
        }
    });

    let pending = move || submission.state().is_loading();

    let submit_vm = vm.clone();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        submit_vm.submit();
    };

    let current_form = form.clone();
    let current_blur = form.clone();
    let current_err = form.clone();
    let current_value = form.clone();
    let new_form = form.clone();
    let new_blur = form.clone();
    let new_err = form.clone();
    let new_value = form.clone();
    let confirm_form = form.clone();
    let confirm_blur = form.clone();
    let confirm_err = form.clone();
    let confirm_value = form;

    view! {
        <Show when=pending>
            <LoadingOverlay />
        </Show>
        <div class="max-w-md mx-auto space-y-6">
            <h2 class="text-2xl font-bold text-fg">"Change password"</h2>
            <form class="space-y-6" novalidate on:submit=on_submit>
                <TextField
                    label="Current password"
                    password=true
                    value=Signal::derive(move || current_value.value(CURRENT_PASSWORD))
                    on_input=Callback::new(move |value| {
                        current_form.set_field(CURRENT_PASSWORD, value)
                    })
                    on_blur=Callback::new(move |_| current_blur.mark_touched(CURRENT_PASSWORD))
                    error=Signal::derive(move || current_err.error_message(CURRENT_PASSWORD))
                />
                <TextField
                    label="New password"
                    password=true
                    value=Signal::derive(move || new_value.value(NEW_PASSWORD))
                    on_input=Callback::new(move |value| new_form.set_field(NEW_PASSWORD, value))
                    on_blur=Callback::new(move |_| new_blur.mark_touched(NEW_PASSWORD))
                    error=Signal::derive(move || new_err.error_message(NEW_PASSWORD))
                />
                <TextField
                    label="Confirm new password"
                    password=true
                    value=Signal::derive(move || confirm_value.value(CONFIRM_PASSWORD))
                    on_input=Callback::new(move |value| {
                        confirm_form.set_field(CONFIRM_PASSWORD, value)
                    })
                    on_blur=Callback::new(move |_| confirm_blur.mark_touched(CONFIRM_PASSWORD))
                    error=Signal::derive(move || confirm_err.error_message(CONFIRM_PASSWORD))
                />
                <button
                    type="submit"
                    disabled=pending
                    class="w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-action-primary-focus disabled:opacity-50"
                >
                    {move || if pending() { "Saving..." } else { "Change password" }}
                </button>
            </form>
        </div>
    }
}
