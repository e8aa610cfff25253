use super::view_model::use_register_view_model;
use crate::components::layout::{BlankLayout, LoadingOverlay};
use crate::components::text_field::TextField;
use crate::components::toast::use_toasts;
use crate::forms::validation::{CONFIRM_PASSWORD, EMAIL, PASSWORD};
use crate::router::routes;
use leptos::*;
use leptos_router::*;

#[component]
pub fn RegisterPanel() -> impl IntoView {
    let vm = use_register_view_model();
    let form = vm.form.clone();
    let submission = vm.submission;
    let toasts = use_toasts();

    // Terminal outcomes are one-shot: consume resets the machine so a
    // re-render cannot replay the toast or the redirect.
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

    let email_form = form.clone();
    let email_blur = form.clone();
    let email_err = form.clone();
    let password_form = form.clone();
    let password_blur = form.clone();
    let password_err = form.clone();
    let confirm_form = form.clone();
    let confirm_blur = form.clone();
    let confirm_err = form.clone();
    let value_form = form.clone();
    let value_form2 = form.clone();
    let value_form3 = form;

    view! {
        <Show when=pending>
            <LoadingOverlay />
        </Show>
        <BlankLayout>
            <div>
                <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">"Register"</h2>
            </div>
            <form class="mt-8 space-y-6" autocomplete="off" novalidate on:submit=on_submit>
                <TextField
                    label="Email"
                    placeholder="Input email"
                    autofocus=true
                    value=Signal::derive(move || value_form.value(EMAIL))
                    on_input=Callback::new(move |value| email_form.set_field(EMAIL, value))
                    on_blur=Callback::new(move |_| email_blur.mark_touched(EMAIL))
                    error=Signal::derive(move || email_err.error_message(EMAIL))
                />
                <TextField
                    label="Password"
                    placeholder="Input password"
                    password=true
                    value=Signal::derive(move || value_form2.value(PASSWORD))
                    on_input=Callback::new(move |value| password_form.set_field(PASSWORD, value))
                    on_blur=Callback::new(move |_| password_blur.mark_touched(PASSWORD))
                    error=Signal::derive(move || password_err.error_message(PASSWORD))
                />
                <TextField
                    label="Confirm password"
                    placeholder="Enter confirm password"
                    password=true
                    value=Signal::derive(move || value_form3.value(CONFIRM_PASSWORD))
                    on_input=Callback::new(move |value| {
                        confirm_form.set_field(CONFIRM_PASSWORD, value)
                    })
                    on_blur=Callback::new(move |_| confirm_blur.mark_touched(CONFIRM_PASSWORD))
                    error=Signal::derive(move || confirm_err.error_message(CONFIRM_PASSWORD))
                />
                <button
                    type="submit"
                    disabled=pending
                    class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-action-primary-focus disabled:opacity-50"
                >
                    {move || if pending() { "Registering..." } else { "Register" }}
                </button>
                <div class="flex items-center justify-center gap-1 text-sm">
                    <span class="text-fg-muted">"Do you already have an account?"</span>
                    <A href=routes::LOGIN class="font-medium text-link hover:text-link-hover">
                        "Login"
                    </A>
                </div>
            </form>
        </BlankLayout>
    }
}
