use super::view_model::use_login_view_model;
use crate::components::error::InlineErrorMessage;
use crate::components::layout::BlankLayout;
use crate::components::text_field::TextField;
use crate::forms::validation::{EMAIL, PASSWORD};
use crate::router::routes;
use leptos::*;
use leptos_router::*;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let form = vm.form.clone();
    let error = vm.error;
    let pending = vm.login_action.pending();

    let submit_vm = vm.clone();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        submit_vm.submit();
    };

    let email_form = form.clone();
    let email_blur = form.clone();
    let email_err = form.clone();
    let email_value = form.clone();
    let password_form = form.clone();
    let password_blur = form.clone();
    let password_err = form.clone();
    let password_value = form;

    view! {
        <BlankLayout>
            <div>
                <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">"Login"</h2>
            </div>
            <form class="mt-8 space-y-6" novalidate on:submit=on_submit>
                <TextField
                    label="Email"
                    placeholder="Input email"
                    autofocus=true
                    value=Signal::derive(move || email_value.value(EMAIL))
                    on_input=Callback::new(move |value| email_form.set_field(EMAIL, value))
                    on_blur=Callback::new(move |_| email_blur.mark_touched(EMAIL))
                    error=Signal::derive(move || email_err.error_message(EMAIL))
                />
                <TextField
                    label="Password"
                    placeholder="Input password"
                    password=true
                    value=Signal::derive(move || password_value.value(PASSWORD))
                    on_input=Callback::new(move |value| password_form.set_field(PASSWORD, value))
                    on_blur=Callback::new(move |_| password_blur.mark_touched(PASSWORD))
                    error=Signal::derive(move || password_err.error_message(PASSWORD))
                />
                <InlineErrorMessage error=Signal::derive(move || error.get()) />
                <button
                    type="submit"
                    disabled=move || pending.get()
                    class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-action-primary-focus disabled:opacity-50"
                >
                    {move || if pending.get() { "Signing in..." } else { "Login" }}
                </button>
                <div class="flex items-center justify-center gap-1 text-sm">
                    <span class="text-fg-muted">"No account yet?"</span>
                    <A href=routes::REGISTER class="font-medium text-link hover:text-link-hover">
                        "Register"
                    </A>
                </div>
            </form>
        </BlankLayout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_login_form_with_register_link() {
        let html = render_to_string(|| view! { <Router><LoginPanel /></Router> });
        assert!(html.contains("Login"));
        assert!(html.contains("/register"));
    }
}
