use leptos::{ev::MouseEvent, *};

// Icon buttons for the list-page action columns. Create is the filled
// variant, edit and delete stay ghost until hovered.

#[component]
pub fn GridCreateButton(
    #[prop(into)] on_click: Callback<MouseEvent>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            title="Create"
            class="inline-flex items-center justify-center w-9 h-9 rounded-full bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover shadow-sm disabled:opacity-50 disabled:cursor-not-allowed"
            disabled=move || disabled.get()
            on:click=move |ev| on_click.call(ev)
        >
            <i class="fas fa-plus"></i>
        </button>
    }
}

#[component]
pub fn GridEditButton(
    #[prop(into)] on_click: Callback<MouseEvent>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            title="Edit"
            class="inline-flex items-center justify-center w-9 h-9 rounded-full text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover disabled:opacity-50 disabled:cursor-not-allowed"
            disabled=move || disabled.get()
            on:click=move |ev| on_click.call(ev)
        >
            <i class="fas fa-pen"></i>
        </button>
    }
}

#[component]
pub fn GridDeleteButton(
    #[prop(into)] on_click: Callback<MouseEvent>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            title="Delete"
            class="inline-flex items-center justify-center w-9 h-9 rounded-full text-action-danger-bg hover:bg-status-error-bg disabled:opacity-50 disabled:cursor-not-allowed"
            disabled=move || disabled.get()
            on:click=move |ev| on_click.call(ev)
        >
            <i class="fas fa-trash"></i>
        </button>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn grid_buttons_carry_action_titles() {
        let html = render_to_string(|| {
            view! {
                <GridCreateButton on_click=Callback::new(|_| {}) />
                <GridEditButton on_click=Callback::new(|_| {}) />
                <GridDeleteButton on_click=Callback::new(|_| {}) disabled=true />
            }
        });
        assert!(html.contains(r#"title="Create""#));
        assert!(html.contains(r#"title="Edit""#));
        assert!(html.contains(r#"title="Delete""#));
        assert!(html.contains("disabled"));
    }
}
