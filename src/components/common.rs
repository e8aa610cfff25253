use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Danger,
    Ghost,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text shadow-sm focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-action-primary-focus",
            ButtonVariant::Danger => "bg-action-danger-bg hover:bg-action-danger-bg-hover text-action-danger-text shadow-sm focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-action-danger-focus",
            ButtonVariant::Ghost => "bg-transparent hover:bg-action-ghost-bg-hover text-fg-muted",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=move || {
                format!(
                    "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold transition-colors duration-200 disabled:opacity-50 disabled:cursor-not-allowed {} {}",
                    variant.classes(),
                    class
                )
            }
            disabled=move || disabled.get() || loading.get()
            {..attributes}
        >
            <Show when=move || loading.get()>
                <span class="mr-2 h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></span>
            </Show>
            {children()}
        </button>
    }
}

/// Confirmation strip shown after a grid delete click: nothing is removed
/// until the user confirms here.
#[component]
pub fn DeleteConfirmBar(
    #[prop(into)] target: Signal<Option<String>>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(optional, into)] pending: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <Show when=move || target.get().is_some()>
            <div class="flex items-center gap-3 bg-status-error-bg border border-status-error-border rounded-md px-4 py-3">
                <p class="text-sm text-status-error-text flex-1">
                    {move || {
                        target
                            .get()
                            .map(|name| format!("Delete \"{}\"? This cannot be undone.", name))
                            .unwrap_or_default()
                    }}
                </p>
                <Button
                    variant=ButtonVariant::Danger
                    loading=pending
                    on:click=move |_| on_confirm.call(())
                >
                    "Delete"
                </Button>
                <Button variant=ButtonVariant::Ghost on:click=move |_| on_cancel.call(())>
                    "Cancel"
                </Button>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_map_to_distinct_classes() {
        assert!(ButtonVariant::Primary.classes().contains("bg-action-primary-bg"));
        assert!(ButtonVariant::Danger.classes().contains("bg-action-danger-bg"));
        assert_ne!(
            ButtonVariant::Primary.classes(),
            ButtonVariant::Ghost.classes()
        );
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn confirm_bar_renders_danger_and_cancel_actions() {
        let html = render_to_string(|| {
            let target = create_rw_signal(Some("admin".to_string()));
            view! {
                <DeleteConfirmBar
                    target=Signal::derive(move || target.get())
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("admin"));
        assert!(html.contains("This cannot be undone."));
        assert!(html.contains("bg-action-danger-bg"));
        assert!(html.contains("Cancel"));
    }

    #[test]
    fn confirm_bar_is_hidden_without_a_target() {
        let html = render_to_string(|| {
            view! {
                <DeleteConfirmBar
                    target=Signal::derive(|| None::<String>)
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(!html.contains("This cannot be undone."));
    }
}
