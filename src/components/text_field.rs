use leptos::*;

/// Labelled input with inline error text, bound to a form controller field.
/// `password` adds a visibility toggle; purely visual, the value is
/// unaffected.
#[component]
pub fn TextField(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional, into)] on_blur: Option<Callback<()>>,
    #[prop(optional, into)] error: Signal<Option<&'static str>>,
    #[prop(optional)] password: bool,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] autofocus: bool,
) -> impl IntoView {
    let (visible, set_visible) = create_signal(false);
    let input_type = move || {
        if !password || visible.get() {
            "text"
        } else {
            "password"
        }
    };

    let border_classes = move || {
        if error.get().is_some() {
            "border-status-error-border focus:ring-status-error-border"
        } else {
            "border-form-control-border focus:ring-action-primary-focus"
        }
    };

    view! {
        <div class="flex flex-col gap-1.5 w-full">
            <label class="text-sm font-bold text-fg-muted ml-1">{label}</label>
            <div class="relative">
                <input
                    type=input_type
                    class=move || format!(
                        "appearance-none rounded-md block w-full px-3 py-2 border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 sm:text-sm {}",
                        border_classes()
                    )
                    placeholder=placeholder
                    autofocus=autofocus
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.call(event_target_value(&ev))
                    on:blur=move |_| {
                        if let Some(on_blur) = on_blur {
                            on_blur.call(());
                        }
                    }
                />
                <Show when=move || password>
                    <button
                        type="button"
                        class="absolute inset-y-0 right-0 flex items-center pr-3 text-fg-muted hover:text-fg"
                        on:click=move |_| set_visible.update(|v| *v = !*v)
                    >
                        {move || if visible.get() {
                            view! { <i class="fas fa-eye-slash"></i> }
                        } else {
                            view! { <i class="fas fa-eye"></i> }
                        }}
                    </button>
                </Show>
            </div>
            {move || {
                error
                    .get()
                    .map(|message| {
                        view! { <p class="text-xs text-status-error-text ml-1">{message}</p> }
                            .into_view()
                    })
                    .unwrap_or_else(|| ().into_view())
            }}
        </div>
    }
}
