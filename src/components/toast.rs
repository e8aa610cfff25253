use leptos::*;
use uuid::Uuid;

#[cfg(target_arch = "wasm32")]
const AUTO_DISMISS_MS: u32 = 4000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub success: bool,
}

/// Notification sink. Pages hand terminal submission messages here with a
/// success/error flag; the viewport renders them and they dismiss
/// themselves after a few seconds.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
}

impl Toasts {
    fn new() -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(message.into(), true);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(message.into(), false);
    }

    pub fn dismiss(&self, id: Uuid) {
        self.items.update(|items| items.retain(|toast| toast.id != id));
    }

    pub fn items(&self) -> Vec<Toast> {
        self.items.get()
    }

    fn push(&self, message: String, success: bool) {
        let toast = Toast {
            id: Uuid::new_v4(),
            message,
            success,
        };
        if !success {
            log::warn!("toast error: {}", toast.message);
        }
        let id = toast.id;
        self.items.update(|items| items.push(toast));
        self.schedule_dismiss(id);
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: Uuid) {
        let toasts = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(AUTO_DISMISS_MS).await;
            toasts.dismiss(id);
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: Uuid) {}
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().unwrap_or_else(Toasts::new)
}

#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let toasts = Toasts::new();
    provide_context(toasts);
    view! {
        <>
            {children()}
            <ToastViewport />
        </>
    }
}

#[component]
fn ToastViewport() -> impl IntoView {
    let toasts = use_toasts();
    view! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2 w-80">
            <For
                each=move || toasts.items()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let (bg, border, text, icon) = if toast.success {
                        ("bg-status-success-bg", "border-status-success-border", "text-status-success-text", "fa-check-circle")
                    } else {
                        ("bg-status-error-bg", "border-status-error-border", "text-status-error-text", "fa-exclamation-circle")
                    };
                    let id = toast.id;
                    view! {
                        <div class=format!("flex items-center gap-2 p-3 rounded-xl border shadow-sm {} {} {}", bg, border, text)>
                            <i class=format!("fas {}", icon)></i>
                            <p class="text-sm font-medium flex-1">{toast.message.clone()}</p>
                            <button
                                type="button"
                                class="text-xs opacity-60 hover:opacity-100"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn viewport_renders_flagged_toasts() {
        let html = render_to_string(|| {
            let toasts = Toasts::new();
            provide_context(toasts);
            toasts.error("Email exists");
            view! { <ToastViewport /> }
        });
        assert!(html.contains("Email exists"));
        assert!(html.contains("bg-status-error-bg"));
    }
}
