use crate::state::auth::{self, use_auth};
use leptos::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

/// Full-page blocking indicator shown while a submission is pending.
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-40 flex items-center justify-center bg-surface/70 backdrop-blur-sm">
            <div class="animate-spin rounded-full h-10 w-10 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

/// Bare centered layout for the auth pages (login, register).
#[component]
pub fn BlankLayout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">{children()}</div>
        </div>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let logout_action = auth::use_logout_action();
    let logout_pending = logout_action.pending();
    {
        create_effect(move |_| {
            if logout_action.value().get().is_some() {
                if let Some(win) = web_sys::window() {
                    let _ = win.location().set_href(crate::router::routes::LOGIN);
                }
            }
        });
    }
    let on_logout = {
        move |_| {
            if logout_pending.get_untracked() {
                return;
            }
            logout_action.dispatch(());
        }
    };
    let user_email = move || {
        auth.get()
            .user
            .map(|user| user.email)
            .unwrap_or_default()
    };
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center">
                        <h1 class="text-xl font-semibold text-fg">"Shop Admin"</h1>
                    </div>
                    <div class="flex items-center">
                        <nav class="hidden lg:flex space-x-4">
                            <a href="/dashboard" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                "Dashboard"
                            </a>
                            <a href="/system/role" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                "Roles"
                            </a>
                            <a href="/manage-product/products" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                "Products"
                            </a>
                            <a href="/manage-product/orders" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                "Orders"
                            </a>
                            <a href="/change-password" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                "Change password"
                            </a>
                        </nav>
                        <a href="/my-profile" class="ml-4 text-sm text-fg-muted hover:text-fg">
                            {user_email}
                        </a>
                        <button
                            class="ml-4 text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                            disabled=move || logout_pending.get()
                            on:click=on_logout
                        >
                            "Logout"
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}

/// Header + content shell for the authenticated pages.
#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header />
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">{children()}</main>
        </div>
    }
}
