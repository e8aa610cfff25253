use crate::router::routes;
use crate::state::auth::use_auth;
use leptos::*;
use leptos_router::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (auth, _) = use_auth();
    let greeting = move || {
        auth.with(|state| {
            state
                .user
                .as_ref()
                .map(|user| {
                    let name = user
                        .full_name
                        .clone()
                        .filter(|name| !name.trim().is_empty())
                        .unwrap_or_else(|| user.email.clone());
                    format!("Welcome back, {}", name)
                })
                .unwrap_or_else(|| "Welcome".to_string())
        })
    };

    view! {
        <div class="space-y-6">
            <h2 class="text-2xl font-bold text-fg">{greeting}</h2>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <A
                    href=routes::SYSTEM_ROLE
                    class="block bg-surface rounded-lg shadow p-6 hover:shadow-md"
                >
                    <h3 class="font-semibold text-fg">"Roles"</h3>
                    <p class="text-sm text-fg-muted">"Manage roles and their permissions."</p>
                </A>
                <A
                    href=routes::MANAGE_PRODUCT_PRODUCTS
                    class="block bg-surface rounded-lg shadow p-6 hover:shadow-md"
                >
                    <h3 class="font-semibold text-fg">"Products"</h3>
                    <p class="text-sm text-fg-muted">"Browse, create and edit products."</p>
                </A>
                <A
                    href=routes::MANAGE_PRODUCT_ORDERS
                    class="block bg-surface rounded-lg shadow p-6 hover:shadow-md"
                >
                    <h3 class="font-semibold text-fg">"Orders"</h3>
                    <p class="text-sm text-fg-muted">"Track order status and fulfilment."</p>
                </A>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_auth, regular_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn greets_the_signed_in_user() {
        let html = render_to_string(|| {
            provide_auth(Some(regular_user()));
            view! { <Router><DashboardPage /></Router> }
        });
        assert!(html.contains("Welcome back,"));
    }

    #[test]
    fn falls_back_to_plain_greeting() {
        let html = render_to_string(|| {
            provide_auth(None);
            view! { <Router><DashboardPage /></Router> }
        });
        assert!(html.contains("Welcome"));
        assert!(!html.contains("Welcome back,"));
    }
}
