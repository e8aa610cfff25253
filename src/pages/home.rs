use crate::router::routes;
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <div class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <h1 class="text-4xl font-extrabold text-fg sm:text-5xl lg:text-6xl">
                        "Shop Admin"
                    </h1>
                    <p class="mt-3 max-w-md mx-auto text-base text-fg-muted sm:text-lg lg:mt-5 lg:text-xl lg:max-w-3xl">
                        "Manage your catalogue, orders and staff roles in one place."
                    </p>
                    <div class="mt-5 max-w-md mx-auto sm:flex sm:justify-center gap-3 lg:mt-8">
                        <div class="rounded-md shadow">
                            <a
                                href=routes::LOGIN
                                class="w-full flex items-center justify-center px-8 py-3 border border-transparent text-base font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover lg:py-4 lg:text-lg lg:px-10"
                            >
                                "Login"
                            </a>
                        </div>
                        <div class="rounded-md shadow mt-3 sm:mt-0">
                            <a
                                href=routes::REGISTER
                                class="w-full flex items-center justify-center px-8 py-3 border border-edge text-base font-medium rounded-md text-fg bg-surface hover:bg-action-ghost-bg-hover lg:py-4 lg:text-lg lg:px-10"
                            >
                                "Register"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn landing_links_to_login_and_register() {
        let html = render_to_string(|| view! { <HomePage /> });
        assert!(html.contains("/login"));
        assert!(html.contains("/register"));
    }
}
