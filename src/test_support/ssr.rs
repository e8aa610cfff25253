use leptos::*;
use leptos_router::{RouterIntegrationContext, ServerIntegration};

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| {
        // Views under test may mount a <Router> or render <A> links; give
        // them a server-side history so they resolve without a browser.
        provide_context(RouterIntegrationContext::new(ServerIntegration {
            path: "http://localhost/".to_string(),
        }));
        view().into_view().render_to_string().to_string()
    });
    leptos_reactive::suppress_resource_load(false);
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos_router::{Router, A};

    #[test]
    fn renders_router_views_and_links() {
        let html = render_to_string(|| {
            view! {
                <Router>
                    <A href="/login">"Login"</A>
                </Router>
            }
        });
        assert!(html.contains("/login"));
        assert!(html.contains("Login"));
    }
}
