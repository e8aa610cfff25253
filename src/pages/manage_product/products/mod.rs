use leptos::*;

mod panel;
pub mod repository;
pub mod view_model;

pub use panel::ProductPanel;

#[component]
pub fn ProductPage() -> impl IntoView {
    view! { <ProductPanel /> }
}
