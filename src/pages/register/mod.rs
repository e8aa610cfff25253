use leptos::*;

mod panel;
pub mod repository;
pub mod view_model;

pub use panel::RegisterPanel;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! { <RegisterPanel /> }
}
