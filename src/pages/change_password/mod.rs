use leptos::*;

mod panel;
pub mod repository;
pub mod view_model;

pub use panel::ChangePasswordPanel;

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    view! { <ChangePasswordPanel /> }
}
