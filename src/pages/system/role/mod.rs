use leptos::*;

mod panel;
pub mod repository;
pub mod view_model;

pub use panel::RolePanel;

#[component]
pub fn RolePage() -> impl IntoView {
    view! { <RolePanel /> }
}
