use leptos::*;

mod panel;
pub mod repository;
pub mod view_model;

pub use panel::OrderPanel;

#[component]
pub fn OrderPage() -> impl IntoView {
    view! { <OrderPanel /> }
}
