use super::view_model::{use_order_view_model, ORDER_STATUSES};
use crate::components::common::DeleteConfirmBar;
use crate::components::error::InlineErrorMessage;
use crate::components::grid::GridDeleteButton;
use crate::components::layout::LoadingSpinner;
use crate::components::toast::use_toasts;
use leptos::*;

#[component]
pub fn OrderPanel() -> impl IntoView {
    let vm = use_order_view_model();
    let orders_resource = vm.orders_resource;
    let delete_action = vm.delete_action;
    let delete_pending = delete_action.pending();
    let action_error = vm.action_error;
    let toasts = use_toasts();

    create_effect(move |_| {
        if let Some(Ok(order)) = vm.status_action.value().get() {
            toasts.success(format!("Order {} is now {}", order.id, order.status));
        }
    });
    create_effect(move |_| {
        if let Some(Ok(())) = delete_action.value().get() {
            toasts.success("Order deleted".to_string());
        }
    });

    let status_vm = vm.clone();

    // (id, customer email) of the order awaiting delete confirmation.
    let confirm_delete = create_rw_signal(None::<(String, String)>);

    view! {
        <div class="space-y-6">
            <h2 class="text-2xl font-bold text-fg">"Orders"</h2>
            <InlineErrorMessage error=Signal::derive(move || action_error.get()) />
            <DeleteConfirmBar
                target=Signal::derive(move || confirm_delete.get().map(|(_, name)| name))
                pending=Signal::derive(move || delete_pending.get())
                on_confirm=Callback::new(move |_| {
                    if let Some((id, _)) = confirm_delete.get_untracked() {
                        delete_action.dispatch(id);
                        confirm_delete.set(None);
                    }
                })
                on_cancel=Callback::new(move |_| confirm_delete.set(None))
            />
            {move || match orders_resource.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(error)) => {
                    view! {
                        <InlineErrorMessage error=Signal::derive(move || Some(error.clone())) />
                    }
                        .into_view()
                }
                Some(Ok(page)) if page.items.is_empty() => {
                    view! { <p class="text-fg-muted">"No orders yet."</p> }.into_view()
                }
                Some(Ok(page)) => {
                    let status_vm = status_vm.clone();
                    view! {
                        <p class="text-sm text-fg-muted">{format!("{} orders", page.total)}</p>
                        <table class="min-w-full divide-y divide-edge">
                            <thead>
                                <tr class="text-left text-xs font-medium text-fg-muted uppercase">
                                    <th class="px-4 py-2">"Customer"</th>
                                    <th class="px-4 py-2">"Total"</th>
                                    <th class="px-4 py-2">"Placed"</th>
                                    <th class="px-4 py-2">"Status"</th>
                                    <th class="px-4 py-2 text-right">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-edge">
                                {page
                                    .items
                                    .into_iter()
                                    .map(|order| {
                                        let change_vm = status_vm.clone();
                                        let change_id = order.id.clone();
                                        let current_status = order.status.clone();
                                        let delete_id = order.id.clone();
                                        let delete_name = order.customer_email.clone();
                                        view! {
                                            <tr>
                                                <td class="px-4 py-2 font-medium text-fg">
                                                    {order.customer_email.clone()}
                                                </td>
                                                <td class="px-4 py-2">
                                                    {format!("{:.2}", order.total)}
                                                </td>
                                                <td class="px-4 py-2 text-fg-muted">
                                                    {order.created_at.format("%Y-%m-%d %H:%M").to_string()}
                                                </td>
                                                <td class="px-4 py-2">
                                                    <select
                                                        class="rounded-md border-edge shadow-sm text-sm"
                                                        on:change=move |ev| {
                                                            change_vm
                                                                .change_status(
                                                                    change_id.clone(),
                                                                    event_target_value(&ev),
                                                                )
                                                        }
                                                    >
                                                        {ORDER_STATUSES
                                                            .iter()
                                                            .map(|status| {
                                                                view! {
                                                                    <option
                                                                        value=*status
                                                                        selected=*status == current_status
                                                                    >
                                                                        {*status}
                                                                    </option>
                                                                }
                                                            })
                                                            .collect_view()}
                                                    </select>
                                                </td>
                                                <td class="px-4 py-2 text-right">
                                                    <GridDeleteButton
                                                        on_click=Callback::new(move |_| {
                                                            confirm_delete
                                                                .set(Some((
                                                                    delete_id.clone(),
                                                                    delete_name.clone(),
                                                                )))
                                                        })
                                                        disabled=Signal::derive(move || {
                                                            delete_pending.get()
                                                        })
                                                    />
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                        .into_view()
                }
            }}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::test_support::ssr::render_to_string;
    use httpmock::prelude::*;

    #[test]
    fn renders_orders_heading() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/orders");
            then.status(200)
                .json_body(serde_json::json!({ "total": 0, "items": [] }));
        });

        let html = render_to_string(move || {
            provide_context(ApiClient::new_with_base_url(server.url("/api")));
            view! { <OrderPanel /> }
        });
        assert!(html.contains("Orders"));
    }
}
