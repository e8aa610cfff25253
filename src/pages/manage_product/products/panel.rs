use super::view_model::use_product_view_model;
use crate::components::common::{Button, ButtonVariant, DeleteConfirmBar};
use crate::components::error::InlineErrorMessage;
use crate::components::grid::{GridCreateButton, GridDeleteButton, GridEditButton};
use crate::components::layout::LoadingSpinner;
use crate::components::toast::use_toasts;
use leptos::*;

#[component]
pub fn ProductPanel() -> impl IntoView {
    let vm = use_product_view_model();
    let form = vm.form.clone();
    let products_resource = vm.products_resource;
    let search = vm.search;
    let save_pending = vm.save_action.pending();
    let delete_action = vm.delete_action;
    let delete_pending = delete_action.pending();
    let action_error = vm.action_error;
    let toasts = use_toasts();

    create_effect(move |_| {
        if let Some(Ok(product)) = vm.save_action.value().get() {
            toasts.success(format!("Product \"{}\" saved", product.name));
        }
    });
    create_effect(move |_| {
        if let Some(Ok(())) = delete_action.value().get() {
            toasts.success("Product deleted".to_string());
        }
    });

    let submit_vm = vm.clone();
    let on_save = move |_| submit_vm.submit();

    // (id, name) of the product awaiting delete confirmation.
    let confirm_delete = create_rw_signal(None::<(String, String)>);

    let form_name = form.clone();
    let form_price = form.clone();
    let form_type = form.clone();
    let form_new = form.clone();
    let form_cancel = form.clone();
    let form_rows = form.clone();

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between gap-4">
                <h2 class="text-2xl font-bold text-fg">"Products"</h2>
                <input
                    type="search"
                    placeholder="Search products"
                    class="w-64 rounded-md border-edge shadow-sm"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <GridCreateButton
                    on_click=Callback::new(move |_| form_new.clear())
                    disabled=Signal::derive(move || save_pending.get())
                />
            </div>
            <div class="bg-surface rounded-lg shadow p-4 space-y-4">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <label class="block">
                        <span class="text-sm font-medium text-fg-muted">"Name"</span>
                        <input
                            type="text"
                            class="mt-1 block w-full rounded-md border-edge shadow-sm"
                            prop:value=move || form_name.name.get()
                            on:input=move |ev| form_name.name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="block">
                        <span class="text-sm font-medium text-fg-muted">"Price"</span>
                        <input
                            type="text"
                            inputmode="decimal"
                            class="mt-1 block w-full rounded-md border-edge shadow-sm"
                            prop:value=move || form_price.price.get()
                            on:input=move |ev| form_price.price.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="block">
                        <span class="text-sm font-medium text-fg-muted">"Type"</span>
                        <input
                            type="text"
                            class="mt-1 block w-full rounded-md border-edge shadow-sm"
                            prop:value=move || form_type.product_type.get()
                            on:input=move |ev| form_type.product_type.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <div class="flex items-center gap-3">
                    <Button
                        variant=ButtonVariant::Primary
                        loading=Signal::derive(move || save_pending.get())
                        on:click=on_save
                    >
                        "Save product"
                    </Button>
                    <Show when=move || form_cancel.editing_id.get().is_some()>
                        {
                            let form_reset = form_cancel.clone();
                            view! {
                                <button
                                    type="button"
                                    class="text-sm text-link hover:text-link-hover"
                                    on:click=move |_| form_reset.clear()
                                >
                                    "Cancel editing"
                                </button>
                            }
                        }
                    </Show>
                </div>
                <InlineErrorMessage error=Signal::derive(move || action_error.get()) />
            </div>
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
            {move || match products_resource.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(error)) => {
                    view! {
                        <InlineErrorMessage error=Signal::derive(move || Some(error.clone())) />
                    }
                        .into_view()
                }
                Some(Ok(page)) if page.items.is_empty() => {
                    view! { <p class="text-fg-muted">"No products matched."</p> }.into_view()
                }
                Some(Ok(page)) => {
                    let form = form_rows.clone();
                    view! {
                        <p class="text-sm text-fg-muted">{format!("{} products", page.total)}</p>
                        <table class="min-w-full divide-y divide-edge">
                            <thead>
                                <tr class="text-left text-xs font-medium text-fg-muted uppercase">
                                    <th class="px-4 py-2">"Name"</th>
                                    <th class="px-4 py-2">"Price"</th>
                                    <th class="px-4 py-2">"Type"</th>
                                    <th class="px-4 py-2">"Created"</th>
                                    <th class="px-4 py-2 text-right">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-edge">
                                {page
                                    .items
                                    .into_iter()
                                    .map(|product| {
                                        let edit_form = form.clone();
                                        let edit_product = product.clone();
                                        let delete_id = product.id.clone();
                                        let delete_name = product.name.clone();
                                        view! {
                                            <tr>
                                                <td class="px-4 py-2 font-medium text-fg">
                                                    {product.name.clone()}
                                                </td>
                                                <td class="px-4 py-2">
                                                    {format!("{:.2}", product.price)}
                                                </td>
                                                <td class="px-4 py-2 text-fg-muted">
                                                    {product.product_type.clone().unwrap_or_default()}
                                                </td>
                                                <td class="px-4 py-2 text-fg-muted">
                                                    {product.created_at.format("%Y-%m-%d").to_string()}
                                                </td>
                                                <td class="px-4 py-2 text-right space-x-1">
                                                    <GridEditButton on_click=Callback::new(move |_| {
                                                        edit_form.load(&edit_product)
                                                    }) />
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
    fn renders_search_box_and_editor() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/products");
            then.status(200)
                .json_body(serde_json::json!({ "total": 0, "items": [] }));
        });

        let html = render_to_string(move || {
            provide_context(ApiClient::new_with_base_url(server.url("/api")));
            view! { <ProductPanel /> }
        });
        assert!(html.contains("Products"));
        assert!(html.contains("Search products"));
    }
}
