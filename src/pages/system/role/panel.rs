use super::view_model::use_role_view_model;
use crate::components::common::{Button, ButtonVariant, DeleteConfirmBar};
use crate::components::error::InlineErrorMessage;
use crate::components::grid::{GridCreateButton, GridDeleteButton, GridEditButton};
use crate::components::layout::LoadingSpinner;
use crate::components::toast::use_toasts;
use leptos::*;

#[component]
pub fn RolePanel() -> impl IntoView {
    let vm = use_role_view_model();
    let form = vm.form.clone();
    let roles_resource = vm.roles_resource;
    let save_pending = vm.save_action.pending();
    let delete_action = vm.delete_action;
    let delete_pending = delete_action.pending();
    let action_error = vm.action_error;
    let toasts = use_toasts();

    create_effect(move |_| {
        if let Some(Ok(role)) = vm.save_action.value().get() {
            toasts.success(format!("Role \"{}\" saved", role.name));
        }
    });
    create_effect(move |_| {
        if let Some(Ok(())) = delete_action.value().get() {
            toasts.success("Role deleted".to_string());
        }
    });

    let submit_vm = vm.clone();
    let on_save = move |_| submit_vm.submit();

    // (id, name) of the role awaiting delete confirmation.
    let confirm_delete = create_rw_signal(None::<(String, String)>);

    let form_name = form.clone();
    let form_permissions = form.clone();
    let form_new = form.clone();
    let form_cancel = form.clone();
    let form_rows = form.clone();

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h2 class="text-2xl font-bold text-fg">"Roles"</h2>
                <GridCreateButton
                    on_click=Callback::new(move |_| form_new.clear())
                    disabled=Signal::derive(move || save_pending.get())
                />
            </div>
            <div class="bg-surface rounded-lg shadow p-4 space-y-4">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
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
                        <span class="text-sm font-medium text-fg-muted">
                            "Permissions (comma separated)"
                        </span>
                        <input
                            type="text"
                            class="mt-1 block w-full rounded-md border-edge shadow-sm"
                            prop:value=move || form_permissions.permissions.get()
                            on:input=move |ev| {
                                form_permissions.permissions.set(event_target_value(&ev))
                            }
                        />
                    </label>
                </div>
                <div class="flex items-center gap-3">
                    <Button
                        variant=ButtonVariant::Primary
                        loading=Signal::derive(move || save_pending.get())
                        on:click=on_save
                    >
                        "Save role"
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
            {move || match roles_resource.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(error)) => {
                    view! {
                        <InlineErrorMessage error=Signal::derive(move || Some(error.clone())) />
                    }
                        .into_view()
                }
                Some(Ok(roles)) if roles.is_empty() => {
                    view! { <p class="text-fg-muted">"No roles defined yet."</p> }.into_view()
                }
                Some(Ok(roles)) => {
                    let form = form_rows.clone();
                    view! {
                        <table class="min-w-full divide-y divide-edge">
                            <thead>
                                <tr class="text-left text-xs font-medium text-fg-muted uppercase">
                                    <th class="px-4 py-2">"Name"</th>
                                    <th class="px-4 py-2">"Permissions"</th>
                                    <th class="px-4 py-2 text-right">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-edge">
                                {roles
                                    .into_iter()
                                    .map(|role| {
                                        let edit_form = form.clone();
                                        let edit_role = role.clone();
                                        let delete_id = role.id.clone();
                                        let delete_name = role.name.clone();
                                        view! {
                                            <tr>
                                                <td class="px-4 py-2 font-medium text-fg">
                                                    {role.name.clone()}
                                                </td>
                                                <td class="px-4 py-2 text-fg-muted">
                                                    {role.permissions.join(", ")}
                                                </td>
                                                <td class="px-4 py-2 text-right space-x-1">
                                                    <GridEditButton on_click=Callback::new(move |_| {
                                                        edit_form.load(&edit_role)
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
