use super::repository::RoleRepository;
use crate::api::{ApiClient, ApiError, RoleResponse, SaveRoleRequest};
use leptos::*;
use std::rc::Rc;

/// Form state for the inline role editor. Permissions are edited as a
/// comma-separated list and split before submission.
#[derive(Clone)]
pub struct RoleFormState {
    pub editing_id: RwSignal<Option<String>>,
    pub name: RwSignal<String>,
    pub permissions: RwSignal<String>,
}

impl RoleFormState {
    pub fn new() -> Self {
        Self {
            editing_id: create_rw_signal(None),
            name: create_rw_signal(String::new()),
            permissions: create_rw_signal(String::new()),
        }
    }

    pub fn load(&self, role: &RoleResponse) {
        self.editing_id.set(Some(role.id.clone()));
        self.name.set(role.name.clone());
        self.permissions.set(role.permissions.join(", "));
    }

    pub fn clear(&self) {
        self.editing_id.set(None);
        self.name.set(String::new());
        self.permissions.set(String::new());
    }

    pub fn payload(&self) -> Option<SaveRoleRequest> {
        let name = self.name.get_untracked().trim().to_string();
        if name.is_empty() {
            return None;
        }
        Some(SaveRoleRequest {
            name,
            permissions: split_permissions(&self.permissions.get_untracked()),
        })
    }
}

pub fn split_permissions(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|permission| !permission.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Clone)]
pub struct RoleSavePayload {
    pub id: Option<String>,
    pub request: SaveRoleRequest,
}

#[derive(Clone)]
pub struct RoleViewModel {
    pub roles_resource: Resource<u32, Result<Vec<RoleResponse>, ApiError>>,
    pub reload: RwSignal<u32>,
    pub form: RoleFormState,
    pub save_action: Action<RoleSavePayload, Result<RoleResponse, ApiError>>,
    pub delete_action: Action<String, Result<(), ApiError>>,
    pub action_error: RwSignal<Option<ApiError>>,
}

pub fn use_role_view_model() -> RoleViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = RoleRepository::new_with_client(Rc::new(api));

    let reload = create_rw_signal(0u32);
    let repo_list = repo.clone();
    let roles_resource = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo_list.clone();
            async move { repo.list().await }
        },
    );

    let form = RoleFormState::new();
    let action_error = create_rw_signal(None::<ApiError>);

    let repo_save = repo.clone();
    let save_action = create_action(move |payload: &RoleSavePayload| {
        let repo = repo_save.clone();
        let payload = payload.clone();
        async move {
            match payload.id {
                Some(id) => repo.update(&id, payload.request).await,
                None => repo.create(payload.request).await,
            }
        }
    });

    let repo_delete = repo.clone();
    let delete_action = create_action(move |id: &String| {
        let repo = repo_delete.clone();
        let id = id.clone();
        async move { repo.delete(&id).await }
    });

    let form_after_save = form.clone();
    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(_) => {
                    action_error.set(None);
                    form_after_save.clear();
                    reload.update(|n| *n += 1);
                }
                Err(error) => action_error.set(Some(error)),
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(()) => {
                    action_error.set(None);
                    reload.update(|n| *n += 1);
                }
                Err(error) => action_error.set(Some(error)),
            }
        }
    });

    RoleViewModel {
        roles_resource,
        reload,
        form,
        save_action,
        delete_action,
        action_error,
    }
}

impl RoleViewModel {
    pub fn submit(&self) {
        if self.save_action.pending().get_untracked() {
            return;
        }
        let Some(request) = self.form.payload() else {
            self.action_error
                .set(Some(ApiError::validation("The role name is required")));
            return;
        };
        self.save_action.dispatch(RoleSavePayload {
            id: self.form.editing_id.get_untracked(),
            request,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    fn with_runtime(f: impl FnOnce()) {
        let runtime = create_runtime();
        f();
        runtime.dispose();
    }

    #[test]
    fn split_permissions_trims_and_drops_blanks() {
        assert_eq!(
            split_permissions("users.read, users.write, ,orders.read"),
            vec!["users.read", "users.write", "orders.read"]
        );
        assert!(split_permissions("  ").is_empty());
    }

    #[test]
    fn payload_requires_a_name() {
        with_runtime(|| {
            let form = RoleFormState::new();
            form.name.set("   ".into());
            assert!(form.payload().is_none());

            form.name.set("editor".into());
            form.permissions.set("products.read".into());
            let payload = form.payload().expect("payload");
            assert_eq!(payload.name, "editor");
            assert_eq!(payload.permissions, vec!["products.read"]);
        });
    }

    #[test]
    fn load_and_clear_round_trip() {
        with_runtime(|| {
            let form = RoleFormState::new();
            let role = RoleResponse {
                id: "r1".into(),
                name: "admin".into(),
                permissions: vec!["users.read".into(), "users.write".into()],
            };
            form.load(&role);
            assert_eq!(form.editing_id.get_untracked().as_deref(), Some("r1"));
            assert_eq!(form.permissions.get_untracked(), "users.read, users.write");

            form.clear();
            assert!(form.editing_id.get_untracked().is_none());
            assert!(form.name.get_untracked().is_empty());
        });
    }
}
