use super::repository::OrderRepository;
use crate::api::{ApiClient, ApiError, OrderListResponse, OrderResponse};
use leptos::*;
use std::rc::Rc;

pub const ORDER_STATUSES: [&str; 4] = ["pending", "paid", "shipped", "cancelled"];

#[derive(Clone)]
pub struct OrderStatusPayload {
    pub id: String,
    pub status: String,
}

#[derive(Clone)]
pub struct OrderViewModel {
    pub orders_resource: Resource<u32, Result<OrderListResponse, ApiError>>,
    pub reload: RwSignal<u32>,
    pub status_action: Action<OrderStatusPayload, Result<OrderResponse, ApiError>>,
    pub delete_action: Action<String, Result<(), ApiError>>,
    pub action_error: RwSignal<Option<ApiError>>,
}

pub fn use_order_view_model() -> OrderViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = OrderRepository::new_with_client(Rc::new(api));

    let reload = create_rw_signal(0u32);
    let repo_list = repo.clone();
    let orders_resource = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo_list.clone();
            async move { repo.list().await }
        },
    );

    let action_error = create_rw_signal(None::<ApiError>);

    let repo_status = repo.clone();
    let status_action = create_action(move |payload: &OrderStatusPayload| {
        let repo = repo_status.clone();
        let payload = payload.clone();
        async move { repo.update_status(&payload.id, payload.status).await }
    });

    let repo_delete = repo.clone();
    let delete_action = create_action(move |id: &String| {
        let repo = repo_delete.clone();
        let id = id.clone();
        async move { repo.delete(&id).await }
    });

    create_effect(move |_| {
        if let Some(result) = status_action.value().get() {
            match result {
                Ok(_) => {
                    action_error.set(None);
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

    OrderViewModel {
        orders_resource,
        reload,
        status_action,
        delete_action,
        action_error,
    }
}

impl OrderViewModel {
    pub fn change_status(&self, id: String, status: String) {
        if self.status_action.pending().get_untracked() {
            return;
        }
        if !ORDER_STATUSES.contains(&status.as_str()) {
            self.action_error
                .set(Some(ApiError::validation("Unknown order status")));
            return;
        }
        self.status_action.dispatch(OrderStatusPayload { id, status });
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn unknown_status_is_rejected_locally() {
        render_to_string(|| {
            let vm = use_order_view_model();
            vm.change_status("o1".into(), "teleported".into());
            assert_eq!(
                vm.action_error.get_untracked().map(|e| e.error),
                Some("Unknown order status".to_string())
            );
            view! { <div></div> }
        });
    }

    #[test]
    fn status_list_covers_lifecycle() {
        assert!(ORDER_STATUSES.contains(&"pending"));
        assert!(ORDER_STATUSES.contains(&"cancelled"));
    }
}
