use super::repository::ProductRepository;
use crate::api::{ApiClient, ApiError, ProductListResponse, ProductResponse, SaveProductRequest};
use leptos::*;
use std::rc::Rc;

/// Inline product editor state. Price is kept as the raw text the user
/// typed and only parsed when building the payload.
#[derive(Clone)]
pub struct ProductFormState {
    pub editing_id: RwSignal<Option<String>>,
    pub name: RwSignal<String>,
    pub price: RwSignal<String>,
    pub product_type: RwSignal<String>,
}

impl ProductFormState {
    pub fn new() -> Self {
        Self {
            editing_id: create_rw_signal(None),
            name: create_rw_signal(String::new()),
            price: create_rw_signal(String::new()),
            product_type: create_rw_signal(String::new()),
        }
    }

    pub fn load(&self, product: &ProductResponse) {
        self.editing_id.set(Some(product.id.clone()));
        self.name.set(product.name.clone());
        self.price.set(product.price.to_string());
        self.product_type
            .set(product.product_type.clone().unwrap_or_default());
    }

    pub fn clear(&self) {
        self.editing_id.set(None);
        self.name.set(String::new());
        self.price.set(String::new());
        self.product_type.set(String::new());
    }

    pub fn payload(&self) -> Result<SaveProductRequest, ApiError> {
        let name = self.name.get_untracked().trim().to_string();
        if name.is_empty() {
            return Err(ApiError::validation("The product name is required"));
        }
        let price_raw = self.price.get_untracked();
        let price = price_raw
            .trim()
            .parse::<f64>()
            .map_err(|_| ApiError::validation("The price must be a number"))?;
        if price < 0.0 {
            return Err(ApiError::validation("The price must not be negative"));
        }
        let product_type = {
            let trimmed = self.product_type.get_untracked().trim().to_string();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed)
            }
        };
        Ok(SaveProductRequest {
            name,
            price,
            product_type,
        })
    }
}

#[derive(Clone)]
pub struct ProductSavePayload {
    pub id: Option<String>,
    pub request: SaveProductRequest,
}

#[derive(Clone)]
pub struct ProductViewModel {
    pub products_resource: Resource<(String, u32), Result<ProductListResponse, ApiError>>,
    pub search: RwSignal<String>,
    pub reload: RwSignal<u32>,
    pub form: ProductFormState,
    pub save_action: Action<ProductSavePayload, Result<ProductResponse, ApiError>>,
    pub delete_action: Action<String, Result<(), ApiError>>,
    pub action_error: RwSignal<Option<ApiError>>,
}

pub fn use_product_view_model() -> ProductViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = ProductRepository::new_with_client(Rc::new(api));

    let search = create_rw_signal(String::new());
    let reload = create_rw_signal(0u32);
    let repo_list = repo.clone();
    let products_resource = create_resource(
        move || (search.get(), reload.get()),
        move |(search, _)| {
            let repo = repo_list.clone();
            async move {
                let term = search.trim().to_string();
                let term = if term.is_empty() { None } else { Some(term) };
                repo.list(term.as_deref()).await
            }
        },
    );

    let form = ProductFormState::new();
    let action_error = create_rw_signal(None::<ApiError>);

    let repo_save = repo.clone();
    let save_action = create_action(move |payload: &ProductSavePayload| {
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

    ProductViewModel {
        products_resource,
        search,
        reload,
        form,
        save_action,
        delete_action,
        action_error,
    }
}

impl ProductViewModel {
    pub fn submit(&self) {
        if self.save_action.pending().get_untracked() {
            return;
        }
        match self.form.payload() {
            Ok(request) => {
                self.action_error.set(None);
                self.save_action.dispatch(ProductSavePayload {
                    id: self.form.editing_id.get_untracked(),
                    request,
                });
            }
            Err(error) => self.action_error.set(Some(error)),
        }
    }
}
