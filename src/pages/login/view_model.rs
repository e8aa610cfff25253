use crate::api::{ApiError, LoginRequest};
use crate::forms::validation::{login_schema, EMAIL, PASSWORD};
use crate::forms::FormController;
use crate::router::routes;
use crate::state::auth;
use leptos::*;

#[derive(Clone)]
pub struct LoginViewModel {
    pub form: FormController,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = FormController::new(login_schema());
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(routes::DASHBOARD);
                    }
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    LoginViewModel {
        form,
        error,
        login_action,
    }
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        if !self.form.validate().is_ok() {
            return;
        }
        self.error.set(None);
        let values = self.form.values();
        self.login_action.dispatch(LoginRequest {
            email: values.get(EMAIL).cloned().unwrap_or_default(),
            password: values.get(PASSWORD).cloned().unwrap_or_default(),
        });
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn login_view_model_defaults_empty() {
        with_runtime(|| {
            let vm = use_login_view_model();
            assert!(vm.error.get().is_none());
            assert!(vm.form.value(EMAIL).is_empty());
        });
    }

    #[test]
    fn invalid_credentials_block_dispatch() {
        with_runtime(|| {
            let vm = use_login_view_model();
            vm.submit();
            assert!(!vm.login_action.pending().get_untracked());
            assert!(vm.form.error_message(EMAIL).is_some());
        });
    }
}
