use super::repository::ChangePasswordRepository;
use crate::api::{ApiClient, ApiError, MessageResponse};
use crate::forms::validation::{change_password_schema, CURRENT_PASSWORD, NEW_PASSWORD};
use crate::forms::FormController;
use crate::state::submission::Submission;
use leptos::*;
use std::rc::Rc;

#[derive(Clone)]
pub struct ChangePasswordViewModel {
    pub form: FormController,
    pub submission: Submission,
    pub submit_action: Action<(String, String), Result<MessageResponse, ApiError>>,
}

pub fn use_change_password_view_model() -> ChangePasswordViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ChangePasswordRepository::new_with_client(Rc::new(api));

    let form = FormController::new(change_password_schema());
    let submission = Submission::new();

    let submit_action = create_action(move |(current, new): &(String, String)| {
        let repo = repository.clone();
        let current = current.clone();
        let new = new.clone();
        async move { repo.change_password(current, new).await }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(response) => submission.fulfill(response.message),
                Err(error) => submission.reject(error.error),
            }
        }
    });

    ChangePasswordViewModel {
        form,
        submission,
        submit_action,
    }
}

impl ChangePasswordViewModel {
    pub fn submit(&self) {
        if !self.form.validate().is_ok() {
            return;
        }
        if !self.submission.begin() {
            return;
        }
        let values = self.form.values();
        self.submit_action.dispatch((
            values.get(CURRENT_PASSWORD).cloned().unwrap_or_default(),
            values.get(NEW_PASSWORD).cloned().unwrap_or_default(),
        ));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::forms::validation::CONFIRM_PASSWORD;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn defaults_are_idle() {
        with_runtime(|| {
            let vm = use_change_password_view_model();
            assert!(!vm.submission.state().is_loading());
            assert!(vm.form.value(CURRENT_PASSWORD).is_empty());
        });
    }

    #[test]
    fn mismatched_confirm_blocks_submission() {
        with_runtime(|| {
            let vm = use_change_password_view_model();
            vm.form.set_field(CURRENT_PASSWORD, "Old123!@".into());
            vm.form.set_field(NEW_PASSWORD, "New123!@".into());
            vm.form.set_field(CONFIRM_PASSWORD, "Other1!@".into());
            vm.submit();
            assert!(!vm.submission.state().is_loading());
            assert!(vm.form.error_message(CONFIRM_PASSWORD).is_some());
        });
    }
}
