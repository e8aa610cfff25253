use super::repository::RegisterRepository;
use crate::api::{ApiClient, ApiError, MessageResponse, RegisterRequest};
use crate::forms::validation::{register_schema, EMAIL, PASSWORD};
use crate::forms::FormController;
use crate::state::submission::Submission;
use leptos::*;
use std::rc::Rc;

/// State for one mounted register page: its form controller, its own
/// submission machine, and the action performing the remote call.
#[derive(Clone)]
pub struct RegisterViewModel {
    pub form: FormController,
    pub submission: Submission,
    pub submit_action: Action<RegisterRequest, Result<MessageResponse, ApiError>>,
}

pub fn use_register_view_model() -> RegisterViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    use_register_view_model_with(RegisterRepository::new_with_client(Rc::new(api)))
}

pub fn use_register_view_model_with(repository: RegisterRepository) -> RegisterViewModel {
    let form = FormController::new(register_schema());
    let submission = Submission::new();

    let submit_action = create_action(move |request: &RegisterRequest| {
        let repo = repository.clone();
        let request = request.clone();
        async move { repo.register(request).await }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(response) => submission.fulfill(response.message),
                Err(error) => submission.reject(error.error),
            }
        }
    });

    RegisterViewModel {
        form,
        submission,
        submit_action,
    }
}

impl RegisterViewModel {
    pub fn submit(&self) {
        if let Some(request) = prepare_submit(&self.form, &self.submission) {
            self.submit_action.dispatch(request);
        }
    }
}

/// Gate in front of the remote call: a request comes back only when the
/// whole form validates and no call is already in flight. Only email and
/// password make it into the payload.
fn prepare_submit(form: &FormController, submission: &Submission) -> Option<RegisterRequest> {
    if !form.validate().is_ok() {
        return None;
    }
    if !submission.begin() {
        return None;
    }
    let values = form.values();
    Some(RegisterRequest {
        email: values.get(EMAIL).cloned().unwrap_or_default(),
        password: values.get(PASSWORD).cloned().unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::validation::CONFIRM_PASSWORD;
    use crate::state::submission::SubmissionPhase;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    fn filled_form() -> FormController {
        let form = FormController::new(register_schema());
        form.set_field(EMAIL, "a@b.com".into());
        form.set_field(PASSWORD, "Abc123!@".into());
        form.set_field(CONFIRM_PASSWORD, "Abc123!@".into());
        form
    }

    #[test]
    fn invalid_form_blocks_submission() {
        with_runtime(|| {
            let form = FormController::new(register_schema());
            let submission = Submission::new();
            assert!(prepare_submit(&form, &submission).is_none());
            assert_eq!(
                submission.state().phase(),
                SubmissionPhase::Idle,
                "blocked submit must not enter pending"
            );
        });
    }

    #[test]
    fn valid_form_yields_email_and_password_payload() {
        with_runtime(|| {
            let form = filled_form();
            let submission = Submission::new();
            let request = prepare_submit(&form, &submission).expect("payload");
            assert_eq!(
                request,
                RegisterRequest {
                    email: "a@b.com".into(),
                    password: "Abc123!@".into(),
                }
            );
            assert!(submission.state().is_loading());
        });
    }

    #[test]
    fn second_submit_while_pending_is_ignored() {
        with_runtime(|| {
            let form = filled_form();
            let submission = Submission::new();
            assert!(prepare_submit(&form, &submission).is_some());
            assert!(
                prepare_submit(&form, &submission).is_none(),
                "exactly one call per submission"
            );
        });
    }

    #[test]
    fn fields_stay_intact_after_rejection() {
        with_runtime(|| {
            let form = filled_form();
            let submission = Submission::new();
            prepare_submit(&form, &submission);
            submission.reject("Email exists");
            let outcome = submission.consume().expect("outcome");
            assert_eq!(outcome.message, "Email exists");
            assert!(!outcome.success);
            assert_eq!(form.value(EMAIL), "a@b.com");
            // Resubmission is possible immediately.
            assert!(prepare_submit(&form, &submission).is_some());
        });
    }
}
