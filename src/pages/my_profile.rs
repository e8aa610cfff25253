use crate::components::layout::LoadingSpinner;
use crate::router::routes;
use crate::state::auth::use_auth;
use leptos::*;
use leptos_router::*;

#[component]
pub fn MyProfilePage() -> impl IntoView {
    let (auth, _) = use_auth();

    view! {
        <div class="max-w-md mx-auto space-y-6">
            <h2 class="text-2xl font-bold text-fg">"My profile"</h2>
            {move || {
                let state = auth.get();
                if state.loading {
                    return view! { <LoadingSpinner /> }.into_view();
                }
                match state.user {
                    Some(user) => {
                        view! {
                            <div class="bg-surface rounded-lg shadow p-6 space-y-4">
                                <div class="flex items-center gap-4">
                                    {user
                                        .avatar_url
                                        .clone()
                                        .map(|url| {
                                            view! {
                                                <img
                                                    src=url
                                                    alt="Avatar"
                                                    class="w-16 h-16 rounded-full object-cover"
                                                />
                                            }
                                                .into_view()
                                        })
                                        .unwrap_or_else(|| {
                                            view! {
                                                <div class="w-16 h-16 rounded-full bg-action-ghost-bg-hover flex items-center justify-center">
                                                    <i class="fas fa-user text-fg-muted"></i>
                                                </div>
                                            }
                                                .into_view()
                                        })}
                                    <div>
                                        <p class="font-semibold text-fg">
                                            {user.full_name.clone().unwrap_or_else(|| user.email.clone())}
                                        </p>
                                        <p class="text-sm text-fg-muted">{user.email.clone()}</p>
                                    </div>
                                </div>
                                <dl class="text-sm space-y-2">
                                    <div class="flex justify-between">
                                        <dt class="text-fg-muted">"Role"</dt>
                                        <dd class="font-medium text-fg">{user.role.clone()}</dd>
                                    </div>
                                </dl>
                                <A
                                    href=routes::CHANGE_PASSWORD
                                    class="inline-block text-sm font-medium text-link hover:text-link-hover"
                                >
                                    "Change password"
                                </A>
                            </div>
                        }
                            .into_view()
                    }
                    None => {
                        view! { <p class="text-fg-muted">"No profile information available."</p> }
                            .into_view()
                    }
                }
            }}
        </div>
    }
}
