use leptos::*;
use leptos_router::*;

use crate::{
    components::{
        guard::{GuestGuard, RequireAuth},
        layout::AppLayout,
        toast::ToastProvider,
    },
    pages::{
        change_password::ChangePasswordPage, dashboard::DashboardPage, home::HomePage,
        login::LoginPage, manage_product::{OrderPage, ProductPage}, my_profile::MyProfilePage,
        register::RegisterPage, system::RolePage,
    },
    state::auth::AuthProvider,
};

pub mod routes {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";
    pub const CHANGE_PASSWORD: &str = "/change-password";
    pub const DASHBOARD: &str = "/dashboard";
    pub const MY_PROFILE: &str = "/my-profile";
    pub const SYSTEM_ROLE: &str = "/system/role";
    pub const MANAGE_PRODUCT_PRODUCTS: &str = "/manage-product/products";
    pub const MANAGE_PRODUCT_ORDERS: &str = "/manage-product/orders";
}

pub const ROUTE_PATHS: &[&str] = &[
    routes::HOME,
    routes::LOGIN,
    routes::REGISTER,
    routes::CHANGE_PASSWORD,
    routes::DASHBOARD,
    routes::MY_PROFILE,
    routes::SYSTEM_ROLE,
    routes::MANAGE_PRODUCT_PRODUCTS,
    routes::MANAGE_PRODUCT_ORDERS,
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    routes::CHANGE_PASSWORD,
    routes::DASHBOARD,
    routes::MY_PROFILE,
    routes::SYSTEM_ROLE,
    routes::MANAGE_PRODUCT_PRODUCTS,
    routes::MANAGE_PRODUCT_ORDERS,
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &[routes::HOME, routes::LOGIN, routes::REGISTER];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    view! {
        <ToastProvider>
            <AuthProvider>
                <Router>
                    <Routes>
                        <Route path=routes::HOME view=HomePage/>
                        <Route path=routes::LOGIN view=GuestLogin/>
                        <Route path=routes::REGISTER view=GuestRegister/>
                        <Route path=routes::CHANGE_PASSWORD view=ProtectedChangePassword/>
                        <Route path=routes::DASHBOARD view=ProtectedDashboard/>
                        <Route path=routes::MY_PROFILE view=ProtectedMyProfile/>
                        <Route path=routes::SYSTEM_ROLE view=ProtectedRoles/>
                        <Route path=routes::MANAGE_PRODUCT_PRODUCTS view=ProtectedProducts/>
                        <Route path=routes::MANAGE_PRODUCT_ORDERS view=ProtectedOrders/>
                    </Routes>
                </Router>
            </AuthProvider>
        </ToastProvider>
    }
}

#[component]
fn GuestLogin() -> impl IntoView {
    view! { <GuestGuard><LoginPage/></GuestGuard> }
}

#[component]
fn GuestRegister() -> impl IntoView {
    view! { <GuestGuard><RegisterPage/></GuestGuard> }
}

#[component]
fn ProtectedChangePassword() -> impl IntoView {
    view! { <RequireAuth><AppLayout><ChangePasswordPage/></AppLayout></RequireAuth> }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><AppLayout><DashboardPage/></AppLayout></RequireAuth> }
}

#[component]
fn ProtectedMyProfile() -> impl IntoView {
    view! { <RequireAuth><AppLayout><MyProfilePage/></AppLayout></RequireAuth> }
}

#[component]
fn ProtectedRoles() -> impl IntoView {
    view! { <RequireAuth><AppLayout><RolePage/></AppLayout></RequireAuth> }
}

#[component]
fn ProtectedProducts() -> impl IntoView {
    view! { <RequireAuth><AppLayout><ProductPage/></AppLayout></RequireAuth> }
}

#[component]
fn ProtectedOrders() -> impl IntoView {
    view! { <RequireAuth><AppLayout><OrderPage/></AppLayout></RequireAuth> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn route_paths_include_management_routes() {
        assert!(ROUTE_PATHS.contains(&"/system/role"));
        assert!(ROUTE_PATHS.contains(&"/manage-product/products"));
        assert!(ROUTE_PATHS.contains(&"/manage-product/orders"));
    }

    #[test]
    fn protected_routes_are_subset_of_all() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        for path in PROTECTED_ROUTE_PATHS {
            assert!(
                all.contains(path),
                "protected path missing from ROUTE_PATHS: {}",
                path
            );
        }
    }

    #[test]
    fn public_and_protected_do_not_overlap() {
        let protected: HashSet<&str> = PROTECTED_ROUTE_PATHS.iter().copied().collect();
        for path in PUBLIC_ROUTE_PATHS {
            assert!(!protected.contains(path), "route listed twice: {}", path);
        }
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}
