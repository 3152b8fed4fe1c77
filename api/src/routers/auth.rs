use axum::{
    Form, Router,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use tower_cookies::Cookies;

use app::state::AppState;
use models::params::login::LoginParams;

use crate::cookies::{admin_cookie, clear_admin_cookie};
use crate::pages::{self, LoginForm, WRONG_PASSWORD};

/// Sets the admin cookie and redirects to `target` when the password is
/// right, otherwise re-renders `form` with an error.
fn login(
    state: &AppState,
    cookies: &Cookies,
    password: &str,
    form: LoginForm,
    target: &str,
) -> Response {
    match state.auth.credential_for(password) {
        Some(credential) => {
            tracing::info!("Admin login via {:?} form", form);
            cookies.add(admin_cookie(credential));
            Redirect::to(target).into_response()
        }
        None => {
            tracing::info!("Failed admin login via {:?} form", form);
            Html(pages::login(form, Some(WRONG_PASSWORD))).into_response()
        }
    }
}

async fn login_get() -> Html<String> {
    Html(pages::login(LoginForm::Site, None))
}

async fn login_auth_post(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(params): Form<LoginParams>,
) -> Response {
    login(&state, &cookies, &params.password, LoginForm::Site, "/")
}

async fn dashboard_login_get() -> Html<String> {
    Html(pages::login(LoginForm::Dashboard, None))
}

async fn dashboard_auth_post(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(params): Form<LoginParams>,
) -> Response {
    login(
        &state,
        &cookies,
        &params.password,
        LoginForm::Dashboard,
        "/dashboard/main",
    )
}

async fn logout_get(cookies: Cookies) -> Redirect {
    clear_admin_cookie(&cookies);
    Redirect::to("/dashboard")
}

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_get))
        .route("/login/auth", post(login_auth_post))
        .route("/dashboard", get(dashboard_login_get))
        .route("/dashboard/auth", post(dashboard_auth_post))
        .route("/dashboard/logout", get(logout_get))
}
