use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use bustrack_order::{Login, LoginForm, Registration, RegistrationForm};
use serde::Serialize;
use crate::{state::AppState, error::AppError, extract::ApiJson};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FormView {
    heading: &'static str,
    fields: &'static [&'static str],
    submit_label: &'static str,
    alternate_label: &'static str,
    alternate_href: &'static str,
}

const LOGIN: FormView = FormView {
    heading: "Login",
    fields: &["email", "password"],
    submit_label: "Login",
    alternate_label: "Don't have an account? Register",
    alternate_href: "/register",
};

const REGISTER: FormView = FormView {
    heading: "Create an Account",
    fields: &["fullName", "email", "phone", "password", "confirmPassword", "agreedToTerms"],
    submit_label: "Register",
    alternate_label: "Already have an account? Login",
    alternate_href: "/login",
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_form).post(login))
        .route("/register", get(register_form).post(register))
}

async fn login_form() -> Json<FormView> {
    Json(LOGIN)
}

async fn register_form() -> Json<FormView> {
    Json(REGISTER)
}

/// POST /login. Any non-empty credentials are accepted.
async fn login(
    State(state): State<AppState>,
    ApiJson(form): ApiJson<LoginForm>,
) -> Result<Json<Login>, AppError> {
    Ok(Json(state.accounts.login(&form)?))
}

/// POST /register
async fn register(
    State(state): State<AppState>,
    ApiJson(form): ApiJson<RegistrationForm>,
) -> Result<Json<Registration>, AppError> {
    Ok(Json(state.accounts.register(&form).await?))
}
