use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode, header},
};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;

use api::setup_router;
use app::config::Config;
use app::persistence::candidates::create_candidate;
use app::seed::seed_competitions;
use models::domains::{candidates, competitions};
use models::params::candidate::CreateCandidateParams;
use utils::testing::setup_test_db;


pub(crate) const PASSWORD: &str = "test-password";
pub(crate) const ADMIN_COOKIE: &str = "admin_auth=test-password";

pub(crate) struct TestApp {
    pub router: Router,
    pub db: DatabaseConnection,
    pub competitions: Vec<competitions::Model>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db = setup_test_db("sqlite::memory:")
            .await
            .expect("Set up db failed!");
        let competitions = seed_competitions(&db).await.expect("Seeding failed!");

        let config = Config::from_lookup(|key| match key {
            "ADMIN_PASSWORD" => Some(PASSWORD.to_string()),
            _ => None,
        })
        .expect("Config failed!");

        Self {
            router: setup_router(config, db.clone()),
            db,
            competitions,
        }
    }

    pub fn competition(&self, slug: &str) -> &competitions::Model {
        self.competitions
            .iter()
            .find(|c| c.slug == slug)
            .expect("seeded competition")
    }

    pub async fn add_candidates(
        &self,
        competition_id: i32,
        names: &[&str],
    ) -> Vec<candidates::Model> {
        let mut created = Vec::new();
        for name in names {
            let params = CreateCandidateParams {
                name: name.to_string(),
                competition_id,
            };
            created.push(
                create_candidate(&self.db, params)
                    .await
                    .expect("Create candidate failed!"),
            );
        }
        created
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("request failed")
    }
}

pub(crate) fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::get(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub(crate) fn json(method: &str, uri: &str, body: &Value, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// A JSON-typed request whose body is sent as-is, valid JSON or not.
pub(crate) fn raw_json(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::post(uri).header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub(crate) fn empty(method: &str, uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub(crate) fn form(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub(crate) async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub(crate) async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_str(&body_text(response).await).expect("response is not JSON")
}

/// `name=value` pairs of every `Set-Cookie` header.
pub(crate) fn set_cookies(response: &Response<Body>) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(|v| v.split(';').next().unwrap_or_default().trim().to_string())
        .collect()
}

pub(crate) fn set_cookie_header(response: &Response<Body>, name: &str) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with(&format!("{name}=")))
        .map(str::to_owned)
}

pub(crate) fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

pub(crate) fn assert_redirect(response: &Response<Body>, to: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(response), to);
}
