//! Names and lifetimes of the cookies the site sets.

use tower_cookies::cookie::SameSite;
use tower_cookies::cookie::time::Duration;
use tower_cookies::{Cookie, Cookies, Key};
use uuid::Uuid;

use app::auth::ADMIN_COOKIE;

const ADMIN_MAX_AGE: Duration = Duration::hours(24);
const VOTER_MAX_AGE: Duration = Duration::days(365);

pub fn voted_cookie_name(slug: &str) -> String {
    format!("voted_{slug}")
}

pub fn ballot_cookie_name(slug: &str) -> String {
    format!("ballot_{slug}")
}

fn cookie(name: impl Into<String>, value: impl Into<String>, max_age: Duration) -> Cookie<'static> {
    Cookie::build((name.into(), value.into()))
        .path("/")
        .same_site(SameSite::Lax)
        .max_age(max_age)
        .build()
}

pub fn admin_cookie(credential: String) -> Cookie<'static> {
    let mut cookie = cookie(ADMIN_COOKIE, credential, ADMIN_MAX_AGE);
    cookie.set_http_only(true);
    cookie
}

pub fn admin_credential(cookies: &Cookies) -> Option<String> {
    cookies.get(ADMIN_COOKIE).map(|c| c.value().to_owned())
}

pub fn clear_admin_cookie(cookies: &Cookies) {
    cookies.remove(Cookie::build((ADMIN_COOKIE, "")).path("/").build());
}

pub fn has_voted(cookies: &Cookies, slug: &str) -> bool {
    cookies.get(&voted_cookie_name(slug)).is_some()
}

pub fn mark_voted(cookies: &Cookies, slug: &str) {
    cookies.add(cookie(voted_cookie_name(slug), "true", VOTER_MAX_AGE));
}

/// The signed ballot token of this browser for `slug`. A fresh token is
/// issued when there is none or its signature does not verify.
pub fn ballot_token(cookies: &Cookies, key: &Key, slug: &str) -> String {
    let signed = cookies.signed(key);
    let name = ballot_cookie_name(slug);

    if let Some(existing) = signed.get(&name) {
        return existing.value().to_owned();
    }

    let token = Uuid::new_v4().simple().to_string();
    let mut cookie = cookie(name, token.clone(), VOTER_MAX_AGE);
    cookie.set_http_only(true);
    signed.add(cookie);
    token
}
