//! Admin authentication.
//!
//! Handlers and middleware only see [`Authenticator`]; the shared password
//! gate is the one implementation today.

/// Name of the cookie carrying the admin credential.
pub const ADMIN_COOKIE: &str = "admin_auth";

pub trait Authenticator: Send + Sync {
    /// The cookie value to hand out for a successful login with `password`,
    /// or `None` when the password is wrong.
    fn credential_for(&self, password: &str) -> Option<String>;

    /// Whether the value of the admin cookie grants access.
    fn is_authenticated(&self, credential: Option<&str>) -> bool;
}

/// One password shared by every administrator. The cookie carries the
/// password itself.
pub struct SharedPassword {
    password: String,
}

impl SharedPassword {
    pub fn new(password: String) -> Self {
        Self { password }
    }
}

impl Authenticator for SharedPassword {
    fn credential_for(&self, password: &str) -> Option<String> {
        (password == self.password).then(|| self.password.clone())
    }

    fn is_authenticated(&self, credential: Option<&str>) -> bool {
        credential == Some(self.password.as_str())
    }
}
