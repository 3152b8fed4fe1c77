use serde::Deserialize;

/// Form body posted by both login pages.
#[derive(Deserialize, Debug, Default)]
pub struct LoginParams {
    #[serde(default)]
    pub password: String,
}
