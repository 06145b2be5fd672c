use serde::{Deserialize, Serialize};

/// A user profile record, keyed by the auth identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub college: Option<String>,
}

/// Fields for a profile about to be inserted. Profiles keep the caller's
/// identifier so they line up with the auth identity.
#[derive(Debug, Clone)]
pub struct NewProfile {
    pub id: String,
    pub name: String,
    pub college: Option<String>,
}

pub trait ProfileStore {
    fn get_profile(&self, id: &str) -> impl Future<Output = anyhow::Result<Option<UserProfile>>>;
}
