//! Account information and activity log

use tracing::debug;

use crate::application::api::field;
use crate::application::{ApiClient, ApplicationResult};
use crate::domain::{Action, User};

pub struct AccountService {
    api: ApiClient,
}

impl AccountService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Read the authenticated user.
    pub fn read(&self) -> ApplicationResult<User> {
        debug!("account: read");
        let value = self.api.get("account/info")?;
        field(&value, "user")
    }
}

pub struct ActionService {
    api: ApiClient,
}

impl ActionService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn list(&self) -> ApplicationResult<Vec<Action>> {
        let value = self.api.get("actions")?;
        field(&value, "actions")
    }
}
