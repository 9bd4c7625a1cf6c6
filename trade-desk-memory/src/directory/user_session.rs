use parking_lot::RwLock;
use trade_desk_api::{CurrentUser, CurrentUserProvider};
use tracing::info;

/// Signed-in state of the back office; authentication is a flag only.
#[derive(Default)]
pub struct UserSession {
    user: RwLock<Option<CurrentUser>>,
}

impl UserSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signed_in(user: CurrentUser) -> Self {
        Self {
            user: RwLock::new(Some(user)),
        }
    }

    pub fn sign_in(&self, user: CurrentUser) {
        info!(user_id = %user.id, role = %user.role, "user signed in");
        *self.user.write() = Some(user);
    }

    pub fn sign_out(&self) {
        if let Some(user) = self.user.write().take() {
            info!(user_id = %user.id, "user signed out");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.read().is_some()
    }
}

impl CurrentUserProvider for UserSession {
    fn current_user(&self) -> Option<CurrentUser> {
        self.user.read().clone()
    }
}
