use crate::domain::user::CurrentUser;

/// Source of the signed-in user's identity.
///
/// # Example
/// ```ignore
/// impl CurrentUserProvider for SessionUser {
///     fn current_user(&self) -> Option<CurrentUser> {
///         self.session.user.clone()
///     }
/// }
/// ```
pub trait CurrentUserProvider: Send + Sync {
    /// Returns the signed-in user, or `None` when nobody is authenticated.
    fn current_user(&self) -> Option<CurrentUser>;

    /// Signed-in user, falling back to the placeholder identity.
    fn current_user_or_fallback(&self) -> CurrentUser {
        self.current_user().unwrap_or_else(CurrentUser::fallback)
    }
}
