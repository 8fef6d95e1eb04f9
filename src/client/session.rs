/// The three values a signed-in client keeps for the lifetime of a
/// session. An explicit object rather than ambient key-value storage,
/// so every guarded view receives it and tests can inspect it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    user_role: Option<String>,
    user: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signed_in(
        token: impl Into<String>,
        user_role: impl Into<String>,
        user: impl Into<String>,
    ) -> Self {
        Self {
            token: Some(token.into()),
            user_role: Some(user_role.into()),
            user: Some(user.into()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user_role(&self) -> Option<&str> {
        self.user_role.as_deref()
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Drops all three entries together, as logout and credential
    /// expiry both require.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
