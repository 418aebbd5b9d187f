//! Identity/session collaborator for account-bound save directories.

/// Snapshot of the player identity known to the host at one moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    account_id: String,
    authenticated: bool,
}

impl Identity {
    /// Create an identity snapshot.
    pub fn new(account_id: impl Into<String>, authenticated: bool) -> Self {
        Self {
            account_id: account_id.into(),
            authenticated,
        }
    }

    /// Whether the session behind this identity is logged in.
    #[inline]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// String-encoded account identifier, used as the directory segment.
    #[inline]
    pub fn account_id(&self) -> &str {
        &self.account_id
    }
}

/// Source of the current identity, implemented by the host's login system.
///
/// Returns `None` while no session exists at all; an identity that exists
/// but is not yet authenticated is returned with
/// [`Identity::is_authenticated`] `false`.
pub trait IdentityProvider {
    /// The identity known right now, if any.
    fn identity(&self) -> Option<Identity>;
}
