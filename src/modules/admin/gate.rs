use std::sync::atomic::{AtomicBool, Ordering};

/// Session-scoped switch for the editing surface.
///
/// This is a UI-visibility flag, not an authorization boundary: the data
/// behind it is public portfolio content, and access control on the remote
/// stores is enforced by their own rules.
pub struct AdminGate {
    password: String,
    unlocked: AtomicBool,
}

impl AdminGate {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            unlocked: AtomicBool::new(false),
        }
    }

    /// Compare `attempt` against the shared secret; on a match the gate
    /// stays open until `lock` is called.
    pub fn unlock(&self, attempt: &str) -> bool {
        if attempt == self.password {
            self.unlocked.store(true, Ordering::SeqCst);
            true
        } else {
            tracing::warn!("Rejected admin unlock attempt");
            false
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked.load(Ordering::SeqCst)
    }

    pub fn lock(&self) {
        self.unlocked.store(false, Ordering::SeqCst);
    }
}
