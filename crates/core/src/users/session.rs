use tokio::sync::watch;

use crate::users::users_model::UserProfile;

/// Observable holder of the current signed-in profile.
///
/// Screens and background tasks subscribe instead of sharing global auth
/// state: `sign_in`/`sign_up` publish the profile, `sign_out` publishes
/// `None`, and every receiver sees the latest value on change. Dropped
/// receivers never block the publisher.
#[derive(Clone)]
pub struct SessionContext {
    sender: watch::Sender<Option<UserProfile>>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (sender, _receiver) = watch::channel(None);
        Self { sender }
    }

    /// The profile currently signed in, if any.
    pub fn current(&self) -> Option<UserProfile> {
        self.sender.borrow().clone()
    }

    /// A receiver that resolves whenever the signed-in profile changes.
    pub fn subscribe(&self) -> watch::Receiver<Option<UserProfile>> {
        self.sender.subscribe()
    }

    pub(crate) fn publish(&self, profile: Option<UserProfile>) {
        self.sender.send_replace(profile);
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn profile(id: &str) -> UserProfile {
        UserProfile {
            id: id.to_string(),
            email: format!("{id}@example.com"),
            display_name: "Test".to_string(),
            created_at: Utc::now().naive_utc(),
        }
    }

    #[tokio::test]
    async fn observers_see_sign_in_and_sign_out() {
        let session = SessionContext::new();
        let mut rx = session.subscribe();

        assert!(session.current().is_none());

        session.publish(Some(profile("u-1")));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().as_ref().map(|p| p.id.clone()), Some("u-1".to_string()));

        session.publish(None);
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_none());
    }

    #[tokio::test]
    async fn late_subscribers_get_the_latest_value() {
        let session = SessionContext::new();
        session.publish(Some(profile("u-2")));

        let rx = session.subscribe();
        assert_eq!(rx.borrow().as_ref().map(|p| p.id.clone()), Some("u-2".to_string()));
        assert_eq!(session.current().map(|p| p.id), Some("u-2".to_string()));
    }

    #[test]
    fn publishing_without_subscribers_does_not_panic() {
        let session = SessionContext::new();
        session.publish(Some(profile("u-3")));
        session.publish(None);
        assert!(session.current().is_none());
    }
}
