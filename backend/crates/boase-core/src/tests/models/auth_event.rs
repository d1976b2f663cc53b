use crate::{AuthEvent, Identity};

use uuid::Uuid;

#[test]
fn test_identity_carried_by_event() {
    let identity = Identity::new(Uuid::new_v4(), Some("a@example.com".to_string()));

    assert_eq!(
        AuthEvent::SignedIn(identity.clone()).identity(),
        Some(&identity)
    );
    assert_eq!(
        AuthEvent::TokenRefreshed(identity.clone()).identity(),
        Some(&identity)
    );
    assert_eq!(AuthEvent::SignedOut.identity(), None);
}

#[test]
fn test_event_names() {
    let identity = Identity::new(Uuid::new_v4(), None);

    assert_eq!(AuthEvent::SignedIn(identity.clone()).as_str(), "signed_in");
    assert_eq!(AuthEvent::UserUpdated(identity).as_str(), "user_updated");
    assert_eq!(AuthEvent::SignedOut.as_str(), "signed_out");
}
