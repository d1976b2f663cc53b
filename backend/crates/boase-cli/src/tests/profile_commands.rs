use crate::profile_commands::UpdateProfileArgs;

use boase_core::ProfileUpdate;

#[test]
fn given_update_args_when_converted_then_welcome_flag_untouched() {
    let args = UpdateProfileArgs {
        bio: Some("Builds things".to_string()),
        supply: Some("1,000,000".to_string()),
        ..Default::default()
    };

    let update = ProfileUpdate::from(args);

    assert_eq!(update.bio.as_deref(), Some("Builds things"));
    assert_eq!(update.supply.as_deref(), Some("1,000,000"));
    assert!(update.has_seen_welcome_card.is_none());
    assert!(!update.is_empty());
}

#[test]
fn given_no_flags_when_converted_then_update_empty() {
    let update = ProfileUpdate::from(UpdateProfileArgs::default());

    assert!(update.is_empty());
}
