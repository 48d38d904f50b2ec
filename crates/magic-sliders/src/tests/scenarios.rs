//! End-to-end slider scenarios.
//!
//! Each test drives a session the way the slider screen would: lock toggles
//! and drag ticks in, corrected ratios and production out.

use power_split::{Channel, Distribution, TOTAL};

use crate::commit::CommitOutcome;
use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::session::SliderSession;

use super::helpers::{assert_ratios, session_at, session_with_locks, CountingModel, TEST_POWER};

// =============================================================================
// Drag Scenarios
// =============================================================================

/// Drag research, lock mana, drag research past what skill can give.
#[test]
fn drag_lock_drag_clamps_against_last_partner() {
    let mut session = session_with_locks([false, false, false]);

    let outcome = session.drag(Channel::Research, 150).unwrap();
    assert_eq!(outcome.actual, 150);
    assert_ratios(&session, [45, 150, 45]);

    session.set_locked(Channel::Mana, true);
    let outcome = session.drag(Channel::Research, 200).unwrap();

    assert_eq!(outcome.requested, 200);
    assert_eq!(outcome.actual, 195);
    assert!(outcome.clamped);
    assert_ratios(&session, [45, 195, 0]);
}

#[test]
fn two_partners_absorb_drag_evenly() {
    let mut session = session_with_locks([false, false, false]);
    let outcome = session.drag(Channel::Mana, 200).unwrap();
    assert_eq!(outcome.actual, 200);
    assert!(!outcome.clamped);
    assert_ratios(&session, [200, 20, 20]);
}

#[test]
fn single_partner_caps_the_dragged_channel() {
    let mut session = session_with_locks([false, true, false]);
    let outcome = session.drag(Channel::Mana, 240).unwrap();
    assert_eq!(outcome.actual, 160);
    assert_ratios(&session, [160, 80, 0]);
}

#[test]
fn odd_splits_alternate_between_partners() {
    let mut session = session_with_locks([false, false, false]);

    session.drag(Channel::Mana, 199).unwrap();
    assert_ratios(&session, [199, 20, 21]);
    assert!(session.bias().is_inverted());

    session.drag(Channel::Mana, 80).unwrap();
    assert_ratios(&session, [80, 79, 81]);
    assert!(!session.bias().is_inverted());
}

#[test]
fn repeating_current_value_changes_nothing() {
    let mut session = session_at(45, 150, 45);
    let bias = session.bias();
    let outcome = session.drag(Channel::Research, 150).unwrap();
    assert_eq!(outcome.distribution, Distribution::new(45, 150, 45).unwrap());
    assert_eq!(session.bias(), bias);
    assert!(!session.has_pending_changes());
}

#[test]
fn sweeping_a_slider_keeps_the_budget() {
    let mut session = session_with_locks([false, false, true]);
    for value in (0..=TOTAL).chain((0..=TOTAL).rev()) {
        let outcome = session.drag(Channel::Research, value).unwrap();
        let sum: u32 = outcome.distribution.as_array().iter().sum();
        assert_eq!(sum, TOTAL);
        assert_eq!(outcome.distribution[Channel::Skill], 80);
    }
    assert_ratios(&session, [160, 0, 80]);
}

// =============================================================================
// Locks and Enablement
// =============================================================================

#[test]
fn locking_one_channel_leaves_two_enabled() {
    let session = session_with_locks([true, false, false]);
    assert_eq!(session.enablement().as_array(), [false, true, true]);
}

#[test]
fn locking_two_channels_disables_all() {
    let mut session = session_with_locks([true, true, false]);
    assert_eq!(session.enablement().as_array(), [false, false, false]);
    assert_eq!(
        session.drag(Channel::Skill, 0),
        Err(SessionError::ChannelDisabled(Channel::Skill))
    );
}

#[test]
fn unlocking_does_not_rebalance() {
    let mut session = session_with_locks([false, true, false]);
    session.drag(Channel::Mana, 200).unwrap();
    assert_ratios(&session, [160, 80, 0]);

    let enabled = session.set_locked(Channel::Research, false);
    assert!(enabled.is_enabled(Channel::Research));
    assert_ratios(&session, [160, 80, 0]);

    session.drag(Channel::Mana, 200).unwrap();
    assert_ratios(&session, [200, 40, 0]);
}

// =============================================================================
// Production and Commit
// =============================================================================

#[test]
fn production_is_reprojected_after_each_drag() {
    let mut session = SliderSession::new(CountingModel::new(), SessionConfig::default());
    assert_eq!(session.model().calls(), 1);

    session.drag(Channel::Skill, 120).unwrap();
    session.drag(Channel::Skill, 96).unwrap();
    assert_eq!(session.model().calls(), 3);

    // 48 power, 96/240 of it
    assert_eq!(session.production().skill, 19);
    assert_eq!(session.production().magic_power_base, TEST_POWER);

    session.set_locked(Channel::Mana, true);
    session.set_locked(Channel::Research, true);
    assert!(session.drag(Channel::Skill, 0).is_err());
    assert_eq!(session.model().calls(), 3);
}

#[test]
fn commit_sends_only_on_change() {
    let mut session = session_at(80, 80, 80);
    let mut outbox = Vec::new();

    assert_eq!(session.commit(&mut outbox), CommitOutcome::Unchanged);

    session.drag(Channel::Mana, 120).unwrap();
    session.drag(Channel::Mana, 80).unwrap();
    // Dragged away and back: same ratios as the server holds.
    assert_ratios(&session, [80, 80, 80]);
    assert_eq!(session.commit(&mut outbox), CommitOutcome::Unchanged);

    session.drag(Channel::Research, 0).unwrap();
    let expected = session.distribution();
    assert_eq!(session.commit(&mut outbox), CommitOutcome::Sent(expected));
    assert_eq!(session.commit(&mut outbox), CommitOutcome::Unchanged);
    assert_eq!(outbox, vec![expected]);
}

#[test]
fn closing_yields_distribution_for_persistence() {
    let mut session = session_with_locks([false, false, false]);
    session.drag(Channel::Skill, 0).unwrap();
    let saved = session.into_distribution();
    let json = serde_json::to_string(&saved).unwrap();
    let restored: Distribution = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, saved);
    assert_eq!(restored.as_array(), [120, 120, 0]);
}
