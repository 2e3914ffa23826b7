mod common;

use common::create_test_dispatcher;
use jiff::civil::date;
use yard_core::{
    access::{OpenGate, PinGate},
    models::{BoardFilter, DeliveryType, DependencyPatch, DispatchStatus, TimeSlot},
    readiness::Readiness,
    DispatchError, DispatcherBuilder, MutationOutcome,
};

#[test]
fn test_builder_creates_missing_directories() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("nested").join("dir").join("yard.db");

    let dispatcher = DispatcherBuilder::new()
        .with_database_path(Some(&db_path))
        .with_gate(OpenGate)
        .build()
        .expect("Failed to build dispatcher");

    assert!(db_path.exists());
    assert!(dispatcher.stops().unwrap().is_empty());
}

#[test]
fn test_builder_default_gate_is_locked() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let dispatcher = DispatcherBuilder::new()
        .with_database_path(Some(temp_dir.path().join("yard.db")))
        .build()
        .expect("Failed to build dispatcher");
    assert!(!dispatcher.can_edit());
}

#[test]
fn test_builder_storage_keys_keep_boards_apart() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("yard.db");
    let build = |key: &str| {
        DispatcherBuilder::new()
            .with_database_path(Some(&db_path))
            .with_storage_key(key)
            .with_gate(OpenGate)
            .build()
            .expect("Failed to build dispatcher")
    };

    let mut east = build("east-yard");
    let mut session = east.new_session(date(2025, 3, 14));
    session.draft_mut().customer = "Acme".to_string();
    east.submit(&mut session).expect("Failed to submit");

    assert_eq!(build("east-yard").stops().unwrap().len(), 1);
    assert!(build("west-yard").stops().unwrap().is_empty());
}

#[test]
fn test_boise_dependency_blocks_loading_until_checked() {
    let (_temp_dir, mut dispatcher) = create_test_dispatcher(OpenGate);

    let mut session = dispatcher.new_session(date(2025, 3, 14));
    session.draft_mut().customer = "Harris Ranch Homes".to_string();
    let dep_id = session.add_dependency();
    session
        .update_dependency(
            &dep_id,
            &DependencyPatch {
                supplier: Some("Boise".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    let stop = dispatcher.submit(&mut session).unwrap().stop().unwrap().clone();
    assert!(!stop.is_ready_to_ship());

    // Not checked, not received: loading is refused and nothing changes.
    let mut session = dispatcher.edit_session(&stop.id).unwrap();
    let err = session.set_status(DispatchStatus::Loading).unwrap_err();
    assert!(matches!(err, DispatchError::VerificationRequired { .. }));
    assert_eq!(session.draft().status, DispatchStatus::Scheduled);
    assert!(!session.draft().is_ready_to_ship());

    // Receive the item and check the order: now it may load.
    session
        .update_dependency(&dep_id, &DependencyPatch::received(true))
        .unwrap();
    session.set_dispatch_checked(true);
    assert!(session.draft().is_ready_to_ship());
    session.set_status(DispatchStatus::Loading).unwrap();

    let outcome = dispatcher.submit(&mut session).unwrap();
    let saved = outcome.stop().unwrap();
    assert_eq!(saved.status, DispatchStatus::Loading);
    assert!(saved.is_ready_to_ship());

    let reloaded = dispatcher.get_stop(&stop.id).unwrap().unwrap();
    assert_eq!(&reloaded, saved);
}

#[test]
fn test_hotshot_flag_independent_of_readiness() {
    let (_temp_dir, mut dispatcher) = create_test_dispatcher(OpenGate);

    let mut session = dispatcher.new_session(date(2025, 3, 14));
    session.draft_mut().customer = "Rush Job".to_string();
    session.draft_mut().delivery_type = Some(DeliveryType::Hotshot);
    let dep = session.add_dependency();
    session
        .update_dependency(
            &dep,
            &DependencyPatch {
                supplier: Some("Idaho Timber".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    let stop = dispatcher.submit(&mut session).unwrap().stop().unwrap().clone();
    assert!(stop.is_hotshot());
    assert!(!stop.is_ready_to_ship());
}

#[test]
fn test_empty_customer_adds_nothing() {
    let (_temp_dir, mut dispatcher) = create_test_dispatcher(OpenGate);

    let mut session = dispatcher.new_session(date(2025, 3, 14));
    let outcome = dispatcher.submit(&mut session).unwrap();

    assert!(matches!(outcome, MutationOutcome::Ignored));
    assert!(dispatcher.stops().unwrap().is_empty());
}

#[test]
fn test_search_finds_stop_by_supplier_only() {
    let (_temp_dir, mut dispatcher) = create_test_dispatcher(OpenGate);
    let day = date(2025, 3, 14);

    let mut session = dispatcher.new_session(day);
    session.draft_mut().customer = "Acme Framing".to_string();
    session.draft_mut().time_slot = TimeSlot::Midday;
    let dep = session.add_dependency();
    session
        .update_dependency(
            &dep,
            &DependencyPatch {
                supplier: Some("Boise Cascade".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    let stop = dispatcher.submit(&mut session).unwrap().stop().unwrap().clone();

    let mut other = dispatcher.new_session(day);
    other.draft_mut().customer = "Nampa Decks".to_string();
    dispatcher.submit(&mut other).unwrap();

    let board = dispatcher
        .board(&BoardFilter::for_day(day).with_search("boise"))
        .unwrap();
    assert_eq!(board.len(), 1);
    assert_eq!(board.slot(TimeSlot::Midday)[0].id, stop.id);
}

#[test]
fn test_pin_elevation_replays_blocked_save() {
    let (_temp_dir, mut dispatcher) = create_test_dispatcher(PinGate::new("DP3105"));

    let mut session = dispatcher.new_session(date(2025, 3, 14));
    session.draft_mut().customer = "Acme".to_string();

    let MutationOutcome::ElevationRequired(pending) = dispatcher.submit(&mut session).unwrap()
    else {
        panic!("Expected ElevationRequired");
    };
    assert!(dispatcher.stops().unwrap().is_empty());

    let outcome = dispatcher.elevate(pending, "DP3105").unwrap();
    assert!(matches!(outcome, MutationOutcome::Created(_)));
    assert_eq!(dispatcher.stops().unwrap().len(), 1);
}
