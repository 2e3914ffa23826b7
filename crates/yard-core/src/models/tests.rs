#[cfg(test)]
mod model_tests {
    use std::str::FromStr;

    use jiff::{civil::date, Timestamp};

    use crate::{
        models::{
            DeliveryType, DependencyPatch, DispatchDependency, DispatchStatus, DispatchStop,
            Driver, StopDraft, TimeSlot, Truck,
        },
        readiness::Readiness,
    };

    fn create_test_stop() -> DispatchStop {
        DispatchStop {
            id: "m7k2q9x3a1b0c18e2f4a7b90".to_string(),
            created_at: Timestamp::from_millisecond(1_741_950_000_123).unwrap(),
            updated_at: Timestamp::from_millisecond(1_741_953_600_456).unwrap(),
            date: date(2025, 3, 14),
            time_slot: TimeSlot::Midday,
            customer: "Treasure Valley Builders".to_string(),
            job_name: Some("Harris Ranch lot 12".to_string()),
            address: Some("3900 E Parkcenter Blvd, Boise, ID".to_string()),
            phone: Some("208-555-0143".to_string()),
            delivery_type: Some(DeliveryType::ForkliftMoffett),
            driver: Some(Driver::Travis),
            truck: Some(Truck::International2025),
            order_ref: Some("SO-44871".to_string()),
            status: DispatchStatus::Waiting,
            dispatch_checked: false,
            notes: Some("Gate code 4411".to_string()),
            dependencies: vec![DispatchDependency {
                id: "d1".to_string(),
                supplier: "Boise Cascade".to_string(),
                po_or_ref: Some("PO-2231".to_string()),
                eta: Some("Fri".to_string()),
                received: false,
                notes: None,
            }],
        }
    }

    #[test]
    fn test_stop_json_field_names() {
        let json = serde_json::to_value(create_test_stop()).unwrap();

        assert_eq!(json["createdAt"], 1_741_950_000_123_i64);
        assert_eq!(json["date"], "2025-03-14");
        assert_eq!(json["timeSlot"], "11:00–1:00");
        assert_eq!(json["deliveryType"], "Forklift Unload (Moffett)");
        assert_eq!(json["truck"], "Int 2025 (Moffett Only)");
        assert_eq!(json["status"], "waiting");
        assert_eq!(json["dispatchChecked"], false);
        assert_eq!(json["orderRef"], "SO-44871");
        assert_eq!(json["dependencies"][0]["poOrRef"], "PO-2231");
    }

    #[test]
    fn test_stop_json_round_trip_is_exact() {
        let stop = create_test_stop();
        let json = serde_json::to_string(&stop).unwrap();
        let back: DispatchStop = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stop);
    }

    #[test]
    fn test_stop_json_optional_fields_omitted() {
        let json = serde_json::json!({
            "id": "a",
            "createdAt": 1_700_000_000_000_i64,
            "updatedAt": 1_700_000_000_000_i64,
            "date": "2025-03-14",
            "timeSlot": "3:00–5:00",
            "customer": "Acme",
            "status": "out"
        });
        let stop: DispatchStop = serde_json::from_value(json).unwrap();

        assert_eq!(stop.time_slot, TimeSlot::Late);
        assert_eq!(stop.status, DispatchStatus::Out);
        assert_eq!(stop.delivery_type, None);
        assert!(!stop.dispatch_checked);
        assert!(stop.dependencies.is_empty());

        let out = serde_json::to_value(&stop).unwrap();
        assert!(out.get("jobName").is_none());
        assert!(out.get("driver").is_none());
    }

    #[test]
    fn test_stop_json_null_fields_read_as_defaults() {
        let json = serde_json::json!({
            "id": "a",
            "createdAt": 1_700_000_000_000_i64,
            "updatedAt": 1_700_000_000_000_i64,
            "date": "2025-03-14",
            "timeSlot": "7:00–9:00",
            "customer": "Acme",
            "status": "scheduled",
            "dispatchChecked": null,
            "notes": null,
            "dependencies": [
                { "id": "d1", "supplier": "Boise Cascade", "received": null },
                { "id": "d2", "supplier": null }
            ]
        });
        let stop: DispatchStop = serde_json::from_value(json).unwrap();

        assert!(!stop.dispatch_checked);
        assert_eq!(stop.notes, None);
        assert_eq!(stop.dependencies.len(), 2);
        assert!(!stop.dependencies[0].received);
        assert_eq!(stop.dependencies[1].supplier, "");

        let json = serde_json::json!({
            "id": "b",
            "createdAt": 1_700_000_000_000_i64,
            "updatedAt": 1_700_000_000_000_i64,
            "date": "2025-03-14",
            "timeSlot": "7:00–9:00",
            "customer": "Acme",
            "status": "scheduled",
            "dependencies": null
        });
        let stop: DispatchStop = serde_json::from_value(json).unwrap();
        assert!(stop.dependencies.is_empty());
    }

    #[test]
    fn test_status_from_str_variants() {
        assert_eq!(DispatchStatus::from_str("Waiting on Supplier"), Ok(DispatchStatus::Waiting));
        assert_eq!(DispatchStatus::from_str("out_for_delivery"), Ok(DispatchStatus::Out));
        assert_eq!(DispatchStatus::from_str("cancelled"), Ok(DispatchStatus::Canceled));
        assert!(DispatchStatus::from_str("shipped").is_err());
    }

    #[test]
    fn test_status_labels_and_keys() {
        let labels: Vec<&str> = DispatchStatus::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Scheduled",
                "Picking",
                "Waiting on Supplier",
                "Loading",
                "Out for Delivery",
                "Delivered",
                "Canceled"
            ]
        );
        for status in DispatchStatus::ALL {
            assert_eq!(DispatchStatus::from_str(status.as_str()), Ok(status));
        }
    }

    #[test]
    fn test_catalog_parsing_by_key_and_label() {
        assert_eq!(DeliveryType::from_str("hand-2"), Ok(DeliveryType::HandUnloadTwo));
        assert_eq!(
            DeliveryType::from_str("forklift unload (donkey)"),
            Ok(DeliveryType::ForkliftDonkey)
        );
        assert_eq!(Driver::from_str("justin"), Ok(Driver::Justin));
        assert_eq!(Truck::from_str("int-1"), Ok(Truck::International2019));
        assert_eq!(TimeSlot::from_str("9:00-11:00"), Ok(TimeSlot::Morning));
        assert!(TimeSlot::from_str("5-7").is_err());
    }

    #[test]
    fn test_time_slot_order_is_chronological() {
        let mut slots = vec![TimeSlot::Late, TimeSlot::Afternoon, TimeSlot::Early, TimeSlot::Midday];
        slots.sort();
        assert_eq!(
            slots,
            vec![TimeSlot::Early, TimeSlot::Midday, TimeSlot::Afternoon, TimeSlot::Late]
        );
    }

    #[test]
    fn test_draft_defaults() {
        let draft = StopDraft::new(date(2025, 3, 14));
        assert_eq!(draft.time_slot, TimeSlot::Early);
        assert_eq!(draft.delivery_type, Some(DeliveryType::General));
        assert_eq!(draft.driver, Some(Driver::Jaime));
        assert_eq!(draft.truck, Some(Truck::International2019));
        assert_eq!(draft.status, DispatchStatus::Scheduled);
        assert!(!draft.dispatch_checked);
        assert!(!draft.has_customer());
    }

    #[test]
    fn test_draft_from_stop_drops_identity() {
        let stop = create_test_stop();
        let draft = StopDraft::from(&stop);
        assert_eq!(draft.customer, stop.customer);
        assert_eq!(draft.dependencies, stop.dependencies);
    }

    #[test]
    fn test_draft_rejected_status_leaves_draft_unchanged() {
        let mut draft = StopDraft::from(&create_test_stop());
        let before = draft.clone();

        let err = draft.set_status(DispatchStatus::Loading).unwrap_err();
        assert!(err.is_verification_required());
        assert_eq!(draft, before);
        assert!(!draft.is_ready_to_ship());
    }

    #[test]
    fn test_boise_dependency_scenario() {
        let mut draft = StopDraft::from(&create_test_stop());
        assert!(draft.set_status(DispatchStatus::Loading).is_err());
        assert_eq!(draft.status, DispatchStatus::Waiting);

        assert!(draft.update_dependency("d1", &DependencyPatch::received(true)));
        draft.dispatch_checked = true;

        assert!(draft.is_ready_to_ship());
        assert!(draft.set_status(DispatchStatus::Loading).is_ok());
        assert_eq!(draft.status, DispatchStatus::Loading);
    }

    #[test]
    fn test_hotshot_regardless_of_status() {
        let mut stop = create_test_stop();
        stop.delivery_type = Some(DeliveryType::Hotshot);
        for status in DispatchStatus::ALL {
            stop.status = status;
            assert!(stop.is_hotshot());
        }
        assert!(!stop.is_ready_to_ship());

        stop.delivery_type = None;
        assert!(!stop.is_hotshot());
    }

    #[test]
    fn test_ready_to_ship_bi_implication() {
        let stop = create_test_stop();
        for checked in [false, true] {
            for received in [false, true] {
                for dep_count in 0..3 {
                    let mut s = stop.clone();
                    s.dispatch_checked = checked;
                    s.dependencies = (0..dep_count)
                        .map(|i| DispatchDependency {
                            id: format!("d{i}"),
                            supplier: "Supplier".to_string(),
                            received,
                            ..Default::default()
                        })
                        .collect();

                    let all_received = s.dependencies.iter().all(|d| d.received);
                    assert_eq!(s.deps_all_received(), all_received);
                    assert_eq!(s.is_ready_to_ship(), all_received && checked);
                }
            }
        }
    }

    #[test]
    fn test_dependency_patch_is_empty() {
        assert!(DependencyPatch::default().is_empty());
        assert!(!DependencyPatch::received(false).is_empty());
    }

    #[test]
    fn test_dependency_add_update_remove() {
        let mut draft = StopDraft::new(date(2025, 3, 14));
        let id = draft.add_dependency();
        assert_eq!(draft.dependencies.len(), 1);
        assert_eq!(draft.dependencies[0].supplier, "");

        let patch = DependencyPatch {
            supplier: Some("Idaho Timber".to_string()),
            eta: Some("Tue".to_string()),
            ..Default::default()
        };
        assert!(draft.update_dependency(&id, &patch));
        assert_eq!(draft.dependencies[0].supplier, "Idaho Timber");
        assert_eq!(draft.dependencies[0].eta.as_deref(), Some("Tue"));
        assert!(!draft.update_dependency("missing", &patch));

        assert!(draft.remove_dependency(&id));
        let after_first = draft.clone();
        assert!(!draft.remove_dependency(&id));
        assert_eq!(draft, after_first);
    }

    #[test]
    fn test_draft_normalized_trims_and_prunes() {
        let mut draft = StopDraft::new(date(2025, 3, 14));
        draft.customer = "  Acme Framing ".to_string();
        draft.job_name = Some("   ".to_string());
        draft.notes = Some(" back alley ".to_string());
        draft.dependencies = vec![
            DispatchDependency {
                id: "keep".to_string(),
                supplier: " Boise Cascade ".to_string(),
                po_or_ref: Some(" PO-1 ".to_string()),
                ..Default::default()
            },
            DispatchDependency {
                id: "drop".to_string(),
                supplier: "   ".to_string(),
                po_or_ref: Some("PO-2".to_string()),
                ..Default::default()
            },
        ];

        let normalized = draft.normalized();
        assert_eq!(normalized.customer, "Acme Framing");
        assert_eq!(normalized.job_name, None);
        assert_eq!(normalized.notes.as_deref(), Some("back alley"));
        assert_eq!(normalized.dependencies.len(), 1);
        assert_eq!(normalized.dependencies[0].id, "keep");
        assert_eq!(normalized.dependencies[0].supplier, "Boise Cascade");
        assert_eq!(normalized.dependencies[0].po_or_ref.as_deref(), Some("PO-1"));
    }

    #[test]
    fn test_stop_display_detail() {
        let output = create_test_stop().to_string();
        assert!(output.starts_with("# Treasure Valley Builders"));
        assert!(output.contains("- Status: Waiting on Supplier"));
        assert!(output.contains("- Date: 2025-03-14 (11:00–1:00)"));
        assert!(output.contains("- Truck: Int 2025 (Moffett Only)"));
        assert!(output.contains("| Boise Cascade | PO-2231 | Fri | ⏳ Waiting | — |"));
        assert!(output.contains("0/1 received"));
        assert!(!output.contains("Ready to Ship"));
    }
}
