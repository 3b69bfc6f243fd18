//! End-to-end store scenarios driven through the public API only.

use std::num::NonZeroUsize;

use dashboard_state::{
    ChannelConfig, ConnectionStatus, DataPointInput, ModalKind, ModalStore, RealtimeStore, StoreConfig,
};

#[test]
fn temperature_feed_keeps_last_three() {
    let mut rt = RealtimeStore::new(StoreConfig::default());
    rt.subscribe("temp-1", ChannelConfig { name: None, max_data_points: NonZeroUsize::new(3) });
    for v in [1.0, 2.0, 3.0, 4.0, 5.0] {
        rt.add_data_point("temp-1", DataPointInput::new(v, v));
    }
    let data: Vec<f64> = rt.channel("temp-1").unwrap().data.iter().map(|p| p.value).collect();
    assert_eq!(data, vec![3.0, 4.0, 5.0]);
}

#[test]
fn batch_ingest_exposes_latest() {
    let mut rt = RealtimeStore::default();
    rt.subscribe("m1", ChannelConfig::default());
    rt.add_data_points(
        "m1",
        vec![DataPointInput::new(1.0, 10.0), DataPointInput::new(2.0, 20.0)],
    );
    assert_eq!(rt.latest_data_point("m1").map(|p| p.value), Some(20.0));
    let ch = rt.channel("m1").unwrap();
    assert!(ch.last_updated.is_some());
    assert_eq!(ch.status, ConnectionStatus::Connected);
}

#[test]
fn nested_modals_close_top_first() {
    let mut modals = ModalStore::new();
    let a = modals.open_modal(ModalKind::RoleEditor { role_id: Some("admin".into()) });
    let b = modals.open_modal(ModalKind::Confirm {
        title: "Discard changes?".into(),
        message: "Unsaved permission edits will be lost.".into(),
        confirm_label: "Discard".into(),
        destructive: true,
    });
    assert_eq!(modals.modal_count(), 2);
    assert_eq!(modals.active_modal_id(), Some(b.as_str()));

    modals.close_top_modal();

    assert_eq!(modals.modal_count(), 1);
    assert!(!modals.is_modal_open(&b));
    assert_eq!(modals.active_modal_id(), Some(a.as_str()));
}

#[test]
fn reconnect_cycle_counts_errors() {
    let mut rt = RealtimeStore::default();
    rt.subscribe("ticker", ChannelConfig::default());
    rt.set_global_status(ConnectionStatus::Connecting);

    for _ in 0..3 {
        rt.set_channel_status("ticker", ConnectionStatus::Error);
        rt.set_error(Some("connection reset".into()));
        assert!(rt.reconnect_delay().is_some());
        rt.set_channel_status("ticker", ConnectionStatus::Connecting);
    }
    rt.add_data_point("ticker", DataPointInput::new(0.0, 101.5));
    rt.set_error(None);

    let ch = rt.channel("ticker").unwrap();
    assert_eq!(ch.error_count, 3);
    assert_eq!(ch.status, ConnectionStatus::Connected);
    assert!(rt.last_error().is_none());

    rt.unsubscribe("ticker");
    rt.add_data_point("ticker", DataPointInput::new(1.0, 102.0));
    assert!(rt.channel("ticker").is_none());
}
