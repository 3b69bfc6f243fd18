use super::*;
use crate::modal::ModalKind;
use crate::realtime::{ChannelConfig, DataPointInput};

#[test]
fn provided_stores_are_shared_with_descendants() {
    let owner = Owner::new();
    owner.with(|| {
        let (modals, realtime) = provide_stores(StoreConfig::default());

        let id = modals.try_update(|m| m.open_modal(ModalKind::UserEditor { user_id: None }));
        realtime.update(|rt| {
            rt.subscribe("cpu", ChannelConfig::default());
            rt.add_data_point("cpu", DataPointInput::new(1.0, 0.42));
        });

        let child = Owner::new();
        child.with(|| {
            let modals = use_modal_store();
            let realtime = use_realtime_store();
            assert_eq!(modals.with_untracked(ModalStore::modal_count), 1);
            assert_eq!(
                modals.with_untracked(|m| m.active_modal_id().map(str::to_owned)),
                id
            );
            assert_eq!(realtime.with_untracked(|rt| rt.latest_value("cpu")), Some(0.42));
        });
    });
}
