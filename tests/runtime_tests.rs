mod common;

use std::time::Duration;

use common::{AlarmCall, RecordingAlarm, ScriptedRandomness};
use reboot_terminal::panel::{
    ErrorDelayRange, PanelInput, PanelTiming, StatusKind, System,
};
use reboot_terminal::runtime::{PanelEvent, PanelRuntime, WatchPresenter};
use tokio::time::{Instant, timeout};

fn build() -> (
    PanelRuntime,
    reboot_terminal::runtime::PanelHandle,
    tokio::sync::watch::Receiver<reboot_terminal::panel::PanelSnapshot>,
    RecordingAlarm,
    ScriptedRandomness,
) {
    let alarm = RecordingAlarm::default();
    let randomness = ScriptedRandomness::default();
    let (presenter, snapshots) = WatchPresenter::new();
    let timing = PanelTiming::with_error_delay(ErrorDelayRange::new(
        Duration::from_secs(30),
        Duration::from_secs(60),
    ));
    let (runtime, handle) = PanelRuntime::new(
        timing,
        Box::new(alarm.clone()),
        Box::new(presenter),
        Box::new(randomness.clone()),
    );
    (runtime, handle, snapshots, alarm, randomness)
}

#[tokio::test(start_paused = true)]
async fn test_error_then_reboot_end_to_end() {
    let (runtime, handle, mut snapshots, alarm, randomness) = build();
    randomness.push_delay(Duration::from_secs(30));
    randomness.push_system(System::CameraSystem);

    let start = Instant::now();
    let task = tokio::spawn(runtime.run());

    // Error injected after the scripted delay
    timeout(Duration::from_secs(61), snapshots.wait_for(|s| s.alarm_active))
        .await
        .expect("error injected")
        .expect("presenter alive");
    assert!(start.elapsed() >= Duration::from_secs(30));
    assert!(snapshots.borrow().has_error(System::CameraSystem));
    assert_eq!(snapshots.borrow().status.kind, StatusKind::Alert);

    // Select the camera and reboot it
    assert!(handle.send(PanelInput::NavigateDown));
    assert!(handle.send(PanelInput::Activate));
    snapshots
        .wait_for(|s| s.busy)
        .await
        .expect("reboot started");
    let reboot_started = Instant::now();

    timeout(Duration::from_secs(10), snapshots.wait_for(|s| !s.busy))
        .await
        .expect("reboot finished")
        .expect("presenter alive");
    assert!(reboot_started.elapsed() >= Duration::from_secs(5));

    {
        let snapshot = snapshots.borrow();
        assert!(!snapshot.alarm_active);
        assert!(!snapshot.has_error(System::CameraSystem));
        assert_eq!(snapshot.status.text, "Camera System Reboot Complete");
    }

    // Transient message fades back to idle
    timeout(
        Duration::from_secs(2),
        snapshots.wait_for(|s| s.status.kind == StatusKind::Idle),
    )
    .await
    .expect("status reset")
    .expect("presenter alive");

    handle.shutdown();
    let controller = task.await.expect("event loop");
    assert_eq!(controller.state().history().len(), 1);
    assert_eq!(alarm.calls(), vec![AlarmCall::Play, AlarmCall::Stop]);
}

#[tokio::test(start_paused = true)]
async fn test_inputs_during_reboot_are_ignored() {
    let (mut runtime, _handle, snapshots, _alarm, _randomness) = build();

    runtime.dispatch(PanelEvent::Input(PanelInput::Activate));
    assert!(snapshots.borrow().busy);

    assert!(runtime.dispatch(PanelEvent::Input(PanelInput::NavigateDown)));
    assert_eq!(runtime.controller().state().selected_index(), 0);
    assert!(!runtime.dispatch(PanelEvent::Shutdown));
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_stops_alarm() {
    let (runtime, handle, mut snapshots, alarm, randomness) = build();
    randomness.push_delay(Duration::from_secs(30));

    let task = tokio::spawn(runtime.run());
    timeout(Duration::from_secs(61), snapshots.wait_for(|s| s.alarm_active))
        .await
        .expect("error injected")
        .expect("presenter alive");

    handle.shutdown();
    let controller = task.await.expect("event loop");

    assert!(!controller.state().alarm_active());
    assert_eq!(alarm.calls(), vec![AlarmCall::Play, AlarmCall::Stop]);
}
