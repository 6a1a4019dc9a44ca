use tokio::sync::watch;

use crate::panel::{PanelSnapshot, Presenter};

/// Publishes every rendered snapshot on a watch channel
///
/// Readers only ever see the latest snapshot, which is all a redraw needs.
pub struct WatchPresenter {
    tx: watch::Sender<PanelSnapshot>,
}

impl WatchPresenter {
    pub fn new() -> (Self, watch::Receiver<PanelSnapshot>) {
        let (tx, rx) = watch::channel(PanelSnapshot::default());
        (Self { tx }, rx)
    }
}

impl Presenter for WatchPresenter {
    fn render(&mut self, snapshot: PanelSnapshot) {
        self.tx.send_replace(snapshot);
    }
}
