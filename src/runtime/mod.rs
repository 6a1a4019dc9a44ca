//! Runtime
//!
//! tokio implementations of the panel capabilities and the event loop that
//! drives `PanelController`.

pub mod alarm;
pub mod event_loop;
pub mod presenter;
pub mod random;
pub mod timers;

pub use alarm::{BellAlarm, SilentAlarm};
pub use event_loop::{PanelEvent, PanelHandle, PanelRuntime};
pub use presenter::WatchPresenter;
pub use random::ThreadRandomness;
pub use timers::TokioTimers;
