//! Panel state and the read-only snapshot handed to the presentation layer

use super::system::{MenuEntry, System};

/// Visual marker of the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Nothing in progress
    Idle,
    /// A reboot is running
    Pending,
    /// A single-system reboot just completed
    Success,
    /// Every system was rebooted at once
    AllClear,
    /// A system error is active
    Alert,
}

/// Status line text and its marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusLine {
    fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn operational() -> Self {
        Self::new(StatusKind::Idle, "all systems operational...")
    }

    pub fn rebooting(system: System) -> Self {
        Self::new(StatusKind::Pending, format!("Rebooting {}...", system))
    }

    pub fn rebooting_all() -> Self {
        Self::new(StatusKind::Pending, "Rebooting All Systems...")
    }

    pub fn reboot_complete(system: System) -> Self {
        Self::new(StatusKind::Success, format!("{} Reboot Complete", system))
    }

    pub fn all_reboot_complete() -> Self {
        Self::new(StatusKind::AllClear, "All Systems Reboot Complete")
    }

    pub fn system_error(system: System) -> Self {
        Self::new(
            StatusKind::Alert,
            format!("ERROR: {} system error", system.menu_label()),
        )
    }
}

/// What a reboot in progress is acting on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebootTarget {
    One(System),
    All,
}

/// Reboot progress; anything but `Idle` means the panel is busy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebootPhase {
    Idle,
    Rebooting(RebootTarget),
}

/// Navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Mutable panel state, owned by `PanelController`
#[derive(Debug, Clone)]
pub struct PanelState {
    error_flags: [bool; System::COUNT],
    selected_index: usize,
    alarm_active: bool,
    phase: RebootPhase,
    status: StatusLine,
    history: Vec<String>,
    history_visible: bool,
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelState {
    pub fn new() -> Self {
        Self {
            error_flags: [false; System::COUNT],
            selected_index: 0,
            alarm_active: false,
            phase: RebootPhase::Idle,
            status: StatusLine::operational(),
            history: Vec::new(),
            history_visible: false,
        }
    }

    pub fn has_error(&self, system: System) -> bool {
        self.error_flags[system.index()]
    }

    pub fn any_error(&self) -> bool {
        self.error_flags.iter().any(|flag| *flag)
    }

    pub fn error_flags(&self) -> [bool; System::COUNT] {
        self.error_flags
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_entry(&self) -> MenuEntry {
        MenuEntry::from_index(self.selected_index).unwrap_or(MenuEntry::RebootAll)
    }

    pub fn alarm_active(&self) -> bool {
        self.alarm_active
    }

    pub fn phase(&self) -> RebootPhase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.phase != RebootPhase::Idle
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    /// Completion messages in the order they happened
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// The latest history entry, while it is still on screen
    pub fn visible_history(&self) -> Option<&str> {
        if self.history_visible {
            self.history.last().map(String::as_str)
        } else {
            None
        }
    }

    pub(crate) fn set_error(&mut self, system: System, value: bool) {
        self.error_flags[system.index()] = value;
    }

    pub(crate) fn clear_errors(&mut self) {
        self.error_flags = [false; System::COUNT];
    }

    pub(crate) fn set_alarm_active(&mut self, active: bool) {
        self.alarm_active = active;
    }

    pub(crate) fn set_phase(&mut self, phase: RebootPhase) {
        self.phase = phase;
    }

    pub(crate) fn set_status(&mut self, status: StatusLine) {
        self.status = status;
    }

    pub(crate) fn push_history(&mut self, entry: String) {
        self.history.push(entry);
        self.history_visible = true;
    }

    pub(crate) fn hide_history(&mut self) {
        self.history_visible = false;
    }

    /// Moves the selection one step, clamped to the menu. Returns whether it moved.
    pub(crate) fn step_selection(&mut self, direction: Direction) -> bool {
        let next = match direction {
            Direction::Up => self.selected_index.saturating_sub(1),
            Direction::Down => (self.selected_index + 1).min(MenuEntry::REBOOT_ALL_INDEX),
        };
        let moved = next != self.selected_index;
        self.selected_index = next;
        moved
    }

    pub fn snapshot(&self) -> PanelSnapshot {
        PanelSnapshot {
            selected_index: self.selected_index,
            error_flags: self.error_flags,
            status: self.status.clone(),
            latest_history: self.visible_history().map(str::to_string),
            busy: self.is_busy(),
            alarm_active: self.alarm_active,
        }
    }
}

/// Read-only view of the panel for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelSnapshot {
    pub selected_index: usize,
    pub error_flags: [bool; System::COUNT],
    pub status: StatusLine,
    pub latest_history: Option<String>,
    pub busy: bool,
    pub alarm_active: bool,
}

impl PanelSnapshot {
    pub fn has_error(&self, system: System) -> bool {
        self.error_flags[system.index()]
    }

    pub fn is_selected(&self, entry: MenuEntry) -> bool {
        MenuEntry::from_index(self.selected_index) == Some(entry)
    }
}

impl Default for PanelSnapshot {
    fn default() -> Self {
        PanelState::new().snapshot()
    }
}
