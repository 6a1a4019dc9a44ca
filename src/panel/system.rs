//! Simulated systems and menu entries

use std::fmt;

use strum::{EnumIter, IntoEnumIterator};

/// A simulated subsystem that can fall into an error state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum System {
    AudioDevices,
    CameraSystem,
    Ventilation,
}

impl System {
    /// Number of real systems on the panel
    pub const COUNT: usize = 3;

    /// Systems in display order
    pub fn all() -> impl Iterator<Item = System> {
        System::iter()
    }

    /// Position in display order, also the index into the error flags
    pub fn index(self) -> usize {
        match self {
            Self::AudioDevices => 0,
            Self::CameraSystem => 1,
            Self::Ventilation => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<System> {
        System::iter().nth(index)
    }

    /// Name used in status messages
    pub fn display_name(self) -> &'static str {
        match self {
            Self::AudioDevices => "Audio Devices",
            Self::CameraSystem => "Camera System",
            Self::Ventilation => "Ventilation",
        }
    }

    /// Label shown in the menu
    pub fn menu_label(self) -> &'static str {
        match self {
            Self::AudioDevices => "audio devices",
            Self::CameraSystem => "camera system",
            Self::Ventilation => "ventilation",
        }
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One selectable line of the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuEntry {
    System(System),
    RebootAll,
}

impl MenuEntry {
    /// Number of menu lines, the last one being "Reboot All"
    pub const COUNT: usize = System::COUNT + 1;

    /// Index of the "Reboot All" action
    pub const REBOOT_ALL_INDEX: usize = System::COUNT;

    pub fn from_index(index: usize) -> Option<MenuEntry> {
        match System::from_index(index) {
            Some(system) => Some(MenuEntry::System(system)),
            None if index == Self::REBOOT_ALL_INDEX => Some(MenuEntry::RebootAll),
            None => None,
        }
    }

    /// Menu entries in display order
    pub fn all() -> impl Iterator<Item = MenuEntry> {
        System::all()
            .map(MenuEntry::System)
            .chain(std::iter::once(MenuEntry::RebootAll))
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::System(system) => system.menu_label(),
            Self::RebootAll => "Reboot All Systems",
        }
    }
}
