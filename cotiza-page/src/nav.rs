use serde::{Deserialize, Serialize};

/// Open/closed state of the mobile navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Which icon the toggle button shows for a given menu state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleIcon {
    Bars,
    Xmark,
}

impl MenuState {
    /// Toggle-button click.
    pub fn toggle(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// A navigation link was followed; the menu always closes.
    pub fn close_on_navigate(self) -> Self {
        MenuState::Closed
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn icon(self) -> ToggleIcon {
        match self {
            MenuState::Closed => ToggleIcon::Bars,
            MenuState::Open => ToggleIcon::Xmark,
        }
    }
}
