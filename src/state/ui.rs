#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Top-level chrome state: theme preference.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
}
