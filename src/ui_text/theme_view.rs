use crate::models::theme::ThemeMode;

pub struct ThemeView;

impl ThemeView {
    /// Current mode followed by the toggle button caption.
    pub fn render(mode: ThemeMode) -> String {
        format!(
            "Theme: {}\n{} {}",
            mode.name(),
            mode.toggle_icon(),
            mode.toggle_label()
        )
    }
}
