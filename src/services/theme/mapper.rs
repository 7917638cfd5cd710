// Stored text <-> dark-mode flag. The value is a JSON boolean literal.

pub fn parse_dark_mode(text: &str) -> Option<bool> {
    serde_json::from_str::<bool>(text.trim()).ok()
}

pub fn format_dark_mode(dark_mode: bool) -> String {
    serde_json::Value::Bool(dark_mode).to_string()
}
