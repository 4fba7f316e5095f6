/// Blocking browser alert for failures the user must acknowledge.
pub fn alert(message: &str) {
    log::warn!("alert: {}", message);
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
