//! Display element and the MM:SS formatter that writes into it

use std::sync::Arc;
use tokio::sync::watch;

/// A single text node whose content can be read and watched
#[derive(Debug, Clone)]
pub struct DisplayElement {
    text_tx: Arc<watch::Sender<String>>,
}

impl DisplayElement {
    /// Create a display element with initial text
    pub fn new(initial: impl Into<String>) -> Self {
        let (text_tx, _) = watch::channel(initial.into());
        Self {
            text_tx: Arc::new(text_tx),
        }
    }

    /// Replace the text content and notify watchers
    pub fn set_text(&self, text: String) {
        self.text_tx.send_replace(text);
    }

    /// Current text content
    pub fn text(&self) -> String {
        self.text_tx.borrow().clone()
    }

    /// Watch text content changes
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.text_tx.subscribe()
    }
}

impl Default for DisplayElement {
    fn default() -> Self {
        Self::new(String::new())
    }
}

/// Format minutes and seconds as `MM:SS`, zero-padding values below 10
pub fn format(minutes: u64, seconds: u64) -> String {
    format!("{:02}:{:02}", minutes, seconds)
}

/// Write the formatted time into a display element
pub fn render(display: &DisplayElement, minutes: u64, seconds: u64) {
    display.set_text(format(minutes, seconds));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_single_digits() {
        assert_eq!(format(5, 9), "05:09");
        assert_eq!(format(0, 0), "00:00");
    }

    #[test]
    fn leaves_two_digits_alone() {
        assert_eq!(format(15, 0), "15:00");
        assert_eq!(format(10, 59), "10:59");
    }

    #[test]
    fn minutes_over_99_are_not_truncated() {
        assert_eq!(format(120, 5), "120:05");
    }

    #[test]
    fn render_updates_every_clone() {
        let display = DisplayElement::default();
        let other = display.clone();

        render(&display, 1, 2);
        assert_eq!(other.text(), "01:02");
    }

    #[tokio::test]
    async fn subscribers_see_changes() {
        let display = DisplayElement::new("15:00");
        let mut rx = display.subscribe();

        render(&display, 14, 59);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), "14:59");
    }
}
