use crate::carousel::RecordingSurface;

/// Where the capture form lives
pub trait FormSurface {
    /// Current text of the email input
    fn read_input(&self) -> String;

    fn clear_input(&mut self);

    /// Show `text` in the message area; `color` is a hex string such as "#2B5F6F"
    fn show_message(&mut self, text: &str, color: &str);

    fn hide_message(&mut self);
}

impl FormSurface for RecordingSurface {
    fn read_input(&self) -> String {
        self.input.clone()
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }

    fn show_message(&mut self, text: &str, color: &str) {
        self.message = Some((text.to_string(), color.to_string()));
    }

    fn hide_message(&mut self) {
        self.message = None;
    }
}
