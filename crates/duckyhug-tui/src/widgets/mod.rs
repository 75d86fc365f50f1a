mod capture_form;
mod carousel;
mod controls;
mod header;
mod status_bar;

pub use capture_form::CaptureFormWidget;
pub use carousel::CarouselWidget;
pub use controls::ControlsWidget;
pub use header::HeaderWidget;
pub use status_bar::StatusBarWidget;

use unicode_width::UnicodeWidthChar;

/// Cut `text` to at most `width` display columns, adding an ellipsis when cut
pub(crate) fn truncate(text: &str, width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
