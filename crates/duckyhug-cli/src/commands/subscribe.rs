use std::time::Duration;

use anyhow::Result;

use duckyhug_core::{AppConfig, CaptureForm, ManualTimer, PlaceholderSubscription, RecordingSurface};

pub fn run(config: &AppConfig, email: &str) -> Result<()> {
    let timer = ManualTimer::new();
    let mut form = CaptureForm::new(
        config.form.clone(),
        RecordingSurface::with_input(email),
        timer.clone(),
        PlaceholderSubscription::new(),
    );

    let outcome = form.submit();

    if let Some((text, _color)) = &form.surface().message {
        println!("{}", text);
    }

    // Let the message expire so the form ends in its resting state
    timer.advance_with(Duration::from_millis(config.form.message_hide_ms), |handle| {
        form.on_timer(handle);
    });
    tracing::debug!(visible = form.is_message_visible(), "Capture form settled");

    outcome.into_result()?;
    Ok(())
}
