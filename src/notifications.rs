//! Desktop notifications for finished intervals
//! macOS uses osascript, everything else goes through notify-rust

use crate::domain::TimerMode;
#[cfg(not(target_os = "macos"))]
use notify_rust::Notification;
#[cfg(target_os = "macos")]
use std::process::Command;

/// Title and body for the "interval finished" notification
pub fn interval_message(finished: TimerMode, next: TimerMode) -> (String, String) {
    let title = format!("Pomo - {} Finished", finished.label());
    let body = if next.is_break() {
        format!("Time for a {}", next.label().to_lowercase())
    } else {
        "Back to work".to_string()
    };
    (title, body)
}

/// Send a notification when an interval runs out. Failures are ignored.
/// Delivery happens off the event loop thread.
pub fn notify_interval_complete(finished: TimerMode, next: TimerMode) {
    let (title, body) = interval_message(finished, next);

    let spawned = std::thread::Builder::new()
        .name("pomo-notify".to_string())
        .spawn(move || {
            if let Err(e) = show(&title, &body) {
                tracing::debug!(error = %e, "desktop notification failed");
            }
        });
    if let Err(e) = spawned {
        tracing::debug!(error = %e, "could not start notification thread");
    }
}

#[cfg(target_os = "macos")]
fn show(title: &str, body: &str) -> anyhow::Result<()> {
    let script = format!(
        r#"display notification "{}" with title "{}""#,
        body.replace('"', "\\\""),
        title.replace('"', "\\\"")
    );

    // output() waits for osascript so the child is reaped
    Command::new("osascript").arg("-e").arg(&script).output()?;
    Ok(())
}

#[cfg(not(target_os = "macos"))]
fn show(title: &str, body: &str) -> anyhow::Result<()> {
    Notification::new().summary(title).body(body).appname("pomo").show()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_message() {
        let (title, body) = interval_message(TimerMode::Work, TimerMode::LongBreak);
        assert_eq!(title, "Pomo - Work Finished");
        assert_eq!(body, "Time for a long break");

        let (title, body) = interval_message(TimerMode::ShortBreak, TimerMode::Work);
        assert_eq!(title, "Pomo - Short Break Finished");
        assert_eq!(body, "Back to work");
    }

    #[test]
    fn test_notify_does_not_block_caller() {
        let started = std::time::Instant::now();
        notify_interval_complete(TimerMode::Work, TimerMode::ShortBreak);
        assert!(started.elapsed() < std::time::Duration::from_millis(200));
    }
}
