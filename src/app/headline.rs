//! Glue between the typewriter driver and the event loop.

use crate::app::event::AppEvent;
use crate::config::model::default_words;
use crate::config::HeadlineConfig;
use crate::typewriter::{Headline, TypewriterError};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Start (or restart) the headline from config. A word list the driver
/// rejects is replaced by the built-in words.
pub fn start_from_config(
    headline: &mut Headline,
    config: &HeadlineConfig,
) -> Result<(), TypewriterError> {
    let timings = config.timings();
    match headline.start(config.words.iter().cloned(), timings) {
        Ok(()) => {
            info!(words = config.words.len(), "Headline started");
            Ok(())
        }
        Err(e) => {
            warn!(error = %e, "Invalid headline words in config, using defaults");
            headline.start(default_words(), timings)
        }
    }
}

/// Forward every text change of the running headline into the event
/// channel, tagged with `generation`. The task ends when the headline is
/// stopped or restarted, or when the event loop is gone.
pub fn forward(headline: &Headline, generation: u64, tx: mpsc::UnboundedSender<AppEvent>) {
    let Some(mut rx) = headline.subscribe() else {
        return;
    };
    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let text = rx.borrow_and_update().text.clone();
            if tx.send(AppEvent::Headline { generation, text }).is_err() {
                break;
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config(words: &[&str]) -> HeadlineConfig {
        HeadlineConfig {
            words: words.iter().map(|w| w.to_string()).collect(),
            ..HeadlineConfig::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_starts_with_configured_words() {
        let mut headline = Headline::default();
        start_from_config(&mut headline, &config(&["Rust"])).unwrap();
        tokio::time::sleep(Duration::from_millis(80)).await;
        assert_eq!(headline.text(), "R");
        headline.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_words_fall_back_to_defaults() {
        let mut headline = Headline::default();
        start_from_config(&mut headline, &config(&["ok", ""])).unwrap();
        assert!(headline.is_running());
        tokio::time::sleep(Duration::from_millis(160)).await;
        assert_eq!(headline.text(), "So");

        start_from_config(&mut headline, &config(&[])).unwrap();
        tokio::time::sleep(Duration::from_millis(80)).await;
        assert_eq!(headline.text(), "S");
        headline.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_forward_tags_updates_and_ends_on_stop() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut headline = Headline::default();
        start_from_config(&mut headline, &config(&["Go"])).unwrap();
        forward(&headline, 7, tx);

        match rx.recv().await {
            Some(AppEvent::Headline { generation, text }) => {
                assert_eq!(generation, 7);
                assert_eq!(text, "G");
            }
            other => panic!("unexpected event: {:?}", other),
        }

        headline.stop();
        // The forwarder drops its sender once the driver is gone
        while let Some(event) = rx.recv().await {
            assert!(matches!(event, AppEvent::Headline { generation: 7, .. }));
        }
    }
}
