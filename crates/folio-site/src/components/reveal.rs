//! Reveal-on-scroll hook.

use std::time::Duration;

use dioxus::prelude::*;

use crate::page::{disconnect_observer, observer_script, ObserverOptions};
use crate::state::{RevealLatch, VisibilityReport};

/// Time the DOM gets to mount the element before the observer looks for it.
const MOUNT_SETTLE: Duration = Duration::from_millis(50);

/// When an element counts as seen, and how long its entrance takes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub observer: ObserverOptions,
    pub duration_ms: u32,
}

impl RevealOptions {
    /// Browser frame bodies: any overlap with the viewport shrunk by 100px.
    pub const FRAME: Self = Self {
        observer: ObserverOptions {
            threshold: 0.0,
            root_margin_px: -100,
        },
        duration_ms: 500,
    };

    /// Section contents: a tenth of the section visible.
    pub const SECTION: Self = Self {
        observer: ObserverOptions {
            threshold: 0.1,
            root_margin_px: 0,
        },
        duration_ms: 800,
    };
}

/// Duration of each staggered card entrance.
pub const CARD_DURATION_MS: u32 = 500;

/// Delay added per card index.
pub const STAGGER_MS: u32 = 100;

/// Returns `true` once the element with `element_id` has been seen.
///
/// The observer is installed after mount, and disconnected when it fires or
/// when the calling component unmounts, whichever comes first.
pub fn use_reveal(element_id: String, options: RevealOptions) -> Signal<bool> {
    let mut revealed = use_signal(|| false);
    let element_id = use_hook(|| element_id);

    let task_id = element_id.clone();
    use_future(move || {
        let id = task_id.clone();
        async move {
            tokio::time::sleep(MOUNT_SETTLE).await;

            let mut latch = RevealLatch::new(options.observer.threshold);
            let mut reports = document::eval(&observer_script(&id, options.observer));
            loop {
                match reports.recv::<VisibilityReport>().await {
                    Ok(report) => {
                        if latch.observe(report) {
                            tracing::debug!(element = %id, ratio = report.ratio, "Revealed");
                            revealed.set(true);
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::debug!(element = %id, error = ?e, "Visibility channel closed");
                        break;
                    }
                }
            }
            disconnect_observer(&id);
        }
    });

    use_drop(move || disconnect_observer(&element_id));

    revealed
}

/// CSS classes for an element driven by [`use_reveal`].
pub fn reveal_class(revealed: bool) -> &'static str {
    if revealed {
        "reveal revealed"
    } else {
        "reveal"
    }
}

/// Inline transition timing for a revealed element.
pub fn transition_style(duration_ms: u32, delay_ms: u32) -> String {
    format!("transition-duration: {duration_ms}ms; transition-delay: {delay_ms}ms;")
}

/// Transition timing for the `index`-th card of a staggered grid.
pub fn stagger_style(index: usize) -> String {
    transition_style(CARD_DURATION_MS, stagger_delay_ms(index))
}

pub fn stagger_delay_ms(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(STAGGER_MS)
}
