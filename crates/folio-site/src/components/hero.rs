//! Hero section: name, typewriter tagline, profile picture and floating dots.

use dioxus::prelude::*;
use rand::Rng;

use crate::content::{SectionId, DISPLAY_NAME, HERO_PHRASES, PROFILE_IMAGE};
use crate::state::{animate, Typewriter};

/// Number of decorative dots drifting behind the hero text.
const DOT_COUNT: usize = 10;

/// A decorative dot, placed once per mount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingDot {
    /// Horizontal position, percent of the section width.
    pub x: f64,
    /// Vertical position, percent of the section height.
    pub y: f64,
    /// Resting scale, 0.5 to 1.0.
    pub scale: f64,
    /// Length of one bob cycle in seconds, 3 to 5.
    pub duration_s: f64,
}

impl FloatingDot {
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            x: rng.random_range(0.0..100.0),
            y: rng.random_range(0.0..100.0),
            scale: rng.random_range(0.5..1.0),
            duration_s: rng.random_range(3.0..5.0),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; --dot-scale: {:.2}; animation-duration: {:.2}s;",
            self.x, self.y, self.scale, self.duration_s
        )
    }
}

fn floating_dots() -> Vec<FloatingDot> {
    let mut rng = rand::rng();
    (0..DOT_COUNT).map(|_| FloatingDot::random(&mut rng)).collect()
}

/// Landing section with the animated tagline.
#[component]
pub fn Hero() -> Element {
    let mut tagline = use_signal(|| Typewriter::new(HERO_PHRASES).ok());
    let dots = use_hook(floating_dots);

    // Cancelled together with the component
    use_future(move || async move {
        let Some(start) = tagline.peek().clone() else {
            tracing::warn!("Hero tagline has no phrases, typewriter disabled");
            return;
        };
        animate(start, |frame| tagline.set(Some(frame.clone()))).await;
    });

    let text = tagline
        .read()
        .as_ref()
        .map(Typewriter::visible_text)
        .unwrap_or_default();

    rsx! {
        section {
            id: "{SectionId::Hero.anchor()}",
            class: "hero-section",

            div {
                class: "floating-elements",
                for (i, dot) in dots.iter().enumerate() {
                    div {
                        key: "{i}",
                        class: "floating-element",
                        style: "{dot.style()}",
                    }
                }
            }

            div {
                class: "hero-content",

                div {
                    class: "hero-text",
                    h1 {
                        class: "hero-name enter-rise",
                        "{DISPLAY_NAME}"
                    }
                    div {
                        class: "hero-tagline enter-rise enter-delayed",
                        span { class: "typewriter-text", "{text}" }
                        span { class: "typewriter-cursor" }
                    }
                }

                img {
                    class: "profile-image enter-zoom",
                    src: PROFILE_IMAGE,
                    alt: "Profile",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floating_dots_in_range() {
        let dots = floating_dots();
        assert_eq!(dots.len(), DOT_COUNT);
        for dot in dots {
            assert!((0.0..100.0).contains(&dot.x));
            assert!((0.0..100.0).contains(&dot.y));
            assert!((0.5..1.0).contains(&dot.scale));
            assert!((3.0..5.0).contains(&dot.duration_s));
        }
    }

    #[test]
    fn test_dot_style() {
        let dot = FloatingDot {
            x: 12.5,
            y: 40.0,
            scale: 0.75,
            duration_s: 3.5,
        };
        assert_eq!(
            dot.style(),
            "left: 12.50%; top: 40.00%; --dot-scale: 0.75; animation-duration: 3.50s;"
        );
    }

    #[test]
    fn test_dots_pulse_in_scale_while_bobbing() {
        let css = include_str!("../../assets/styles.css");
        let keyframes = &css[css.find("@keyframes float").unwrap()..];
        let midpoint = &keyframes[keyframes.find("50%").unwrap()..];
        let midpoint = &midpoint[..midpoint.find('}').unwrap()];
        assert!(midpoint.contains("translateY(-10%)"));
        assert!(midpoint.contains("scale(calc(var(--dot-scale, 1) + 0.2))"));
    }
}
