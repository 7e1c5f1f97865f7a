//! Type / hold / delete / advance cycler behind the hero tagline.

use std::time::Duration;

use crate::error::{Result, SiteError};

/// Delays between cycler steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    /// Delay before each typed character.
    pub type_delay: Duration,
    /// Delay before each deleted character, and before advancing.
    pub delete_delay: Duration,
    /// Pause on a fully typed phrase before deleting starts.
    pub hold: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(150),
            delete_delay: Duration::from_millis(50),
            hold: Duration::from_millis(1500),
        }
    }
}

/// Snapshot of the cycler position: `(phrase index, character count, deleting)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterState {
    pub index: usize,
    pub count: usize,
    pub deleting: bool,
}

/// Cycles through a fixed, non-empty phrase list forever.
#[derive(Debug, Clone, PartialEq)]
pub struct Typewriter {
    phrases: &'static [&'static str],
    timing: TypewriterTiming,
    state: TypewriterState,
}

impl Typewriter {
    /// Creates a cycler positioned at the start of the first phrase.
    pub fn new(phrases: &'static [&'static str]) -> Result<Self> {
        Self::with_timing(phrases, TypewriterTiming::default())
    }

    /// Creates a cycler with custom delays.
    pub fn with_timing(phrases: &'static [&'static str], timing: TypewriterTiming) -> Result<Self> {
        if phrases.is_empty() {
            return Err(SiteError::EmptyPhraseList);
        }
        Ok(Self {
            phrases,
            timing,
            state: TypewriterState {
                index: 0,
                count: 0,
                deleting: false,
            },
        })
    }

    pub fn state(&self) -> TypewriterState {
        self.state
    }

    /// The phrase currently being typed or deleted.
    pub fn phrase(&self) -> &'static str {
        self.phrases[self.state.index]
    }

    fn phrase_len(&self) -> usize {
        self.phrase().chars().count()
    }

    /// The visible prefix, `phrase[0..count]` in characters.
    pub fn visible_text(&self) -> &'static str {
        let phrase = self.phrase();
        match phrase.char_indices().nth(self.state.count) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    /// How long to wait before the next [`advance`](Self::advance).
    ///
    /// Never zero, so an empty phrase still moves on one timer tick at a time.
    pub fn delay(&self) -> Duration {
        let TypewriterState { count, deleting, .. } = self.state;
        if deleting {
            self.timing.delete_delay
        } else if count < self.phrase_len() {
            self.timing.type_delay
        } else {
            self.timing.hold
        }
    }

    /// Applies one transition of the cycle.
    pub fn advance(&mut self) {
        let len = self.phrase_len();
        let state = &mut self.state;
        match (state.deleting, state.count) {
            (false, count) if count < len => state.count += 1,
            (false, _) => state.deleting = true,
            (true, count) if count > 0 => state.count -= 1,
            (true, _) => {
                state.deleting = false;
                state.index = (state.index + 1) % self.phrases.len();
            }
        }
    }
}

/// Runs the cycler until the returned future is dropped.
///
/// Every step waits on the timer for [`Typewriter::delay`] and then hands the
/// new position to `on_frame`.
pub async fn animate(mut typewriter: Typewriter, mut on_frame: impl FnMut(&Typewriter)) {
    loop {
        tokio::time::sleep(typewriter.delay()).await;
        typewriter.advance();
        on_frame(&typewriter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(index: usize, count: usize, deleting: bool) -> TypewriterState {
        TypewriterState {
            index,
            count,
            deleting,
        }
    }

    /// Advances until the cycler sits at the start of the next phrase.
    fn run_one_phrase(tw: &mut Typewriter) -> Vec<TypewriterState> {
        let start = tw.state().index;
        let mut seen = Vec::new();
        loop {
            tw.advance();
            seen.push(tw.state());
            if tw.state().index != start {
                return seen;
            }
        }
    }

    #[test]
    fn test_starts_at_first_phrase() {
        let tw = Typewriter::new(&["Hi", "Bye"]).unwrap();
        assert_eq!(tw.state(), state(0, 0, false));
        assert_eq!(tw.visible_text(), "");
    }

    #[test]
    fn test_empty_phrase_list_is_rejected() {
        assert!(matches!(
            Typewriter::new(&[]),
            Err(SiteError::EmptyPhraseList)
        ));
    }

    #[test]
    fn test_hi_bye_full_cycle() {
        let mut tw = Typewriter::new(&["Hi", "Bye"]).unwrap();
        let seen = run_one_phrase(&mut tw);
        assert_eq!(
            seen,
            vec![
                state(0, 1, false),
                state(0, 2, false),
                state(0, 2, true),
                state(0, 1, true),
                state(0, 0, true),
                state(1, 0, false),
            ]
        );
        assert_eq!(tw.phrase(), "Bye");
    }

    #[test]
    fn test_visible_text_tracks_count() {
        let mut tw = Typewriter::new(&["Hi"]).unwrap();
        tw.advance();
        assert_eq!(tw.visible_text(), "H");
        tw.advance();
        assert_eq!(tw.visible_text(), "Hi");
        tw.advance(); // start deleting
        tw.advance();
        assert_eq!(tw.visible_text(), "H");
    }

    #[test]
    fn test_visible_text_counts_characters() {
        let mut tw = Typewriter::new(&["héllo"]).unwrap();
        tw.advance();
        tw.advance();
        assert_eq!(tw.visible_text(), "hé");
    }

    #[test]
    fn test_cycles_through_all_phrases_and_wraps() {
        let phrases: &'static [&'static str] = &["a", "bb", "ccc"];
        let mut tw = Typewriter::new(phrases).unwrap();
        let mut order = Vec::new();
        for _ in 0..7 {
            run_one_phrase(&mut tw);
            order.push(tw.state().index);
        }
        assert_eq!(order, vec![1, 2, 0, 1, 2, 0, 1]);
    }

    #[test]
    fn test_single_phrase_wraps_to_itself() {
        let mut tw = Typewriter::new(&["Hi"]).unwrap();
        for _ in 0..6 {
            tw.advance();
        }
        assert_eq!(tw.state(), state(0, 0, false));
    }

    #[test]
    fn test_empty_phrase_advances_via_hold_and_delete() {
        let mut tw = Typewriter::new(&["", "x"]).unwrap();
        assert_eq!(tw.delay(), Duration::from_millis(1500));
        tw.advance();
        assert_eq!(tw.state(), state(0, 0, true));
        assert_eq!(tw.delay(), Duration::from_millis(50));
        tw.advance();
        assert_eq!(tw.state(), state(1, 0, false));
    }

    #[test]
    fn test_delays_follow_phase() {
        let mut tw = Typewriter::new(&["Hi"]).unwrap();
        assert_eq!(tw.delay(), Duration::from_millis(150));
        tw.advance();
        tw.advance();
        assert_eq!(tw.delay(), Duration::from_millis(1500));
        tw.advance();
        assert_eq!(tw.delay(), Duration::from_millis(50));
    }

    #[test]
    fn test_delay_is_never_zero() {
        let mut tw = Typewriter::new(&["", "ab", ""]).unwrap();
        for _ in 0..50 {
            assert!(tw.delay() > Duration::ZERO);
            tw.advance();
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_animate_follows_timer_schedule() {
        let tw = Typewriter::new(&["Hi"]).unwrap();
        let mut frames = Vec::new();

        // 150 + 150 + 1500 = 1800ms covers typing and the hold
        let _ = tokio::time::timeout(
            Duration::from_millis(1825),
            animate(tw, |t| frames.push(t.state())),
        )
        .await;

        assert_eq!(
            frames,
            vec![state(0, 1, false), state(0, 2, false), state(0, 2, true)]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_animate_deletes_and_advances_on_schedule() {
        let tw = Typewriter::new(&["Hi"]).unwrap();
        let mut frames = Vec::new();

        // 1800ms to the hold's end, then three 50ms delete steps
        let _ = tokio::time::timeout(
            Duration::from_millis(1955),
            animate(tw, |t| frames.push(t.state())),
        )
        .await;

        assert_eq!(
            frames,
            vec![
                state(0, 1, false),
                state(0, 2, false),
                state(0, 2, true),
                state(0, 1, true),
                state(0, 0, true),
                state(0, 0, false),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_animate_nothing_before_first_delay() {
        let tw = Typewriter::new(&["Hi"]).unwrap();
        let mut frames = Vec::new();
        let _ = tokio::time::timeout(
            Duration::from_millis(100),
            animate(tw, |t| frames.push(t.state())),
        )
        .await;
        assert!(frames.is_empty());
    }
}
