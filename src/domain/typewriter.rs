//! Typewriter text effect.
//!
//! The hero banner cycles through a fixed word list, revealing one character
//! per tick, pausing for one tick on the full word, then deleting one
//! character per tick before moving on to the next word.
//!
//! The state machine is exposed as the pure [`step`] function so it can be
//! driven without a clock. [`Typewriter`] layers the timing on top: it is
//! polled from the event loop with the current time in milliseconds and
//! performs at most one step per poll, scheduling the next step only after
//! the current one fires.

/// Delay after a tick that leaves the machine typing.
pub const TYPING_DELAY_MS: u64 = 150;

/// Delay after a tick that leaves the machine deleting.
pub const DELETING_DELAY_MS: u64 = 50;

/// Position of the typewriter within its word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypewriterState {
    /// Index of the word currently being typed or deleted
    pub word_index: usize,
    /// Number of characters shown, in `0..=len + 1` of the active word
    pub chars_shown: usize,
    /// True while characters are being removed
    pub deleting: bool,
}

impl TypewriterState {
    /// Delay until the next tick is due from this state.
    pub fn delay_ms(&self) -> u64 {
        if self.deleting {
            DELETING_DELAY_MS
        } else {
            TYPING_DELAY_MS
        }
    }
}

fn word_len(words: &[String], index: usize) -> usize {
    words.get(index).map(|w| w.chars().count()).unwrap_or(0)
}

/// Text visible for `state`: the first `chars_shown` characters of the
/// active word. `len + 1` shows the whole word (the pause tick).
pub fn visible_text(words: &[String], state: TypewriterState) -> String {
    match words.get(state.word_index) {
        Some(word) => word.chars().take(state.chars_shown).collect(),
        None => String::new(),
    }
}

/// Advance the state machine by one tick.
///
/// Typing grows `chars_shown` until it reaches `len + 1`, at which point the
/// machine flips to deleting. Deleting shrinks it to zero, then moves to the
/// next word (wrapping) and flips back to typing. An empty word list leaves
/// the state untouched.
pub fn step(words: &[String], state: TypewriterState) -> (TypewriterState, String) {
    if words.is_empty() {
        return (state, String::new());
    }

    // Guard against a state built for a longer list.
    let word_index = state.word_index % words.len();
    let pause_at = word_len(words, word_index) + 1;
    let mut next = TypewriterState {
        word_index,
        chars_shown: state.chars_shown.min(pause_at),
        deleting: state.deleting,
    };

    if next.deleting {
        next.chars_shown = next.chars_shown.saturating_sub(1);
        if next.chars_shown == 0 {
            next.deleting = false;
            next.word_index = (next.word_index + 1) % words.len();
        }
    } else {
        next.chars_shown += 1;
        if next.chars_shown == pause_at {
            next.deleting = true;
        }
    }

    let text = visible_text(words, next);
    (next, text)
}

/// Number of ticks for one full pass over `words`.
pub fn cycle_len(words: &[String]) -> usize {
    words.iter().map(|w| 2 * (w.chars().count() + 1)).sum()
}

/// Timed typewriter driven by the event loop.
#[derive(Debug, Clone)]
pub struct Typewriter {
    words: Vec<String>,
    state: TypewriterState,
    /// Time (ms) at which the next tick fires; `None` until first polled
    next_due_ms: Option<u64>,
}

impl Typewriter {
    /// Create a typewriter over `words`, starting at the first word.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            state: TypewriterState::default(),
            next_due_ms: None,
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn state(&self) -> TypewriterState {
        self.state
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Currently visible text.
    pub fn visible_text(&self) -> String {
        visible_text(&self.words, self.state)
    }

    /// Restart from the first word with nothing shown.
    pub fn reset(&mut self) {
        self.state = TypewriterState::default();
        self.next_due_ms = None;
    }

    /// Poll the typewriter at `now_ms`.
    ///
    /// The first poll only schedules. Afterwards a tick fires when its due
    /// time has passed, and the next one is scheduled relative to `now_ms`.
    /// Returns `true` if the visible text may have changed.
    pub fn update(&mut self, now_ms: u64) -> bool {
        if self.words.is_empty() {
            return false;
        }

        match self.next_due_ms {
            None => {
                self.next_due_ms = Some(now_ms + self.state.delay_ms());
                false
            }
            Some(due) if now_ms >= due => {
                let (next, _) = step(&self.words, self.state);
                self.state = next;
                self.next_due_ms = Some(now_ms + self.state.delay_ms());
                true
            }
            Some(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_initial_state_shows_nothing() {
        let w = words(&["Rust"]);
        assert_eq!(visible_text(&w, TypewriterState::default()), "");
    }

    #[test]
    fn test_typing_reaches_pause_then_deletes() {
        let w = words(&["AB", "C"]);
        let mut state = TypewriterState::default();
        let mut seen = Vec::new();
        for _ in 0..3 {
            let (next, text) = step(&w, state);
            state = next;
            seen.push(text);
        }
        assert_eq!(seen, vec!["A", "AB", "AB"]);
        assert_eq!(state.chars_shown, 3);
        assert!(state.deleting);
    }

    #[test]
    fn test_deleting_advances_word() {
        let w = words(&["AB", "C"]);
        let state = TypewriterState {
            word_index: 0,
            chars_shown: 1,
            deleting: true,
        };
        let (next, text) = step(&w, state);
        assert_eq!(next.word_index, 1);
        assert_eq!(next.chars_shown, 0);
        assert!(!next.deleting);
        assert_eq!(text, "");
    }

    #[test]
    fn test_word_index_wraps() {
        let w = words(&["AB", "C"]);
        let state = TypewriterState {
            word_index: 1,
            chars_shown: 1,
            deleting: true,
        };
        let (next, _) = step(&w, state);
        assert_eq!(next.word_index, 0);
    }

    #[test]
    fn test_empty_words_is_noop() {
        let w: Vec<String> = Vec::new();
        let state = TypewriterState::default();
        let (next, text) = step(&w, state);
        assert_eq!(next, state);
        assert_eq!(text, "");
    }

    #[test]
    fn test_multibyte_words_slice_by_char() {
        let w = words(&["héllo"]);
        let state = TypewriterState {
            word_index: 0,
            chars_shown: 2,
            deleting: false,
        };
        assert_eq!(visible_text(&w, state), "hé");
    }

    #[test]
    fn test_delay_depends_on_direction() {
        let typing = TypewriterState::default();
        let deleting = TypewriterState {
            deleting: true,
            ..typing
        };
        assert_eq!(typing.delay_ms(), 150);
        assert_eq!(deleting.delay_ms(), 50);
    }

    #[test]
    fn test_update_first_poll_only_schedules() {
        let mut tw = Typewriter::new(["Hi"]);
        assert!(!tw.update(1_000));
        assert_eq!(tw.state(), TypewriterState::default());
        assert!(!tw.update(1_149));
        assert!(tw.update(1_150));
        assert_eq!(tw.visible_text(), "H");
    }

    #[test]
    fn test_update_uses_deleting_delay() {
        let mut tw = Typewriter::new(["A"]);
        tw.update(0);
        assert!(tw.update(150)); // "A"
        assert!(tw.update(300)); // pause, now deleting
        assert!(tw.state().deleting);
        assert!(!tw.update(349));
        assert!(tw.update(350));
        assert_eq!(tw.state().chars_shown, 1);
    }

    #[test]
    fn test_reset_restarts() {
        let mut tw = Typewriter::new(["Hi"]);
        tw.update(0);
        tw.update(150);
        tw.reset();
        assert_eq!(tw.state(), TypewriterState::default());
        assert_eq!(tw.visible_text(), "");
    }

    #[test]
    fn test_cycle_len() {
        assert_eq!(cycle_len(&words(&["AB", "C"])), 10);
        assert_eq!(cycle_len(&[]), 0);
    }
}
