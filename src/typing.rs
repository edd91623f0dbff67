use std::time::Duration;

pub const DEFAULT_TYPING_SPEED: Duration = Duration::from_millis(100);

/// Text shown by a typing element at a given offset from the start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingFrame {
    pub at: Duration,
    pub text: String,
}

/// Frames for typing `text` one character per `speed`.
///
/// The first frame clears the element; each following frame adds one
/// character, so a text of `n` characters yields `n + 1` frames.
pub fn typewriter_frames(text: &str, speed: Duration) -> Vec<TypingFrame> {
    let mut frames = Vec::with_capacity(text.chars().count() + 1);
    frames.push(TypingFrame {
        at: Duration::ZERO,
        text: String::new(),
    });

    let mut typed = String::with_capacity(text.len());
    for (index, ch) in text.chars().enumerate() {
        typed.push(ch);
        frames.push(TypingFrame {
            at: speed * index as u32,
            text: typed.clone(),
        });
    }
    frames
}
