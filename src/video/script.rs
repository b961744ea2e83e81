//! Narration script preparation: turns a free-form narrative into bounded
//! spoken segments.

/// Rendering services limit per-request narration length; narratives are
/// capped here before submission.
pub const MAX_NARRATION_CHARS: usize = 2000;

/// Upper bound for one spoken scene.
pub const MAX_SEGMENT_CHARS: usize = 500;

/// A segmented narration script ready for video generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrationScript {
    /// Spoken segments, one scene each, in narrative order.
    pub segments: Vec<String>,
}

impl NarrationScript {
    /// Builds a script from a narrative text.
    ///
    /// Whitespace is normalized, the narrative is capped at
    /// [`MAX_NARRATION_CHARS`] (with an ellipsis when cut), and the result
    /// is packed into sentence-aligned segments of at most
    /// [`MAX_SEGMENT_CHARS`] characters. Empty input yields an empty
    /// script.
    #[must_use]
    pub fn from_narrative(narrative: &str) -> Self {
        let normalized = normalize_whitespace(narrative);
        let capped = cap_narration(&normalized, MAX_NARRATION_CHARS);
        Self { segments: pack_sentences(&capped, MAX_SEGMENT_CHARS) }
    }

    /// Returns `true` when the script has nothing to speak.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Collapses runs of whitespace (including newlines) into single spaces.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncates `text` to at most `max_chars` characters, appending `...`
/// when anything was cut.
fn cap_narration(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut capped: String = text.chars().take(max_chars).collect();
    capped.push_str("...");
    capped
}

/// Splits `text` on sentence boundaries and greedily packs sentences into
/// segments no longer than `max_chars`. A single over-long sentence
/// becomes its own segment rather than being split mid-word.
fn pack_sentences(text: &str, max_chars: usize) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();

    for sentence in split_sentences(text) {
        if current.is_empty() {
            current = sentence;
        } else if current.chars().count() + 1 + sentence.chars().count() <= max_chars {
            current.push(' ');
            current.push_str(&sentence);
        } else {
            segments.push(current);
            current = sentence;
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Splits text after `.`, `!`, or `?` followed by a space.
fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let chars: Vec<(usize, char)> = text.char_indices().collect();

    for window in chars.windows(2) {
        let (idx, ch) = window[0];
        let (_, next) = window[1];
        if matches!(ch, '.' | '!' | '?') && next == ' ' {
            let sentence = text[start..=idx].trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            start = idx + ch.len_utf8();
        }
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }
    sentences
}
