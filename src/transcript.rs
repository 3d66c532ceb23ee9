/// Tag distinguishing who a transcript entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// One rendered chat message. Entries are never mutated once appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub text: String,
    pub sender: Sender,
}

/// Ordered, append-only list of the messages shown to the user.
/// Lives for the whole process session.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, text: String, sender: Sender) {
        self.entries.push(TranscriptEntry { text, sender });
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_preserves_order() {
        let mut transcript = Transcript::new();
        transcript.append("hello".to_string(), Sender::User);
        transcript.append("hi there".to_string(), Sender::Bot);
        transcript.append("how are you?".to_string(), Sender::User);

        let entries = transcript.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].text, "hello");
        assert_eq!(entries[0].sender, Sender::User);
        assert_eq!(entries[1].sender, Sender::Bot);
        assert_eq!(entries[2].text, "how are you?");
    }

    #[test]
    fn starts_empty() {
        let transcript = Transcript::new();
        assert!(transcript.is_empty());
        assert_eq!(transcript.len(), 0);
    }
}
