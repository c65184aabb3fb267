//! Bounded log of duel messages shown alongside the table.
use std::collections::VecDeque;

/// How prominently a message should be shown.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    /// Something went against the human side.
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    pub text: String,
    /// Runtime tick the message was produced on.
    pub tick: Option<u64>,
    pub level: MessageLevel,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, tick: Option<u64>, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            tick,
            level,
        }
    }
}

/// Ring buffer that drops the oldest entry once full.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, entry: MessageEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn push_text(&mut self, message: impl Into<String>) {
        self.push(MessageEntry::new(message, None, MessageLevel::Info));
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_entries_fall_off() {
        let mut log = MessageLog::new(2);
        log.push_text("one");
        log.push_text("two");
        log.push(MessageEntry::new("three", Some(9), MessageLevel::Warning));

        let texts: Vec<&str> = log.iter().map(|entry| entry.text.as_str()).collect();
        assert_eq!(texts, ["two", "three"]);

        let newest = log.recent(1).next().unwrap();
        assert_eq!(newest.tick, Some(9));
        assert_eq!(newest.level, MessageLevel::Warning);
    }

    #[test]
    fn zero_capacity_keeps_one_entry() {
        let mut log = MessageLog::new(0);
        log.push_text("a");
        log.push_text("b");
        assert_eq!(log.capacity(), 1);
        assert_eq!(log.len(), 1);

        log.clear();
        assert!(log.is_empty());
    }
}
