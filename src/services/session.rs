//! Per-guest conversation memory.
//!
//! A [`ChatSession`] is owned by whoever drives the conversation and is passed
//! into each assistant call. History is capped and the session expires after
//! a period of inactivity.

use crate::domain::RoomNumber;
use crate::models::chat::ChatMessage;
use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone)]
pub struct ChatSession {
    room: RoomNumber,
    history: Vec<ChatMessage>,
    max_messages: usize,
    idle_ttl: Duration,
    last_activity: DateTime<Utc>,
}

impl ChatSession {
    /// `max_messages` counts user and assistant turns together; zero keeps no
    /// history at all.
    #[must_use]
    pub fn new(room: RoomNumber, max_messages: usize, idle_ttl: Duration) -> Self {
        Self::started_at(room, max_messages, idle_ttl, Utc::now())
    }

    #[must_use]
    pub const fn started_at(
        room: RoomNumber,
        max_messages: usize,
        idle_ttl: Duration,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            room,
            history: Vec::new(),
            max_messages,
            idle_ttl,
            last_activity: now,
        }
    }

    #[must_use]
    pub const fn room(&self) -> &RoomNumber {
        &self.room
    }

    #[must_use]
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    #[must_use]
    pub const fn last_activity(&self) -> DateTime<Utc> {
        self.last_activity
    }

    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now - self.last_activity > self.idle_ttl
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Appends one question/answer pair, dropping the oldest pairs until the
    /// history fits the cap. History always starts with a user message.
    pub fn record_exchange_at(&mut self, user: &str, reply: &str, now: DateTime<Utc>) {
        self.history.push(ChatMessage::user(user));
        self.history.push(ChatMessage::assistant(reply));

        if self.history.len() > self.max_messages {
            let excess = self.history.len() - self.max_messages;
            let pairs = excess.div_ceil(2) * 2;
            self.history.drain(..pairs.min(self.history.len()));
        }

        self.last_activity = now;
    }

    pub fn record_exchange(&mut self, user: &str, reply: &str) {
        self.record_exchange_at(user, reply, Utc::now());
    }

    /// Drops all history and restarts the idle clock.
    pub fn reset_at(&mut self, now: DateTime<Utc>) {
        self.history.clear();
        self.last_activity = now;
    }

    pub fn reset(&mut self) {
        self.reset_at(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::chat::ChatRole;

    fn session(max: usize) -> (ChatSession, DateTime<Utc>) {
        let start = Utc::now();
        (
            ChatSession::started_at(RoomNumber::new("111"), max, Duration::minutes(30), start),
            start,
        )
    }

    #[test]
    fn history_is_capped_oldest_first() {
        let (mut s, start) = session(4);
        s.record_exchange_at("q1", "a1", start);
        s.record_exchange_at("q2", "a2", start);
        s.record_exchange_at("q3", "a3", start);

        let contents: Vec<&str> = s.history().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["q2", "a2", "q3", "a3"]);
        assert_eq!(s.history()[0].role, ChatRole::User);
    }

    #[test]
    fn odd_cap_trims_whole_exchanges() {
        let (mut s, start) = session(3);
        s.record_exchange_at("q1", "a1", start);
        s.record_exchange_at("q2", "a2", start);

        let roles: Vec<ChatRole> = s.history().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![ChatRole::User, ChatRole::Assistant]);
        assert_eq!(s.history()[0].content, "q2");

        let (mut s, start) = session(1);
        s.record_exchange_at("q1", "a1", start);
        assert!(s.history().is_empty());
    }

    #[test]
    fn zero_cap_keeps_nothing() {
        let (mut s, start) = session(0);
        s.record_exchange_at("q", "a", start);
        assert!(s.history().is_empty());
    }

    #[test]
    fn expires_after_idle_ttl() {
        let (mut s, start) = session(10);
        assert!(!s.is_expired_at(start + Duration::minutes(30)));
        assert!(s.is_expired_at(start + Duration::minutes(31)));

        s.record_exchange_at("q", "a", start + Duration::minutes(20));
        assert!(!s.is_expired_at(start + Duration::minutes(45)));
    }

    #[test]
    fn reset_clears_history() {
        let (mut s, start) = session(10);
        s.record_exchange_at("q", "a", start);
        s.reset_at(start + Duration::hours(2));
        assert!(s.history().is_empty());
        assert_eq!(s.last_activity(), start + Duration::hours(2));
    }
}
