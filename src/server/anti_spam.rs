use std::time::{Instant, Duration};
use log::warn;

use crate::config::anti_spam::{MAX_RESPONSES_PER_SECOND, MAX_REQUESTS_PER_SECOND, BAN_DURATION_SECONDS};

/// Tracks anti-spam state for a single player socket.
///
/// Only direct replies (errors, pongs) count as responses; game notifications pushed by the
/// mechanics do not.
pub struct AntiSpamState {
    // Last error code sent (for suppression)
    last_error_code: Option<String>,
    // Timestamp of last reset (for per-second counters)
    last_tick: Instant,
    responses_this_tick: u32,
    requests_this_tick: u32,
    banned_until: Option<Instant>,
}

impl AntiSpamState {
    pub fn new() -> Self {
        Self {
            last_error_code: None,
            last_tick: Instant::now(),
            responses_this_tick: 0,
            requests_this_tick: 0,
            banned_until: None,
        }
    }

    /// Call at the start of every incoming request (message).
    /// Returns true if the socket is currently banned.
    pub fn record_request(&mut self, login: &str) -> bool {
        self.tick();
        self.requests_this_tick += 1;
        if self.requests_this_tick > MAX_REQUESTS_PER_SECOND {
            self.ban(login, "Too many requests per second");
            return true;
        }
        self.is_banned()
    }

    /// Call before every direct reply (including errors).
    /// Returns true if the socket is currently banned.
    pub fn record_response(&mut self, login: &str) -> bool {
        self.tick();
        self.responses_this_tick += 1;
        if self.responses_this_tick > MAX_RESPONSES_PER_SECOND {
            self.ban(login, "Too many responses per second");
            return true;
        }
        self.is_banned()
    }

    /// Call when sending an error. Returns true if the error should be sent (not suppressed).
    pub fn should_send_error(&mut self, error_code: &str, login: &str) -> bool {
        if self.last_error_code.as_deref() == Some(error_code) {
            warn!("[AntiSpam] Suppressed duplicate error '{}' for login={}", error_code, login);
            return false;
        }
        self.last_error_code = Some(error_code.to_string());
        true
    }

    /// Call when a valid action is performed (state-changing, not error).
    pub fn reset_on_valid_action(&mut self) {
        self.last_error_code = None;
    }

    pub fn is_banned(&self) -> bool {
        self.banned_until.is_some_and(|until| Instant::now() < until)
    }

    /// Returns the remaining ban duration in seconds, or 0 if not banned.
    pub fn ban_remaining_secs(&self) -> u64 {
        self.banned_until
            .map(|until| until.saturating_duration_since(Instant::now()).as_secs())
            .unwrap_or(0)
    }

    fn ban(&mut self, login: &str, reason: &str) {
        let until = Instant::now() + Duration::from_secs(BAN_DURATION_SECONDS);
        self.banned_until = Some(until);
        warn!("[AntiSpam] Banned login={} for {}s, reason: {}", login, BAN_DURATION_SECONDS, reason);
    }

    /// Reset per-second counters if a new second has started.
    fn tick(&mut self) {
        let now = Instant::now();
        if now.duration_since(self.last_tick) >= Duration::from_secs(1) {
            self.last_tick = now;
            self.responses_this_tick = 0;
            self.requests_this_tick = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_flood_bans() {
        let mut state = AntiSpamState::new();
        for _ in 0..MAX_REQUESTS_PER_SECOND {
            assert!(!state.record_request("a"));
        }
        assert!(state.record_request("a"));
        assert!(state.is_banned());
        assert!(state.ban_remaining_secs() > 0);
    }

    #[test]
    fn test_duplicate_errors_are_suppressed() {
        let mut state = AntiSpamState::new();
        assert!(state.should_send_error("INVALID_MESSAGE", "a"));
        assert!(!state.should_send_error("INVALID_MESSAGE", "a"));
        assert!(state.should_send_error("ALREADY_SEARCHING", "a"));
        state.reset_on_valid_action();
        assert!(state.should_send_error("ALREADY_SEARCHING", "a"));
    }
}
