use std::collections::VecDeque;

use super::types::UserProfile;

/// Players waiting for an opponent, longest-waiting first.
#[derive(Debug, Default)]
pub struct MatchmakingQueue {
    waiting: VecDeque<UserProfile>,
}

impl MatchmakingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, user: UserProfile) {
        self.waiting.push_back(user);
    }

    /// Take the two longest-waiting players, in arrival order.
    pub fn pop_pair(&mut self) -> Option<(UserProfile, UserProfile)> {
        if self.waiting.len() < 2 {
            return None;
        }
        let first = self.waiting.pop_front()?;
        let second = self.waiting.pop_front()?;
        Some((first, second))
    }

    /// Remove `user` if waiting. Returns whether it was found.
    pub fn remove(&mut self, user: &UserProfile) -> bool {
        match self.waiting.iter().position(|u| u == user) {
            Some(idx) => {
                self.waiting.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, user: &UserProfile) -> bool {
        self.waiting.contains(user)
    }

    pub fn len(&self) -> usize {
        self.waiting.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waiting.is_empty()
    }

    pub fn snapshot(&self) -> Vec<UserProfile> {
        self.waiting.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_in_fifo_order() {
        let mut queue = MatchmakingQueue::new();
        for login in ["a", "b", "c"] {
            queue.push(UserProfile::new(login));
        }
        let (first, second) = queue.pop_pair().unwrap();
        assert_eq!((first.login.as_str(), second.login.as_str()), ("a", "b"));
        assert!(queue.pop_pair().is_none());
        assert_eq!(queue.snapshot(), vec![UserProfile::new("c")]);
    }

    #[test]
    fn test_remove() {
        let mut queue = MatchmakingQueue::new();
        queue.push(UserProfile::new("a"));
        queue.push(UserProfile::new("b"));
        assert!(queue.remove(&UserProfile::new("a")));
        assert!(!queue.remove(&UserProfile::new("a")));
        assert!(!queue.contains(&UserProfile::new("a")));
        assert_eq!(queue.len(), 1);
    }
}
