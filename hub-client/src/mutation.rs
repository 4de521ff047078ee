//! Two-phase state of a server-confirmed mutation.

use crate::error::ClientError;

#[derive(Debug, Clone, PartialEq)]
pub enum Mutation<T> {
    Idle,
    Pending,
    Confirmed(T),
    Rejected(String),
}

impl<T> Default for Mutation<T> {
    fn default() -> Self {
        Mutation::Idle
    }
}

impl<T> Mutation<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Mutation::Pending)
    }

    /// Moves to `Pending`. Returns `false`, leaving the state alone, when a
    /// request is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = Mutation::Pending;
        true
    }

    pub fn settle(&mut self, outcome: Result<T, &ClientError>) {
        *self = match outcome {
            Ok(value) => Mutation::Confirmed(value),
            Err(err) => Mutation::Rejected(err.to_string()),
        };
    }

    pub fn confirmed(&self) -> Option<&T> {
        match self {
            Mutation::Confirmed(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Mutation::Rejected(message) => Some(message),
            _ => None,
        }
    }
}
