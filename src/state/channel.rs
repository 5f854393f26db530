//! Channel membership.

use chrono::{DateTime, Utc};

use super::uid::ClientId;

/// A named broadcast group.
///
/// The owner is fixed at creation. Members keep join order and appear at most
/// once. A channel survives with zero members until shutdown.
#[derive(Debug, Clone)]
pub struct Channel {
    owner: ClientId,
    members: Vec<ClientId>,
    pub created_at: DateTime<Utc>,
}

impl Channel {
    /// A new, empty channel owned by `owner`.
    pub fn new(owner: ClientId) -> Self {
        Self {
            owner,
            members: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn owner(&self) -> ClientId {
        self.owner
    }

    pub fn members(&self) -> &[ClientId] {
        &self.members
    }

    pub fn contains(&self, id: ClientId) -> bool {
        self.members.contains(&id)
    }

    /// Add a member; returns false if already present.
    pub fn insert(&mut self, id: ClientId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.members.push(id);
        true
    }

    /// Remove a member; returns false if absent.
    pub fn remove(&mut self, id: ClientId) -> bool {
        match self.members.iter().position(|m| *m == id) {
            Some(pos) => {
                self.members.remove(pos);
                true
            }
            None => false,
        }
    }
}
