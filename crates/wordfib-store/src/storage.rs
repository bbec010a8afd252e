//! The room index.

use std::collections::BTreeMap;

use wordfib_model::RoomId;

use crate::Room;

/// Every room known to the process, keyed by room id.
///
/// A `BTreeMap` rather than a `HashMap`: scans visit rooms in ascending id
/// order, so reverse lookups that could match more than one room always
/// return the same one (the lowest id).
#[derive(Debug, Default)]
pub struct Storage {
    pub rooms: BTreeMap<RoomId, Room>,
}

impl Storage {
    /// Creates an empty storage.
    pub fn new() -> Self {
        Self::default()
    }
}
