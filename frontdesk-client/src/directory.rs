//! Room directory snapshot
//!
//! The client never mutates rooms locally; it holds a wholesale
//! snapshot of the backend's room list, replaced on every refresh.

use crate::{Api, ClientResult};
use chrono::{DateTime, Utc};
use shared::models::{Room, RoomStatus};
use std::collections::BTreeMap;

/// Occupancy counters for the status bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectoryStats {
    pub total: usize,
    pub available: usize,
    pub occupied: usize,
    pub cleaning: usize,
    pub maintenance: usize,
}

/// Read-only cached copy of the room list, one per refresh cycle
#[derive(Debug, Clone, Default)]
pub struct RoomDirectory {
    rooms: Vec<Room>,
    refreshed_at: Option<DateTime<Utc>>,
}

impl RoomDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a directory from an already-fetched room list
    pub fn from_rooms(rooms: Vec<Room>) -> Self {
        Self {
            rooms,
            refreshed_at: Some(Utc::now()),
        }
    }

    /// Replace the snapshot with a fresh room list from the backend
    pub async fn refresh<A: Api>(&mut self, api: &A) -> ClientResult<()> {
        let rooms = api.list_rooms().await?;
        tracing::debug!(count = rooms.len(), "room directory refreshed");
        self.rooms = rooms;
        self.refreshed_at = Some(Utc::now());
        Ok(())
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, id: i64) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    pub fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.refreshed_at
    }

    /// Occupancy counters across the snapshot
    pub fn stats(&self) -> DirectoryStats {
        let mut stats = DirectoryStats {
            total: self.rooms.len(),
            ..Default::default()
        };
        for room in &self.rooms {
            match room.status {
                RoomStatus::Available => stats.available += 1,
                RoomStatus::Occupied => stats.occupied += 1,
                RoomStatus::Cleaning => stats.cleaning += 1,
                RoomStatus::Maintenance => stats.maintenance += 1,
            }
        }
        stats
    }

    /// Rooms grouped by floor, keyed by the leading character of the
    /// room number ("203" -> floor "2"). Rooms with an empty number
    /// land under "?".
    pub fn by_floor(&self) -> BTreeMap<String, Vec<&Room>> {
        let mut floors: BTreeMap<String, Vec<&Room>> = BTreeMap::new();
        for room in &self.rooms {
            let floor = room
                .number
                .chars()
                .next()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "?".to_string());
            floors.entry(floor).or_default().push(room);
        }
        floors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::RoomType;

    fn room(id: i64, number: &str, status: RoomStatus) -> Room {
        Room {
            id,
            number: number.to_string(),
            room_type: RoomType::Double,
            nightly_price: 100.0,
            status,
        }
    }

    #[test]
    fn test_stats_counts_by_status() {
        let dir = RoomDirectory::from_rooms(vec![
            room(1, "101", RoomStatus::Available),
            room(2, "102", RoomStatus::Available),
            room(3, "201", RoomStatus::Occupied),
            room(4, "202", RoomStatus::Cleaning),
            room(5, "301", RoomStatus::Maintenance),
        ]);

        let stats = dir.stats();
        assert_eq!(stats.total, 5);
        assert_eq!(stats.available, 2);
        assert_eq!(stats.occupied, 1);
        assert_eq!(stats.cleaning, 1);
        assert_eq!(stats.maintenance, 1);
    }

    #[test]
    fn test_by_floor_groups_on_leading_digit() {
        let dir = RoomDirectory::from_rooms(vec![
            room(1, "101", RoomStatus::Available),
            room(2, "203", RoomStatus::Available),
            room(3, "102", RoomStatus::Occupied),
        ]);

        let floors = dir.by_floor();
        assert_eq!(floors.len(), 2);
        assert_eq!(floors["1"].len(), 2);
        assert_eq!(floors["2"].len(), 1);
        assert_eq!(floors["2"][0].number, "203");
    }

    #[test]
    fn test_room_lookup() {
        let dir = RoomDirectory::from_rooms(vec![room(7, "203", RoomStatus::Available)]);
        assert_eq!(dir.room(7).unwrap().number, "203");
        assert!(dir.room(8).is_none());
    }
}
