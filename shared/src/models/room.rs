//! Room Model

use serde::{Deserialize, Serialize};

/// Room status
///
/// States are owned by the backend; the client only requests the
/// transitions listed in [`RoomStatus::can_request`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomStatus {
    #[serde(rename = "disponible")]
    Available,
    #[serde(rename = "ocupada")]
    Occupied,
    #[serde(rename = "limpieza")]
    Cleaning,
    #[serde(rename = "mantenimiento")]
    Maintenance,
}

impl RoomStatus {
    /// Wire value for this status (`estado` field)
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Available => "disponible",
            RoomStatus::Occupied => "ocupada",
            RoomStatus::Cleaning => "limpieza",
            RoomStatus::Maintenance => "mantenimiento",
        }
    }

    /// Whether the client may request a transition to `target`.
    ///
    /// Legal client-requested edges:
    /// - available -> occupied (check-in submitted and paid)
    /// - occupied -> cleaning (check-out)
    /// - cleaning -> available (staff marks clean)
    /// - maintenance -> available (staff marks resolved)
    pub fn can_request(&self, target: RoomStatus) -> bool {
        matches!(
            (self, target),
            (RoomStatus::Available, RoomStatus::Occupied)
                | (RoomStatus::Occupied, RoomStatus::Cleaning)
                | (RoomStatus::Cleaning, RoomStatus::Available)
                | (RoomStatus::Maintenance, RoomStatus::Available)
        )
    }
}

/// Room type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomType {
    #[serde(rename = "individual")]
    Individual,
    #[serde(rename = "doble")]
    Double,
    #[serde(rename = "suite")]
    Suite,
    #[serde(rename = "familiar")]
    Family,
}

/// Room entity
///
/// Read-only on the client: one cached copy per directory refresh
/// cycle. The backend carries more columns (amenities, capacity,
/// notes); anything not listed here is ignored on deserialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    /// Display number, also used for floor grouping (e.g. "203" -> floor 2)
    #[serde(rename = "numero")]
    pub number: String,
    #[serde(rename = "tipo")]
    pub room_type: RoomType,
    /// Nightly price in currency units, 2 decimal places
    #[serde(rename = "precio_noche")]
    pub nightly_price: f64,
    #[serde(rename = "estado")]
    pub status: RoomStatus,
}

/// Status change payload (`PUT habitaciones/{id}/estado`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomStatusChange {
    #[serde(rename = "estado")]
    pub status: RoomStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_wire_names() {
        let json = r#"{
            "id": 7,
            "numero": "203",
            "tipo": "doble",
            "precio_noche": 100.0,
            "estado": "disponible",
            "tiene_balcon": true
        }"#;

        let room: Room = serde_json::from_str(json).unwrap();
        assert_eq!(room.id, 7);
        assert_eq!(room.number, "203");
        assert_eq!(room.room_type, RoomType::Double);
        assert_eq!(room.status, RoomStatus::Available);
    }

    #[test]
    fn test_status_change_serializes_spanish_value() {
        let change = RoomStatusChange {
            status: RoomStatus::Occupied,
        };
        let json = serde_json::to_string(&change).unwrap();
        assert_eq!(json, r#"{"estado":"ocupada"}"#);
    }

    #[test]
    fn test_client_requestable_transitions() {
        assert!(RoomStatus::Available.can_request(RoomStatus::Occupied));
        assert!(RoomStatus::Occupied.can_request(RoomStatus::Cleaning));
        assert!(RoomStatus::Cleaning.can_request(RoomStatus::Available));
        assert!(RoomStatus::Maintenance.can_request(RoomStatus::Available));

        // No other edge is client-initiated
        assert!(!RoomStatus::Available.can_request(RoomStatus::Cleaning));
        assert!(!RoomStatus::Occupied.can_request(RoomStatus::Available));
        assert!(!RoomStatus::Cleaning.can_request(RoomStatus::Occupied));
        assert!(!RoomStatus::Available.can_request(RoomStatus::Available));
    }
}
