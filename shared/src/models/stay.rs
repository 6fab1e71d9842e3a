//! Stay (hospedaje) Model

use super::PaymentMethod;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Stay status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StayStatus {
    #[serde(rename = "activo")]
    Active,
    #[serde(rename = "finalizado")]
    Closed,
}

/// Stay record as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stay {
    pub id: i64,
    #[serde(rename = "habitacion_id")]
    pub room_id: i64,
    #[serde(rename = "huesped_nombre")]
    pub guest_name: String,
    #[serde(rename = "huesped_email")]
    pub guest_email: Option<String>,
    #[serde(rename = "huesped_telefono")]
    pub guest_phone: Option<String>,
    /// Check-in timestamp, set by the backend at creation
    #[serde(rename = "fecha_checkin")]
    pub checkin: DateTime<Utc>,
    #[serde(rename = "fecha_checkout_previsto")]
    pub checkout_due: NaiveDate,
    #[serde(rename = "precio_noche")]
    pub nightly_price: f64,
    #[serde(rename = "metodo_pago")]
    pub payment_method: PaymentMethod,
    #[serde(rename = "cantidad_pagada")]
    pub amount_paid: f64,
    #[serde(rename = "estado")]
    pub status: StayStatus,
}

/// Create stay payload (`POST hospedajes/`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StayCreate {
    #[serde(rename = "habitacion_id")]
    pub room_id: i64,
    #[serde(rename = "huesped_nombre")]
    pub guest_name: String,
    #[serde(rename = "huesped_email")]
    pub guest_email: Option<String>,
    #[serde(rename = "huesped_telefono")]
    pub guest_phone: Option<String>,
    #[serde(rename = "fecha_checkout_previsto")]
    pub checkout_due: NaiveDate,
    #[serde(rename = "precio_noche")]
    pub nightly_price: f64,
    #[serde(rename = "metodo_pago")]
    pub payment_method: PaymentMethod,
    /// Tendered amount for cash, charged total otherwise
    #[serde(rename = "cantidad_pagada")]
    pub amount_paid: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stay_create_wire_names() {
        let body = StayCreate {
            room_id: 7,
            guest_name: "Ana García".to_string(),
            guest_email: None,
            guest_phone: None,
            checkout_due: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            nightly_price: 80.0,
            payment_method: PaymentMethod::Cash,
            amount_paid: 80.0,
        };

        let json: serde_json::Value = serde_json::to_value(&body).unwrap();
        assert_eq!(json["habitacion_id"], 7);
        assert_eq!(json["huesped_nombre"], "Ana García");
        assert_eq!(json["fecha_checkout_previsto"], "2026-03-02");
        assert_eq!(json["precio_noche"], 80.0);
        assert_eq!(json["metodo_pago"], "efectivo");
        assert_eq!(json["cantidad_pagada"], 80.0);
    }
}
