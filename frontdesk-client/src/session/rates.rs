//! Rate (tariff) options
//!
//! Derived, never persisted: fixed multipliers of the selected room's
//! nightly price, computed when the check-in session opens and
//! discarded with it.

use crate::money::{to_decimal, to_f64};
use serde::{Deserialize, Serialize};

/// Rate plan choices offered on check-in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatePlan {
    /// Base nightly price (1.0x)
    #[serde(rename = "estandar")]
    Standard,
    /// 20% discount (0.8x)
    #[serde(rename = "promocional")]
    Promotional,
    /// Extra services included (1.2x)
    #[serde(rename = "premium")]
    Premium,
}

impl RatePlan {
    pub const ALL: [RatePlan; 3] = [RatePlan::Standard, RatePlan::Promotional, RatePlan::Premium];

    pub fn multiplier(&self) -> f64 {
        match self {
            RatePlan::Standard => 1.0,
            RatePlan::Promotional => 0.8,
            RatePlan::Premium => 1.2,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RatePlan::Standard => "Tarifa Estándar",
            RatePlan::Promotional => "Tarifa Promocional",
            RatePlan::Premium => "Tarifa Premium",
        }
    }
}

/// One selectable tariff, priced against a concrete room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateOption {
    pub plan: RatePlan,
    pub name: String,
    /// Nightly price under this plan, rounded to 2 decimals
    pub price: f64,
}

/// Derive the three rate options for a room's nightly price
pub fn rate_options(nightly_price: f64) -> Vec<RateOption> {
    RatePlan::ALL
        .iter()
        .map(|plan| RateOption {
            plan: *plan,
            name: plan.display_name().to_string(),
            price: to_f64(to_decimal(nightly_price) * to_decimal(plan.multiplier())),
        })
        .collect()
}
