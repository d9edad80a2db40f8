use serde::{Deserialize, Serialize};

/// Upper bounds for a sane rate card. A card outside these limits is a
/// configuration mistake, not a pricing decision.
pub const MAX_BASE_RATE: f64 = 0.12;
pub const MAX_VOLUME_DISCOUNT: f64 = 0.15;
pub const MAX_SKU_SURCHARGE: f64 = 0.10;

/// Service tier selected by the merchant. Controls the base commission rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Starter,
    Complete,
    Premium,
}

impl Plan {
    /// Parse a raw selector value. Anything unrecognized falls back to
    /// Starter, matching the form's default option.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "complete" => Plan::Complete,
            "premium" => Plan::Premium,
            _ => Plan::Starter,
        }
    }
}

/// A volume-discount tier. Applies when sales volume is strictly greater
/// than `min_exclusive`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VolumeTier {
    pub min_exclusive: f64,
    pub discount: f64,
}

/// A catalog-size surcharge tier. Applies when the SKU count is strictly
/// greater than `min_exclusive`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkuTier {
    pub min_exclusive: u32,
    pub surcharge: f64,
}

/// Commission rates and tier tables driving the quote calculation.
///
/// Tiers are kept in descending threshold order and matched first-hit, so
/// exactly one tier (or none) applies to a given input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RateCard {
    #[serde(default = "default_starter_rate")]
    pub starter_rate: f64,
    #[serde(default = "default_complete_rate")]
    pub complete_rate: f64,
    #[serde(default = "default_premium_rate")]
    pub premium_rate: f64,
    #[serde(default = "default_volume_tiers")]
    pub volume_tiers: Vec<VolumeTier>,
    #[serde(default = "default_sku_tiers")]
    pub sku_tiers: Vec<SkuTier>,
    /// Catalogs strictly larger than this are routed to a custom quote.
    #[serde(default = "default_custom_quote_sku_limit")]
    pub custom_quote_sku_limit: u32,
}

fn default_starter_rate() -> f64 {
    0.07
}

fn default_complete_rate() -> f64 {
    0.095
}

fn default_premium_rate() -> f64 {
    0.12
}

fn default_volume_tiers() -> Vec<VolumeTier> {
    vec![
        VolumeTier { min_exclusive: 500_000.0, discount: 0.15 },
        VolumeTier { min_exclusive: 200_000.0, discount: 0.10 },
        VolumeTier { min_exclusive: 100_000.0, discount: 0.075 },
        VolumeTier { min_exclusive: 50_000.0, discount: 0.05 },
    ]
}

fn default_sku_tiers() -> Vec<SkuTier> {
    vec![
        SkuTier { min_exclusive: 100, surcharge: 0.10 },
        SkuTier { min_exclusive: 20, surcharge: 0.05 },
    ]
}

fn default_custom_quote_sku_limit() -> u32 {
    200
}

impl Default for RateCard {
    fn default() -> Self {
        Self {
            starter_rate: default_starter_rate(),
            complete_rate: default_complete_rate(),
            premium_rate: default_premium_rate(),
            volume_tiers: default_volume_tiers(),
            sku_tiers: default_sku_tiers(),
            custom_quote_sku_limit: default_custom_quote_sku_limit(),
        }
    }
}

impl RateCard {
    pub fn base_rate(&self, plan: Plan) -> f64 {
        match plan {
            Plan::Starter => self.starter_rate,
            Plan::Complete => self.complete_rate,
            Plan::Premium => self.premium_rate,
        }
    }

    /// Highest qualifying discount tier, or 0 when none applies.
    pub fn volume_discount(&self, sales_volume: f64) -> f64 {
        self.volume_tiers
            .iter()
            .find(|t| sales_volume > t.min_exclusive)
            .map(|t| t.discount)
            .unwrap_or(0.0)
    }

    /// Highest qualifying surcharge tier, or 0 when none applies.
    pub fn sku_surcharge(&self, sku_count: u32) -> f64 {
        self.sku_tiers
            .iter()
            .find(|t| sku_count > t.min_exclusive)
            .map(|t| t.surcharge)
            .unwrap_or(0.0)
    }

    /// Check a card before putting it in service. Cards come from deployment
    /// config, so a bad override should fail at startup, not per request.
    pub fn validate(&self) -> Result<(), RateCardError> {
        for (plan, rate) in [
            (Plan::Starter, self.starter_rate),
            (Plan::Complete, self.complete_rate),
            (Plan::Premium, self.premium_rate),
        ] {
            if !(0.0..=MAX_BASE_RATE).contains(&rate) {
                return Err(RateCardError::BaseRateOutOfRange { plan, rate });
            }
        }

        for tier in &self.volume_tiers {
            if !(0.0..=MAX_VOLUME_DISCOUNT).contains(&tier.discount) {
                return Err(RateCardError::DiscountOutOfRange(tier.discount));
            }
        }
        if self.volume_tiers.windows(2).any(|w| w[0].min_exclusive <= w[1].min_exclusive) {
            return Err(RateCardError::VolumeTiersOutOfOrder);
        }

        for tier in &self.sku_tiers {
            if !(0.0..=MAX_SKU_SURCHARGE).contains(&tier.surcharge) {
                return Err(RateCardError::SurchargeOutOfRange(tier.surcharge));
            }
        }
        if self.sku_tiers.windows(2).any(|w| w[0].min_exclusive <= w[1].min_exclusive) {
            return Err(RateCardError::SkuTiersOutOfOrder);
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RateCardError {
    #[error("base rate {rate} for plan {plan:?} outside 0..={MAX_BASE_RATE}")]
    BaseRateOutOfRange { plan: Plan, rate: f64 },

    #[error("volume discount {0} outside 0..={MAX_VOLUME_DISCOUNT}")]
    DiscountOutOfRange(f64),

    #[error("sku surcharge {0} outside 0..={MAX_SKU_SURCHARGE}")]
    SurchargeOutOfRange(f64),

    #[error("volume tiers must be in descending threshold order")]
    VolumeTiersOutOfOrder,

    #[error("sku tiers must be in descending threshold order")]
    SkuTiersOutOfOrder,
}
