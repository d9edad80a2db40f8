use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::numeric;
use crate::rate_card::{Plan, RateCard};

/// One recalculation's worth of input. Built fresh per invocation and owned
/// by the caller; nothing persists between quotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteInput {
    pub plan: Plan,
    pub sku_count: u32,
    pub sales_volume: f64,
}

impl QuoteInput {
    /// Build an input straight from raw form-field values, applying the
    /// default-zero coercion policy from [`crate::numeric`].
    pub fn from_raw(plan: &str, sku_count: &Value, sales_volume: &Value) -> Self {
        Self {
            plan: Plan::parse(plan),
            sku_count: numeric::skus_or_zero(sku_count),
            sales_volume: numeric::sales_or_zero(sales_volume),
        }
    }
}

/// Outcome of a quote. Very large catalogs bypass the numeric pipeline
/// entirely and get the custom-quote sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum QuoteResult {
    Standard(StandardQuote),
    CustomQuoteRequired,
}

/// A computed quote, unrounded. Rounding happens in the display accessors
/// so downstream composition keeps full precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardQuote {
    /// Effective commission as a percentage of sales volume.
    pub effective_rate_percent: f64,
    /// Estimated operating cost in pesos.
    pub estimated_cost: f64,
    /// Volume discount applied to the commission rate (fraction, 0 if none).
    pub volume_discount: f64,
    /// Catalog surcharge applied to the cost (fraction, 0 if none).
    pub sku_surcharge: f64,
}

impl StandardQuote {
    /// Cost rounded to the nearest whole peso.
    pub fn cost_mxn(&self) -> i64 {
        self.estimated_cost.round() as i64
    }

    /// Effective rate rounded to two decimals.
    pub fn display_rate_percent(&self) -> f64 {
        (self.effective_rate_percent * 100.0).round() / 100.0
    }
}

/// The pricing calculator. Deterministic and total: malformed input is
/// coerced before it gets here, so there is no failure path, only the
/// custom-quote sentinel.
#[derive(Debug, Clone)]
pub struct QuoteEngine {
    card: RateCard,
}

impl QuoteEngine {
    pub fn new(card: RateCard) -> Self {
        Self { card }
    }

    pub fn card(&self) -> &RateCard {
        &self.card
    }

    /// Compute a quote.
    ///
    /// The large-catalog check takes priority over everything else: a
    /// high-SKU merchant goes to the custom-quote path even when a
    /// favorable volume discount would otherwise apply.
    pub fn quote(&self, input: &QuoteInput) -> QuoteResult {
        let base_rate = self.card.base_rate(input.plan);
        let volume_discount = self.card.volume_discount(input.sales_volume);
        let discounted_rate = base_rate * (1.0 - volume_discount);
        let sku_surcharge = self.card.sku_surcharge(input.sku_count);

        if input.sku_count > self.card.custom_quote_sku_limit {
            tracing::debug!(
                sku_count = input.sku_count,
                limit = self.card.custom_quote_sku_limit,
                "catalog over limit, routing to custom quote"
            );
            return QuoteResult::CustomQuoteRequired;
        }

        let estimated_cost = input.sales_volume * discounted_rate * (1.0 + sku_surcharge);
        let effective_rate_percent = if input.sales_volume > 0.0 {
            estimated_cost / input.sales_volume * 100.0
        } else {
            // Zero-volume display case: show the rate itself, no division.
            discounted_rate * (1.0 + sku_surcharge) * 100.0
        };

        QuoteResult::Standard(StandardQuote {
            effective_rate_percent,
            estimated_cost,
            volume_discount,
            sku_surcharge,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn engine() -> QuoteEngine {
        QuoteEngine::new(RateCard::default())
    }

    fn standard(result: QuoteResult) -> StandardQuote {
        match result {
            QuoteResult::Standard(q) => q,
            QuoteResult::CustomQuoteRequired => panic!("expected a standard quote"),
        }
    }

    #[test]
    fn starter_with_no_activity_shows_base_rate() {
        let q = standard(engine().quote(&QuoteInput {
            plan: Plan::Starter,
            sku_count: 0,
            sales_volume: 0.0,
        }));
        assert_eq!(q.display_rate_percent(), 7.00);
        assert_eq!(q.cost_mxn(), 0);
        assert_eq!(q.volume_discount, 0.0);
        assert_eq!(q.sku_surcharge, 0.0);
    }

    #[test]
    fn complete_plan_with_top_volume_discount() {
        let q = standard(engine().quote(&QuoteInput {
            plan: Plan::Complete,
            sku_count: 0,
            sales_volume: 600_000.0,
        }));
        assert_eq!(q.volume_discount, 0.15);
        assert_eq!(q.cost_mxn(), 48_450);
        assert_eq!(q.display_rate_percent(), 8.08);
    }

    #[test]
    fn premium_plan_with_catalog_surcharge() {
        let q = standard(engine().quote(&QuoteInput {
            plan: Plan::Premium,
            sku_count: 50,
            sales_volume: 10_000.0,
        }));
        assert_eq!(q.volume_discount, 0.0);
        assert_eq!(q.sku_surcharge, 0.05);
        assert_eq!(q.cost_mxn(), 1_260);
        assert_eq!(q.display_rate_percent(), 12.60);
    }

    #[test]
    fn large_catalog_overrides_favorable_discount() {
        let result = engine().quote(&QuoteInput {
            plan: Plan::Starter,
            sku_count: 201,
            sales_volume: 1_000_000.0,
        });
        assert_eq!(result, QuoteResult::CustomQuoteRequired);
    }

    #[test]
    fn limit_itself_still_quotes() {
        let result = engine().quote(&QuoteInput {
            plan: Plan::Starter,
            sku_count: 200,
            sales_volume: 0.0,
        });
        assert!(matches!(result, QuoteResult::Standard(_)));
    }

    #[test]
    fn custom_quote_for_any_plan_and_volume() {
        for plan in [Plan::Starter, Plan::Complete, Plan::Premium] {
            for volume in [0.0, 75_000.0, 5_000_000.0] {
                let result = engine().quote(&QuoteInput {
                    plan,
                    sku_count: 999,
                    sales_volume: volume,
                });
                assert_eq!(result, QuoteResult::CustomQuoteRequired);
            }
        }
    }

    #[test]
    fn zero_volume_never_divides_by_zero() {
        let q = standard(engine().quote(&QuoteInput {
            plan: Plan::Premium,
            sku_count: 150,
            sales_volume: 0.0,
        }));
        // 0.12 * 1.10 * 100
        assert_eq!(q.display_rate_percent(), 13.20);
        assert_eq!(q.cost_mxn(), 0);
    }

    #[test]
    fn crossing_a_discount_threshold_lowers_the_rate() {
        let below = standard(engine().quote(&QuoteInput {
            plan: Plan::Starter,
            sku_count: 10,
            sales_volume: 50_000.0,
        }));
        let above = standard(engine().quote(&QuoteInput {
            plan: Plan::Starter,
            sku_count: 10,
            sales_volume: 50_001.0,
        }));
        assert!(above.effective_rate_percent < below.effective_rate_percent);
        assert_eq!(below.display_rate_percent(), 7.00);
        assert_eq!(above.display_rate_percent(), 6.65);
    }

    #[test]
    fn raw_input_coercion_feeds_the_pipeline() {
        let input = QuoteInput::from_raw("invalidValue", &json!("abc"), &json!(null));
        assert_eq!(input.plan, Plan::Starter);
        assert_eq!(input.sku_count, 0);
        assert_eq!(input.sales_volume, 0.0);

        let q = standard(engine().quote(&input));
        assert_eq!(q.display_rate_percent(), 7.00);
        assert_eq!(q.cost_mxn(), 0);
    }
}
