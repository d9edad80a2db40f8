//! Presentation of a quote: the rendered texts the page shows, kept out of
//! the calculation so the engine stays pure.

use serde::{Deserialize, Serialize};

use crate::quote::QuoteResult;

/// Rendered output fields for a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteView {
    /// Final effective rate, e.g. `"8.08%"`, or `"Personalizado"`.
    pub rate_text: String,
    /// Estimated cost as whole MXN pesos, e.g. `"$48,450"`, or `"Cotizar"`.
    pub cost_text: String,
    /// Advisory shown when a volume discount applies.
    pub volume_notice: Option<String>,
    /// Advisory shown when a catalog surcharge applies.
    pub sku_notice: Option<String>,
    /// Advisory shown in custom-quote mode, replacing rate and cost.
    pub large_catalog_notice: Option<String>,
}

impl QuoteView {
    pub fn render(result: &QuoteResult) -> Self {
        match result {
            QuoteResult::Standard(q) => Self {
                rate_text: format!("{:.2}%", q.display_rate_percent()),
                cost_text: format_mxn(q.cost_mxn()),
                volume_notice: (q.volume_discount > 0.0).then(|| {
                    format!(
                        "¡Felicidades! Tienes un descuento del {}% en tu comisión.",
                        percent_label(q.volume_discount)
                    )
                }),
                sku_notice: (q.sku_surcharge > 0.0).then(|| {
                    format!(
                        "Catálogo extenso: +{}% al costo operativo.",
                        percent_label(q.sku_surcharge)
                    )
                }),
                large_catalog_notice: None,
            },
            QuoteResult::CustomQuoteRequired => Self {
                rate_text: "Personalizado".to_string(),
                cost_text: "Cotizar".to_string(),
                volume_notice: None,
                sku_notice: None,
                large_catalog_notice: Some(
                    "Catálogo de gran tamaño: contáctanos para una cotización a la medida."
                        .to_string(),
                ),
            },
        }
    }
}

/// Format whole pesos the way es-MX currency display does, without
/// fractional digits: `48450` becomes `"$48,450"`.
pub fn format_mxn(amount: i64) -> String {
    let (sign, magnitude) = if amount < 0 {
        ("-", amount.unsigned_abs())
    } else {
        ("", amount.unsigned_abs())
    };
    let digits = magnitude.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}${}", sign, grouped)
}

/// Human label for a fractional percentage: `0.075` → `"7.5"`, `0.15` → `"15"`.
fn percent_label(fraction: f64) -> String {
    // Tier percents carry at most two decimals; snap to them so float
    // noise never leaks into copy.
    let percent = (fraction * 10_000.0).round() / 100.0;
    if percent.fract() == 0.0 {
        format!("{}", percent as i64)
    } else {
        format!("{}", percent)
    }
}
