//! Discount-simulation contracts: AI-suggested liquidation discounts, the
//! per-row derived fields the table edits live on, and the pricing
//! submission payloads.

use serde::{Deserialize, Serialize};

use crate::shared::format::calculate_liquidation_price;

/// Final discounts above this trip the negative-margin guardrail.
pub const WARNING_THRESHOLD_PCT: f64 = 70.0;

/// Assumed product cost as a fraction of the regular price, used for the
/// margin-impact estimate. The real cost lives server-side.
pub const ASSUMED_COST_RATIO: f64 = 0.6;

/// Raw item from `GET /mostrar-merma`.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscountSuggestion {
    #[serde(rename = "skuId", alias = "skud")]
    pub sku_id: i64,
    #[serde(rename = "Producto")]
    pub producto: String,
    #[serde(rename = "P_Regular")]
    pub p_regular: f64,
    #[serde(rename = "Stock")]
    pub stock: i64,
    #[serde(rename = "Dto_Sugerido")]
    pub dto_sugerido: f64,
    #[serde(rename = "Justificacion", default)]
    pub justificacion: String,
}

/// Three-way comparison of the final discount against the suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Forecast {
    /// Final above suggested: liquidation speeds up.
    Aumenta,
    /// Final below suggested: liquidation slows down.
    Reduce,
    /// Final equals suggested.
    Optima,
}

impl Forecast {
    pub fn of(dto_final: f64, dto_sugerido: f64) -> Self {
        if dto_final > dto_sugerido {
            Forecast::Aumenta
        } else if dto_final < dto_sugerido {
            Forecast::Reduce
        } else {
            Forecast::Optima
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Forecast::Aumenta => "Aumenta la velocidad de liquidación.",
            Forecast::Reduce => "Reduce la velocidad de liquidación.",
            Forecast::Optima => "Estimación de liquidación óptima.",
        }
    }
}

/// A suggestion enriched with the user-editable final discount and every
/// field derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountCandidate {
    pub sku_id: i64,
    pub producto: String,
    pub p_regular: f64,
    pub stock: i64,
    pub dto_sugerido: f64,
    pub justificacion: String,
    pub dto_final: f64,
    pub p_liquidacion: f64,
    pub margin_impact: f64,
    pub has_warning: bool,
    pub forecast: Forecast,
}

/// Parses the raw discount input. Empty, unparsable or negative input
/// clamps to 0; anything above 100 clamps to 100.
pub fn parse_discount_input(raw: &str) -> f64 {
    let parsed = raw.trim().parse::<f64>().unwrap_or(0.0);
    if !parsed.is_finite() || parsed < 0.0 {
        0.0
    } else {
        parsed.min(100.0)
    }
}

impl DiscountCandidate {
    /// Builds a candidate from the API suggestion, defaulting the final
    /// discount to the suggested one.
    pub fn from_suggestion(s: DiscountSuggestion) -> Self {
        let seed = Self {
            sku_id: s.sku_id,
            producto: s.producto,
            p_regular: s.p_regular,
            stock: s.stock,
            dto_sugerido: s.dto_sugerido,
            justificacion: s.justificacion,
            dto_final: 0.0,
            p_liquidacion: 0.0,
            margin_impact: 0.0,
            has_warning: false,
            forecast: Forecast::Optima,
        };
        let suggested = seed.dto_sugerido;
        seed.with_final_discount(suggested)
    }

    /// Pure recomputation of every derived field for a new final discount.
    /// Idempotent: applying the same discount twice yields identical state.
    pub fn with_final_discount(&self, dto_final: f64) -> Self {
        let dto_final = dto_final.clamp(0.0, 100.0);
        let p_liquidacion = calculate_liquidation_price(self.p_regular, dto_final);
        Self {
            dto_final,
            p_liquidacion,
            margin_impact: p_liquidacion - self.p_regular * ASSUMED_COST_RATIO,
            has_warning: dto_final > WARNING_THRESHOLD_PCT,
            forecast: Forecast::of(dto_final, self.dto_sugerido),
            ..self.clone()
        }
    }

    /// Recomputation from a raw input string (clamped per
    /// [`parse_discount_input`]).
    pub fn with_discount_input(&self, raw: &str) -> Self {
        self.with_final_discount(parse_discount_input(raw))
    }
}

/// Status of a row in the submission history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    Procesado,
    Pendiente,
    Rechazado,
}

impl SubmissionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SubmissionStatus::Procesado => "Procesado",
            SubmissionStatus::Pendiente => "Pendiente",
            SubmissionStatus::Rechazado => "Rechazado",
        }
    }
}

/// Raw item from `GET /ver-descuentos`. The field naming differs from the
/// suggestion endpoint; this type is the only place that knows.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryRecord {
    #[serde(rename = "skuId", alias = "skud")]
    pub sku_id: i64,
    #[serde(rename = "ProductName")]
    pub product_name: String,
    #[serde(rename = "RegularPrice")]
    pub regular_price: f64,
    pub dto_final: f64,
    pub p_liquidacion: f64,
}

/// A previously submitted decision, append-only once a submission succeeds.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub sku_id: i64,
    pub producto: String,
    pub p_regular: f64,
    pub dto_final: f64,
    pub p_liquidacion: f64,
    pub estado: SubmissionStatus,
}

impl From<HistoryRecord> for HistoryEntry {
    fn from(r: HistoryRecord) -> Self {
        Self {
            sku_id: r.sku_id,
            producto: r.product_name,
            p_regular: r.regular_price,
            dto_final: r.dto_final,
            p_liquidacion: r.p_liquidacion,
            estado: SubmissionStatus::Procesado,
        }
    }
}

impl DiscountCandidate {
    /// History entry for a just-submitted candidate.
    pub fn to_history_entry(&self) -> HistoryEntry {
        HistoryEntry {
            sku_id: self.sku_id,
            producto: self.producto.clone(),
            p_regular: self.p_regular,
            dto_final: self.dto_final,
            p_liquidacion: self.p_liquidacion,
            estado: SubmissionStatus::Procesado,
        }
    }
}

/// One row of the `POST /enviar-a-pricing` payload.
#[derive(Debug, Clone, Serialize)]
pub struct PricingItem {
    #[serde(rename = "skuId")]
    pub sku_id: i64,
    pub dto_final: f64,
    pub p_liquidacion: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PricingRequest {
    pub productos: Vec<PricingItem>,
}

/// Response of `POST /enviar-a-pricing`; the counts are surfaced verbatim.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PricingResponse {
    #[serde(default)]
    pub productos_actualizados: u64,
    #[serde(default)]
    pub productos_omitidos: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate() -> DiscountCandidate {
        DiscountCandidate::from_suggestion(DiscountSuggestion {
            sku_id: 1001,
            producto: "Licuadora Pro 600W".to_string(),
            p_regular: 100.0,
            stock: 42,
            dto_sugerido: 30.0,
            justificacion: "Baja rotación en los últimos 90 días".to_string(),
        })
    }

    #[test]
    fn suggestion_seeds_the_final_discount() {
        let c = candidate();
        assert_eq!(c.dto_final, 30.0);
        assert_eq!(c.p_liquidacion, 70.0);
        assert_eq!(c.forecast, Forecast::Optima);
        assert!(!c.has_warning);
    }

    #[test]
    fn input_clamping() {
        assert_eq!(parse_discount_input("150"), 100.0);
        assert_eq!(parse_discount_input("-5"), 0.0);
        assert_eq!(parse_discount_input(""), 0.0);
        assert_eq!(parse_discount_input("abc"), 0.0);
        assert_eq!(parse_discount_input("37.5"), 37.5);
    }

    #[test]
    fn recompute_is_idempotent() {
        let once = candidate().with_discount_input("45");
        let twice = once.with_discount_input("45");
        assert_eq!(once, twice);
    }

    #[test]
    fn warning_flag_threshold() {
        assert!(candidate().with_final_discount(71.0).has_warning);
        assert!(!candidate().with_final_discount(70.0).has_warning);
    }

    #[test]
    fn margin_impact_uses_assumed_cost() {
        let c = candidate().with_final_discount(50.0);
        // 50.0 liquidation - 60.0 assumed cost
        assert_eq!(c.margin_impact, -10.0);
        assert_eq!(c.forecast, Forecast::Aumenta);
    }

    #[test]
    fn forecast_three_way() {
        assert_eq!(candidate().with_final_discount(10.0).forecast, Forecast::Reduce);
        assert_eq!(candidate().with_final_discount(30.0).forecast, Forecast::Optima);
        assert_eq!(candidate().with_final_discount(90.0).forecast, Forecast::Aumenta);
    }

    #[test]
    fn suggestion_accepts_both_sku_spellings() {
        let a: DiscountSuggestion = serde_json::from_str(
            r#"{"skuId":1,"Producto":"X","P_Regular":10.0,"Stock":2,"Dto_Sugerido":20.0,"Justificacion":"j"}"#,
        )
        .unwrap();
        let b: DiscountSuggestion = serde_json::from_str(
            r#"{"skud":1,"Producto":"X","P_Regular":10.0,"Stock":2,"Dto_Sugerido":20.0}"#,
        )
        .unwrap();
        assert_eq!(a.sku_id, b.sku_id);
        assert_eq!(b.justificacion, "");
    }

    #[test]
    fn history_record_maps_to_processed_entry() {
        let record: HistoryRecord = serde_json::from_str(
            r#"{"skuId":7,"ProductName":"Horno","RegularPrice":899.9,"dto_final":40.0,"p_liquidacion":539.94}"#,
        )
        .unwrap();
        let entry: HistoryEntry = record.into();
        assert_eq!(entry.producto, "Horno");
        assert_eq!(entry.estado, SubmissionStatus::Procesado);
    }

    #[test]
    fn pricing_payload_wire_names() {
        let req = PricingRequest {
            productos: vec![PricingItem {
                sku_id: 9,
                dto_final: 55.0,
                p_liquidacion: 45.0,
            }],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["productos"][0]["skuId"], 9);
        assert_eq!(json["productos"][0]["dto_final"], 55.0);
        assert_eq!(json["productos"][0]["p_liquidacion"], 45.0);
    }
}
