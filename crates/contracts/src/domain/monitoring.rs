//! Sales-monitoring contracts: sell-through rows and the two chart series
//! of the "Monitoreo y Optimización" view.

use serde::Deserialize;

/// Server-assigned recommendation for a monitored SKU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SalesStatus {
    Alertar,
    Mantener,
    Oportunidad,
}

impl SalesStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SalesStatus::Alertar => "Alertar",
            SalesStatus::Mantener => "Mantener",
            SalesStatus::Oportunidad => "Oportunidad",
        }
    }
}

/// Row from `GET /analisis-ventas`. The progress fields come preformatted
/// ("75%"); only the discount columns are numeric.
#[derive(Debug, Clone, Deserialize)]
pub struct SalesRow {
    pub producto: String,
    #[serde(rename = "skuId", alias = "skud")]
    pub sku_id: String,
    pub meta_venta: String,
    pub avance_actual: String,
    pub sell_through: String,
    pub descuento_actual: f64,
    pub sugerencia_ia: f64,
    pub estado: SalesStatus,
}

impl SalesRow {
    /// Leading integer of a preformatted percentage like "75%".
    pub fn avance_pct(&self) -> Option<i64> {
        let digits: String = self
            .avance_actual
            .trim()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().ok()
    }

    /// AI justification shown as the suggestion tooltip, worded per status.
    pub fn justification(&self) -> String {
        match self.estado {
            SalesStatus::Alertar => format!(
                "Justificación de la IA:\n\nEl avance de ventas ({}) está muy por debajo de su meta ({}). El descuento actual del {}% es insuficiente.\n\nSe recomienda un ajuste agresivo al {}%.",
                self.avance_actual, self.meta_venta, self.descuento_actual, self.sugerencia_ia
            ),
            SalesStatus::Oportunidad => format!(
                "Justificación de la IA:\n\nEl avance de ventas ({}) es moderado, pero necesita un impulso para alcanzar la meta ({}).\n\nSe recomienda un ajuste moderado al {}%.",
                self.avance_actual, self.meta_venta, self.sugerencia_ia
            ),
            SalesStatus::Mantener => format!(
                "Justificación de la IA:\n\n¡Buen rendimiento! El avance de ventas ({}) está en línea o superando la meta ({}).\n\nEl descuento actual del {}% es óptimo y se recomienda mantenerlo.",
                self.avance_actual, self.meta_venta, self.descuento_actual
            ),
        }
    }
}

/// Capital trapped vs. released per category (`GET /dashboard-charts`).
/// Parallel arrays, indexed by category position.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CapitalBreakdown {
    #[serde(default)]
    pub categorias: Vec<String>,
    #[serde(default)]
    pub atrapado: Vec<f64>,
    #[serde(default)]
    pub liberado: Vec<f64>,
    #[serde(default)]
    pub total_invertido: Vec<f64>,
    #[serde(default)]
    pub porcentaje_recuperado: Vec<f64>,
    #[serde(default)]
    pub productos: Vec<i64>,
}

/// Real vs. target liquidation velocity per category.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VelocitySeries {
    #[serde(default)]
    pub categorias: Vec<String>,
    #[serde(default)]
    pub velocidad_real: Vec<f64>,
    #[serde(default)]
    pub velocidad_meta: Vec<f64>,
    #[serde(default)]
    pub gap: Vec<f64>,
    #[serde(default)]
    pub valor_remanente: Vec<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonitoringCharts {
    pub capital_atrapado: CapitalBreakdown,
    pub velocidad_liquidacion: VelocitySeries,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(estado: &str) -> SalesRow {
        serde_json::from_str(&format!(
            r#"{{"producto":"Refri 300L","skuId":"88412","meta_venta":"80%","avance_actual":"45%",
                "sell_through":"0.41","descuento_actual":15.0,"sugerencia_ia":35.0,"estado":"{estado}"}}"#,
        ))
        .unwrap()
    }

    #[test]
    fn avance_parses_leading_digits() {
        assert_eq!(row("Alertar").avance_pct(), Some(45));
    }

    #[test]
    fn justification_varies_by_status() {
        let alertar = row("Alertar").justification();
        let mantener = row("Mantener").justification();
        let oportunidad = row("Oportunidad").justification();
        assert!(alertar.contains("ajuste agresivo al 35%"));
        assert!(oportunidad.contains("ajuste moderado al 35%"));
        assert!(mantener.contains("Buen rendimiento"));
        assert_ne!(alertar, oportunidad);
    }

    #[test]
    fn chart_series_tolerate_missing_arrays() {
        let charts: MonitoringCharts = serde_json::from_str(
            r#"{"capital_atrapado":{"categorias":["Electro"],"atrapado":[100.0],"liberado":[40.0]},
                "velocidad_liquidacion":{}}"#,
        )
        .unwrap();
        assert_eq!(charts.capital_atrapado.categorias.len(), 1);
        assert!(charts.velocidad_liquidacion.velocidad_real.is_empty());
    }
}
