//! Home-view contracts: KPI cards and the two overview charts.

use serde::Deserialize;

/// `GET /dashboard-kpis`. Money fields may be absent while the server is
/// still aggregating; the cards render those as "S/ 0".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KpiSummary {
    #[serde(default)]
    pub valor_en_riesgo: Option<f64>,
    #[serde(default)]
    pub capital_en_liquidacion: Option<f64>,
    #[serde(default)]
    pub skus_accion_requerida: i64,
    #[serde(default)]
    pub capital_recuperado_total: Option<f64>,
}

/// One slice of the inventory-health donut.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthSlice {
    pub name: String,
    pub value: f64,
}

/// One bar of the top-risk-by-category chart.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRisk {
    pub categoria: String,
    pub valor: f64,
}

/// `GET /inicio-charts`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HomeCharts {
    #[serde(default)]
    pub salud_global: Vec<HealthSlice>,
    #[serde(default)]
    pub top_riesgo_categoria: Vec<CategoryRisk>,
}

/// Donut slice names the chart actually draws; anything else the endpoint
/// returns is ignored (the center total still sums everything).
pub const HEALTH_SLICE_SALUDABLE: &str = "Inventario Saludable";
pub const HEALTH_SLICE_RIESGO: &str = "Inventario en Riesgo";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kpis_tolerate_missing_money_fields() {
        let kpi: KpiSummary =
            serde_json::from_str(r#"{"skus_accion_requerida":17}"#).unwrap();
        assert_eq!(kpi.skus_accion_requerida, 17);
        assert!(kpi.valor_en_riesgo.is_none());
    }
}
