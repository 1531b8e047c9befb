//! Per-category risk alerts and the settle-all dispatch accounting.

use serde::{Deserialize, Serialize};

/// Server-computed risk tier of a category summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Alto,
    Medio,
    Bajo,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Alto => "Alto",
            RiskLevel::Medio => "Medio",
            RiskLevel::Bajo => "Bajo",
        }
    }
}

/// Row from `GET /alertas`. Read/select/submit only; nothing is derived
/// client-side.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryAlert {
    pub categoria: String,
    pub skus_potencial_obsoleto: i64,
    pub skus_por_revisar: i64,
    pub riesgo: RiskLevel,
    /// Fraction in [0, 1]; rendered as a percentage.
    #[serde(default)]
    pub porcentaje_riesgo: f64,
}

/// `POST /enviar-alerta` payload, one request per selected category.
#[derive(Debug, Clone, Serialize)]
pub struct SendAlertRequest {
    pub categoria: String,
    pub riesgo: RiskLevel,
    pub skus_potenciales: i64,
}

impl SendAlertRequest {
    pub fn for_alert(alert: &CategoryAlert) -> Self {
        Self {
            categoria: alert.categoria.clone(),
            riesgo: alert.riesgo,
            skus_potenciales: alert.skus_potencial_obsoleto,
        }
    }
}

/// Outcome tally of a batch of independently-settled alert sends. Partial
/// failure is reported with exact counts, never collapsed to a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchSummary {
    pub attempted: usize,
    pub sent: usize,
}

impl DispatchSummary {
    pub fn tally(results: &[bool]) -> Self {
        Self {
            attempted: results.len(),
            sent: results.iter().filter(|ok| **ok).count(),
        }
    }

    pub fn failed(&self) -> usize {
        self.attempted - self.sent
    }

    pub fn all_sent(&self) -> bool {
        self.failed() == 0
    }

    /// User-facing message for the feedback modal.
    pub fn message(&self) -> String {
        if self.all_sent() {
            format!(
                "Se envió la alerta para {} categoría(s) seleccionada(s) a los correos de los Category Managers correspondientes.",
                self.sent
            )
        } else {
            format!(
                "No se pudieron enviar {} de {} alertas. Por favor, inténtelo de nuevo.",
                self.failed(),
                self.attempted
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_failure_reports_exact_counts() {
        let summary = DispatchSummary::tally(&[true, false, true, true, false]);
        assert_eq!(summary.sent, 3);
        assert_eq!(summary.failed(), 2);
        assert!(!summary.all_sent());
        assert!(summary.message().contains("2 de 5"));
    }

    #[test]
    fn full_success_names_the_count() {
        let summary = DispatchSummary::tally(&[true, true, true]);
        assert!(summary.all_sent());
        assert!(summary.message().contains("3 categoría(s)"));
    }

    #[test]
    fn alert_row_decodes_without_percentage() {
        let alert: CategoryAlert = serde_json::from_str(
            r#"{"categoria":"Electro","skus_potencial_obsoleto":40,"skus_por_revisar":12,"riesgo":"Alto"}"#,
        )
        .unwrap();
        assert_eq!(alert.riesgo, RiskLevel::Alto);
        assert_eq!(alert.porcentaje_riesgo, 0.0);

        let payload = serde_json::to_value(SendAlertRequest::for_alert(&alert)).unwrap();
        assert_eq!(payload["categoria"], "Electro");
        assert_eq!(payload["riesgo"], "Alto");
        assert_eq!(payload["skus_potenciales"], 40);
    }
}
