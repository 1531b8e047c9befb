//! Obsolescence-candidate contracts for the "Gestión de Obsoletos" view.

use serde::{Deserialize, Serialize};

/// Inventory-days threshold of the server-side risk rule, used only to
/// highlight the offending cell.
pub const RISK_INVENTORY_DAYS: i64 = 120;
/// Stock/sales ratio threshold of the same rule.
pub const RISK_STOCK_RATIO: f64 = 4.0;

/// Server-assigned risk tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Semaforo {
    #[serde(rename = "rojo")]
    Rojo,
    #[serde(rename = "verde")]
    Verde,
}

impl Semaforo {
    pub fn label(&self) -> &'static str {
        match self {
            Semaforo::Rojo => "Riesgo Alto",
            Semaforo::Verde => "Normal",
        }
    }

    pub fn is_risk(&self) -> bool {
        matches!(self, Semaforo::Rojo)
    }
}

/// Row from `GET /gestion-obsoletos`. The endpoint spells the SKU field
/// `skud`; the alias absorbs it here so nothing downstream ever sees it.
#[derive(Debug, Clone, Deserialize)]
pub struct ObsoleteProduct {
    #[serde(rename = "skuId", alias = "skud")]
    pub sku_id: i64,
    #[serde(rename = "ProductName")]
    pub product_name: String,
    #[serde(rename = "Brand")]
    pub brand: String,
    pub categoria: String,
    pub dias_inventario: i64,
    pub ratio_stock_venta: f64,
    pub semaforo: Semaforo,
}

impl ObsoleteProduct {
    pub fn high_inventory(&self) -> bool {
        self.dias_inventario > RISK_INVENTORY_DAYS
    }

    pub fn high_ratio(&self) -> bool {
        self.ratio_stock_venta > RISK_STOCK_RATIO
    }
}

/// `POST /marcar-obsoleto` payload.
#[derive(Debug, Clone, Serialize)]
pub struct MarkObsoleteRequest {
    pub sku_ids: Vec<i64>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MarkObsoleteResponse {
    #[serde(default)]
    pub skus_actualizados: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_decodes_with_skud_spelling() {
        let p: ObsoleteProduct = serde_json::from_str(
            r#"{"skud":345,"ProductName":"TV 50\"","Brand":"LG","categoria":"Electro",
                "dias_inventario":130,"ratio_stock_venta":4.5,"semaforo":"rojo"}"#,
        )
        .unwrap();
        assert_eq!(p.sku_id, 345);
        assert!(p.semaforo.is_risk());
        assert!(p.high_inventory());
        assert!(p.high_ratio());
    }

    #[test]
    fn healthy_row_below_both_thresholds() {
        let p: ObsoleteProduct = serde_json::from_str(
            r#"{"skuId":12,"ProductName":"Olla","Brand":"Oster","categoria":"Hogar",
                "dias_inventario":120,"ratio_stock_venta":4.0,"semaforo":"verde"}"#,
        )
        .unwrap();
        assert!(!p.semaforo.is_risk());
        assert!(!p.high_inventory());
        assert!(!p.high_ratio());
        assert_eq!(p.semaforo.label(), "Normal");
    }
}
