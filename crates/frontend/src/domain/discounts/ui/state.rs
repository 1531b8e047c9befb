use std::collections::HashSet;

use contracts::domain::discounts::{
    DiscountCandidate, DiscountSuggestion, HistoryEntry, PricingItem, PricingRequest,
};
use contracts::shared::selection;
use leptos::prelude::*;

/// State of the discount-simulation table: the candidate rows with their
/// derived fields plus the multi-selection. All transitions are synchronous
/// and pure; the widget owns the fetches and mutations around them.
#[derive(Debug, Clone, Default)]
pub struct DiscountBoard {
    pub candidates: Vec<DiscountCandidate>,
    pub selected: HashSet<i64>,
}

impl DiscountBoard {
    /// Replaces the board with a fresh search result. The final discount of
    /// each row defaults to the AI suggestion; the selection is cleared.
    pub fn load(&mut self, suggestions: Vec<DiscountSuggestion>) {
        self.candidates = suggestions
            .into_iter()
            .map(DiscountCandidate::from_suggestion)
            .collect();
        self.selected.clear();
    }

    pub fn clear(&mut self) {
        self.candidates.clear();
        self.selected.clear();
    }

    /// Re-derives one row from raw discount input (clamped to `[0, 100]`).
    pub fn edit_discount(&mut self, sku_id: i64, raw: &str) {
        if let Some(c) = self.candidates.iter_mut().find(|c| c.sku_id == sku_id) {
            *c = c.with_discount_input(raw);
        }
    }

    /// Resets one row's final discount back to the AI suggestion.
    pub fn apply_suggestion(&mut self, sku_id: i64) {
        if let Some(c) = self.candidates.iter_mut().find(|c| c.sku_id == sku_id) {
            *c = c.with_final_discount(c.dto_sugerido);
        }
    }

    pub fn toggle_select(&mut self, sku_id: i64) {
        selection::toggle(&mut self.selected, sku_id);
    }

    pub fn toggle_select_all(&mut self) {
        let ids: Vec<i64> = self.candidates.iter().map(|c| c.sku_id).collect();
        selection::toggle_all_displayed(&mut self.selected, &ids);
    }

    pub fn all_selected(&self) -> bool {
        let ids: Vec<i64> = self.candidates.iter().map(|c| c.sku_id).collect();
        selection::all_displayed_selected(&self.selected, &ids)
    }

    fn selected_candidates(&self) -> impl Iterator<Item = &DiscountCandidate> {
        self.candidates
            .iter()
            .filter(|c| self.selected.contains(&c.sku_id))
    }

    /// Submission payload for every selected row.
    pub fn pricing_request(&self) -> PricingRequest {
        PricingRequest {
            productos: self
                .selected_candidates()
                .map(|c| PricingItem {
                    sku_id: c.sku_id,
                    dto_final: c.dto_final,
                    p_liquidacion: c.p_liquidacion,
                })
                .collect(),
        }
    }

    /// Finalizes a successful submission: removes the selected rows, clears
    /// the selection and returns the history entries to prepend, in row
    /// order. Called only after the server accepted the batch.
    pub fn commit_submission(&mut self) -> Vec<HistoryEntry> {
        let selected = std::mem::take(&mut self.selected);
        let entries: Vec<HistoryEntry> = self
            .candidates
            .iter()
            .filter(|c| selected.contains(&c.sku_id))
            .map(DiscountCandidate::to_history_entry)
            .collect();
        self.candidates.retain(|c| !selected.contains(&c.sku_id));
        entries
    }
}

pub fn create_state() -> RwSignal<DiscountBoard> {
    RwSignal::new(DiscountBoard::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::discounts::SubmissionStatus;

    fn suggestion(sku_id: i64, dto: f64) -> DiscountSuggestion {
        serde_json::from_str(&format!(
            r#"{{"skuId":{sku_id},"Producto":"P{sku_id}","P_Regular":200.0,"Stock":10,
                "Dto_Sugerido":{dto},"Justificacion":"rotación lenta"}}"#,
        ))
        .unwrap()
    }

    fn board_with(n: i64) -> DiscountBoard {
        let mut board = DiscountBoard::default();
        board.load((1..=n).map(|i| suggestion(i, 25.0)).collect());
        board
    }

    #[test]
    fn load_defaults_final_discount_to_suggestion() {
        let board = board_with(3);
        assert_eq!(board.candidates.len(), 3);
        assert!(board.selected.is_empty());
        assert!(board.candidates.iter().all(|c| c.dto_final == 25.0));
        assert_eq!(board.candidates[0].p_liquidacion, 150.0);
    }

    #[test]
    fn edit_clamps_and_rederives() {
        let mut board = board_with(1);
        board.edit_discount(1, "150");
        assert_eq!(board.candidates[0].dto_final, 100.0);
        assert_eq!(board.candidates[0].p_liquidacion, 0.0);
        assert!(board.candidates[0].has_warning);

        board.edit_discount(1, "");
        assert_eq!(board.candidates[0].dto_final, 0.0);
        assert_eq!(board.candidates[0].p_liquidacion, 200.0);
    }

    #[test]
    fn apply_suggestion_restores_default() {
        let mut board = board_with(1);
        board.edit_discount(1, "90");
        board.apply_suggestion(1);
        assert_eq!(board.candidates[0].dto_final, 25.0);
        assert!(!board.candidates[0].has_warning);
    }

    #[test]
    fn select_all_toggles_every_row() {
        let mut board = board_with(4);
        board.toggle_select_all();
        assert!(board.all_selected());
        board.toggle_select_all();
        assert!(board.selected.is_empty());
    }

    #[test]
    fn pricing_request_covers_only_selected_rows() {
        let mut board = board_with(3);
        board.toggle_select(1);
        board.toggle_select(3);
        board.edit_discount(3, "50");

        let req = board.pricing_request();
        assert_eq!(req.productos.len(), 2);
        let row3 = req.productos.iter().find(|p| p.sku_id == 3).unwrap();
        assert_eq!(row3.dto_final, 50.0);
        assert_eq!(row3.p_liquidacion, 100.0);
    }

    #[test]
    fn commit_removes_submitted_rows_and_clears_selection() {
        let mut board = board_with(3);
        board.toggle_select(1);
        board.toggle_select(2);

        let entries = board.commit_submission();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.estado == SubmissionStatus::Procesado));
        assert_eq!(board.candidates.len(), 1);
        assert_eq!(board.candidates[0].sku_id, 3);
        assert!(board.selected.is_empty());
    }
}
