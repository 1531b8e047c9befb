use leptos::prelude::*;

/// The five views of the application. Navigation is a plain switch over
/// this enum; there is no URL routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Inicio,
    GestionObsoletos,
    GestionDescuentos,
    Monitoreo,
    Alertas,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Inicio,
        View::GestionObsoletos,
        View::GestionDescuentos,
        View::Monitoreo,
        View::Alertas,
    ];

    /// Menu label.
    pub fn title(&self) -> &'static str {
        match self {
            View::Inicio => "Inicio",
            View::GestionObsoletos => "Gestión de Obsoletos",
            View::GestionDescuentos => "Gestión de Descuentos",
            View::Monitoreo => "Monitoreo y Optimización",
            View::Alertas => "Alertas",
        }
    }

    /// Header title; the home view carries its own heading.
    pub fn header_title(&self) -> &'static str {
        match self {
            View::Inicio => "Dashboard de Mando",
            other => other.title(),
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            View::Inicio => "house",
            View::GestionObsoletos => "list",
            View::GestionDescuentos => "star",
            View::Monitoreo => "line-chart",
            View::Alertas => "bell",
        }
    }
}

/// Application-level state owned by the shell and shared via context:
/// the active view plus the cross-view filter handoff (a dashboard alert
/// row pre-filters the obsolescence view by category).
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_view: RwSignal<View>,
    pub pending_category: RwSignal<Option<String>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_view: RwSignal::new(View::Inicio),
            pending_category: RwSignal::new(None),
        }
    }

    pub fn activate(&self, view: View) {
        self.active_view.set(view);
    }

    /// Navigates to the obsolescence view with a category pre-filter.
    pub fn open_obsoletos_for(&self, categoria: String) {
        self.pending_category.set(Some(categoria));
        self.active_view.set(View::GestionObsoletos);
    }

    /// Consumes the pending category filter so it fires only once.
    pub fn take_pending_category(&self) -> Option<String> {
        let pending = self.pending_category.get_untracked();
        if pending.is_some() {
            self.pending_category.set(None);
        }
        pending
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
