#![allow(dead_code)]

//! Selection Modal Controller — owns the template-selection surface and its
//! state machine (`Closed → Open`).
//!
//! The surface is materialized once on first `open()` and reused afterwards;
//! each registry template becomes a selectable card with radio semantics
//! (`role="radio"`, `aria-checked`). Exactly one card is checked at all
//! times, defaulting to the modern template.

use serde::Serialize;

use crate::render::escape;
use crate::templates::{self, Template, TemplateId};

/// Where input focus should land after the last state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FocusTarget {
    /// The primary export control inside the modal.
    ExportButton,
    /// The name input in the host form (after a validation failure).
    NameField,
}

/// Dismissal triggers. All of them route through `close()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTrigger {
    CloseControl,
    CancelControl,
    BackdropClick,
    EscapeKey,
}

/// Modal state owned exclusively by the controller; mutated only by user
/// interaction or a successful export completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModalState {
    pub is_open: bool,
    pub selected: TemplateId,
}

impl Default for ModalState {
    fn default() -> Self {
        Self {
            is_open: false,
            selected: TemplateId::Modern,
        }
    }
}

/// One selectable card on the surface, mirroring a registry template.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateCard {
    pub template_id: TemplateId,
    pub checked: bool,
}

/// The materialized modal surface: one card per registry template.
/// Built once and reused across open/close cycles.
#[derive(Debug, Clone, Serialize)]
pub struct ModalSurface {
    pub cards: Vec<TemplateCard>,
}

impl ModalSurface {
    fn materialize(selected: TemplateId) -> Self {
        Self {
            cards: TemplateId::ALL
                .iter()
                .map(|&id| TemplateCard {
                    template_id: id,
                    checked: id == selected,
                })
                .collect(),
        }
    }

    fn set_checked(&mut self, selected: TemplateId) {
        for card in &mut self.cards {
            card.checked = card.template_id == selected;
        }
    }
}

#[derive(Debug, Default)]
pub struct ModalController {
    state: ModalState,
    surface: Option<ModalSurface>,
    focus: Option<FocusTarget>,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn selected(&self) -> &'static Template {
        templates::get(self.state.selected)
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn focus(&self) -> Option<FocusTarget> {
        self.focus
    }

    /// Whether the surface has been materialized (at most once per controller).
    pub fn surface(&self) -> Option<&ModalSurface> {
        self.surface.as_ref()
    }

    /// `Closed → Open`. Materializes the surface on first use, reuses it
    /// afterwards, and moves focus to the primary export control.
    pub fn open(&mut self) {
        if self.surface.is_none() {
            self.surface = Some(ModalSurface::materialize(self.state.selected));
        }
        self.state.is_open = true;
        self.focus = Some(FocusTarget::ExportButton);
    }

    /// `Open → Closed`. Idempotent: closing an already-closed modal is a no-op.
    pub fn close(&mut self) {
        self.state.is_open = false;
        self.focus = None;
    }

    pub fn dismiss(&mut self, _trigger: DismissTrigger) {
        self.close();
    }

    /// Selects a template by id string. Unknown ids are silently ignored;
    /// known ids update the selection and the cards' checked flags.
    pub fn select_template(&mut self, id: &str) {
        let Some(id) = TemplateId::parse(id) else {
            return;
        };
        self.state.selected = id;
        if let Some(surface) = self.surface.as_mut() {
            surface.set_checked(id);
        }
    }

    /// Requests focus on the host form's name input (validation failure path).
    pub fn focus_name_field(&mut self) {
        self.focus = Some(FocusTarget::NameField);
    }

    /// Renders the dialog markup for embedding hosts: radio-group card grid
    /// with per-template preview thumbs, cancel/export footer controls.
    pub fn surface_html(&self) -> String {
        let selected = self.state.selected;
        let cards: String = templates::all()
            .iter()
            .map(|t| card_html(t, t.id == selected))
            .collect();

        format!(
            "<div id=\"pdf-export-modal\" class=\"pdf-modal-overlay{open}\" role=\"dialog\" \
             aria-modal=\"true\" aria-label=\"Export Resume as PDF\">\
             <div class=\"pdf-modal-content\">\
             <div class=\"pdf-modal-header\"><h2>Export Resume as PDF</h2>\
             <button class=\"pdf-modal-close\" aria-label=\"Close modal\">&times;</button></div>\
             <div class=\"pdf-modal-body\">\
             <p class=\"pdf-modal-subtitle\">Choose a template for your resume</p>\
             <div class=\"pdf-template-grid\" role=\"radiogroup\" aria-label=\"Resume templates\">\
             {cards}</div></div>\
             <div class=\"pdf-modal-footer\">\
             <button class=\"pdf-btn-cancel\" id=\"pdf-cancel-btn\">Cancel</button>\
             <button class=\"pdf-btn-export\" id=\"pdf-export-btn\">Export PDF</button>\
             </div></div></div>",
            open = if self.state.is_open { " open" } else { "" },
        )
    }
}

fn card_html(t: &Template, checked: bool) -> String {
    format!(
        "<button class=\"pdf-template-card{sel}\" data-template=\"{id}\" role=\"radio\" \
         aria-checked=\"{checked}\" aria-label=\"{name} template\">\
         <div class=\"pdf-template-preview template-thumb-{id}\">\
         <div class=\"thumb-header\" style=\"text-align:{align}\">\
         <div class=\"thumb-name\"></div><div class=\"thumb-contact\"></div></div></div>\
         <div class=\"pdf-template-info\"><span class=\"pdf-template-icon\">{icon}</span>\
         <strong>{name}</strong>\
         <span class=\"pdf-template-desc\">{desc}</span></div>\
         <div class=\"pdf-template-check\" aria-hidden=\"true\">✓</div></button>",
        sel = if checked { " selected" } else { "" },
        id = t.id,
        name = escape(t.name),
        align = t.header_align.css(),
        icon = t.icon,
        desc = escape(t.description),
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection_is_modern_and_closed() {
        let ctrl = ModalController::new();
        assert_eq!(ctrl.state().selected, TemplateId::Modern);
        assert!(!ctrl.is_open());
        assert!(ctrl.surface().is_none());
    }

    #[test]
    fn test_open_materializes_one_card_per_template() {
        let mut ctrl = ModalController::new();
        ctrl.open();
        let surface = ctrl.surface().unwrap();
        assert_eq!(surface.cards.len(), TemplateId::ALL.len());
        assert!(ctrl.is_open());
        assert_eq!(ctrl.focus(), Some(FocusTarget::ExportButton));
    }

    #[test]
    fn test_reopen_reuses_existing_surface() {
        let mut ctrl = ModalController::new();
        ctrl.open();
        ctrl.select_template("creative");
        ctrl.close();
        ctrl.open();
        // The surface is the same materialization: selection survives.
        let surface = ctrl.surface().unwrap();
        assert_eq!(surface.cards.len(), 4);
        let checked: Vec<TemplateId> = surface
            .cards
            .iter()
            .filter(|c| c.checked)
            .map(|c| c.template_id)
            .collect();
        assert_eq!(checked, vec![TemplateId::Creative]);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut ctrl = ModalController::new();
        ctrl.close();
        ctrl.close();
        assert!(!ctrl.is_open());
    }

    #[test]
    fn test_unknown_id_leaves_selection_unchanged() {
        let mut ctrl = ModalController::new();
        ctrl.open();
        ctrl.select_template("professional");
        ctrl.select_template("vaporwave");
        assert_eq!(ctrl.state().selected, TemplateId::Professional);
    }

    #[test]
    fn test_exactly_one_card_checked_after_any_sequence() {
        let mut ctrl = ModalController::new();
        ctrl.open();
        for id in ["minimal", "nope", "creative", "creative", "", "modern"] {
            ctrl.select_template(id);
            let checked = ctrl
                .surface()
                .unwrap()
                .cards
                .iter()
                .filter(|c| c.checked)
                .count();
            assert_eq!(checked, 1, "after selecting {id:?}");
        }
        assert_eq!(ctrl.state().selected, TemplateId::Modern);
    }

    #[test]
    fn test_all_dismiss_triggers_close() {
        for trigger in [
            DismissTrigger::CloseControl,
            DismissTrigger::CancelControl,
            DismissTrigger::BackdropClick,
            DismissTrigger::EscapeKey,
        ] {
            let mut ctrl = ModalController::new();
            ctrl.open();
            ctrl.dismiss(trigger);
            assert!(!ctrl.is_open(), "{trigger:?} did not close");
        }
    }

    #[test]
    fn test_surface_html_marks_selected_card_checked() {
        let mut ctrl = ModalController::new();
        ctrl.open();
        ctrl.select_template("minimal");
        let html = ctrl.surface_html();
        assert_eq!(html.matches("aria-checked=\"true\"").count(), 1);
        assert_eq!(html.matches("aria-checked=\"false\"").count(), 3);
        assert!(html.contains("data-template=\"minimal\" role=\"radio\" aria-checked=\"true\""));
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("role=\"radiogroup\""));
    }
}
