// src/ui/panel.rs
//! Camera control panel
//!
//! One row per adjustable scalar: its current value and a button for each
//! control that nudges it.

use crate::gfx::camera::{Control, ControlSurface, Field, ViewState};

/// A panel row: the field and the controls that decrease and increase it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlRow {
    pub field: Field,
    pub decrease: Option<&'static Control>,
    pub increase: Option<&'static Control>,
}

/// Groups the surface's controls by field, in [`Field::ALL`] order.
pub fn control_rows(surface: &ControlSurface) -> Vec<ControlRow> {
    Field::ALL
        .iter()
        .map(|&field| {
            let mut row = ControlRow {
                field,
                decrease: None,
                increase: None,
            };
            for control in surface.controls().iter().filter(|c| c.field == field) {
                if control.increment < 0.0 {
                    row.decrease = Some(control);
                } else {
                    row.increase = Some(control);
                }
            }
            row
        })
        .filter(|row| row.decrease.is_some() || row.increase.is_some())
        .collect()
}

fn section_title(field: Field) -> Option<&'static str> {
    match field {
        Field::Fov => Some("Projection"),
        Field::EyeX => Some("Eye"),
        Field::AtX => Some("Look at"),
        Field::UpX => Some("Up"),
        _ => None,
    }
}

/// Draws the control panel and returns the ids of the buttons clicked this
/// frame. The caller applies them to the state.
pub fn camera_controls_panel(
    ui: &imgui::Ui,
    surface: &ControlSurface,
    state: &ViewState,
) -> Vec<&'static str> {
    let mut triggered = Vec::new();

    ui.window("Camera")
        .size([260.0, 0.0], imgui::Condition::FirstUseEver)
        .position([10.0, 10.0], imgui::Condition::FirstUseEver)
        .always_auto_resize(true)
        .collapsible(true)
        .build(|| {
            for row in control_rows(surface) {
                if let Some(title) = section_title(row.field) {
                    ui.separator();
                    ui.text(title);
                }

                for control in [row.decrease, row.increase].into_iter().flatten() {
                    let label = if control.increment < 0.0 { "-" } else { "+" };
                    if ui.button(format!("{label}##{}", control.id)) {
                        triggered.push(control.id);
                    }
                    ui.same_line();
                }
                ui.text(format!("{:>5} {:8.2}", row.field.name(), state.get(row.field)));
            }
        });

    triggered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_cover_every_control_once() {
        let surface = ControlSurface::default();
        let rows = control_rows(&surface);
        assert_eq!(rows.len(), Field::ALL.len());

        let ids: Vec<_> = rows
            .iter()
            .flat_map(|row| [row.decrease, row.increase])
            .flatten()
            .map(|control| control.id)
            .collect();
        assert_eq!(ids.len(), surface.controls().len());
    }

    #[test]
    fn test_far_row() {
        let rows = control_rows(&ControlSurface::default());
        let far = rows.iter().find(|row| row.field == Field::Far).unwrap();
        assert_eq!(far.decrease.map(|c| c.id), Some("far-"));
        assert_eq!(far.increase.map(|c| c.id), Some("far+"));
    }
}
