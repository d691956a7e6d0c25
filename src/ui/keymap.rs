// src/ui/keymap.rs
//! Keyboard shortcuts for the camera controls
//!
//! Arrow keys and Page Up/Down move the eye along X, Y and Z. Holding Shift
//! moves the look-at target instead; holding Alt tilts the up vector.
//! `=`/`-` widen and narrow the field of view, `[`/`]` pull the near plane
//! in and out, and `,`/`.` do the same for the far plane.

use winit::keyboard::{KeyCode, ModifiersState};

use crate::gfx::camera::{Field, CONTROLS};

/// The X, Y and Z fields the axis keys steer under `modifiers`.
fn axis_fields(modifiers: ModifiersState) -> [Field; 3] {
    if modifiers.shift_key() {
        [Field::AtX, Field::AtY, Field::AtZ]
    } else if modifiers.alt_key() {
        [Field::UpX, Field::UpY, Field::UpZ]
    } else {
        [Field::EyeX, Field::EyeY, Field::EyeZ]
    }
}

/// Control id bound to `key` under `modifiers`, if any.
pub fn control_for_key(key: KeyCode, modifiers: ModifiersState) -> Option<&'static str> {
    let [x, y, z] = axis_fields(modifiers);
    let (field, increase) = match key {
        KeyCode::Equal => (Field::Fov, true),
        KeyCode::Minus => (Field::Fov, false),
        KeyCode::BracketRight => (Field::Near, true),
        KeyCode::BracketLeft => (Field::Near, false),
        KeyCode::Period => (Field::Far, true),
        KeyCode::Comma => (Field::Far, false),
        KeyCode::ArrowRight => (x, true),
        KeyCode::ArrowLeft => (x, false),
        KeyCode::ArrowUp => (y, true),
        KeyCode::ArrowDown => (y, false),
        KeyCode::PageDown => (z, true),
        KeyCode::PageUp => (z, false),
        _ => return None,
    };

    CONTROLS
        .iter()
        .find(|control| control.field == field && (control.increment > 0.0) == increase)
        .map(|control| control.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::camera::ControlSurface;
    use std::collections::HashSet;

    const KEYS: [KeyCode; 12] = [
        KeyCode::Equal,
        KeyCode::Minus,
        KeyCode::BracketLeft,
        KeyCode::BracketRight,
        KeyCode::Comma,
        KeyCode::Period,
        KeyCode::ArrowRight,
        KeyCode::ArrowLeft,
        KeyCode::ArrowUp,
        KeyCode::ArrowDown,
        KeyCode::PageDown,
        KeyCode::PageUp,
    ];

    #[test]
    fn test_every_control_is_reachable() {
        let surface = ControlSurface::default();
        let mut reached = HashSet::new();
        for modifiers in [
            ModifiersState::empty(),
            ModifiersState::SHIFT,
            ModifiersState::ALT,
        ] {
            for key in KEYS {
                let id = control_for_key(key, modifiers).unwrap();
                assert!(surface.find(id).is_some(), "{id} is not a control");
                reached.insert(id);
            }
        }
        assert_eq!(reached.len(), surface.controls().len());
    }

    #[test]
    fn test_modifiers_select_vector() {
        assert_eq!(
            control_for_key(KeyCode::ArrowUp, ModifiersState::empty()),
            Some("eyeY+")
        );
        assert_eq!(
            control_for_key(KeyCode::ArrowUp, ModifiersState::SHIFT),
            Some("atY+")
        );
        assert_eq!(
            control_for_key(KeyCode::PageUp, ModifiersState::ALT),
            Some("upZ-")
        );
        // projection keys ignore modifiers
        assert_eq!(
            control_for_key(KeyCode::Equal, ModifiersState::SHIFT),
            Some("fov+")
        );
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(
            control_for_key(KeyCode::KeyQ, ModifiersState::empty()),
            None
        );
    }
}
