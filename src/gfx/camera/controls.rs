//! # Camera Parameter Controls
//!
//! A fixed table of discrete controls, each nudging one [`ViewState`] scalar
//! by a signed step and clamping the result. Bounds are either literal or
//! derived from the *current* value of another scalar, which is how the
//! near and far planes keep `near < far` without rejecting any input.

use super::view_state::{Field, ProjectionState, ViewState};

/// Lower or upper limit of a control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Literal(f32),
    /// Current value of another field plus an offset.
    DerivedFrom(Field, f32),
}

impl Bound {
    pub fn resolve(&self, state: &ViewState) -> f32 {
        match *self {
            Bound::Literal(value) => value,
            Bound::DerivedFrom(field, offset) => state.get(field) + offset,
        }
    }
}

/// One trigger of the control surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Control {
    pub id: &'static str,
    pub field: Field,
    pub increment: f32,
    pub min: Option<Bound>,
    pub max: Option<Bound>,
}

impl Control {
    const fn step(id: &'static str, field: Field, increment: f32) -> Self {
        Self {
            id,
            field,
            increment,
            min: None,
            max: None,
        }
    }

    const fn bounded(
        id: &'static str,
        field: Field,
        increment: f32,
        min: Option<Bound>,
        max: Option<Bound>,
    ) -> Self {
        Self {
            id,
            field,
            increment,
            min,
            max,
        }
    }

    /// Applies this control to `state` and returns the new value.
    ///
    /// Bounds are resolved before the increment is added. The lower bound is
    /// applied first, so the upper bound wins if the two ever cross.
    pub fn apply(&self, state: &mut ViewState) -> f32 {
        let min = self.min.map(|bound| bound.resolve(state));
        let max = self.max.map(|bound| bound.resolve(state));

        let value = state.field_mut(self.field);
        *value += self.increment;
        if let Some(min) = min {
            *value = value.max(min);
        }
        if let Some(max) = max {
            *value = value.min(max);
        }
        *value
    }
}

const FOV_MIN: Option<Bound> = Some(Bound::Literal(ProjectionState::MIN_FOV));
const FOV_MAX: Option<Bound> = Some(Bound::Literal(ProjectionState::MAX_FOV));
const NEAR_MIN: Option<Bound> = Some(Bound::Literal(ProjectionState::MIN_NEAR));
const NEAR_MAX: Option<Bound> = Some(Bound::DerivedFrom(
    Field::Far,
    -ProjectionState::PLANE_GAP,
));
const FAR_MIN: Option<Bound> = Some(Bound::DerivedFrom(
    Field::Near,
    ProjectionState::PLANE_GAP,
));

/// Every control the UI exposes, in panel order.
pub const CONTROLS: [Control; 24] = [
    Control::bounded("fov+", Field::Fov, 5.0, FOV_MIN, FOV_MAX),
    Control::bounded("fov-", Field::Fov, -5.0, FOV_MIN, FOV_MAX),
    Control::bounded("near+", Field::Near, 1.0, NEAR_MIN, NEAR_MAX),
    Control::bounded("near-", Field::Near, -1.0, NEAR_MIN, NEAR_MAX),
    Control::step("far+", Field::Far, 10.0),
    Control::bounded("far-", Field::Far, -10.0, FAR_MIN, None),
    Control::step("eyeX+", Field::EyeX, 1.0),
    Control::step("eyeX-", Field::EyeX, -1.0),
    Control::step("eyeY+", Field::EyeY, 1.0),
    Control::step("eyeY-", Field::EyeY, -1.0),
    Control::step("eyeZ+", Field::EyeZ, 1.0),
    Control::step("eyeZ-", Field::EyeZ, -1.0),
    Control::step("atX+", Field::AtX, 1.0),
    Control::step("atX-", Field::AtX, -1.0),
    Control::step("atY+", Field::AtY, 1.0),
    Control::step("atY-", Field::AtY, -1.0),
    Control::step("atZ+", Field::AtZ, 1.0),
    Control::step("atZ-", Field::AtZ, -1.0),
    Control::step("upX+", Field::UpX, 1.0),
    Control::step("upX-", Field::UpX, -1.0),
    Control::step("upY+", Field::UpY, 1.0),
    Control::step("upY-", Field::UpY, -1.0),
    Control::step("upZ+", Field::UpZ, 1.0),
    Control::step("upZ-", Field::UpZ, -1.0),
];

/// Looks up controls by id and applies them.
#[derive(Debug, Clone, Copy)]
pub struct ControlSurface {
    controls: &'static [Control],
}

impl Default for ControlSurface {
    fn default() -> Self {
        Self::new(&CONTROLS)
    }
}

impl ControlSurface {
    pub fn new(controls: &'static [Control]) -> Self {
        Self { controls }
    }

    pub fn controls(&self) -> &'static [Control] {
        self.controls
    }

    pub fn find(&self, id: &str) -> Option<&'static Control> {
        self.controls.iter().find(|control| control.id == id)
    }

    /// Applies the control named `id`, returning the field's new value.
    /// Unknown ids are logged and leave the state untouched.
    pub fn trigger(&self, id: &str, state: &mut ViewState) -> Option<f32> {
        let Some(control) = self.find(id) else {
            log::warn!("Ignoring unknown control '{}'", id);
            return None;
        };
        let value = control.apply(state);
        log::debug!("{} -> {} = {}", id, control.field.name(), value);
        Some(value)
    }
}
