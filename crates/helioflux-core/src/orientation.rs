use crate::constants::{DRAG_DEGREES_PER_PX, PITCH_LIMIT_DEG, RESET_PITCH_DEG, RESET_YAW_DEG};
use glam::Vec2;

pub const GENERIC_COMPONENT_DESCRIPTION: &str =
    "High-quality component essential for HelioFlux operation.";
pub const PLACEHOLDER_COMPONENT_NAME: &str = "Select a component above";
pub const PLACEHOLDER_COMPONENT_DESCRIPTION: &str =
    "Click on any component button to see details and highlight it in the 3D model.";

/// Components of the unit, top layer first.
pub const COMPONENT_CATALOG: &[(&str, &str)] = &[
    (
        "Brushed Stainless Steel Sheet",
        "Top protective layer providing durability and weather resistance. Made from high-grade 304 stainless steel.",
    ),
    (
        "Spring Steel Platform",
        "Magnetic base platform that provides flexibility and easy maintenance access. 135x75mm dimensions.",
    ),
    (
        "Thermal Grizzly Aeronaut Paste",
        "High-performance thermal paste ensuring optimal heat transfer between components.",
    ),
    (
        "TEC1-12706 Thermoelectric Cooler",
        "Core Peltier module that converts temperature differences into electrical energy with maximum efficiency.",
    ),
    (
        "Aluminum Heat Sinks",
        "40x20x40mm cooler fins that dissipate heat effectively, maintaining optimal operating temperatures.",
    ),
    (
        "40mm Cooling Fan",
        "5V brushless cooling fan (5000 RPM) with foam padding for enhanced heat management.",
    ),
    (
        "MT3608 LM2577 DC-DC Boost Converter",
        "Voltage regulator that steps up power from 2V-24V to 5V-28V for optimal energy distribution.",
    ),
    (
        "1N5819 Schottky Barrier Rectifiers",
        "Low-loss current flow diodes ensuring efficient power conversion and protection.",
    ),
    (
        "User Device Connections",
        "Connection point where electrician connects user devices and appliances to the HelioFlux unit.",
    ),
];

#[inline]
pub fn describe_component(name: &str) -> &'static str {
    COMPONENT_CATALOG
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, d)| *d)
        .unwrap_or(GENERIC_COMPONENT_DESCRIPTION)
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging {
        anchor: Vec2,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation {
    pub pitch: f32,
    pub yaw: f32,
}

impl Default for Orientation {
    fn default() -> Self {
        Self {
            pitch: RESET_PITCH_DEG,
            yaw: RESET_YAW_DEG,
        }
    }
}

impl Orientation {
    /// CSS transform placing the centred model at this orientation.
    pub fn css_transform(&self) -> String {
        format!(
            "translate(-50%, -50%) rotateX({}deg) rotateY({}deg)",
            self.pitch, self.yaw
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComponentInfo {
    pub name: String,
    pub description: &'static str,
}

/// Pointer-driven pitch/yaw for the component viewer plus its view toggles.
#[derive(Default)]
pub struct OrientationController {
    orientation: Orientation,
    phase: DragPhase,
    auto_rotate: bool,
    exploded: bool,
    highlighted: Option<String>,
}

impl OrientationController {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    #[inline]
    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    #[inline]
    pub fn exploded(&self) -> bool {
        self.exploded
    }

    pub fn highlighted(&self) -> Option<&str> {
        self.highlighted.as_deref()
    }

    pub fn begin_drag(&mut self, at: Vec2) {
        self.phase = DragPhase::Dragging { anchor: at };
    }

    /// Apply one move event. The anchor follows the pointer so every delta is
    /// relative to the previous move. Returns the orientation to render, or
    /// `None` when idle or while auto-rotate owns the model.
    pub fn drag_to(&mut self, at: Vec2) -> Option<Orientation> {
        let DragPhase::Dragging { anchor } = self.phase else {
            return None;
        };
        self.phase = DragPhase::Dragging { anchor: at };
        if self.auto_rotate {
            return None;
        }
        let delta = at - anchor;
        self.orientation.yaw += delta.x * DRAG_DEGREES_PER_PX;
        self.orientation.pitch = (self.orientation.pitch - delta.y * DRAG_DEGREES_PER_PX)
            .clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
        Some(self.orientation)
    }

    /// Returns true when a drag was in progress.
    pub fn end_drag(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.phase = DragPhase::Idle;
        was_dragging
    }

    pub fn toggle_auto_rotate(&mut self) -> bool {
        self.auto_rotate = !self.auto_rotate;
        self.auto_rotate
    }

    pub fn toggle_exploded(&mut self) -> bool {
        self.exploded = !self.exploded;
        self.exploded
    }

    pub fn select(&mut self, name: &str) -> ComponentInfo {
        self.highlighted = Some(name.to_string());
        ComponentInfo {
            name: name.to_string(),
            description: describe_component(name),
        }
    }

    pub fn reset(&mut self) {
        self.orientation = Orientation::default();
        self.auto_rotate = false;
        self.exploded = false;
        self.highlighted = None;
    }
}
