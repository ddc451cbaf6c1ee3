use crate::animation::direction::{Direction, DirectionSet};

/// Lowest accepted zoom scale.
pub const MIN_SCALE: f64 = 0.1;
/// Highest accepted zoom scale.
pub const MAX_SCALE: f64 = 3.0;
/// Upper end of the documented intensity range.
pub const MAX_INTENSITY: f64 = 10.0;

/// Animation family, independent of its parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationKind {
    /// Pan and/or zoom across a still image.
    KenBurns,
    /// Crop-window slide along one axis.
    Parallax,
    /// Periodic subtle motion.
    Cinemagraph,
    /// Field-of-view zoom ramp.
    DollyZoom,
    /// No motion.
    Static,
}

impl AnimationKind {
    /// Every kind in UI order.
    pub const ALL: [AnimationKind; 5] = [
        Self::KenBurns,
        Self::Parallax,
        Self::Cinemagraph,
        Self::DollyZoom,
        Self::Static,
    ];

    /// Label shown by the authoring UI (`"Ken Burns"`, `"Dolly Zoom"`, ...).
    pub fn label(self) -> &'static str {
        match self {
            Self::KenBurns => "Ken Burns",
            Self::Parallax => "Parallax",
            Self::Cinemagraph => "Cinemagraph",
            Self::DollyZoom => "Dolly Zoom",
            Self::Static => "Static",
        }
    }

    /// Parse a UI label. Case, spaces, dashes and underscores are ignored; `"none"` means static.
    pub fn parse(s: &str) -> Option<Self> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "kenburns" => Some(Self::KenBurns),
            "parallax" => Some(Self::Parallax),
            "cinemagraph" => Some(Self::Cinemagraph),
            "dollyzoom" => Some(Self::DollyZoom),
            "static" | "none" => Some(Self::Static),
            _ => None,
        }
    }
}

impl std::fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Axis and sign of a parallax slide.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParallaxDirection {
    /// Window moves right, same sign as a Ken Burns `pan-right`.
    #[default]
    LeftToRight,
    /// Window moves left.
    RightToLeft,
    /// Window moves down.
    TopToBottom,
    /// Window moves up.
    BottomToTop,
}

impl ParallaxDirection {
    /// Parse a wire string. Pan direction strings are accepted with the matching sign.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left-to-right" | "pan-right" => Some(Self::LeftToRight),
            "right-to-left" | "pan-left" => Some(Self::RightToLeft),
            "top-to-bottom" | "pan-down" => Some(Self::TopToBottom),
            "bottom-to-top" | "pan-up" => Some(Self::BottomToTop),
            _ => None,
        }
    }

    /// `true` when the slide moves along the x axis.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::LeftToRight | Self::RightToLeft)
    }

    /// `true` when the crop offset grows over time.
    pub fn is_forward(self) -> bool {
        matches!(self, Self::LeftToRight | Self::TopToBottom)
    }

    /// Equivalent Ken Burns pan direction.
    pub fn as_pan(self) -> Direction {
        match self {
            Self::LeftToRight => Direction::PanRight,
            Self::RightToLeft => Direction::PanLeft,
            Self::TopToBottom => Direction::PanDown,
            Self::BottomToTop => Direction::PanUp,
        }
    }
}

/// Cinemagraph motion pattern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CinemagraphMotion {
    /// Zoom oscillates around 1.0.
    #[default]
    SubtleZoom,
    /// Horizontal crop offset oscillates.
    Wave,
    /// Overall scale oscillates on both axes in phase.
    Breathe,
}

impl CinemagraphMotion {
    /// Parse a wire string; accepts the UI's camelCase (`subtleZoom`) and kebab-case.
    pub fn parse(s: &str) -> Option<Self> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "subtlezoom" => Some(Self::SubtleZoom),
            "wave" => Some(Self::Wave),
            "breathe" => Some(Self::Breathe),
            _ => None,
        }
    }
}

/// Ken Burns parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct KenBurns {
    /// Pan strength on the documented 0.1..=10 range.
    pub intensity: f64,
    /// Zoom at the first frame.
    pub start_scale: f64,
    /// Zoom at the last frame.
    pub end_scale: f64,
    /// Requested motion.
    pub directions: DirectionSet,
}

/// Parallax parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Parallax {
    /// Kept for parity with the UI; the slide itself is driven by `speed`.
    pub intensity: f64,
    /// Slide rate; `0.5` traverses the full crop range once per segment.
    pub speed: f64,
    /// Axis and sign.
    pub direction: ParallaxDirection,
}

/// Cinemagraph parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Cinemagraph {
    /// Motion strength on the documented 0.1..=10 range.
    pub intensity: f64,
    /// Opaque region label carried through from the UI.
    pub mask: String,
    /// Motion pattern.
    pub motion: CinemagraphMotion,
    /// Period in seconds; the segment duration when unset.
    pub loop_duration: Option<f64>,
}

/// Dolly zoom parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DollyZoom {
    /// Kept for parity with the UI; the ramp is driven by the field of view.
    pub intensity: f64,
    /// Field of view at the first frame, degrees.
    pub start_fov: Option<f64>,
    /// Field of view at the last frame, degrees.
    pub end_fov: Option<f64>,
    /// Opaque focus label carried through from the UI.
    pub focus_point: String,
}

/// One visual effect for one image segment.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnimationSpec {
    /// Pan and/or zoom.
    KenBurns(KenBurns),
    /// Crop-window slide.
    Parallax(Parallax),
    /// Periodic subtle motion.
    Cinemagraph(Cinemagraph),
    /// Field-of-view ramp.
    DollyZoom(DollyZoom),
    /// Scale-to-fit and pad, no motion.
    Static,
}

impl AnimationSpec {
    /// Default template for `kind`, as offered by the authoring UI.
    pub fn default_for(kind: AnimationKind) -> Self {
        match kind {
            AnimationKind::KenBurns => Self::KenBurns(KenBurns {
                intensity: 1.0,
                start_scale: 1.0,
                end_scale: 1.1,
                directions: [Direction::ZoomIn].into_iter().collect(),
            }),
            AnimationKind::Parallax => Self::Parallax(Parallax {
                intensity: 1.0,
                speed: 0.5,
                direction: ParallaxDirection::LeftToRight,
            }),
            AnimationKind::Cinemagraph => Self::Cinemagraph(Cinemagraph {
                intensity: 1.0,
                mask: "center".to_string(),
                motion: CinemagraphMotion::SubtleZoom,
                loop_duration: Some(3.0),
            }),
            AnimationKind::DollyZoom => Self::DollyZoom(DollyZoom {
                intensity: 1.0,
                start_fov: Some(50.0),
                end_fov: Some(80.0),
                focus_point: "center".to_string(),
            }),
            AnimationKind::Static => Self::Static,
        }
    }

    /// Family of this spec.
    pub fn kind(&self) -> AnimationKind {
        match self {
            Self::KenBurns(_) => AnimationKind::KenBurns,
            Self::Parallax(_) => AnimationKind::Parallax,
            Self::Cinemagraph(_) => AnimationKind::Cinemagraph,
            Self::DollyZoom(_) => AnimationKind::DollyZoom,
            Self::Static => AnimationKind::Static,
        }
    }
}

/// Map intensity onto `[0, 1]`: `intensity / 10`, clamped. Used by every kind.
pub fn intensity_factor(intensity: f64) -> f64 {
    if !intensity.is_finite() {
        return 0.0;
    }
    (intensity / MAX_INTENSITY).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spec.rs"]
mod tests;
