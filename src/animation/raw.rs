use crate::animation::direction::{Direction, DirectionSet};
use crate::animation::spec::{
    AnimationKind, AnimationSpec, Cinemagraph, CinemagraphMotion, DollyZoom, KenBurns, Parallax,
    ParallaxDirection,
};
use crate::foundation::core::{Canvas, RenderParams};
use crate::foundation::diagnostic::{Diagnostic, DiagnosticKind, Outcome};
use crate::foundation::error::ReelResult;
use crate::foundation::math::finite;

/// `direction` as the UI sends it: one string, a comma-separated string, or a list.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum RawDirection {
    /// `"zoom-in"` or `"zoom-in,pan-left"`.
    One(String),
    /// `["zoom-in", "pan-left"]`.
    Many(Vec<String>),
}

impl RawDirection {
    /// Non-empty trimmed tokens in input order.
    pub fn tokens(&self) -> Vec<&str> {
        let parts: Vec<&str> = match self {
            Self::One(s) => s.split(',').collect(),
            Self::Many(v) => v.iter().flat_map(|s| s.split(',')).collect(),
        };
        parts
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Animation settings object exactly as the authoring UI stores it.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawAnimationSpec {
    /// UI label such as `"Ken Burns"`.
    #[serde(rename = "type", alias = "kind")]
    pub kind: String,
    /// Effect strength, nominally 0.1..=10.
    pub intensity: Option<f64>,
    /// Ken Burns directions or the parallax direction.
    #[serde(alias = "directions")]
    pub direction: Option<RawDirection>,
    /// Ken Burns zoom at the first frame.
    pub start_scale: Option<f64>,
    /// Ken Burns zoom at the last frame.
    pub end_scale: Option<f64>,
    /// Parallax slide rate.
    pub speed: Option<f64>,
    /// Cinemagraph region label.
    pub mask: Option<String>,
    /// Cinemagraph motion pattern.
    pub motion_type: Option<String>,
    /// Cinemagraph period, seconds.
    pub loop_duration: Option<f64>,
    /// Dolly zoom starting field of view.
    pub start_fov: Option<f64>,
    /// Dolly zoom ending field of view.
    pub end_fov: Option<f64>,
    /// Dolly zoom focus label.
    pub focus_point: Option<String>,
    /// Requested output width.
    pub width: Option<u32>,
    /// Requested output height.
    pub height: Option<u32>,
    /// Requested clip duration, seconds.
    pub duration: Option<f64>,
}

impl RawAnimationSpec {
    /// Parse a settings object from JSON text.
    pub fn from_json(text: &str) -> ReelResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Recognized animation family, `None` for labels outside the known set.
    pub fn animation_kind(&self) -> Option<AnimationKind> {
        AnimationKind::parse(&self.kind)
    }

    /// `base` with any duration or size carried by the settings object applied on top.
    pub fn render_params(&self, base: RenderParams) -> RenderParams {
        let canvas = match (self.width, self.height) {
            (Some(w), Some(h)) if w >= 2 && h >= 2 => Canvas::coerced(w, h),
            _ => base.canvas,
        };
        let duration = finite(self.duration)
            .filter(|d| *d > 0.0)
            .unwrap_or(base.duration);
        RenderParams {
            duration,
            canvas,
            fps: base.fps,
        }
        .sanitized()
    }

    /// Convert into a typed spec. Unknown kinds yield `None`; unusable fields fall back to the
    /// kind's defaults with a diagnostic.
    pub fn to_spec(&self) -> Outcome<Option<AnimationSpec>> {
        let Some(kind) = self.animation_kind() else {
            return Outcome::with(
                None,
                vec![Diagnostic::new(
                    DiagnosticKind::UnknownKind,
                    format!("unknown animation type '{}'; no animation applied", self.kind),
                )],
            );
        };

        let mut diagnostics = Vec::new();
        let intensity = finite(self.intensity).unwrap_or(1.0);
        let spec = match kind {
            AnimationKind::KenBurns => {
                let start_scale = finite(self.start_scale)
                    .filter(|s| *s != 0.0)
                    .unwrap_or(1.0);
                let end_scale = finite(self.end_scale)
                    .filter(|s| *s != 0.0)
                    .unwrap_or(start_scale + 0.1);
                let directions = self.direction_set(&mut diagnostics);
                AnimationSpec::KenBurns(KenBurns {
                    intensity,
                    start_scale,
                    end_scale,
                    directions,
                })
            }
            AnimationKind::Parallax => {
                let token = self
                    .direction
                    .as_ref()
                    .and_then(|d| d.tokens().first().map(|t| t.to_string()));
                let direction = match token {
                    None => ParallaxDirection::default(),
                    Some(token) => ParallaxDirection::parse(&token).unwrap_or_else(|| {
                        diagnostics.push(Diagnostic::new(
                            DiagnosticKind::UnknownOption,
                            format!("unknown parallax direction '{token}'; using left-to-right"),
                        ));
                        ParallaxDirection::default()
                    }),
                };
                let speed = match finite(self.speed) {
                    None => 0.5,
                    Some(s) if s > 0.0 => s,
                    Some(s) => {
                        diagnostics.push(Diagnostic::new(
                            DiagnosticKind::ValueClamped,
                            format!("parallax speed {s} is not positive; using 0.5"),
                        ));
                        0.5
                    }
                };
                AnimationSpec::Parallax(Parallax {
                    intensity,
                    speed,
                    direction,
                })
            }
            AnimationKind::Cinemagraph => {
                let motion = match self.motion_type.as_deref() {
                    None => CinemagraphMotion::default(),
                    Some(m) => CinemagraphMotion::parse(m).unwrap_or_else(|| {
                        diagnostics.push(Diagnostic::new(
                            DiagnosticKind::UnknownOption,
                            format!("unknown cinemagraph motion '{m}'; using subtle-zoom"),
                        ));
                        CinemagraphMotion::default()
                    }),
                };
                AnimationSpec::Cinemagraph(Cinemagraph {
                    intensity,
                    mask: self.mask.clone().unwrap_or_else(|| "center".to_string()),
                    motion,
                    loop_duration: finite(self.loop_duration).filter(|l| *l > 0.0),
                })
            }
            AnimationKind::DollyZoom => AnimationSpec::DollyZoom(DollyZoom {
                intensity,
                start_fov: finite(self.start_fov),
                end_fov: finite(self.end_fov),
                focus_point: self
                    .focus_point
                    .clone()
                    .unwrap_or_else(|| "center".to_string()),
            }),
            AnimationKind::Static => AnimationSpec::Static,
        };
        Outcome::with(Some(spec), diagnostics)
    }

    fn direction_set(&self, diagnostics: &mut Vec<Diagnostic>) -> DirectionSet {
        let Some(raw) = &self.direction else {
            return DirectionSet::empty();
        };
        let mut known = Vec::new();
        for token in raw.tokens() {
            match Direction::parse(token) {
                Some(dir) => known.push(dir),
                None => diagnostics.push(Diagnostic::new(
                    DiagnosticKind::UnknownDirection,
                    format!("unknown direction '{token}' ignored"),
                )),
            }
        }
        let (set, conflicts) = DirectionSet::from_directions(known);
        diagnostics.extend(conflicts);
        set
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/raw.rs"]
mod tests;
