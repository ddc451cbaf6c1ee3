use crate::animation::raw::RawAnimationSpec;
use crate::animation::spec::{AnimationSpec, KenBurns, MAX_SCALE, MIN_SCALE, intensity_factor};
use crate::foundation::diagnostic::{Diagnostic, DiagnosticKind, Outcome};

/// Why a spec was replaced by the centered static zoom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// No usable direction.
    EmptyDirections,
    /// Zoom requested with `start_scale == end_scale`.
    DegenerateZoom,
    /// Pan requested with zero intensity.
    ZeroIntensityPan,
}

impl FallbackReason {
    fn diagnostic_kind(self) -> DiagnosticKind {
        match self {
            Self::EmptyDirections => DiagnosticKind::EmptyDirections,
            Self::DegenerateZoom => DiagnosticKind::DegenerateZoom,
            Self::ZeroIntensityPan => DiagnosticKind::ZeroIntensityPan,
        }
    }
}

/// Centered, constant zoom used when a Ken Burns spec cannot animate.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FallbackSpec {
    /// Constant zoom factor (the clamped start scale).
    pub start_scale: f64,
    /// What made the original spec unusable.
    pub reason: FallbackReason,
}

/// Result of validation: either a clean spec or the static-zoom fallback.
#[derive(Clone, Debug, PartialEq)]
pub enum Validated {
    /// The spec, with numeric ranges normalized.
    Spec(AnimationSpec),
    /// The spec was degenerate.
    Fallback(FallbackSpec),
}

/// Clamp a scale into `[MIN_SCALE, MAX_SCALE]`.
pub fn clamp_scale(scale: f64) -> f64 {
    if !scale.is_finite() {
        return 1.0;
    }
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

/// Validate a UI settings object. `None` means the kind is unknown and no animation applies.
#[tracing::instrument(level = "debug", skip(raw), fields(kind = %raw.kind))]
pub fn validate(raw: &RawAnimationSpec) -> Outcome<Option<Validated>> {
    let mut diagnostics = Vec::new();
    let Some(spec) = raw.to_spec().drain_into(&mut diagnostics) else {
        return Outcome::with(None, diagnostics);
    };
    let validated = validate_spec(spec).drain_into(&mut diagnostics);
    Outcome::with(Some(validated), diagnostics)
}

/// Normalize a typed spec and apply the static-zoom fallback policy.
pub fn validate_spec(spec: AnimationSpec) -> Outcome<Validated> {
    match spec {
        AnimationSpec::KenBurns(kb) => validate_ken_burns(kb),
        AnimationSpec::Cinemagraph(mut c) => {
            c.loop_duration = c.loop_duration.filter(|l| l.is_finite() && *l > 0.0);
            Outcome::clean(Validated::Spec(AnimationSpec::Cinemagraph(c)))
        }
        AnimationSpec::Parallax(mut p) => {
            let mut diagnostics = Vec::new();
            if !(p.speed.is_finite() && p.speed > 0.0) {
                diagnostics.push(Diagnostic::new(
                    DiagnosticKind::ValueClamped,
                    format!("parallax speed {} is not positive; using 0.5", p.speed),
                ));
                p.speed = 0.5;
            }
            Outcome::with(Validated::Spec(AnimationSpec::Parallax(p)), diagnostics)
        }
        other => Outcome::clean(Validated::Spec(other)),
    }
}

fn validate_ken_burns(kb: KenBurns) -> Outcome<Validated> {
    let start_scale = clamp_scale(kb.start_scale);
    let end_scale = clamp_scale(kb.end_scale);
    let factor = intensity_factor(kb.intensity);

    let reason = if kb.directions.is_empty() {
        Some(FallbackReason::EmptyDirections)
    } else if kb.directions.has_zoom() && start_scale == end_scale {
        Some(FallbackReason::DegenerateZoom)
    } else if kb.directions.has_pan() && factor <= 0.0 {
        Some(FallbackReason::ZeroIntensityPan)
    } else {
        None
    };

    match reason {
        Some(reason) => {
            let message = match reason {
                FallbackReason::EmptyDirections => {
                    "no usable direction; using static zoom".to_string()
                }
                FallbackReason::DegenerateZoom => {
                    format!("zoom requested but start and end scale are both {start_scale}; using static zoom")
                }
                FallbackReason::ZeroIntensityPan => {
                    "pan requested with zero intensity; using static zoom".to_string()
                }
            };
            Outcome::with(
                Validated::Fallback(FallbackSpec {
                    start_scale,
                    reason,
                }),
                vec![Diagnostic::new(reason.diagnostic_kind(), message)],
            )
        }
        None => Outcome::clean(Validated::Spec(AnimationSpec::KenBurns(KenBurns {
            intensity: kb.intensity,
            start_scale,
            end_scale,
            directions: kb.directions,
        }))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/validate.rs"]
mod tests;
