/// Category of a recovered anomaly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A direction string outside the known vocabulary was dropped.
    UnknownDirection,
    /// Two mutually exclusive directions were requested; one was dropped.
    ConflictingDirections,
    /// No usable direction remained; the static-zoom fallback was used.
    EmptyDirections,
    /// A zoom was requested with equal start and end scale; the static-zoom fallback was used.
    DegenerateZoom,
    /// A pan was requested with zero intensity; the static-zoom fallback was used.
    ZeroIntensityPan,
    /// A kind-specific field was missing or unusable; a pass-through fragment was used.
    MissingField,
    /// An animation type outside the known set; treated as no animation.
    UnknownKind,
    /// A kind-specific option outside its vocabulary; the default was used.
    UnknownOption,
    /// A transition name outside the xfade vocabulary; `fade` was used.
    UnknownTransition,
    /// A transition duration was shortened to fit its neighbours.
    TransitionClamped,
    /// A transition could not fit and the boundary became a plain concatenation.
    TransitionDropped,
    /// A numeric value was replaced by its floor, cap or default.
    ValueClamped,
    /// Segment durations do not add up to the target duration.
    DurationMismatch,
}

/// A recovered anomaly, collected next to the fragment it affected.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Diagnostic {
    /// Timeline segment the anomaly belongs to, when compiled as part of a timeline.
    pub segment: Option<usize>,
    /// Category.
    pub kind: DiagnosticKind,
    /// Human-readable detail.
    pub message: String,
}

impl Diagnostic {
    /// Create a diagnostic that is not tied to a segment.
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            segment: None,
            kind,
            message: message.into(),
        }
    }

    /// Attach a segment index.
    pub fn in_segment(mut self, index: usize) -> Self {
        self.segment = Some(index);
        self
    }

    pub(crate) fn log(&self) {
        match self.segment {
            Some(segment) => {
                tracing::warn!(kind = ?self.kind, segment, "{}", self.message)
            }
            None => tracing::warn!(kind = ?self.kind, "{}", self.message),
        }
    }
}

/// A value that is always usable, plus whatever was recovered on the way to it.
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome<T> {
    /// The renderable result.
    pub value: T,
    /// Anomalies recovered while producing `value`.
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Outcome<T> {
    /// Wrap a value with no diagnostics.
    pub fn clean(value: T) -> Self {
        Self {
            value,
            diagnostics: Vec::new(),
        }
    }

    /// Wrap a value with the given diagnostics.
    pub fn with(value: T, diagnostics: Vec<Diagnostic>) -> Self {
        Self { value, diagnostics }
    }

    /// Map the value, keeping diagnostics.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            value: f(self.value),
            diagnostics: self.diagnostics,
        }
    }

    /// Move this outcome's diagnostics into `sink` and return the value.
    pub fn drain_into(self, sink: &mut Vec<Diagnostic>) -> T {
        sink.extend(self.diagnostics);
        self.value
    }
}
