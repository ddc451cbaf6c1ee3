use crate::foundation::diagnostic::{Diagnostic, DiagnosticKind};

/// One wire-level motion direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// `"zoom-in"`
    ZoomIn,
    /// `"zoom-out"`
    ZoomOut,
    /// `"pan-left"`
    PanLeft,
    /// `"pan-right"`
    PanRight,
    /// `"pan-up"`
    PanUp,
    /// `"pan-down"`
    PanDown,
}

impl Direction {
    /// Every direction in canonical order.
    pub const ALL: [Direction; 6] = [
        Self::ZoomIn,
        Self::ZoomOut,
        Self::PanLeft,
        Self::PanRight,
        Self::PanUp,
        Self::PanDown,
    ];

    /// Wire string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ZoomIn => "zoom-in",
            Self::ZoomOut => "zoom-out",
            Self::PanLeft => "pan-left",
            Self::PanRight => "pan-right",
            Self::PanUp => "pan-up",
            Self::PanDown => "pan-down",
        }
    }

    /// Parse a wire string verbatim (surrounding whitespace ignored).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL.into_iter().find(|d| d.as_str() == s)
    }

    /// `true` for `zoom-in` / `zoom-out`.
    pub fn is_zoom(self) -> bool {
        matches!(self, Self::ZoomIn | Self::ZoomOut)
    }

    /// `true` for any pan direction.
    pub fn is_pan(self) -> bool {
        !self.is_zoom()
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Zoom component of a [`DirectionSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Zoom {
    /// Scale grows from start to end.
    In,
    /// Scale shrinks from start to end.
    Out,
}

/// Horizontal pan component of a [`DirectionSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HorizontalPan {
    /// Visible window moves left over time.
    Left,
    /// Visible window moves right over time.
    Right,
}

/// Vertical pan component of a [`DirectionSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerticalPan {
    /// Visible window moves up over time.
    Up,
    /// Visible window moves down over time.
    Down,
}

/// Order-insensitive set of directions: at most one zoom, one horizontal and one vertical pan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DirectionSet {
    /// Zoom direction, if any.
    pub zoom: Option<Zoom>,
    /// Horizontal pan, if any.
    pub horizontal: Option<HorizontalPan>,
    /// Vertical pan, if any.
    pub vertical: Option<VerticalPan>,
}

impl DirectionSet {
    /// Empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set, resolving conflicts by fixed precedence (`zoom-in` over `zoom-out`,
    /// `pan-left` over `pan-right`, `pan-up` over `pan-down`) and reporting each drop.
    pub fn from_directions(dirs: impl IntoIterator<Item = Direction>) -> (Self, Vec<Diagnostic>) {
        let mut set = Self::empty();
        let mut diagnostics = Vec::new();
        for dir in dirs {
            if let Some(dropped) = set.insert(dir) {
                diagnostics.push(Diagnostic::new(
                    DiagnosticKind::ConflictingDirections,
                    format!("'{dropped}' conflicts with another direction and was ignored"),
                ));
            }
        }
        (set, diagnostics)
    }

    /// Insert a direction. Returns the direction that lost a conflict, if any.
    pub fn insert(&mut self, dir: Direction) -> Option<Direction> {
        match dir {
            Direction::ZoomIn => {
                let lost = (self.zoom == Some(Zoom::Out)).then_some(Direction::ZoomOut);
                self.zoom = Some(Zoom::In);
                lost
            }
            Direction::ZoomOut => match self.zoom {
                Some(Zoom::In) => Some(Direction::ZoomOut),
                _ => {
                    self.zoom = Some(Zoom::Out);
                    None
                }
            },
            Direction::PanLeft => {
                let lost =
                    (self.horizontal == Some(HorizontalPan::Right)).then_some(Direction::PanRight);
                self.horizontal = Some(HorizontalPan::Left);
                lost
            }
            Direction::PanRight => match self.horizontal {
                Some(HorizontalPan::Left) => Some(Direction::PanRight),
                _ => {
                    self.horizontal = Some(HorizontalPan::Right);
                    None
                }
            },
            Direction::PanUp => {
                let lost = (self.vertical == Some(VerticalPan::Down)).then_some(Direction::PanDown);
                self.vertical = Some(VerticalPan::Up);
                lost
            }
            Direction::PanDown => match self.vertical {
                Some(VerticalPan::Up) => Some(Direction::PanDown),
                _ => {
                    self.vertical = Some(VerticalPan::Down);
                    None
                }
            },
        }
    }

    /// `true` when no direction is set.
    pub fn is_empty(&self) -> bool {
        self.zoom.is_none() && self.horizontal.is_none() && self.vertical.is_none()
    }

    /// `true` when a zoom direction is set.
    pub fn has_zoom(&self) -> bool {
        self.zoom.is_some()
    }

    /// `true` when any pan direction is set.
    pub fn has_pan(&self) -> bool {
        self.horizontal.is_some() || self.vertical.is_some()
    }

    /// The pan direction when the set is exactly one pan and nothing else.
    pub fn single_pan(&self) -> Option<Direction> {
        if self.zoom.is_some() {
            return None;
        }
        match (self.horizontal, self.vertical) {
            (Some(HorizontalPan::Left), None) => Some(Direction::PanLeft),
            (Some(HorizontalPan::Right), None) => Some(Direction::PanRight),
            (None, Some(VerticalPan::Up)) => Some(Direction::PanUp),
            (None, Some(VerticalPan::Down)) => Some(Direction::PanDown),
            _ => None,
        }
    }

    /// Directions in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        let zoom = self.zoom.map(|z| match z {
            Zoom::In => Direction::ZoomIn,
            Zoom::Out => Direction::ZoomOut,
        });
        let horizontal = self.horizontal.map(|h| match h {
            HorizontalPan::Left => Direction::PanLeft,
            HorizontalPan::Right => Direction::PanRight,
        });
        let vertical = self.vertical.map(|v| match v {
            VerticalPan::Up => Direction::PanUp,
            VerticalPan::Down => Direction::PanDown,
        });
        zoom.into_iter().chain(horizontal).chain(vertical)
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        Self::from_directions(iter).0
    }
}

impl serde::Serialize for DirectionSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> serde::Deserialize<'de> for DirectionSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let dirs = Vec::<Direction>::deserialize(deserializer)?;
        Ok(dirs.into_iter().collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/direction.rs"]
mod tests;
