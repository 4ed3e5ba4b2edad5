//! Decomposition of an arbitrary receiver position into corner cases.
//!
//! The closed-form view factor relations only apply to a receiver facing a
//! corner of a rectangle. A receiver anywhere else is handled by splitting
//! the configuration into corner-aligned sub-rectangles and combining their
//! view factors by inclusion-exclusion:
//!
//! - inside the panel, or on an edge, the sub-rectangles tile the panel and
//!   all add;
//! - outside the panel, rectangles reaching from the receiver to the far
//!   side of the panel add, and the parts that overshoot the panel subtract.
//!
//! Along each axis the relevant coordinates are `0`, the panel extent and the
//! receiver coordinate. Sorted, they give the `min`, `mid` and `max` of a
//! [`Span`], and every sub-rectangle extent is a difference between two of
//! them.

use std::cmp::Ordering;

use thiserror::Error;

use crate::support::constraint::{ConstraintError, StrictlyPositive};

/// Where the receiver sits relative to the emitter outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// On one of the four corners.
    Corner,
    /// On an edge, strictly between its corners.
    Edge(Edge),
    /// Strictly inside the outline.
    Inside,
    /// Outside on one axis, within the closed range on the other.
    Beside(Side),
    /// Outside on both axes.
    Diagonal(Quadrant),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// The left (`x = 0`) or right (`x = width`) edge.
    Vertical,
    /// The bottom (`y = 0`) or top (`y = height`) edge.
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Below,
    Above,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    AboveRight,
    BelowRight,
    BelowLeft,
    AboveLeft,
}

/// Whether a sub-rectangle's view factor is added or subtracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Add,
    Subtract,
}

impl Sign {
    fn apply(self, value: f64) -> f64 {
        match self {
            Sign::Add => value,
            Sign::Subtract => -value,
        }
    }
}

/// A corner-aligned rectangle, in metres, with the receiver facing one corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubRectangle {
    pub width: f64,
    pub height: f64,
    pub sign: Sign,
}

impl SubRectangle {
    fn add(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            sign: Sign::Add,
        }
    }

    fn subtract(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            sign: Sign::Subtract,
        }
    }

    fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// The classified receiver position and its signed sub-rectangles.
///
/// Holds between one and four sub-rectangles, none of them zero-area.
#[derive(Debug, Clone, PartialEq)]
pub struct Decomposition {
    position: Position,
    planes: Vec<SubRectangle>,
}

impl Decomposition {
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn planes(&self) -> &[SubRectangle] {
        &self.planes
    }

    /// Combine a corner relation over the sub-rectangles.
    ///
    /// `corner` receives each sub-rectangle's width and height; the result is
    /// the signed sum of its values.
    pub fn sum(&self, corner: impl Fn(f64, f64) -> f64) -> f64 {
        self.planes
            .iter()
            .map(|plane| plane.sign.apply(corner(plane.width, plane.height)))
            .sum()
    }
}

/// Errors returned by [`decompose`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DecomposeError {
    #[error("invalid emitter extent")]
    Extent(#[from] ConstraintError),

    #[error("receiver at ({x}, {y}) cannot be located relative to the emitter")]
    Unclassified { x: f64, y: f64 },
}

/// Decompose a receiver position into signed corner-aligned sub-rectangles.
///
/// All values are in metres. The emitter spans `(0, 0)` to `(width, height)`
/// and the receiver sits at `(x, y)`.
///
/// # Errors
///
/// Returns [`DecomposeError::Extent`] if `width` or `height` is not strictly
/// positive, and [`DecomposeError::Unclassified`] if any coordinate is not
/// finite.
///
/// # Example
///
/// ```
/// use fse_models::support::view_factor::decompose::{decompose, Position, Side, Sign};
///
/// // Receiver level with the middle of a 10 x 10 panel, 5 m past its right edge.
/// let parts = decompose(10.0, 10.0, 15.0, 5.0).unwrap();
///
/// assert_eq!(parts.position(), Position::Beside(Side::Right));
/// assert_eq!(parts.planes().len(), 4);
/// assert_eq!(parts.planes()[0].width, 15.0);
/// assert_eq!(parts.planes()[2].sign, Sign::Subtract);
/// ```
pub fn decompose(width: f64, height: f64, x: f64, y: f64) -> Result<Decomposition, DecomposeError> {
    let width = StrictlyPositive::new(width)?.into_inner();
    let height = StrictlyPositive::new(height)?.into_inner();

    let position = classify(width, height, x, y).ok_or(DecomposeError::Unclassified { x, y })?;

    let planes = sub_rectangles(position, Span::new(width, x), Span::new(height, y))
        .into_iter()
        .filter(SubRectangle::has_area)
        .collect();

    Ok(Decomposition { position, planes })
}

/// A receiver coordinate relative to the emitter's extent along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Location {
    Before,
    Start,
    Within,
    End,
    After,
}

fn locate(value: f64, extent: f64) -> Option<Location> {
    if !value.is_finite() || !extent.is_finite() {
        return None;
    }

    Some(match (value.partial_cmp(&0.0)?, value.partial_cmp(&extent)?) {
        (Ordering::Less, _) => Location::Before,
        (Ordering::Equal, _) => Location::Start,
        (_, Ordering::Less) => Location::Within,
        (_, Ordering::Equal) => Location::End,
        (_, Ordering::Greater) => Location::After,
    })
}

fn classify(width: f64, height: f64, x: f64, y: f64) -> Option<Position> {
    use Location::{After, Before, End, Start, Within};

    Some(match (locate(x, width)?, locate(y, height)?) {
        (Start | End, Start | End) => Position::Corner,
        (Start | End, Within) => Position::Edge(Edge::Vertical),
        (Within, Start | End) => Position::Edge(Edge::Horizontal),
        (Within, Within) => Position::Inside,
        (Before, Start | Within | End) => Position::Beside(Side::Left),
        (After, Start | Within | End) => Position::Beside(Side::Right),
        (Start | Within | End, Before) => Position::Beside(Side::Below),
        (Start | Within | End, After) => Position::Beside(Side::Above),
        (After, After) => Position::Diagonal(Quadrant::AboveRight),
        (After, Before) => Position::Diagonal(Quadrant::BelowRight),
        (Before, Before) => Position::Diagonal(Quadrant::BelowLeft),
        (Before, After) => Position::Diagonal(Quadrant::AboveLeft),
    })
}

/// Sorted `{0, extent, coordinate}` along one axis.
#[derive(Debug, Clone, Copy)]
struct Span {
    min: f64,
    mid: f64,
    max: f64,
}

impl Span {
    fn new(extent: f64, coordinate: f64) -> Self {
        let mut points = [0.0, extent, coordinate];
        points.sort_by(f64::total_cmp);
        let [min, mid, max] = points;
        Self { min, mid, max }
    }

    fn full(self) -> f64 {
        self.max - self.min
    }

    fn lower(self) -> f64 {
        self.mid - self.min
    }

    fn upper(self) -> f64 {
        self.max - self.mid
    }
}

fn sub_rectangles(position: Position, x: Span, y: Span) -> Vec<SubRectangle> {
    use SubRectangle as R;

    match position {
        Position::Corner => vec![R::add(x.full(), y.full())],
        Position::Edge(Edge::Vertical) => vec![
            R::add(x.full(), y.upper()),
            R::add(x.full(), y.lower()),
        ],
        Position::Edge(Edge::Horizontal) => vec![
            R::add(x.upper(), y.full()),
            R::add(x.lower(), y.full()),
        ],
        Position::Inside => vec![
            R::add(x.lower(), y.lower()),
            R::add(x.upper(), y.upper()),
            R::add(x.lower(), y.upper()),
            R::add(x.upper(), y.lower()),
        ],
        Position::Beside(Side::Right) => vec![
            R::add(x.full(), y.upper()),
            R::add(x.full(), y.lower()),
            R::subtract(x.upper(), y.upper()),
            R::subtract(x.upper(), y.lower()),
        ],
        Position::Beside(Side::Left) => vec![
            R::add(x.full(), y.upper()),
            R::add(x.full(), y.lower()),
            R::subtract(x.lower(), y.upper()),
            R::subtract(x.lower(), y.lower()),
        ],
        Position::Beside(Side::Above) => vec![
            R::add(x.upper(), y.full()),
            R::add(x.lower(), y.full()),
            R::subtract(x.upper(), y.upper()),
            R::subtract(x.lower(), y.upper()),
        ],
        Position::Beside(Side::Below) => vec![
            R::add(x.upper(), y.full()),
            R::add(x.lower(), y.full()),
            R::subtract(x.upper(), y.lower()),
            R::subtract(x.lower(), y.lower()),
        ],
        Position::Diagonal(Quadrant::AboveRight) => vec![
            R::add(x.full(), y.full()),
            R::add(x.upper(), y.upper()),
            R::subtract(x.upper(), y.full()),
            R::subtract(x.full(), y.upper()),
        ],
        Position::Diagonal(Quadrant::BelowRight) => vec![
            R::add(x.full(), y.full()),
            R::add(x.upper(), y.lower()),
            R::subtract(x.full(), y.lower()),
            R::subtract(x.upper(), y.full()),
        ],
        Position::Diagonal(Quadrant::BelowLeft) => vec![
            R::add(x.full(), y.full()),
            R::add(x.lower(), y.lower()),
            R::subtract(x.lower(), y.full()),
            R::subtract(x.full(), y.lower()),
        ],
        Position::Diagonal(Quadrant::AboveLeft) => vec![
            R::add(x.full(), y.full()),
            R::add(x.lower(), y.upper()),
            R::subtract(x.lower(), y.full()),
            R::subtract(x.full(), y.upper()),
        ],
    }
}
