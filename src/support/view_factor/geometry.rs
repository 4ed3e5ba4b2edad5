use uom::si::f64::Length;

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};

/// A rectangular emitter panel.
///
/// The panel's origin corner sits at `(0, 0)` of the frame in which receiver
/// points are located, and it extends to `(width, height)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Emitter {
    width: Constrained<Length, StrictlyPositive>,
    height: Constrained<Length, StrictlyPositive>,
}

impl Emitter {
    /// Create an [`Emitter`] from its width and height.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either extent is not strictly positive.
    pub fn new(width: Length, height: Length) -> ConstraintResult<Self> {
        Ok(Self {
            width: StrictlyPositive::new(width)?,
            height: StrictlyPositive::new(height)?,
        })
    }

    #[must_use]
    pub fn width(&self) -> Length {
        self.width.into_inner()
    }

    #[must_use]
    pub fn height(&self) -> Length {
        self.height.into_inner()
    }

    /// The receiver point facing the centre of the panel.
    #[must_use]
    pub fn centre(&self) -> Receiver {
        Receiver::new(self.width() * 0.5, self.height() * 0.5)
    }
}

/// A receiver point in the emitter's frame.
///
/// The point may sit anywhere: inside the panel outline, on an edge or
/// corner, or outside it (including negative coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Receiver {
    pub x: Length,
    pub y: Length,
}

impl Receiver {
    #[must_use]
    pub fn new(x: Length, y: Length) -> Self {
        Self { x, y }
    }

    /// A receiver displaced by `(dx, dy)` from the centre of `emitter`.
    #[must_use]
    pub fn from_centre(emitter: &Emitter, dx: Length, dy: Length) -> Self {
        let centre = emitter.centre();
        Self::new(centre.x + dx, centre.y + dy)
    }
}

/// A single scalar input of a [`Geometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    EmitterWidth,
    EmitterHeight,
    ReceiverX,
    ReceiverY,
    Separation,
}

/// An emitter, a receiver point, and the distance between their planes.
///
/// For parallel orientation the separation is measured normal to the
/// emitter; for perpendicular orientation it is measured in the emitter's
/// plane to the receiver's plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    emitter: Emitter,
    receiver: Receiver,
    separation: Constrained<Length, StrictlyPositive>,
}

impl Geometry {
    /// Create a [`Geometry`].
    ///
    /// # Errors
    ///
    /// Returns `Err` if the separation is not strictly positive.
    pub fn new(emitter: Emitter, receiver: Receiver, separation: Length) -> ConstraintResult<Self> {
        Ok(Self {
            emitter,
            receiver,
            separation: StrictlyPositive::new(separation)?,
        })
    }

    #[must_use]
    pub fn emitter(&self) -> Emitter {
        self.emitter
    }

    #[must_use]
    pub fn receiver(&self) -> Receiver {
        self.receiver
    }

    #[must_use]
    pub fn separation(&self) -> Length {
        self.separation.into_inner()
    }

    /// Read one scalar input.
    #[must_use]
    pub fn get(&self, parameter: Parameter) -> Length {
        match parameter {
            Parameter::EmitterWidth => self.emitter.width(),
            Parameter::EmitterHeight => self.emitter.height(),
            Parameter::ReceiverX => self.receiver.x,
            Parameter::ReceiverY => self.receiver.y,
            Parameter::Separation => self.separation(),
        }
    }

    /// Return a copy with one scalar input replaced, holding the others fixed.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the new value violates the parameter's constraint
    /// (emitter extents and separation must be strictly positive).
    pub fn with(self, parameter: Parameter, value: Length) -> ConstraintResult<Self> {
        let mut next = self;
        match parameter {
            Parameter::EmitterWidth => {
                next.emitter.width = StrictlyPositive::new(value)?;
            }
            Parameter::EmitterHeight => {
                next.emitter.height = StrictlyPositive::new(value)?;
            }
            Parameter::ReceiverX => next.receiver.x = value,
            Parameter::ReceiverY => next.receiver.y = value,
            Parameter::Separation => {
                next.separation = StrictlyPositive::new(value)?;
            }
        }
        Ok(next)
    }
}
