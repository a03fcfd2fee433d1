//! The sweep cursor and its increment/wrap rule.

/// Inclusive upper bound for the quadrature-axis index; the axis cycles
/// through `0..=IQ_MAX` once every eight samples.
pub const IQ_MAX: i32 = 7;

/// The cursor over the `(id, iq)` current grid.
///
/// The quadrature axis is the fast axis: it increments once per sample and
/// wraps every eight steps, carrying into the direct axis. Whether the direct
/// axis itself wraps is decided per run via the `id_max` argument to
/// [`advance`](Self::advance).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepState {
    /// Direct-axis current index.
    pub id: i32,
    /// Quadrature-axis current index, always in `0..=IQ_MAX`.
    pub iq: i32,
}

impl SweepState {
    /// The initial cursor position `(0, 0)`.
    #[must_use]
    pub const fn origin() -> Self {
        Self { id: 0, iq: 0 }
    }

    /// Creates a cursor at an arbitrary grid position.
    #[must_use]
    pub const fn new(id: i32, iq: i32) -> Self {
        Self { id, iq }
    }

    /// Returns the cursor after one sample has been emitted.
    ///
    /// `id_max` is the inclusive direct-axis bound: when the carry would push
    /// `id` past it, `id` resets to zero. `None` lets `id` grow unbounded.
    #[must_use]
    pub fn advance(self, id_max: Option<i32>) -> Self {
        if self.iq == IQ_MAX {
            let next_id = self.id + 1;
            let id = match id_max {
                Some(max) if next_id > max => 0,
                _ => next_id,
            };
            Self { id, iq: 0 }
        } else {
            Self {
                id: self.id,
                iq: self.iq + 1,
            }
        }
    }

    /// The derived torque estimate for this grid position.
    ///
    /// A fixed linear combination (`id * 0.1 + iq * 11`), not a physical
    /// model: it gives the fixture a non-constant field that downstream
    /// checks can recompute exactly.
    #[must_use]
    pub fn torque_estimate(self) -> f64 {
        f64::from(self.id) * 0.1 + f64::from(self.iq) * 11.0
    }
}
