use std::f64::consts::LN_2;

use crate::core::escape::plane_mapper::PlanePoint;

/// Escape radius squared: the orbit has diverged once `|z|^2` exceeds this.
const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

#[derive(Debug, Copy, Clone)]
struct Orbit {
    iterations: u32,
    magnitude_squared: f64,
}

/// The per-point escape-time recurrence `z -> z^2 + c`, iterated on separate
/// real and imaginary components.
#[derive(Debug, Copy, Clone)]
pub struct EscapeKernel {
    max_iteration: u32,
}

impl EscapeKernel {
    #[must_use]
    pub fn new(max_iteration: u32) -> Self {
        Self { max_iteration }
    }

    fn orbit(&self, c: PlanePoint) -> Orbit {
        let mut x = 0.0;
        let mut y = 0.0;
        let mut x2 = 0.0;
        let mut y2 = 0.0;
        let mut iterations = 0;

        while x2 + y2 <= ESCAPE_RADIUS_SQUARED && iterations < self.max_iteration {
            // The imaginary update must read the pre-update real component.
            y = 2.0 * x * y + c.y;
            x = x2 - y2 + c.x;
            x2 = x * x;
            y2 = y * y;
            iterations += 1;
        }

        Orbit {
            iterations,
            magnitude_squared: x2 + y2,
        }
    }

    /// Raw escape count in `[0, max_iteration]`; the cap means the point
    /// never escaped and is taken to be in the set.
    #[must_use]
    pub fn escape_count(&self, c: PlanePoint) -> u32 {
        self.orbit(c).iterations
    }

    /// Fractional escape count for continuous colouring.
    ///
    /// Escaped points get the log-log correction `i + 1 - nu`; points that
    /// reach the cap are returned uncorrected (the magnitude term is only
    /// meaningful after an actual escape).
    #[must_use]
    pub fn smoothed_escape_count(&self, c: PlanePoint) -> f64 {
        let orbit = self.orbit(c);

        if orbit.iterations < self.max_iteration {
            let log_zn = orbit.magnitude_squared.ln() / 2.0;
            let nu = (log_zn / LN_2).ln() / LN_2;
            f64::from(orbit.iterations) + 1.0 - nu
        } else {
            f64::from(orbit.iterations)
        }
    }
}
