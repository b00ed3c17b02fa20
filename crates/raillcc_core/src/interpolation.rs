//! Shape-preserving piecewise cubic interpolation
//!
//! Degradation curves are sampled at a handful of gauge levels. Between the
//! samples we use a monotone piecewise cubic Hermite interpolant (PCHIP):
//! slopes follow the Fritsch-Carlson weighted harmonic mean, so the
//! interpolant never overshoots the data and preserves monotonic runs.

use serde::{Deserialize, Serialize};

/// How to evaluate a gauge outside the sampled gauge levels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GaugeBoundary {
    /// Continue the outermost cubic piece
    #[default]
    Extrapolate,
    /// Hold the value at the nearest sampled gauge
    Clamp,
}

/// Monotone cubic interpolant over strictly increasing knots
#[derive(Debug, Clone, PartialEq)]
pub struct MonotoneCubic {
    xs: Vec<f64>,
    ys: Vec<f64>,
    slopes: Vec<f64>,
}

impl MonotoneCubic {
    /// Build the interpolant. Fails when the knots cannot support one.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self, &'static str> {
        if xs.len() != ys.len() {
            return Err("gauge levels and values differ in length");
        }
        if xs.len() < 2 {
            return Err("at least two gauge levels are required");
        }
        if xs.iter().chain(ys.iter()).any(|v| !v.is_finite()) {
            return Err("samples must be finite");
        }
        if xs.windows(2).any(|w| w[1] <= w[0]) {
            return Err("gauge levels must be strictly increasing");
        }

        let slopes = pchip_slopes(&xs, &ys);
        Ok(Self { xs, ys, slopes })
    }

    pub fn values(&self) -> &[f64] {
        &self.ys
    }

    pub fn evaluate(&self, x: f64, boundary: GaugeBoundary) -> f64 {
        let n = self.xs.len();
        if boundary == GaugeBoundary::Clamp {
            if x <= self.xs[0] {
                return self.ys[0];
            }
            if x >= self.xs[n - 1] {
                return self.ys[n - 1];
            }
        }

        // Segment whose left knot is the last one <= x, clamped to a real segment
        let k = self.xs.partition_point(|&v| v <= x).saturating_sub(1).min(n - 2);

        // Local power basis around the left knot; flat data evaluates exactly
        let h = self.xs[k + 1] - self.xs[k];
        let dx = x - self.xs[k];
        let (d0, d1) = (self.slopes[k], self.slopes[k + 1]);
        let secant = (self.ys[k + 1] - self.ys[k]) / h;
        let c2 = (3.0 * secant - 2.0 * d0 - d1) / h;
        let c3 = (d0 + d1 - 2.0 * secant) / (h * h);

        self.ys[k] + dx * (d0 + dx * (c2 + dx * c3))
    }
}

/// Knot derivatives for PCHIP
fn pchip_slopes(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len();
    let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
    let m: Vec<f64> = ys
        .windows(2)
        .zip(&h)
        .map(|(w, hk)| (w[1] - w[0]) / hk)
        .collect();

    if n == 2 {
        return vec![m[0], m[0]];
    }

    let mut d = vec![0.0; n];
    for k in 1..n - 1 {
        let (m0, m1) = (m[k - 1], m[k]);
        if m0 * m1 <= 0.0 {
            continue;
        }
        let w1 = 2.0 * h[k] + h[k - 1];
        let w2 = h[k] + 2.0 * h[k - 1];
        d[k] = (w1 + w2) / (w1 / m0 + w2 / m1);
    }

    d[0] = edge_slope(h[0], h[1], m[0], m[1]);
    d[n - 1] = edge_slope(h[n - 2], h[n - 3], m[n - 2], m[n - 3]);
    d
}

/// One-sided three-point end slope, limited to keep the end piece monotone
fn edge_slope(h0: f64, h1: f64, m0: f64, m1: f64) -> f64 {
    let d = ((2.0 * h0 + h1) * m0 - h0 * m1) / (h0 + h1);
    if d.signum() != m0.signum() || m0 == 0.0 {
        0.0
    } else if m0.signum() != m1.signum() && d.abs() > 3.0 * m0.abs() {
        3.0 * m0
    } else {
        d
    }
}
