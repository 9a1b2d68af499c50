use crate::position::Position;
use crate::TANGENT_DELTA;

/// Common APIs to segment types.
pub trait Segment {
    type Point: Position;

    /// Sample the curve at t (expecting t between 0 and 1).
    ///
    /// Values outside of this range extrapolate the curve's formula.
    fn sample(&self, t: f64) -> Self::Point;

    /// Start of the curve.
    fn from(&self) -> Self::Point {
        self.sample(0.0)
    }

    /// End of the curve.
    fn to(&self) -> Self::Point {
        self.sample(1.0)
    }

    /// Unit tangent at t, estimated with a central difference.
    ///
    /// The difference becomes one-sided at the ends of the `[0, 1]` range.
    fn tangent(&self, t: f64) -> Self::Point {
        let t1 = (t - TANGENT_DELTA).max(0.0);
        let t2 = (t + TANGENT_DELTA).min(1.0);
        self.sample(t2).minus(self.sample(t1)).normalize()
    }

    /// Samples `divisions + 1` points, evenly spaced in t.
    fn points(&self, divisions: usize) -> Vec<Self::Point> {
        let divisions = divisions.max(1);
        (0..=divisions)
            .map(|i| self.sample(i as f64 / divisions as f64))
            .collect()
    }

    /// Whether the curve ends where it starts (exact comparison).
    fn is_closed(&self) -> bool {
        self.sample(0.0) == self.sample(1.0)
    }

    /// Cumulative lengths of the polyline joining `divisions + 1` samples evenly spaced in t.
    ///
    /// The first entry is always zero and the last one approximates the length of the curve.
    fn flattened_lengths(&self, divisions: usize) -> Vec<f64> {
        let divisions = divisions.max(1);
        let mut lengths = Vec::with_capacity(divisions + 1);
        let mut prev = self.sample(0.0);
        let mut sum = 0.0;
        lengths.push(sum);
        for i in 1..=divisions {
            let p = self.sample(i as f64 / divisions as f64);
            sum += p.distance_to(prev);
            lengths.push(sum);
            prev = p;
        }

        lengths
    }
}
