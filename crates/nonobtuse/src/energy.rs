//! Scalar objective: weighted obtuse count plus weighted Steiner count.

/// Energy weights; lower energy is better.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Energy {
    pub alpha: f64,
    pub beta: f64,
}

impl Energy {
    #[inline]
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }

    /// E = α·obtuse + β·steiner.
    #[inline]
    pub fn eval(&self, obtuse: usize, steiner: usize) -> f64 {
        self.alpha * obtuse as f64 + self.beta * steiner as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_combine_linearly() {
        let e = Energy::new(5.0, 0.2);
        assert_eq!(e.eval(0, 0), 0.0);
        assert!((e.eval(3, 10) - 17.0).abs() < 1e-12);
    }
}
