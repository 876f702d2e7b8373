use super::entities::{CandlePoint, CandleTime};

/// Source of uniform samples in `[0, 1)`
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64,
{
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

const DEFAULT_BASE_PRICE: f64 = 100.0;
const OPEN_SPREAD: f64 = 3.0;
const CLOSE_SPREAD: f64 = 5.0;
const WICK_SPREAD: f64 = 2.0;

/// Random-walk candle series used as a placeholder when the server has no real one
pub struct CandleGenerator<R: RandomSource> {
    random: R,
}

impl<R: RandomSource> CandleGenerator<R> {
    pub fn new(random: R) -> Self {
        Self { random }
    }

    /// `count` candles walking away from `base_price`, indexed from 0.
    /// A missing or zero base starts the walk at 100.
    pub fn generate(&mut self, base_price: Option<f64>, count: usize) -> Vec<CandlePoint> {
        let mut last = base_price.filter(|p| *p != 0.0 && !p.is_nan()).unwrap_or(DEFAULT_BASE_PRICE);
        let mut points = Vec::with_capacity(count);

        for i in 0..count {
            let open = last + (self.random.next_unit() - 0.5) * OPEN_SPREAD;
            let close = open + (self.random.next_unit() - 0.5) * CLOSE_SPREAD;
            let high = open.max(close) + self.random.next_unit() * WICK_SPREAD;
            let low = open.min(close) - self.random.next_unit() * WICK_SPREAD;

            points.push(CandlePoint { time: CandleTime::Index(i), open, high, low, close });
            last = close;
        }

        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_midpoint_source_is_flat() {
        let mut generator = CandleGenerator::new(|| 0.5);
        let points = generator.generate(Some(250.0), 4);
        assert_eq!(points.len(), 4);
        for p in &points {
            assert_eq!(p.open, 250.0);
            assert_eq!(p.close, 250.0);
            assert_eq!(p.high, 251.0);
            assert_eq!(p.low, 249.0);
        }
        assert_eq!(points[3].time, CandleTime::Index(3));
    }

    #[test]
    fn zero_base_starts_at_default() {
        let mut generator = CandleGenerator::new(|| 0.5);
        let points = generator.generate(Some(0.0), 1);
        assert_eq!(points[0].open, DEFAULT_BASE_PRICE);
    }
}
