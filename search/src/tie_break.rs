use rand::Rng;

/// Decides the score to compare with when a backed-up score is exactly zero.
pub trait TieBreaker {
    fn break_tie(&mut self, score: f32) -> f32;
}

/// Keeps every score as is, so equal lines resolve in generation order.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTieBreak;

impl TieBreaker for NoTieBreak {
    fn break_tie(&mut self, score: f32) -> f32 {
        score
    }
}

/// Replaces a zero score with a small random positive number.
#[derive(Debug, Clone)]
pub struct RandomTieBreak<R> {
    rng: R,
}

impl<R: Rng> RandomTieBreak<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> TieBreaker for RandomTieBreak<R> {
    fn break_tie(&mut self, score: f32) -> f32 {
        if score == 0.0 {
            self.rng.gen_range(f32::MIN_POSITIVE..1.0)
        } else {
            score
        }
    }
}

impl<T: TieBreaker + ?Sized> TieBreaker for &mut T {
    fn break_tie(&mut self, score: f32) -> f32 {
        (**self).break_tie(score)
    }
}

impl<T: TieBreaker + ?Sized> TieBreaker for Box<T> {
    fn break_tie(&mut self, score: f32) -> f32 {
        (**self).break_tie(score)
    }
}
