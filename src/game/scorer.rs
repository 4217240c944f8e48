/// Solve time at or under which a player earns the full score
pub const FULL_SCORE_SECONDS: u32 = 60;
pub const MAX_SCORE: u32 = 100;
/// Floor awarded to anyone who finishes after ten minutes
pub const MIN_SCORE: u32 = 10;

pub struct Scorer;

impl Scorer {
    /// Score for completing a puzzle in `seconds`.
    ///
    /// Scoring rules:
    /// - 100 up to one minute
    /// - falls linearly to 50 at five minutes
    /// - falls linearly to 20 at ten minutes
    /// - 10 after that
    ///
    /// Partial points are always rounded down.
    pub fn score_for_time(seconds: u32) -> u32 {
        match seconds {
            0..=FULL_SCORE_SECONDS => MAX_SCORE,
            61..=300 => 100 - Self::penalty(seconds - 60, 50, 240),
            301..=600 => 50 - Self::penalty(seconds - 300, 30, 300),
            _ => MIN_SCORE,
        }
    }

    /// `ceil(elapsed * points / span)`, so subtracting it floors the score
    fn penalty(elapsed: u32, points: u32, span: u32) -> u32 {
        (elapsed * points).div_ceil(span)
    }
}
