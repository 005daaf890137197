/// Phase-accumulating oscillator (direct digital synthesis).
///
/// The 16-bit phase wraps modulo 65536 once per period; the step decides
/// the frequency: `step = round(65536 * hz / sample_rate)`. Advancing is a
/// single wrapping add, cheap enough for any per-sample budget.
#[derive(Debug, Clone, Copy, Default)]
pub struct Oscillator {
    phase: u16,
    step: u16,
}

impl Oscillator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> u16 {
        self.phase
    }

    pub fn step(&self) -> u16 {
        self.step
    }

    pub fn set_step(&mut self, step: u16) {
        self.step = step;
    }

    /// Set the target frequency, given in centi-hertz so the math stays
    /// integer-only. Rounds to the nearest representable step.
    pub fn set_frequency_chz(&mut self, chz: u32, sample_rate: u32) {
        let denom = sample_rate as u64 * 100;
        self.step = ((chz as u64 * 65536 + denom / 2) / denom) as u16;
    }

    /// Advance one sample tick. Wraparound is the point: the phase is a
    /// fraction of one waveform period.
    pub fn advance(&mut self) {
        self.phase = self.phase.wrapping_add(self.step);
    }

    pub fn reset(&mut self) {
        self.phase = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_for_a440_at_20khz() {
        let mut osc = Oscillator::new();
        osc.set_frequency_chz(44_000, 20_000);
        // 65536 * 440 / 20000 = 1441.79..
        assert_eq!(osc.step(), 1442, "step must round to nearest");
    }

    #[test]
    fn test_step_rounds_down_below_half() {
        let mut osc = Oscillator::new();
        // 65536 * 100 / 20000 = 327.68 -> 328
        osc.set_frequency_chz(10_000, 20_000);
        assert_eq!(osc.step(), 328);
        // 65536 * 61 / 20000 = 199.88.. -> 200
        osc.set_frequency_chz(6_100, 20_000);
        assert_eq!(osc.step(), 200);
    }

    #[test]
    fn test_phase_wraps_silently() {
        let mut osc = Oscillator::new();
        osc.set_step(60_000);
        osc.advance();
        osc.advance();
        assert_eq!(osc.phase(), 120_000u32 as u16, "phase is modulo 65536");
    }

    #[test]
    fn test_advance_accumulates_step() {
        let mut osc = Oscillator::new();
        osc.set_step(1442);
        for _ in 0..10 {
            osc.advance();
        }
        assert_eq!(osc.phase(), 14420);
    }
}
