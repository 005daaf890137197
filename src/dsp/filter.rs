use crate::dsp::fixed::{q8_to_i8, saturating_add};

/*
One-pole filter over a leaky integrator
=======================================

The filter keeps its running sum in Q8 fixed point: the 16-bit state holds
the 8-bit output in its high byte. Each step feeds the integrator with the
input error scaled by the coefficient k:

    state += (x - state/256) * k
    y      = state/256

Larger |k| means a faster integrator, which tracks the input more closely
and passes more high-frequency content (brighter, less damped). The add
saturates instead of wrapping: a wrapped integrator flips sign at full
drive and produces a loud click, a clamped one merely flattens.

Two poles are chained for a steeper roll-off. Both are usually driven by
the same k but each keeps its own state.
*/

/// A 16-bit digital integrator that saturates instead of wrapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct Integrator {
    state: i16,
}

impl Integrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate `delta`, clamping at the i16 extremes.
    pub fn feed(&mut self, delta: i16) -> i16 {
        self.state = saturating_add(self.state, delta);
        self.state
    }

    pub fn state(&self) -> i16 {
        self.state
    }

    pub fn reset(&mut self) {
        self.state = 0;
    }
}

/// One-pole lowpass built on the saturating integrator.
#[derive(Debug, Clone, Copy, Default)]
pub struct OnePole {
    integrator: Integrator,
}

impl OnePole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one sample through the filter. `k` sets the damping: larger
    /// magnitude tracks the input faster.
    pub fn feed(&mut self, k: i8, x: i8) -> i8 {
        let feedback = q8_to_i8(self.integrator.state());
        self.integrator.feed((x as i16 - feedback as i16) * k as i16);
        q8_to_i8(self.integrator.state())
    }

    pub fn reset(&mut self) {
        self.integrator.reset();
    }
}

/// Two one-pole filters in series, sharing a coefficient but not state.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterCascade {
    first: OnePole,
    second: OnePole,
}

impl FilterCascade {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, k: i8, x: i8) -> i8 {
        let y = self.first.feed(k, x);
        self.second.feed(k, y)
    }

    pub fn reset(&mut self) {
        self.first.reset();
        self.second.reset();
    }
}
