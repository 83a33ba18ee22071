// src/ui/widgets/prompt_indicator/state.rs
use crate::ui::color::{blend, Rgb};
use crate::ui::timer::BlinkToken;

/// Opacity is held in tenths so the 0.1 steps never drift.
const OPACITY_FULL: i16 = 10;
const OPACITY_FLOOR: i16 = -10;
const OPACITY_STEP: i16 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct BlinkState {
    pub active: bool,
    pub base_color: Rgb,
    pub current_color: Rgb,
    opacity_tenths: i16,
    generation: u64,
}

impl BlinkState {
    pub fn new(base_color: Rgb) -> Self {
        Self {
            active: false,
            base_color,
            current_color: base_color,
            opacity_tenths: OPACITY_FULL,
            generation: 0,
        }
    }

    pub fn opacity(&self) -> f64 {
        self.opacity_tenths as f64 / 10.0
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn token(&self) -> BlinkToken {
        BlinkToken {
            generation: self.generation,
        }
    }

    fn reset(&mut self) {
        self.opacity_tenths = OPACITY_FULL;
        self.current_color = self.base_color;
    }
}

// ----------------------------------------------------------------------------
// INTENT - What the owner asks the animation to do
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlinkIntent {
    Start,
    Stop,
    Tick(BlinkToken),
}

// ----------------------------------------------------------------------------
// EVENTS - Side effects the owner must carry out
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlinkEvent {
    /// Redraw the prompt with this fill.
    Redraw(Rgb),
    /// Ask the scheduler for another tick.
    Schedule(BlinkToken),
}

// ----------------------------------------------------------------------------
// STATE MACHINE - Pure function: (State, Intent) -> (State, Vec<Event>)
// ----------------------------------------------------------------------------

pub struct BlinkStateMachine;

impl BlinkStateMachine {
    pub fn transition(state: BlinkState, intent: BlinkIntent) -> (BlinkState, Vec<BlinkEvent>) {
        use BlinkIntent::*;

        match intent {
            Start => Self::handle_start(state),
            Stop => Self::handle_stop(state),
            Tick(token) => Self::handle_tick(state, token),
        }
    }

    fn handle_start(mut state: BlinkState) -> (BlinkState, Vec<BlinkEvent>) {
        if state.active {
            return (state, vec![]);
        }

        state.active = true;
        state.generation += 1;
        let token = state.token();
        (state, vec![BlinkEvent::Schedule(token)])
    }

    fn handle_stop(mut state: BlinkState) -> (BlinkState, Vec<BlinkEvent>) {
        if !state.active {
            return (state, vec![]);
        }

        state.active = false;
        state.reset();
        let color = state.current_color;
        (state, vec![BlinkEvent::Redraw(color)])
    }

    fn handle_tick(mut state: BlinkState, token: BlinkToken) -> (BlinkState, Vec<BlinkEvent>) {
        // Left over from a run that was stopped and restarted before it fired.
        if token.generation != state.generation {
            return (state, vec![]);
        }

        if !state.active {
            // The tick that was in flight when blinking stopped.
            state.reset();
            let color = state.current_color;
            return (state, vec![BlinkEvent::Redraw(color)]);
        }

        state.opacity_tenths -= OPACITY_STEP;
        if state.opacity_tenths < OPACITY_FLOOR {
            state.opacity_tenths = OPACITY_FULL;
        }
        state.current_color = blend(state.base_color, state.opacity().abs(), Rgb::WHITE);

        let color = state.current_color;
        let token = state.token();
        (state, vec![BlinkEvent::Redraw(color), BlinkEvent::Schedule(token)])
    }
}
