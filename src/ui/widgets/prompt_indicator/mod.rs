// src/ui/widgets/prompt_indicator/mod.rs
use std::time::Duration;

use tracing::{debug, trace};

use crate::ui::color::Rgb;
use crate::ui::geometry::{triangle_vertices, LayoutBox, Resizable};
use crate::ui::scene::Scene;
use crate::ui::surface::{ShapeId, Surface};
use crate::ui::timer::{BlinkToken, Scheduler};

pub mod state;

use state::{BlinkEvent, BlinkIntent, BlinkState, BlinkStateMachine};

/// Interval between blink ticks.
pub const BLINK_INTERVAL: Duration = Duration::from_millis(30);

/// The pulsing triangle under the caption.
#[derive(Debug)]
pub struct PromptIndicator<S: Surface = Scene> {
    surface: S,
    shape: Option<ShapeId>,
    blink: BlinkState,
    interval: Duration,
}

impl<S: Surface> PromptIndicator<S> {
    pub fn new(surface: S, base_color: Rgb, interval: Duration) -> Self {
        let mut prompt = Self {
            surface,
            shape: None,
            blink: BlinkState::new(base_color),
            interval,
        };
        prompt.redraw();
        prompt
    }

    pub fn start_blinking(&mut self, scheduler: &mut dyn Scheduler) {
        self.dispatch(BlinkIntent::Start, Some(scheduler));
    }

    pub fn stop_blinking(&mut self) {
        self.dispatch(BlinkIntent::Stop, None);
    }

    /// Handle a tick delivered by the scheduler.
    pub fn on_tick(&mut self, token: BlinkToken, scheduler: &mut dyn Scheduler) {
        self.dispatch(BlinkIntent::Tick(token), Some(scheduler));
    }

    pub fn is_blinking(&self) -> bool {
        self.blink.active
    }

    pub fn blink_state(&self) -> &BlinkState {
        &self.blink
    }

    pub fn current_color(&self) -> Rgb {
        self.blink.current_color
    }

    pub fn shape_id(&self) -> Option<ShapeId> {
        self.shape
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn dispatch(&mut self, intent: BlinkIntent, mut scheduler: Option<&mut dyn Scheduler>) {
        let (next, events) = BlinkStateMachine::transition(self.blink.clone(), intent);
        self.blink = next;

        for event in events {
            match event {
                BlinkEvent::Redraw(color) => {
                    trace!(opacity = self.blink.opacity(), %color, "prompt blink");
                    self.redraw();
                }
                BlinkEvent::Schedule(token) => match scheduler.as_deref_mut() {
                    Some(scheduler) => scheduler.schedule(self.interval, token),
                    None => debug!(generation = token.generation, "no scheduler for blink tick"),
                },
            }
        }
    }

    fn redraw(&mut self) {
        if let Some(old) = self.shape.take() {
            self.surface.delete(old);
        }
        let size = self.surface.size();
        let points = triangle_vertices(size.width, size.height);
        self.shape = Some(self.surface.create_polygon(&points, self.blink.current_color));
    }
}

impl<S: Surface> Resizable for PromptIndicator<S> {
    fn layout_for_size(&mut self, width: u32, height: u32) {
        debug!(width, height, "prompt relayout");
        self.surface.resize(LayoutBox::new(width, height));
        self.redraw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::geometry::Point;
    use crate::ui::surface::Shape;
    use crate::ui::timer::ManualScheduler;

    const BASE: Rgb = Rgb::new(204, 0, 0);

    fn prompt() -> PromptIndicator {
        PromptIndicator::new(Scene::default(), BASE, BLINK_INTERVAL)
    }

    fn polygon(prompt: &PromptIndicator) -> (Vec<Point>, Rgb) {
        let id = prompt.shape_id().expect("prompt has a shape");
        match prompt.surface().shape(id) {
            Some(Shape::Polygon { points, fill }) => (points.clone(), *fill),
            other => panic!("expected polygon, got {other:?}"),
        }
    }

    #[test]
    fn test_layout_before_resize_is_degenerate_but_drawable() {
        let prompt = prompt();
        let (points, fill) = polygon(&prompt);
        assert_eq!(points, vec![Point::new(0, 0); 3]);
        assert_eq!(fill, BASE);
    }

    #[test]
    fn test_layout_resizes_and_recreates_shape() {
        let mut prompt = prompt();
        let before = prompt.shape_id();
        prompt.layout_for_size(80, 24);

        assert_eq!(prompt.surface().size(), LayoutBox::new(80, 24));
        assert_ne!(prompt.shape_id(), before);
        assert_eq!(prompt.surface().len(), 1);

        let (points, _) = polygon(&prompt);
        assert_eq!(points, vec![Point::new(40, 0), Point::new(24, 24), Point::new(56, 24)]);
    }

    #[test]
    fn test_start_schedules_first_tick() {
        let mut prompt = prompt();
        let mut scheduler = ManualScheduler::new();
        prompt.start_blinking(&mut scheduler);
        prompt.start_blinking(&mut scheduler);

        assert!(prompt.is_blinking());
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(scheduler.last_delay(), Some(BLINK_INTERVAL));
    }

    #[test]
    fn test_tick_redraws_and_reschedules() {
        let mut prompt = prompt();
        let mut scheduler = ManualScheduler::new();
        prompt.layout_for_size(80, 24);
        prompt.start_blinking(&mut scheduler);

        let before = prompt.shape_id();
        let token = scheduler.next_due().unwrap();
        prompt.on_tick(token, &mut scheduler);

        assert_ne!(prompt.shape_id(), before);
        assert_eq!(scheduler.pending(), 1);
        let (_, fill) = polygon(&prompt);
        assert_eq!(fill, prompt.current_color());
        assert_ne!(fill, BASE);
    }

    #[test]
    fn test_resize_leaves_blink_state_alone() {
        let mut prompt = prompt();
        let mut scheduler = ManualScheduler::new();
        prompt.start_blinking(&mut scheduler);
        for _ in 0..3 {
            let token = scheduler.next_due().unwrap();
            prompt.on_tick(token, &mut scheduler);
        }
        let state = prompt.blink_state().clone();

        prompt.layout_for_size(200, 60);

        assert_eq!(prompt.blink_state(), &state);
        assert_eq!(polygon(&prompt).1, state.current_color);
    }

    #[test]
    fn test_stop_restores_base_color() {
        let mut prompt = prompt();
        let mut scheduler = ManualScheduler::new();
        prompt.start_blinking(&mut scheduler);
        let token = scheduler.next_due().unwrap();
        prompt.on_tick(token, &mut scheduler);

        prompt.stop_blinking();
        assert!(!prompt.is_blinking());
        assert_eq!(polygon(&prompt).1, BASE);

        // the tick queued before stop still fires once and ends the chain
        let token = scheduler.next_due().unwrap();
        prompt.on_tick(token, &mut scheduler);
        assert_eq!(polygon(&prompt).1, BASE);
        assert_eq!(scheduler.pending(), 0);
    }
}
