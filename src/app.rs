//! The frame loop.
//!
//! # States
//!
//! ```text
//! Running --(quit event | present error)--> Terminating
//! ```
//!
//! Each `Running` iteration polls, clears, paints the scene, advances the
//! animation, presents, and sleeps out the rest of the frame period.

use std::time::Instant;

use log::{debug, trace};

use crate::animation::AnimationState;
use crate::colors::Color;
use crate::error::Result;
use crate::gfx::{ClearMask, GraphicsContext};
use crate::scene::Scene;
use crate::window::{FramePacer, Surface, WindowEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminating,
}

/// Summary returned once the loop stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub frames: u64,
    pub animation: AnimationState,
}

/// One-time context setup: depth testing on, background color set.
pub fn init_graphics<G: GraphicsContext + ?Sized>(ctx: &mut G, clear_color: Color) {
    ctx.set_depth_test(true);
    ctx.set_clear_color(clear_color);
}

#[derive(Debug, Clone)]
pub struct FrameLoop {
    state: LoopState,
    animation: AnimationState,
    pacer: FramePacer,
    frames: u64,
}

impl FrameLoop {
    pub fn new(pacer: FramePacer) -> Self {
        Self {
            state: LoopState::Running,
            animation: AnimationState::default(),
            pacer,
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn animation(&self) -> AnimationState {
        self.animation
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn report(&self) -> FrameReport {
        FrameReport {
            frames: self.frames,
            animation: self.animation,
        }
    }

    /// Runs one iteration and returns the state afterwards.
    ///
    /// Once terminating, further calls do nothing.
    pub fn step<S, G>(&mut self, surface: &mut S, ctx: &mut G, scene: &Scene) -> Result<LoopState>
    where
        S: Surface + ?Sized,
        G: GraphicsContext + ?Sized,
    {
        if self.state == LoopState::Terminating {
            return Ok(self.state);
        }

        if surface.poll_events() == WindowEvent::Quit {
            debug!("quit requested after {} frames", self.frames);
            self.state = LoopState::Terminating;
            return Ok(self.state);
        }

        ctx.clear(ClearMask::ALL);
        let started = Instant::now();

        scene.paint(ctx, &self.animation);
        self.animation.advance();
        self.frames += 1;
        if let Err(err) = surface.swap_buffers(ctx.frame_bytes()) {
            self.state = LoopState::Terminating;
            return Err(err);
        }

        let elapsed = started.elapsed();
        if self.pacer.remaining(elapsed).is_none() && !self.pacer.target().is_zero() {
            trace!(
                "frame {} took {:?}, over the {:?} budget",
                self.frames,
                elapsed,
                self.pacer.target()
            );
        }
        self.pacer.pace(elapsed);

        Ok(self.state)
    }

    /// Steps until a quit event arrives.
    pub fn run<S, G>(&mut self, surface: &mut S, ctx: &mut G, scene: &Scene) -> Result<FrameReport>
    where
        S: Surface + ?Sized,
        G: GraphicsContext + ?Sized,
    {
        while self.step(surface, ctx, scene)? == LoopState::Running {}
        Ok(self.report())
    }
}
