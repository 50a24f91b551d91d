//! Animated scrolling and the scroll session it owns.
//!
//! Only one animation runs at a time. Starting a new one stops the current one
//! without completing it, so the completion of a stopped animation never fires.
//! The session is tracked with a generation counter: it is active from the
//! start of an animation until the completion of the newest one.

use crate::error::ConfigError;
use crate::heading::HeadingId;
use std::f64::consts::PI;
use std::str::FromStr;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Qualitative animation speed.
pub enum Speed {
    /// 200ms.
    Fast,
    /// 600ms.
    Slow,
}

impl Speed {
    #[must_use]
    /// Animation length for this speed.
    pub fn duration(self) -> Duration {
        match self {
            Self::Fast => Duration::from_millis(200),
            Self::Slow => Duration::from_millis(600),
        }
    }
}

impl FromStr for Speed {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fast" => Ok(Self::Fast),
            "slow" => Ok(Self::Slow),
            _ => Err(ConfigError::UnknownValue {
                setting: "scroll_speed",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Marks an in-progress programmatic scroll.
pub struct ScrollSession {
    generation: u64,
    active: bool,
}

impl ScrollSession {
    /// Start a new session generation.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.active = true;
        self.generation
    }

    /// End the session if `generation` is the newest one.
    ///
    /// Returns whether the session ended.
    pub fn complete(&mut self, generation: u64) -> bool {
        if self.active && generation == self.generation {
            self.active = false;
            true
        } else {
            false
        }
    }

    #[must_use]
    /// Whether an animation is in progress.
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    /// Newest generation handed out.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Animation {
    from: f64,
    to: f64,
    start: Instant,
    duration: Duration,
    generation: u64,
    target: HeadingId,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Result of advancing the animator by one frame.
pub struct Frame {
    /// Scroll position after this frame.
    pub position: f64,
    /// Heading whose animation finished on this frame.
    pub completed: Option<HeadingId>,
}

#[must_use]
/// jQuery's default "swing" easing.
pub fn swing(progress: f64) -> f64 {
    0.5 - (progress * PI).cos() / 2.0
}

#[derive(Clone, Debug)]
/// Interpolates the scroll position towards a target heading.
pub struct ScrollAnimator {
    speed: Speed,
    session: ScrollSession,
    animation: Option<Animation>,
}

impl ScrollAnimator {
    #[must_use]
    /// Idle animator using `speed` for every animation.
    pub fn new(speed: Speed) -> Self {
        Self {
            speed,
            session: ScrollSession::default(),
            animation: None,
        }
    }

    #[must_use]
    /// Session tracking the newest animation.
    pub fn session(&self) -> &ScrollSession {
        &self.session
    }

    #[must_use]
    /// Whether an animation is in progress.
    pub fn is_scrolling(&self) -> bool {
        self.session.is_active()
    }

    #[must_use]
    /// Heading the running animation is heading for.
    pub fn target(&self) -> Option<HeadingId> {
        self.animation.map(|a| a.target)
    }

    /// Stop any running animation and start scrolling from `from` to `to`.
    pub fn start(&mut self, from: f64, to: f64, target: HeadingId, now: Instant) {
        if let Some(stopped) = self.animation.take() {
            tracing::trace!(heading = %stopped.target, "animation stopped");
        }
        let generation = self.session.begin();
        self.animation = Some(Animation {
            from,
            to,
            start: now,
            duration: self.speed.duration(),
            generation,
            target,
        });
        tracing::debug!(from, to, heading = %target, generation, "animation started");
    }

    /// Abandon the running animation and end the session without completing it.
    pub fn stop(&mut self) {
        if let Some(stopped) = self.animation.take() {
            self.session.complete(stopped.generation);
            tracing::trace!(heading = %stopped.target, "animation abandoned");
        }
    }

    /// Advance to `now`, returning the position if an animation is running.
    pub fn tick(&mut self, now: Instant) -> Option<Frame> {
        let animation = self.animation?;
        let elapsed = now.saturating_duration_since(animation.start);
        if elapsed >= animation.duration {
            self.animation = None;
            self.session.complete(animation.generation);
            tracing::debug!(heading = %animation.target, "animation completed");
            return Some(Frame {
                position: animation.to,
                completed: Some(animation.target),
            });
        }
        let progress = elapsed.as_secs_f64() / animation.duration.as_secs_f64();
        Some(Frame {
            position: animation.from + (animation.to - animation.from) * swing(progress),
            completed: None,
        })
    }
}

#[cfg(test)]
#[path = "tests/scroll.rs"]
mod tests;
