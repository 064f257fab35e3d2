use super::ease::{lerp, Ease};

/// A single time-based interpolation evaluated at an explicit clock value
/// (seconds), so perceived speed does not depend on the frame rate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start: f64,
    pub duration: f64,
    pub ease: Ease,
}

impl Tween {
    pub fn value_at(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = (now - self.start) / self.duration;
        lerp(self.from, self.to, self.ease.apply(t))
    }

    pub fn is_finished(&self, now: f64) -> bool {
        now >= self.start + self.duration
    }
}

/// One animated property. Setting a new target replaces whatever tween is
/// in flight, starting from the value the property currently shows.
#[derive(Clone, Debug)]
pub struct TweenSlot {
    value: f64,
    active: Option<Tween>,
    duration: f64,
    ease: Ease,
}

impl TweenSlot {
    pub fn new(initial: f64, duration: f64, ease: Ease) -> Self {
        Self {
            value: initial,
            active: None,
            duration,
            ease,
        }
    }

    pub fn value(&self, now: f64) -> f64 {
        match &self.active {
            Some(tween) => tween.value_at(now),
            None => self.value,
        }
    }

    pub fn target(&self) -> f64 {
        self.active.map(|t| t.to).unwrap_or(self.value)
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.active.map(|t| !t.is_finished(now)).unwrap_or(false)
    }

    /// Kill the in-flight tween (if any) and start a new one toward `to`.
    /// Re-targeting the value already being approached is a no-op.
    pub fn retarget(&mut self, now: f64, to: f64) {
        if self.target() == to {
            return;
        }
        let from = self.value(now);
        self.value = from;
        self.active = Some(Tween {
            from,
            to,
            start: now,
            duration: self.duration,
            ease: self.ease,
        });
    }

    /// Jump straight to `value`, cancelling any tween.
    pub fn set(&mut self, value: f64) {
        self.value = value;
        self.active = None;
    }

    /// Fold a finished tween into the resting value. Returns the current value.
    pub fn step(&mut self, now: f64) -> f64 {
        if let Some(tween) = self.active {
            if tween.is_finished(now) {
                self.value = tween.to;
                self.active = None;
            }
        }
        self.value(now)
    }
}

/// Timeline position that plays forward or in reverse at unit speed,
/// clamped to `0..=duration`. Models "play on enter, reverse on leave back".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Playhead {
    duration: f64,
    anchor_time: f64,
    anchor_pos: f64,
    direction: f64,
}

impl Playhead {
    pub fn new(duration: f64) -> Self {
        Self {
            duration: duration.max(0.0),
            anchor_time: 0.0,
            anchor_pos: 0.0,
            direction: 0.0,
        }
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn position(&self, now: f64) -> f64 {
        let pos = self.anchor_pos + (now - self.anchor_time) * self.direction;
        pos.clamp(0.0, self.duration)
    }

    pub fn is_moving(&self, now: f64) -> bool {
        let pos = self.position(now);
        (self.direction > 0.0 && pos < self.duration) || (self.direction < 0.0 && pos > 0.0)
    }

    pub fn play(&mut self, now: f64) {
        self.turn(now, 1.0);
    }

    pub fn reverse(&mut self, now: f64) {
        self.turn(now, -1.0);
    }

    fn turn(&mut self, now: f64, direction: f64) {
        self.anchor_pos = self.position(now);
        self.anchor_time = now;
        self.direction = direction;
    }
}
