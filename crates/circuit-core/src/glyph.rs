//! Digital rain of short-lived symbols.
//!
//! Columns of symbols are spawned in a staggered burst across the viewport at
//! start-up, then one column at a random x every `COLUMN_SPAWN_INTERVAL`. Each
//! symbol lives for its fall duration plus `GLYPH_REMOVAL_GRACE`; the matching
//! [`GlyphEvent::Expire`] is emitted by the first tick at or after that time.

use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;

use crate::constants::*;
use crate::scheduler::Scheduler;
use crate::viewport::Viewport;

pub type GlyphId = u64;

#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    pub id: GlyphId,
    pub text: &'static str,
    /// Left edge in CSS pixels.
    pub x: f32,
    /// Time to fall from above the viewport to below it.
    pub duration: Duration,
    /// Time before the fall starts.
    pub delay: Duration,
    pub font_px: f32,
    pub spawned_at: Duration,
}

impl Glyph {
    #[inline]
    pub fn lifetime(&self) -> Duration {
        self.duration + GLYPH_REMOVAL_GRACE
    }

    #[inline]
    pub fn expires_at(&self) -> Duration {
        self.spawned_at + self.lifetime()
    }

    /// Fall progress in [0, 1]; 0 while still delayed.
    pub fn progress(&self, now: Duration) -> f32 {
        let start = self.spawned_at + self.delay;
        if now <= start || self.duration.is_zero() {
            return 0.0;
        }
        ((now - start).as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Vertical position when the glyph is drawn by the animator itself:
    /// from `GLYPH_START_Y` above the top edge to the same distance below the
    /// bottom edge.
    pub fn offset_y(&self, now: Duration, viewport: Viewport) -> f32 {
        let travel = viewport.height - 2.0 * GLYPH_START_Y;
        GLYPH_START_Y + self.progress(now) * travel
    }

    /// Fades out over the fall; invisible while delayed.
    pub fn opacity(&self, now: Duration) -> f32 {
        if now < self.spawned_at + self.delay {
            return 0.0;
        }
        1.0 - 0.8 * self.progress(now)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum GlyphEvent {
    Spawn(Glyph),
    Expire(GlyphId),
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Task {
    Column { x: f32 },
    Symbol { x: f32 },
    Expire(GlyphId),
    Interval,
}

pub struct GlyphRain {
    scheduler: Scheduler<Task>,
    live: Vec<Glyph>,
    next_id: GlyphId,
}

impl Default for GlyphRain {
    fn default() -> Self {
        Self::new()
    }
}

impl GlyphRain {
    pub fn new() -> Self {
        Self {
            scheduler: Scheduler::new(),
            live: Vec::new(),
            next_id: 0,
        }
    }

    /// Queue the start-up burst and the recurring spawn interval.
    pub fn start(&mut self, viewport: Viewport, now: Duration) {
        self.burst(viewport, now);
        self.scheduler
            .schedule_at(now + COLUMN_SPAWN_INTERVAL, Task::Interval);
    }

    /// One column per `RAIN_COLUMN_SPACING` across the width, staggered.
    pub fn burst(&mut self, viewport: Viewport, now: Duration) {
        let columns = (viewport.width / RAIN_COLUMN_SPACING).floor().max(0.0) as u32;
        for i in 0..columns {
            self.scheduler.schedule_at(
                now + STARTUP_COLUMN_STAGGER * i,
                Task::Column {
                    x: i as f32 * RAIN_COLUMN_SPACING,
                },
            );
        }
        log::debug!("[glyphs] burst columns={}", columns);
    }

    pub fn live(&self) -> &[Glyph] {
        &self.live
    }

    /// Run every task due by `now`, pushing spawn/expire events to `out`.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        now: Duration,
        viewport: Viewport,
        rng: &mut R,
        out: &mut Vec<GlyphEvent>,
    ) {
        // tasks may schedule follow-ups that are already due
        loop {
            let due = self.scheduler.drain_due(now);
            if due.is_empty() {
                break;
            }
            for (at, task) in due {
                self.run(task, at, viewport, rng, out);
            }
        }
    }

    fn run<R: Rng + ?Sized>(
        &mut self,
        task: Task,
        at: Duration,
        viewport: Viewport,
        rng: &mut R,
        out: &mut Vec<GlyphEvent>,
    ) {
        match task {
            Task::Column { x } => {
                let count = rng.gen_range(SYMBOLS_PER_COLUMN_MIN..=SYMBOLS_PER_COLUMN_MAX);
                for i in 0..count as u32 {
                    self.scheduler
                        .schedule_at(at + SYMBOL_STAGGER * i, Task::Symbol { x });
                }
            }
            Task::Symbol { x } => {
                let glyph = self.make_glyph(x, at, rng);
                self.scheduler
                    .schedule_at(glyph.expires_at(), Task::Expire(glyph.id));
                self.live.push(glyph.clone());
                out.push(GlyphEvent::Spawn(glyph));
            }
            Task::Expire(id) => {
                self.live.retain(|g| g.id != id);
                out.push(GlyphEvent::Expire(id));
            }
            Task::Interval => {
                let x = rng.gen::<f32>() * viewport.width;
                self.scheduler.schedule_at(at, Task::Column { x });
                self.scheduler
                    .schedule_at(at + COLUMN_SPAWN_INTERVAL, Task::Interval);
            }
        }
    }

    fn make_glyph<R: Rng + ?Sized>(&mut self, column_x: f32, at: Duration, rng: &mut R) -> Glyph {
        let id = self.next_id;
        self.next_id += 1;
        Glyph {
            id,
            text: pick_symbol(rng),
            x: column_x + rng.gen_range(-GLYPH_X_JITTER..GLYPH_X_JITTER),
            duration: Duration::from_secs_f32(
                GLYPH_DURATION_MIN_SEC + rng.gen::<f32>() * GLYPH_DURATION_SPAN_SEC,
            ),
            delay: Duration::from_secs_f32(rng.gen::<f32>() * GLYPH_DELAY_MAX_SEC),
            font_px: GLYPH_FONT_MIN_PX + rng.gen::<f32>() * GLYPH_FONT_SPAN_PX,
            spawned_at: at,
        }
    }
}

/// Mostly binary digits with the occasional operator.
pub fn pick_symbol<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    let set = if rng.gen_bool(BINARY_GLYPH_PROBABILITY) {
        BINARY_SYMBOLS
    } else {
        OPERATOR_SYMBOLS
    };
    set.choose(rng).copied().unwrap_or("0")
}
