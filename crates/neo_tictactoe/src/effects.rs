//! Transient animation markers and their expiry timers.
//!
//! Every marker is stamped with a generation when it is set. A timer hands
//! back an [`Expiry`] carrying that stamp, and only the matching stamp may
//! clear the marker. An expiry left over from a superseded action is
//! therefore a no-op: it can neither clear a fresher marker early nor bring
//! an old one back.

use super::Position;
use super::confetti::ConfettiPiece;
use std::time::Duration;
use tracing::{debug, instrument};

/// Kind of visual effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum EffectKind {
    /// A freshly placed mark bounces.
    Bounce,
    /// The restart control pulses.
    RestartPulse,
    /// Celebration overlay after a win.
    Confetti,
    /// Board shake after a draw.
    Shake,
}

/// How long each effect stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectDurations {
    /// Bounce on a placed mark.
    pub bounce: Duration,
    /// Pulse on the restart control.
    pub restart_pulse: Duration,
    /// Confetti after a win.
    pub confetti: Duration,
    /// Shake after a draw.
    pub shake: Duration,
}

impl EffectDurations {
    /// Returns the duration for `kind`.
    pub fn for_kind(&self, kind: EffectKind) -> Duration {
        match kind {
            EffectKind::Bounce => self.bounce,
            EffectKind::RestartPulse => self.restart_pulse,
            EffectKind::Confetti => self.confetti,
            EffectKind::Shake => self.shake,
        }
    }
}

impl Default for EffectDurations {
    fn default() -> Self {
        Self {
            bounce: Duration::from_millis(400),
            restart_pulse: Duration::from_millis(400),
            confetti: Duration::from_millis(2500),
            shake: Duration::from_millis(1000),
        }
    }
}

/// Request to clear a marker once `after` has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Expiry {
    /// Marker to clear.
    pub kind: EffectKind,
    /// Generation the marker had when this expiry was scheduled.
    pub generation: u64,
    /// Delay before delivery.
    pub after: Duration,
}

impl Expiry {
    /// Creates a new expiry.
    pub fn new(kind: EffectKind, generation: u64, after: Duration) -> Self {
        Self {
            kind,
            generation,
            after,
        }
    }
}

/// Delivers expiries back to the controller after their delay.
///
/// Scheduling is fire-and-forget and cannot fail. Implementations must
/// hand the expiry back on the same event loop that drives the controller.
pub trait EffectTimer {
    /// Schedules `expiry` for delivery after `expiry.after`.
    fn schedule(&mut self, expiry: Expiry);
}

/// Timer that only records what was scheduled.
///
/// Suits hosts that poll their own clock, and tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingTimer {
    scheduled: Vec<Expiry>,
}

impl RecordingTimer {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expiries scheduled so far, oldest first.
    pub fn scheduled(&self) -> &[Expiry] {
        &self.scheduled
    }

    /// Takes every recorded expiry.
    pub fn drain(&mut self) -> Vec<Expiry> {
        std::mem::take(&mut self.scheduled)
    }

    /// Most recent expiry of `kind`, if any.
    pub fn last_of(&self, kind: EffectKind) -> Option<Expiry> {
        self.scheduled.iter().rev().find(|e| e.kind == kind).copied()
    }
}

impl EffectTimer for RecordingTimer {
    fn schedule(&mut self, expiry: Expiry) {
        self.scheduled.push(expiry);
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Marker<T> {
    value: T,
    generation: u64,
}

/// Current set of visible effects.
#[derive(Debug, Clone, Default)]
pub struct Effects {
    bounce: Option<Marker<Position>>,
    restart_pulse: Option<Marker<()>>,
    confetti: Option<Marker<Vec<ConfettiPiece>>>,
    shake: Option<Marker<()>>,
    next_generation: u64,
}

impl Effects {
    /// Creates an empty effect set.
    pub fn new() -> Self {
        Self::default()
    }

    fn stamp<T>(&mut self, value: T) -> Marker<T> {
        self.next_generation += 1;
        Marker {
            value,
            generation: self.next_generation,
        }
    }

    /// Marks `position` as bouncing. Returns the marker's generation.
    pub fn set_bounce(&mut self, position: Position) -> u64 {
        let marker = self.stamp(position);
        let generation = marker.generation;
        self.bounce = Some(marker);
        generation
    }

    /// Starts the restart pulse. Returns the marker's generation.
    pub fn set_restart_pulse(&mut self) -> u64 {
        let marker = self.stamp(());
        let generation = marker.generation;
        self.restart_pulse = Some(marker);
        generation
    }

    /// Shows `pieces` as confetti. Returns the marker's generation.
    pub fn set_confetti(&mut self, pieces: Vec<ConfettiPiece>) -> u64 {
        let marker = self.stamp(pieces);
        let generation = marker.generation;
        self.confetti = Some(marker);
        generation
    }

    /// Starts the draw shake. Returns the marker's generation.
    pub fn set_shake(&mut self) -> u64 {
        let marker = self.stamp(());
        let generation = marker.generation;
        self.shake = Some(marker);
        generation
    }

    /// Clears a marker unconditionally.
    pub fn clear(&mut self, kind: EffectKind) {
        match kind {
            EffectKind::Bounce => self.bounce = None,
            EffectKind::RestartPulse => self.restart_pulse = None,
            EffectKind::Confetti => self.confetti = None,
            EffectKind::Shake => self.shake = None,
        }
    }

    /// Current generation of a marker, or `None` if it is not set.
    pub fn generation(&self, kind: EffectKind) -> Option<u64> {
        match kind {
            EffectKind::Bounce => self.bounce.as_ref().map(|m| m.generation),
            EffectKind::RestartPulse => self.restart_pulse.as_ref().map(|m| m.generation),
            EffectKind::Confetti => self.confetti.as_ref().map(|m| m.generation),
            EffectKind::Shake => self.shake.as_ref().map(|m| m.generation),
        }
    }

    /// Clears the marker named by `expiry` if its generation still matches.
    ///
    /// Returns true if a marker was cleared.
    #[instrument(skip(self), fields(kind = ?expiry.kind, generation = expiry.generation))]
    pub fn expire(&mut self, expiry: Expiry) -> bool {
        if self.generation(expiry.kind) == Some(expiry.generation) {
            self.clear(expiry.kind);
            true
        } else {
            debug!("Ignoring stale expiry");
            false
        }
    }

    /// Position currently bouncing.
    pub fn bounce(&self) -> Option<Position> {
        self.bounce.as_ref().map(|m| m.value)
    }

    /// Whether the restart control is pulsing.
    pub fn restart_pulse(&self) -> bool {
        self.restart_pulse.is_some()
    }

    /// Confetti pieces currently shown.
    pub fn confetti(&self) -> Option<&[ConfettiPiece]> {
        self.confetti.as_ref().map(|m| m.value.as_slice())
    }

    /// Whether the board is shaking.
    pub fn shake(&self) -> bool {
        self.shake.is_some()
    }

    /// True when no marker is set.
    pub fn is_idle(&self) -> bool {
        self.bounce.is_none()
            && self.restart_pulse.is_none()
            && self.confetti.is_none()
            && self.shake.is_none()
    }
}
