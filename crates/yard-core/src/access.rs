//! Access gate: who may change dispatch records right now.
//!
//! The gate is an explicit capability handed to the [`crate::Dispatcher`],
//! not a global flag. Reads never consult it; every create, update and
//! delete does, before the Stop Store is touched.

use jiff::{SignedDuration, Timestamp};
use log::{info, warn};

/// Built-in dispatcher PIN used when none is configured.
pub const DEFAULT_DISPATCH_PIN: &str = "DP3105";

/// How long a successful unlock stays valid.
pub const DEFAULT_UNLOCK_TTL: SignedDuration = SignedDuration::from_hours(8);

/// Capability check consulted before any mutation.
pub trait AccessGate {
    /// Whether editing is currently permitted.
    fn can_edit(&self) -> bool;

    /// Try to elevate with the given credential. Returns whether editing is
    /// permitted afterwards.
    fn request_elevation(&mut self, credential: &str) -> bool;
}

/// Gate that always permits editing.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenGate;

impl AccessGate for OpenGate {
    fn can_edit(&self) -> bool {
        true
    }

    fn request_elevation(&mut self, _credential: &str) -> bool {
        true
    }
}

/// PIN-protected gate with an unlock window.
///
/// # Examples
///
/// ```rust
/// use yard_core::access::{AccessGate, PinGate};
///
/// let mut gate = PinGate::new("1234");
/// assert!(!gate.can_edit());
/// assert!(!gate.request_elevation("0000"));
/// assert!(gate.request_elevation("1234"));
/// assert!(gate.can_edit());
/// ```
#[derive(Debug, Clone)]
pub struct PinGate {
    pin: String,
    ttl: SignedDuration,
    unlocked_at: Option<Timestamp>,
}

impl PinGate {
    /// Locked gate requiring `pin`, with the default unlock window.
    pub fn new(pin: impl Into<String>) -> Self {
        Self {
            pin: pin.into(),
            ttl: DEFAULT_UNLOCK_TTL,
            unlocked_at: None,
        }
    }

    /// Sets how long an unlock stays valid.
    pub fn with_ttl(mut self, ttl: SignedDuration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Whether an unlock is still in effect at `now`.
    pub fn is_unlocked_at(&self, now: Timestamp) -> bool {
        self.unlocked_at.is_some_and(|at| {
            let elapsed = now.duration_since(at);
            !elapsed.is_negative() && elapsed < self.ttl
        })
    }

    /// Drop any unlock in effect.
    pub fn lock(&mut self) {
        self.unlocked_at = None;
    }
}

impl Default for PinGate {
    fn default() -> Self {
        Self::new(DEFAULT_DISPATCH_PIN)
    }
}

impl AccessGate for PinGate {
    fn can_edit(&self) -> bool {
        self.is_unlocked_at(Timestamp::now())
    }

    fn request_elevation(&mut self, credential: &str) -> bool {
        if credential == self.pin {
            info!("Dispatch editing unlocked");
            self.unlocked_at = Some(Timestamp::now());
            true
        } else {
            warn!("Rejected dispatch PIN");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_gate_starts_locked() {
        let gate = PinGate::default();
        assert!(!gate.can_edit());
    }

    #[test]
    fn test_pin_gate_unlocks_with_matching_pin() {
        let mut gate = PinGate::new("DP3105");
        assert!(gate.request_elevation("DP3105"));
        assert!(gate.can_edit());
    }

    #[test]
    fn test_pin_gate_rejects_wrong_pin() {
        let mut gate = PinGate::new("DP3105");
        assert!(!gate.request_elevation("dp3105"));
        assert!(!gate.can_edit());
    }

    #[test]
    fn test_pin_gate_unlock_expires() {
        let mut gate = PinGate::new("1234").with_ttl(SignedDuration::from_hours(8));
        assert!(gate.request_elevation("1234"));

        let unlocked_at = gate.unlocked_at.expect("unlock recorded");
        let later = unlocked_at
            .checked_add(SignedDuration::from_hours(9))
            .expect("timestamp in range");
        assert!(!gate.is_unlocked_at(later));
        assert!(gate.is_unlocked_at(unlocked_at));
    }

    #[test]
    fn test_pin_gate_locked_when_clock_moves_back() {
        let mut gate = PinGate::new("1234");
        assert!(gate.request_elevation("1234"));

        let unlocked_at = gate.unlocked_at.expect("unlock recorded");
        let earlier = unlocked_at
            .checked_sub(SignedDuration::from_mins(5))
            .expect("timestamp in range");
        assert!(!gate.is_unlocked_at(earlier));
    }

    #[test]
    fn test_pin_gate_lock() {
        let mut gate = PinGate::new("1234");
        gate.request_elevation("1234");
        gate.lock();
        assert!(!gate.can_edit());
    }

    #[test]
    fn test_open_gate() {
        let mut gate = OpenGate;
        assert!(gate.can_edit());
        assert!(gate.request_elevation(""));
    }
}
