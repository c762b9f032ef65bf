use serde::{Serialize, Deserialize};
use std::fmt;

/// Number of fixed wedges on the wheel; each spans 45 degrees.
pub const WHEEL_WEDGES: u32 = 8;
pub const WEDGE_DEGREES: f64 = 360.0 / WHEEL_WEDGES as f64;

/// Full revolutions added to every spin before the landing delta.
pub const BASE_SPINS: f64 = 5.0;
pub const BASE_SPIN_DEGREES: f64 = BASE_SPINS * 360.0;

/// Duration of the settle animation in milliseconds.
pub const SPIN_DURATION_MS: u32 = 5000;

/// Base angles of the eight wedges, in backend prize-table order.
pub const WEDGE_BASE_ANGLES: [f64; 8] =
    [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0];

/// Wraps any angle into `[0, 360)`.
pub fn normalize_angle(degrees: f64) -> f64 {
    ((degrees % 360.0) + 360.0) % 360.0
}

/// Computes the next cumulative rotation for a spin landing on `result_angle`.
///
/// The disc rotates clockwise and the pointer sits at 12 o'clock; turning the
/// disc by `360 - theta` brings the wedge whose angle is `theta` under the
/// pointer, so the landing invariant is `normalize_angle(new + theta) == 0`.
/// The returned total is strictly greater than `current_cumulative` and at
/// least `BASE_SPIN_DEGREES` ahead of it, so the renderer is never asked to
/// turn backwards; even when the wheel is already resting on the target
/// wedge it performs the full base revolutions.
pub fn plan_spin(current_cumulative: f64, result_angle: f64) -> f64 {
    let theta = normalize_angle(result_angle);
    let current_mod = normalize_angle(current_cumulative);
    let delta = (360.0 - theta - current_mod + 360.0) % 360.0;
    current_cumulative + BASE_SPIN_DEGREES + delta
}

/// Lifecycle of a single spin. At most one spin is in flight per tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinPhase {
    Idle,
    Requesting,
    Animating,
    Failed,
}

/// Owns the wheel's cumulative rotation angle and the spin lifecycle.
///
/// `cumulative` only ever grows and must reach the renderer unreduced;
/// taking it mod 360 before applying the transform makes the wheel snap
/// backwards whenever a target wraps past a full turn.
#[derive(Debug)]
pub struct RotationTracker {
    cumulative: f64,
    phase: SpinPhase,
    pending_target: Option<f64>,
}

impl RotationTracker {
    pub fn new() -> Self {
        Self {
            cumulative: 0.0,
            phase: SpinPhase::Idle,
            pending_target: None,
        }
    }

    /// Committed rotation in degrees: clockwise-positive, unbounded.
    pub fn rotation(&self) -> f64 {
        self.cumulative
    }

    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    /// True while a request or its settle animation is outstanding.
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, SpinPhase::Requesting | SpinPhase::Animating)
    }

    /// `Idle -> Requesting`. Returns `false` without side effects from any
    /// other phase, so a double-tap cannot start a second request.
    pub fn begin_request(&mut self) -> bool {
        if self.phase != SpinPhase::Idle {
            log::debug!("spin request ignored in phase {:?}", self.phase);
            return false;
        }
        self.phase = SpinPhase::Requesting;
        true
    }

    /// `Requesting -> Animating`. Plans the rotation that lands on
    /// `result_angle` and returns it; the caller animates from `rotation()`
    /// to the returned target and then calls [`settle`](Self::settle).
    ///
    /// Only valid after `begin_request` returned `true`.
    pub fn begin_animation(&mut self, result_angle: f64) -> f64 {
        debug_assert_eq!(self.phase, SpinPhase::Requesting);
        let target = plan_spin(self.cumulative, result_angle);
        self.pending_target = Some(target);
        self.phase = SpinPhase::Animating;
        target
    }

    /// `Animating -> Idle`. Commits the planned target as the new cumulative
    /// rotation and returns it.
    pub fn settle(&mut self) -> f64 {
        debug_assert_eq!(self.phase, SpinPhase::Animating);
        if let Some(target) = self.pending_target.take() {
            self.cumulative = target;
        }
        self.phase = SpinPhase::Idle;
        self.cumulative
    }

    /// `Requesting -> Failed`. No rotation is attempted and `rotation()` is
    /// unchanged.
    pub fn fail(&mut self) {
        debug_assert_eq!(self.phase, SpinPhase::Requesting);
        self.pending_target = None;
        self.phase = SpinPhase::Failed;
    }

    /// `Failed -> Idle`, once the caller has surfaced the error.
    pub fn acknowledge_failure(&mut self) {
        if self.phase == SpinPhase::Failed {
            self.phase = SpinPhase::Idle;
        }
    }
}

impl Default for RotationTracker {
    fn default() -> Self {
        Self::new()
    }
}

// === API Types ===

/// Prize categories the backend can assign to a wedge.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PrizeType {
    Spins,
    Points,
    Item,
}

impl fmt::Display for PrizeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrizeType::Spins => write!(f, "spins"),
            PrizeType::Points => write!(f, "points"),
            PrizeType::Item => write!(f, "item"),
        }
    }
}

/// One spin outcome as served by `/game/spin`. `angle` is the winning
/// wedge's base angle plus a small in-wedge offset, always in `[0, 360)`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinResult {
    pub prize_type: PrizeType,
    pub prize_value: String,
    pub remaining_spins: i32,
    pub angle: f64,
}

impl SpinResult {
    /// True when the served angle lies inside the wedge its prize maps to.
    pub fn angle_matches_prize(&self) -> bool {
        match prize_base_angle(self.prize_type, &self.prize_value) {
            Some(base) => normalize_angle(self.angle - base) < WEDGE_DEGREES,
            None => false,
        }
    }

    /// Short human label for the win modal, e.g. "500 points".
    pub fn prize_label(&self) -> String {
        match self.prize_type {
            PrizeType::Item => self.prize_value.clone(),
            _ => format!("{} {}", self.prize_value, self.prize_type),
        }
    }
}

/// Result of `/game/buy_spins`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PurchaseResult {
    pub spins_purchased: i32,
    pub remaining_spins: i32,
    pub remaining_points: f64,
}

/// Display labels for the eight wedges, in base-angle order.
pub fn wedge_label(index: usize) -> &'static str {
    match index % WHEEL_WEDGES as usize {
        0 => "1 Spin",
        1 => "100 pts",
        2 => "500 pts",
        3 => "5 Spins",
        4 => "iPhone",
        5 => "50 pts",
        6 => "2 Spins",
        _ => "1000 pts",
    }
}

/// Base wedge angle for a backend prize, used to sanity-check that a served
/// `angle` falls inside the wedge its prize names.
pub fn prize_base_angle(prize_type: PrizeType, prize_value: &str) -> Option<f64> {
    let angle = match (prize_type, prize_value) {
        (PrizeType::Spins, "1") => 0.0,
        (PrizeType::Points, "100") => 45.0,
        (PrizeType::Points, "500") => 90.0,
        (PrizeType::Spins, "5") => 135.0,
        (PrizeType::Item, "iphone") => 180.0,
        (PrizeType::Points, "50") => 225.0,
        (PrizeType::Spins, "2") => 270.0,
        (PrizeType::Points, "1000") => 315.0,
        _ => return None,
    };
    Some(angle)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    // Landing convention: the planned total plus the requested wedge angle
    // is a whole number of turns.
    fn lands_on(total: f64, theta: f64) -> bool {
        let wrapped = normalize_angle(total + theta);
        wrapped < EPSILON || (360.0 - wrapped) < EPSILON
    }

    #[test]
    fn plan_spin_lands_on_requested_wedge() {
        for &current in &[0.0, 90.0, 359.9, 1800.0, 123_456.75] {
            for &angle in &[0.0, 5.0, 45.0, 90.0, 180.0, 270.0, 315.0, 359.0] {
                let planned = plan_spin(current, angle);
                assert!(
                    lands_on(planned, angle),
                    "current={} angle={} planned={}",
                    current,
                    angle,
                    planned
                );
            }
        }
    }

    #[test]
    fn plan_spin_is_strictly_monotonic() {
        for &current in &[0.0, 42.5, 359.999, 7200.0] {
            for &angle in &[0.0, 1.0, 180.0, 359.0] {
                assert!(plan_spin(current, angle) > current);
            }
        }
    }

    #[test]
    fn plan_spin_always_adds_base_revolutions() {
        for &current in &[0.0, 100.0, 5400.0] {
            for &angle in &[0.0, 45.0, 225.0] {
                assert!(plan_spin(current, angle) - current >= BASE_SPIN_DEGREES);
            }
        }
    }

    #[test]
    fn full_turns_do_not_change_the_landing_wedge() {
        let a = plan_spin(720.0, 135.0);
        let b = plan_spin(720.0 + 360.0, 135.0);
        assert!((normalize_angle(a) - normalize_angle(b)).abs() < EPSILON);
        assert!((b - a - 360.0).abs() < EPSILON);
    }

    #[test]
    fn already_aligned_wheel_still_spins_five_turns() {
        assert_eq!(plan_spin(0.0, 0.0), 1800.0);
        assert_eq!(normalize_angle(1800.0), 0.0);
    }

    #[test]
    fn worked_example_from_the_wedge_map() {
        // Resting at a whole number of turns, wedge 90 requested:
        // delta = (360 - 90 - 0 + 360) % 360 = 270.
        assert_eq!(plan_spin(1800.0, 90.0), 3870.0);
        assert!(lands_on(3870.0, 90.0));
    }

    #[test]
    fn out_of_range_angles_are_renormalized() {
        let a = plan_spin(0.0, 450.0);
        let b = plan_spin(0.0, 90.0);
        assert!((a - b).abs() < EPSILON);
    }

    #[test]
    fn tracker_guards_against_reentrant_spins() {
        let mut tracker = RotationTracker::new();
        assert!(tracker.begin_request());
        assert!(!tracker.begin_request());
        assert_eq!(tracker.phase(), SpinPhase::Requesting);

        tracker.begin_animation(45.0);
        assert!(!tracker.begin_request());
        // Not committed until settle.
        assert_eq!(tracker.rotation(), 0.0);
    }

    #[test]
    fn tracker_full_cycle_commits_target() {
        let mut tracker = RotationTracker::new();
        assert!(tracker.begin_request());
        let target = tracker.begin_animation(90.0);
        assert_eq!(tracker.phase(), SpinPhase::Animating);
        assert!(tracker.is_busy());

        assert_eq!(tracker.settle(), target);
        assert_eq!(tracker.phase(), SpinPhase::Idle);
        assert_eq!(tracker.rotation(), target);

        // Reusable for the next spin, starting from the committed angle.
        assert!(tracker.begin_request());
        let next = tracker.begin_animation(90.0);
        assert!(next > target);
    }

    #[test]
    fn failed_request_leaves_rotation_unchanged() {
        let mut tracker = RotationTracker::new();
        assert!(tracker.begin_request());
        tracker.fail();
        assert_eq!(tracker.phase(), SpinPhase::Failed);
        assert_eq!(tracker.rotation(), 0.0);

        // Failure must be acknowledged before the next spin.
        assert!(!tracker.begin_request());
        tracker.acknowledge_failure();
        assert_eq!(tracker.phase(), SpinPhase::Idle);
        assert!(tracker.begin_request());
    }

    #[test]
    fn served_angles_stay_inside_their_prize_wedge() {
        let result = SpinResult {
            prize_type: PrizeType::Points,
            prize_value: "500".to_string(),
            remaining_spins: 3,
            angle: 107.0,
        };
        assert!(result.angle_matches_prize());

        let crossed = SpinResult { angle: 140.0, ..result };
        assert!(!crossed.angle_matches_prize());
    }

    #[test]
    fn every_wedge_has_a_prize_mapping() {
        let prizes = [
            (PrizeType::Spins, "1"),
            (PrizeType::Points, "100"),
            (PrizeType::Points, "500"),
            (PrizeType::Spins, "5"),
            (PrizeType::Item, "iphone"),
            (PrizeType::Points, "50"),
            (PrizeType::Spins, "2"),
            (PrizeType::Points, "1000"),
        ];
        for (i, (prize_type, value)) in prizes.iter().enumerate() {
            assert_eq!(
                prize_base_angle(*prize_type, value),
                Some(WEDGE_BASE_ANGLES[i])
            );
        }
        assert_eq!(prize_base_angle(PrizeType::Points, "7"), None);
    }
}
