//! Brute-force departure window search over a bounded horizon.
//!
//! Candidates are scanned in day order across the whole horizon. The winner is the
//! collision-free candidate with the smallest closeness score; a later candidate only
//! replaces it on strict improvement, so ties go to the earliest day. When every candidate
//! collides the outcome is [`WindowOutcome::NotFound`], never a colliding fallback.

use solar_core::{DomainError, PhysicalConstants, ensure_finite};
use solar_propulsion::FlightPlan;
use tracing::{debug, info, trace};

use super::collision::{DynamicMotion, MotionModel, MotionModelKind, StaticMotion};
use super::{PlanningError, TransferLeg};
use crate::catalog::Catalog;

/// Default spacing between candidate departure days.
pub const DEFAULT_STEP_DAYS: f64 = 1.0;
/// Largest candidate index a single search will walk.
pub const MAX_CANDIDATE_INDEX: u64 = u32::MAX as u64;

/// Bounds and granularity of a window search, in days from the epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowRequest {
    pub start_day: f64,
    pub max_wait_days: f64,
    pub step_days: f64,
}

impl WindowRequest {
    pub fn new(start_day: f64, max_wait_days: f64) -> Self {
        Self {
            start_day,
            max_wait_days,
            step_days: DEFAULT_STEP_DAYS,
        }
    }

    /// Search from `start_day` across the configured horizon.
    pub fn over_horizon(start_day: f64, constants: &PhysicalConstants) -> Self {
        Self::new(start_day, constants.search_horizon_days())
    }

    pub fn with_step(mut self, step_days: f64) -> Self {
        self.step_days = step_days;
        self
    }

    /// Candidate departure days, both ends inclusive.
    pub fn candidate_days(&self) -> Result<CandidateDays, DomainError> {
        let start_day = ensure_finite("search start", self.start_day)?;
        let max_wait = ensure_finite("maximum wait", self.max_wait_days)?;
        if !(self.step_days > 0.0 && self.step_days.is_finite()) {
            return Err(DomainError::NonPositiveStep(self.step_days));
        }
        let last_index = if max_wait <= 0.0 {
            0
        } else {
            // tolerance keeps an exact multiple of the step from losing its final day
            let steps = (max_wait / self.step_days + 1e-9).floor();
            if !(steps <= MAX_CANDIDATE_INDEX as f64) {
                return Err(DomainError::TooManyCandidates {
                    max_wait_days: max_wait,
                    step_days: self.step_days,
                });
            }
            steps as u64
        };
        Ok(CandidateDays {
            start_day,
            step_days: self.step_days,
            next_index: 0,
            last_index,
        })
    }
}

/// Iterator over candidate days, computed by index so long horizons do not drift.
#[derive(Debug, Clone)]
pub struct CandidateDays {
    start_day: f64,
    step_days: f64,
    next_index: u64,
    last_index: u64,
}

impl CandidateDays {
    /// Last day this iterator yields, which may fall short of `start + max_wait`.
    pub fn last_day(&self) -> f64 {
        self.start_day + self.last_index as f64 * self.step_days
    }
}

impl Iterator for CandidateDays {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next_index > self.last_index {
            return None;
        }
        let day = self.start_day + self.next_index as f64 * self.step_days;
        self.next_index += 1;
        Some(day)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .last_index
            .saturating_add(1)
            .saturating_sub(self.next_index);
        let remaining = usize::try_from(remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CandidateDays {}

/// Score and collision verdict of a single candidate day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateEvaluation {
    pub day: f64,
    pub closeness_m: f64,
    pub collision: bool,
}

/// Result of a search: the winning day and its plan, or nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowOutcome {
    Found { departure_day: f64, plan: FlightPlan },
    NotFound,
}

/// A completed window search.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferWindow {
    pub model: MotionModelKind,
    pub start_day: f64,
    pub end_day: f64,
    pub step_days: f64,
    pub evaluated: usize,
    pub rejected: usize,
    pub outcome: WindowOutcome,
}

impl TransferWindow {
    /// Winning departure day and plan, if any candidate was collision-free.
    pub fn best(&self) -> Option<(f64, &FlightPlan)> {
        match &self.outcome {
            WindowOutcome::Found {
                departure_day,
                plan,
            } => Some((*departure_day, plan)),
            WindowOutcome::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self.outcome, WindowOutcome::Found { .. })
    }
}

/// Evaluate one candidate departure day under `model`.
pub fn evaluate<M: MotionModel>(
    model: &M,
    leg: &TransferLeg<'_>,
    day: f64,
) -> Result<CandidateEvaluation, DomainError> {
    Ok(CandidateEvaluation {
        day,
        closeness_m: model.closeness(leg, day),
        collision: model.collides(leg, day)?,
    })
}

/// Evaluate every candidate in the window without selecting a winner.
pub fn scan_with<M: MotionModel>(
    model: &M,
    leg: &TransferLeg<'_>,
    request: &WindowRequest,
) -> Result<Vec<CandidateEvaluation>, DomainError> {
    request
        .candidate_days()?
        .map(|day| evaluate(model, leg, day))
        .collect()
}

/// Scan the window and keep the earliest collision-free candidate with the smallest score.
pub fn search_with<M: MotionModel>(
    model: &M,
    leg: &TransferLeg<'_>,
    request: &WindowRequest,
) -> Result<TransferWindow, DomainError> {
    run_search(model, leg, request, |_| {})
}

/// Like [`search_with`], also returning every evaluated candidate in day order.
pub fn search_and_scan_with<M: MotionModel>(
    model: &M,
    leg: &TransferLeg<'_>,
    request: &WindowRequest,
) -> Result<(TransferWindow, Vec<CandidateEvaluation>), DomainError> {
    let mut scan = Vec::new();
    let window = run_search(model, leg, request, |candidate| scan.push(*candidate))?;
    Ok((window, scan))
}

fn run_search<M, F>(
    model: &M,
    leg: &TransferLeg<'_>,
    request: &WindowRequest,
    mut on_candidate: F,
) -> Result<TransferWindow, DomainError>
where
    M: MotionModel,
    F: FnMut(&CandidateEvaluation),
{
    let days = request.candidate_days()?;
    let end_day = days.last_day();
    let mut best: Option<CandidateEvaluation> = None;
    let mut evaluated = 0;
    let mut rejected = 0;

    for day in days {
        let candidate = evaluate(model, leg, day)?;
        on_candidate(&candidate);
        evaluated += 1;
        trace!(
            day,
            closeness_m = candidate.closeness_m,
            collision = candidate.collision,
            "evaluated candidate"
        );
        if candidate.collision {
            rejected += 1;
            continue;
        }
        if best.is_none_or(|current| candidate.closeness_m < current.closeness_m) {
            debug!(day, closeness_m = candidate.closeness_m, "new best candidate");
            best = Some(candidate);
        }
    }

    let outcome = match best {
        Some(winner) => WindowOutcome::Found {
            departure_day: winner.day,
            plan: model.flight_plan(leg, winner.day)?,
        },
        None => WindowOutcome::NotFound,
    };

    info!(
        model = %model.kind(),
        departure = leg.departure.name(),
        arrival = leg.arrival.name(),
        evaluated,
        rejected,
        found = matches!(outcome, WindowOutcome::Found { .. }),
        "window search complete"
    );

    Ok(TransferWindow {
        model: model.kind(),
        start_day: request.start_day,
        end_day,
        step_days: request.step_days,
        evaluated,
        rejected,
        outcome,
    })
}

/// Resolve the leg and search with the selected motion model.
pub fn search_window(
    kind: MotionModelKind,
    departure: &str,
    arrival: &str,
    catalog: &Catalog,
    acceleration_m_s2: f64,
    request: &WindowRequest,
) -> Result<TransferWindow, PlanningError> {
    let leg = TransferLeg::resolve(catalog, departure, arrival, acceleration_m_s2)?;
    let window = match kind {
        MotionModelKind::Static => search_with(&StaticMotion, &leg, request)?,
        MotionModelKind::Dynamic => search_with(&DynamicMotion, &leg, request)?,
    };
    Ok(window)
}

/// Resolve the leg and evaluate every candidate with the selected motion model.
pub fn scan_window(
    kind: MotionModelKind,
    departure: &str,
    arrival: &str,
    catalog: &Catalog,
    acceleration_m_s2: f64,
    request: &WindowRequest,
) -> Result<Vec<CandidateEvaluation>, PlanningError> {
    let leg = TransferLeg::resolve(catalog, departure, arrival, acceleration_m_s2)?;
    let scan = match kind {
        MotionModelKind::Static => scan_with(&StaticMotion, &leg, request)?,
        MotionModelKind::Dynamic => scan_with(&DynamicMotion, &leg, request)?,
    };
    Ok(scan)
}

/// Resolve the leg once, search, and keep every evaluated candidate for export.
pub fn search_and_scan_window(
    kind: MotionModelKind,
    departure: &str,
    arrival: &str,
    catalog: &Catalog,
    acceleration_m_s2: f64,
    request: &WindowRequest,
) -> Result<(TransferWindow, Vec<CandidateEvaluation>), PlanningError> {
    let leg = TransferLeg::resolve(catalog, departure, arrival, acceleration_m_s2)?;
    let result = match kind {
        MotionModelKind::Static => search_and_scan_with(&StaticMotion, &leg, request)?,
        MotionModelKind::Dynamic => search_and_scan_with(&DynamicMotion, &leg, request)?,
    };
    Ok(result)
}

/// Search treating the destination as stationary during the flight.
pub fn search_static_window(
    departure: &str,
    arrival: &str,
    catalog: &Catalog,
    acceleration_m_s2: f64,
    search_start_days: f64,
    max_wait_days: f64,
    step_days: f64,
) -> Result<TransferWindow, PlanningError> {
    let request = WindowRequest::new(search_start_days, max_wait_days).with_step(step_days);
    search_window(
        MotionModelKind::Static,
        departure,
        arrival,
        catalog,
        acceleration_m_s2,
        &request,
    )
}

/// Search simulating every body's motion during the flight.
pub fn search_dynamic_window(
    departure: &str,
    arrival: &str,
    catalog: &Catalog,
    acceleration_m_s2: f64,
    search_start_days: f64,
    max_wait_days: f64,
    step_days: f64,
) -> Result<TransferWindow, PlanningError> {
    let request = WindowRequest::new(search_start_days, max_wait_days).with_step(step_days);
    search_window(
        MotionModelKind::Dynamic,
        departure,
        arrival,
        catalog,
        acceleration_m_s2,
        &request,
    )
}
