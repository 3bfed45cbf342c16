//! End-to-end planning: waypoints in, labelled visiting order out.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::{DistanceMatrix, RandomSource, Tour, TourError, Waypoint, build_matrix, build_tour};

/// Waypoints in visiting order together with the underlying tour.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TourPlan {
    /// Waypoints reordered into visiting order.
    pub waypoints: Vec<Waypoint>,
    /// Indices into the caller's original waypoint list.
    pub order: Tour,
    /// Length of the open path in kilometres.
    pub length_km: f64,
    /// Length of the round trip back to the first waypoint, in kilometres.
    pub closed_length_km: f64,
}

/// Order `waypoints` into a short open path.
///
/// Fewer than two waypoints are returned unchanged without drawing from
/// `rng`. Otherwise the pairwise distance matrix is built and
/// [`build_tour`] chooses the order.
///
/// # Errors
///
/// Propagates [`TourError`] from tour construction; valid input never
/// produces one.
///
/// # Examples
/// ```
/// use tourline_core::{SequenceSource, Waypoint, coordinate, plan_tour};
///
/// let stops = [
///     Waypoint::new("far", "Far", coordinate(0.0, 2.0)),
///     Waypoint::new("home", "Home", coordinate(0.0, 0.0)),
///     Waypoint::new("mid", "Middle", coordinate(0.0, 1.0)),
/// ];
/// // 0.34 starts at index 1 ("home"); 0.0 then keeps every step greedy.
/// let plan = plan_tour(&stops, &mut SequenceSource::new([0.34, 0.0, 0.0]))?;
/// let ids: Vec<_> = plan.waypoints.iter().map(|w| w.id.as_str()).collect();
/// assert_eq!(ids, ["home", "mid", "far"]);
/// assert!(plan.closed_length_km > plan.length_km);
/// # Ok::<(), tourline_core::TourError>(())
/// ```
pub fn plan_tour<R>(waypoints: &[Waypoint], rng: &mut R) -> Result<TourPlan, TourError>
where
    R: RandomSource + ?Sized,
{
    if waypoints.len() < 2 {
        return Ok(TourPlan {
            waypoints: waypoints.to_vec(),
            order: Tour::from((0..waypoints.len()).collect::<Vec<_>>()),
            length_km: 0.0,
            closed_length_km: 0.0,
        });
    }

    let matrix = build_matrix(waypoints);
    let order = build_tour(&matrix, rng)?;
    plan_from_order(waypoints, &matrix, order)
}

fn plan_from_order(
    waypoints: &[Waypoint],
    matrix: &DistanceMatrix,
    order: Tour,
) -> Result<TourPlan, TourError> {
    if matrix.len() != waypoints.len() {
        return Err(TourError::LengthMismatch {
            expected: waypoints.len(),
            actual: matrix.len(),
        });
    }
    let length_km = matrix.path_length(&order)?;
    let closed_length_km = matrix.closed_length(&order)?;
    Ok(TourPlan {
        waypoints: order.apply(waypoints)?,
        order,
        length_km,
        closed_length_km,
    })
}

/// A self-contained planning request.
///
/// Carrying the seed in the request lets each invocation build its own
/// generator, so concurrent requests never share random state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanRequest {
    /// Waypoints to order.
    pub waypoints: Vec<Waypoint>,
    /// Seed for the request's random source.
    pub seed: u64,
}

/// Produce a [`TourPlan`] for a [`PlanRequest`].
///
/// Planners must be `Send + Sync` so a host can serve many requests from
/// one instance.
pub trait TourPlanner: Send + Sync {
    /// Plan a tour for `request`.
    ///
    /// # Errors
    ///
    /// Returns [`TourError`] when the request cannot be planned.
    fn plan(&self, request: &PlanRequest) -> Result<TourPlan, TourError>;
}

/// Default planner: [`plan_tour`] driven by a `ChaCha8Rng` seeded per request.
///
/// # Examples
/// ```
/// use tourline_core::{NearestNeighbourPlanner, PlanRequest, TourPlanner, Waypoint, coordinate};
///
/// let request = PlanRequest {
///     waypoints: vec![
///         Waypoint::new("a", "A", coordinate(0.0, 0.0)),
///         Waypoint::new("b", "B", coordinate(0.0, 1.0)),
///         Waypoint::new("c", "C", coordinate(1.0, 1.0)),
///     ],
///     seed: 7,
/// };
/// let planner = NearestNeighbourPlanner;
/// let first = planner.plan(&request)?;
/// let second = planner.plan(&request)?;
/// assert_eq!(first, second);
/// # Ok::<(), tourline_core::TourError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct NearestNeighbourPlanner;

impl TourPlanner for NearestNeighbourPlanner {
    fn plan(&self, request: &PlanRequest) -> Result<TourPlan, TourError> {
        let mut rng = ChaCha8Rng::seed_from_u64(request.seed);
        plan_tour(&request.waypoints, &mut rng)
    }
}
