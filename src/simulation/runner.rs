//! Main simulation loop

use rand::Rng;
use serde::Serialize;

use crate::core::error::{Result, RobotError};
use crate::core::types::{Place, Turn};
use crate::graph::RoadGraph;
use crate::robot::{Memory, Strategy};
use crate::world::VillageState;

/// Result of a finished run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunOutcome {
    /// Turns taken until the last parcel was delivered
    pub turns: Turn,
    /// Direction the robot chose each turn, including rejected moves
    pub moves: Vec<Place>,
}

/// Run `robot` from `state` until no parcels remain.
///
/// Each turn the robot decides on a direction from the state and its memory,
/// the move is applied, and the returned memory replaces the old one.
///
/// With `max_turns` set, a run still going after that many turns fails with
/// [`RobotError::DidNotConverge`]. Without it the loop has no bound.
pub fn run_robot<S, R>(
    graph: &RoadGraph,
    state: VillageState,
    robot: &S,
    memory: Memory,
    max_turns: Option<Turn>,
    rng: &mut R,
) -> Result<RunOutcome>
where
    S: Strategy,
    R: Rng + ?Sized,
{
    let mut state = state;
    let mut memory = memory;
    let mut moves = Vec::new();
    let mut turn: Turn = 0;

    loop {
        if state.is_finished() {
            tracing::debug!("{} robot done in {} turns", robot.name(), turn);
            return Ok(RunOutcome { turns: turn, moves });
        }

        if let Some(limit) = max_turns {
            if turn >= limit {
                tracing::warn!(
                    "{} robot gave up after {} turns with {} parcels left",
                    robot.name(),
                    turn,
                    state.parcels().len()
                );
                return Err(RobotError::DidNotConverge { max_turns: limit });
            }
        }

        let action = robot.decide(graph, &state, memory, rng)?;
        state = state.move_to(graph, &action.direction);
        memory = action.memory;

        tracing::trace!("Moved to {}", action.direction);
        moves.push(action.direction);
        turn += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::{Action, Robot};
    use crate::world::Parcel;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Bounces between two places forever
    struct Pacer;

    impl Strategy for Pacer {
        fn name(&self) -> &str {
            "pacer"
        }

        fn decide<R: Rng + ?Sized>(
            &self,
            graph: &RoadGraph,
            state: &VillageState,
            _memory: Memory,
            _rng: &mut R,
        ) -> Result<Action> {
            Ok(Action {
                direction: graph.neighbors(state.place())[0].clone(),
                memory: Memory::new(),
            })
        }
    }

    fn line() -> RoadGraph {
        RoadGraph::build(["A-B", "B-C"]).unwrap()
    }

    #[test]
    fn test_finished_state_takes_no_turns() {
        let graph = line();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let outcome = run_robot(
            &graph,
            VillageState::new("A", Vec::new()),
            &Robot::GoalOriented,
            Memory::new(),
            None,
            &mut rng,
        )
        .unwrap();
        assert_eq!(outcome.turns, 0);
        assert!(outcome.moves.is_empty());
    }

    #[test]
    fn test_goal_robot_carries_parcel() {
        let graph = line();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let state = VillageState::new("A", vec![Parcel::new("A", "C")]);
        let outcome = run_robot(&graph, state, &Robot::GoalOriented, Memory::new(), None, &mut rng).unwrap();
        assert_eq!(outcome.turns, 2);
        assert_eq!(outcome.moves, vec![Place::from("B"), Place::from("C")]);
    }

    #[test]
    fn test_turn_ceiling() {
        let graph = line();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let state = VillageState::new("A", vec![Parcel::new("C", "A")]);
        let result = run_robot(&graph, state, &Pacer, Memory::new(), Some(25), &mut rng);
        assert!(matches!(result, Err(RobotError::DidNotConverge { max_turns: 25 })));
    }

    #[test]
    fn test_ceiling_does_not_affect_finishing_runs() {
        let graph = line();
        let state = VillageState::new("A", vec![Parcel::new("B", "C")]);
        let unbounded = run_robot(
            &graph,
            state.clone(),
            &Robot::GoalOriented,
            Memory::new(),
            None,
            &mut ChaCha8Rng::seed_from_u64(0),
        )
        .unwrap();
        let bounded = run_robot(
            &graph,
            state,
            &Robot::GoalOriented,
            Memory::new(),
            Some(2),
            &mut ChaCha8Rng::seed_from_u64(0),
        )
        .unwrap();
        assert_eq!(unbounded, bounded);
    }

    #[test]
    fn test_strategy_errors_propagate() {
        let graph = RoadGraph::build(["A-B", "C-D"]).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let state = VillageState::new("A", vec![Parcel::new("C", "D")]);
        let result = run_robot(&graph, state, &Robot::Optimized, Memory::new(), None, &mut rng);
        assert!(matches!(result, Err(RobotError::NoRoute { .. })));
    }

    #[test]
    fn test_rejected_moves_still_count() {
        let graph = line();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        // First stop is not adjacent to A, so that turn is wasted
        let robot = Robot::MailRoute(vec![Place::from("C"), Place::from("B"), Place::from("C")]);
        let state = VillageState::new("A", vec![Parcel::new("B", "C")]);
        let outcome = run_robot(&graph, state, &robot, Memory::new(), Some(10), &mut rng).unwrap();
        assert_eq!(outcome.turns, 3);
    }
}
