//! Breadth-first plan search.
//!
//! Uses a flat `Vec<SearchNode>` arena with index-based parent links, and
//! a hash set of visited states. Every interaction alternates pick and
//! place, so the shortest action sequence is also the one with the fewest
//! moves.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::rules::RulesEngine;

/// Search limits.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Maximum distinct states to visit before giving up.
    pub max_states: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_states: 1_000_000,
        }
    }
}

impl SolverConfig {
    /// Set the state budget.
    #[must_use]
    pub fn with_max_states(mut self, max_states: usize) -> Self {
        self.max_states = max_states;
        self
    }
}

/// Statistics collected during a search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Distinct states visited.
    pub states_visited: usize,

    /// States whose successors were generated.
    pub nodes_expanded: usize,

    /// Deepest level reached.
    pub max_depth: usize,

    /// True if the state budget ran out.
    pub budget_exhausted: bool,
}

/// Outcome of a search.
#[derive(Clone, Debug)]
pub struct SearchResult<A> {
    /// Shortest action sequence to a terminal state, if one was found.
    pub plan: Option<Vec<A>>,

    pub stats: SearchStats,
}

impl<A> SearchResult<A> {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.plan.is_some()
    }
}

struct SearchNode<A> {
    parent: Option<usize>,
    action: Option<A>,
    depth: usize,
}

/// Find the shortest action sequence from `start` to a terminal state.
///
/// A terminal start yields an empty plan.
pub fn solve<R: RulesEngine>(rules: &R, start: &R::State, config: &SolverConfig) -> SearchResult<R::Action> {
    let mut stats = SearchStats::default();
    let mut nodes: Vec<SearchNode<R::Action>> = Vec::with_capacity(1024);
    let mut visited: FxHashSet<R::State> = FxHashSet::default();
    let mut frontier: VecDeque<(usize, R::State)> = VecDeque::new();

    nodes.push(SearchNode {
        parent: None,
        action: None,
        depth: 0,
    });
    visited.insert(start.clone());
    frontier.push_back((0, start.clone()));
    stats.states_visited = 1;

    while let Some((id, state)) = frontier.pop_front() {
        if rules.is_terminal(&state) {
            return SearchResult {
                plan: Some(trace_plan(&nodes, id)),
                stats,
            };
        }

        stats.nodes_expanded += 1;
        let depth = nodes[id].depth + 1;

        for action in rules.legal_actions(&state) {
            let mut next = state.clone();
            rules.apply_action(&mut next, &action);

            if visited.contains(&next) {
                continue;
            }
            if visited.len() >= config.max_states {
                stats.budget_exhausted = true;
                log::debug!("Search budget of {} states exhausted", config.max_states);
                return SearchResult { plan: None, stats };
            }

            visited.insert(next.clone());
            stats.states_visited += 1;
            stats.max_depth = stats.max_depth.max(depth);

            let child = nodes.len();
            nodes.push(SearchNode {
                parent: Some(id),
                action: Some(action),
                depth,
            });
            frontier.push_back((child, next));
        }
    }

    SearchResult { plan: None, stats }
}

fn trace_plan<A: Clone>(nodes: &[SearchNode<A>], mut id: usize) -> Vec<A> {
    let mut plan = Vec::with_capacity(nodes[id].depth);
    while let Some(parent) = nodes[id].parent {
        if let Some(action) = &nodes[id].action {
            plan.push(action.clone());
        }
        id = parent;
    }
    plan.reverse();
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WorldState;
    use crate::rules::{Arm, BlockRules, Position};

    fn position(stacks: &[&[u8]]) -> Position {
        Position::new(WorldState::from_values(4, stacks).unwrap(), Arm::EmptyHanded)
    }

    #[test]
    fn test_already_solved() {
        let start = position(&[&[1, 2], &[3]]);
        let rules = BlockRules::new(start.world.clone());

        let result = solve(&rules, &start, &SolverConfig::default());
        assert_eq!(result.plan, Some(vec![]));
    }

    #[test]
    fn test_single_move() {
        let start = position(&[&[1, 2, 3], &[4, 5], &[6]]);
        let goal = WorldState::from_values(4, &[&[1, 2], &[4, 5], &[6, 3]]).unwrap();
        let rules = BlockRules::new(goal);

        let result = solve(&rules, &start, &SolverConfig::default());
        assert_eq!(result.plan, Some(vec![0, 2]));
    }

    #[test]
    fn test_plan_reaches_goal() {
        let start = position(&[&[1, 2, 3], &[4, 5], &[6]]);
        let goal = WorldState::from_values(4, &[&[6, 5, 4], &[3, 2, 1], &[]]).unwrap();
        let rules = BlockRules::new(goal);

        let result = solve(&rules, &start, &SolverConfig::default());
        let plan = result.plan.expect("goal is reachable");
        assert_eq!(plan.len() % 2, 0);

        let mut state = start;
        for action in &plan {
            rules.apply_action(&mut state, action);
        }
        assert!(rules.is_terminal(&state));
    }

    #[test]
    fn test_unreachable_goal() {
        // Goal uses a block that does not exist in the start position
        let start = position(&[&[1], &[]]);
        let goal = WorldState::from_values(4, &[&[2], &[]]).unwrap();
        let rules = BlockRules::new(goal);

        let result = solve(&rules, &start, &SolverConfig::default());
        assert!(!result.is_solved());
        assert!(!result.stats.budget_exhausted);
    }

    #[test]
    fn test_budget_exhausted() {
        let start = position(&[&[1, 2, 3], &[4, 5], &[6]]);
        let goal = WorldState::from_values(4, &[&[6, 5, 4], &[3, 2, 1], &[]]).unwrap();
        let rules = BlockRules::new(goal);

        let result = solve(&rules, &start, &SolverConfig::default().with_max_states(10));
        assert!(!result.is_solved());
        assert!(result.stats.budget_exhausted);
    }
}
