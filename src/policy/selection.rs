//! Selection phase (§4.3): at each node along the descent from the root,
//! picks the UCB1-best child that is still legal under the current
//! iteration's determinization, or signals that the node still has a legal
//! action with no child yet and descent should stop there for expansion.
//!
//! A node can accumulate children across iterations sampled under different
//! hidden-information determinizations; an action legal in one iteration may
//! not be legal in another. Selection must restrict itself to children whose
//! action is legal *this* iteration (§4.3 steps 4-6), which is why
//! [`best_child`] takes the caller's pre-filtered candidate list rather than
//! walking `tree`'s raw children itself.
//!
//! The descent itself lives in [`crate::engine`], since at each node it
//! must replay the chosen action through the driver to learn the state,
//! waiting player and legal actions at the next node — information this
//! module has no access to.

use crate::tree::Tree;
use crate::utils::ucb1_value;

/// Picks the highest-UCB1-value node among `legal_children` (indices into
/// `tree`, already filtered to this iteration's legal actions by
/// [`crate::tree::Tree::legal_children`]), treating an unvisited child as
/// `+infinity` (always explored first). Returns `None` if `legal_children`
/// is empty; the caller is responsible for that case (an empty list means
/// every legal action at this node is still unexpanded, which is an
/// expansion opportunity, not a selection failure).
pub fn best_child<A: serde::Serialize>(
    tree: &Tree<A>,
    parent: usize,
    legal_children: &[usize],
    exploration_constant: f64,
) -> Option<usize> {
    let parent_visits = tree.node(parent).visits;
    legal_children
        .iter()
        .copied()
        .max_by(|&a, &b| {
            let value_a = ucb1_value(
                tree.node(a).total_reward,
                tree.node(a).visits,
                parent_visits,
                exploration_constant,
            );
            let value_b = ucb1_value(
                tree.node(b).total_reward,
                tree.node(b).visits,
                parent_visits,
                exploration_constant,
            );
            value_a.partial_cmp(&value_b).unwrap_or(std::cmp::Ordering::Equal)
        })
}
