//! Expansion phase (§4.4): creates exactly one new child for a node found
//! by selection to have an un-expanded legal action.

use rand::Rng;

use crate::tree::Tree;

/// Picks a random legal action at `node` with no existing child, identified
/// by canonical key. Expansion always creates at most one new node per call
/// (§4.4); randomizing which un-expanded action is chosen avoids a fixed
/// expansion order across searches sharing a seed sequence.
pub fn pick_unexpanded_random<'a, A: serde::Serialize, R: Rng + ?Sized>(
    tree: &Tree<A>,
    node: usize,
    legal_actions: &'a [A],
    rng: &mut R,
) -> Option<&'a A> {
    let candidates: Vec<&A> = legal_actions
        .iter()
        .filter(|action| tree.find_child_by_key(node, &crate::canonical::canonical_key(action)).is_none())
        .collect();
    if candidates.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}
