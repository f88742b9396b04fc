//! Edge weighting by dynamic cell class.

use wrapsim_state::NodeState;

/// Traversal cost per cell class.
///
/// Boosters are worth a detour and wrapped ground is wasted motion, so the
/// intended ordering is `booster < plain < wrapped`. The constants are
/// tunable per strategy; only the defaults are contractual.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightPolicy {
    /// Cost of an unwrapped, empty cell.
    pub plain: f64,
    /// Cost of an already wrapped cell.
    pub wrapped: f64,
    /// Cost of a cell holding a booster.
    pub booster: f64,
}

impl Default for WeightPolicy {
    fn default() -> WeightPolicy {
        WeightPolicy {
            plain: 1.0,
            wrapped: 1.5,
            booster: 0.5,
        }
    }
}

impl WeightPolicy {
    /// The class cost of a single cell. Boosters win over wrapping.
    pub fn class_weight(&self, node: NodeState) -> f64 {
        if node.has_booster() {
            self.booster
        } else if node.is_wrapped {
            self.wrapped
        } else {
            self.plain
        }
    }

    /// The weight of an edge, biased toward the source cell: a non-plain
    /// source decides alone, a plain source defers to the target's class.
    pub fn edge_weight(&self, source: NodeState, target: NodeState) -> f64 {
        if source.has_booster() || source.is_wrapped {
            self.class_weight(source)
        } else {
            self.class_weight(target)
        }
    }
}
