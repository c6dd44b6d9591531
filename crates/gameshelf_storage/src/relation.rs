//! Related-games graph keyed by app id.
//!
//! Relations are undirected: every edge is stored in both adjacency sets.
//! A game with no remaining relations has no entry at all.

use gameshelf_foundation::AppId;
use indexmap::{IndexMap, IndexSet};

/// Undirected adjacency map of user-declared game relations.
///
/// Iteration follows insertion order, so a given edit history always
/// produces the same recommendation order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RelationGraph {
    adjacency: IndexMap<AppId, IndexSet<AppId>>,
}

impl RelationGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from `(game, related...)` rows.
    ///
    /// Each pair goes through [`add_relation`](Self::add_relation), so
    /// asymmetric rows, self-loops and empty rows are normalized away.
    pub fn from_rows<I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = (AppId, R)>,
        R: IntoIterator<Item = AppId>,
    {
        let mut graph = Self::new();
        for (id, related) in rows {
            for other in related {
                graph.add_relation(id, other);
            }
        }
        graph
    }

    /// Relates two games in both directions.
    ///
    /// Returns `true` if the edge is new. Relating a game to itself, or
    /// relating an already related pair, changes nothing and returns `false`.
    pub fn add_relation(&mut self, a: AppId, b: AppId) -> bool {
        if a == b {
            return false;
        }
        let inserted = self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
        inserted
    }

    /// Removes the relation between two games in both directions.
    ///
    /// Returns `true` if an edge was removed. A game left without relations
    /// is dropped from the map.
    pub fn remove_relation(&mut self, a: AppId, b: AppId) -> bool {
        let removed = self.unlink_one_way(a, b);
        self.unlink_one_way(b, a);
        removed
    }

    fn unlink_one_way(&mut self, from: AppId, to: AppId) -> bool {
        let Some(related) = self.adjacency.get_mut(&from) else {
            return false;
        };
        let removed = related.shift_remove(&to);
        if related.is_empty() {
            self.adjacency.shift_remove(&from);
        }
        removed
    }

    /// Returns up to `max_count` games related to `id`.
    #[must_use]
    pub fn related_games(&self, id: AppId, max_count: usize) -> Vec<AppId> {
        self.related(id).take(max_count).collect()
    }

    /// Iterates every game related to `id`.
    pub fn related(&self, id: AppId) -> impl Iterator<Item = AppId> + '_ {
        self.adjacency
            .get(&id)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Checks whether two games are related.
    #[must_use]
    pub fn has_relation(&self, a: AppId, b: AppId) -> bool {
        self.adjacency.get(&a).is_some_and(|set| set.contains(&b))
    }

    /// Returns true if `id` has at least one relation.
    #[must_use]
    pub fn contains(&self, id: AppId) -> bool {
        self.adjacency.contains_key(&id)
    }

    /// Returns the number of games with at least one relation.
    #[must_use]
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns true if there are no relations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns the number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(IndexSet::len).sum::<usize>() / 2
    }

    /// Iterates `(game, related games)` rows in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (AppId, &IndexSet<AppId>)> + '_ {
        self.adjacency.iter().map(|(id, set)| (*id, set))
    }

    /// Removes every relation.
    pub fn clear(&mut self) {
        self.adjacency.clear();
    }
}
