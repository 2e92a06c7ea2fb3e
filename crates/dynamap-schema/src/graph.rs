use crate::node::Entity;
use std::collections::{BTreeMap, VecDeque};
use thiserror::Error as ThisError;

///
/// GraphError
///

#[derive(Debug, ThisError)]
pub enum GraphError {
    #[error("circular dependency among {} entities: {}", .remaining.len(), .remaining.join(", "))]
    CircularDependency { remaining: Vec<String> },
}

///
/// DependencyGraph
///
/// Directed dependent → dependency edges over one discovery batch. Edges
/// exist only for dependencies resolvable to entities in the batch; a
/// reference outside it is assumed to be satisfied externally and carries
/// no ordering constraint.
///

pub struct DependencyGraph {
    /// Identity per input position.
    nodes: Vec<String>,
    /// Dependency positions per input position.
    deps: Vec<Vec<usize>>,
}

impl DependencyGraph {
    #[must_use]
    pub fn build(entities: &[Entity]) -> Self {
        let by_simple: BTreeMap<&str, usize> = entities
            .iter()
            .enumerate()
            .map(|(position, entity)| (entity.simple_name(), position))
            .collect();

        let nodes = entities.iter().map(|entity| entity.path.clone()).collect();
        let deps = entities
            .iter()
            .map(|entity| {
                entity
                    .dependencies
                    .iter()
                    .filter_map(|codec| codec.entity_hint())
                    .filter_map(|hint| by_simple.get(hint).copied())
                    .collect()
            })
            .collect();

        Self { nodes, deps }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Kahn's algorithm. Ties resolve in declaration order, so a given
    /// schema always emits in the same order.
    pub fn resolve(&self) -> Result<Vec<usize>, GraphError> {
        let count = self.nodes.len();
        let mut in_degree = vec![0_usize; count];
        let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); count];

        for (node, deps) in self.deps.iter().enumerate() {
            for &dep in deps {
                in_degree[node] += 1;
                dependents[dep].push(node);
            }
        }

        let mut queue: VecDeque<usize> = (0..count).filter(|&node| in_degree[node] == 0).collect();
        let mut order = Vec::with_capacity(count);
        let mut placed = vec![false; count];

        while let Some(node) = queue.pop_front() {
            order.push(node);
            placed[node] = true;

            for &dependent in &dependents[node] {
                in_degree[dependent] -= 1;
                if in_degree[dependent] == 0 {
                    queue.push_back(dependent);
                }
            }
        }

        if order.len() != count {
            let remaining = (0..count)
                .filter(|&node| !placed[node])
                .map(|node| self.nodes[node].clone())
                .collect();
            return Err(GraphError::CircularDependency { remaining });
        }

        Ok(order)
    }
}

///
/// TESTS
///
