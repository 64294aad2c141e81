//! Dependency graph construction, topological ordering, and cycle repair
//!
//! The graph builder resolves title references from drafts into ID-keyed
//! tasks; the graph itself wraps petgraph with a `TaskId` node map. Edge
//! direction is `dependency -> dependent`: the dependency must finish before
//! the dependent starts.
//!
//! Degradation rules for malformed references (all silent, no notes):
//! - a dependency title with no matching task is dropped
//! - a task depending on its own title is dropped
//! - duplicate references to the same task collapse to the first occurrence
//!
//! Duplicate draft titles: every draft still yields its own task, but the
//! title-to-id map is last-write-wins, so references to a duplicated title
//! resolve to the most recently minted task.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::{HashMap, HashSet, VecDeque};

use crate::domain::{DraftTask, IdGenerator, Task, TaskId};

/// Resolves a draft task list into engine-owned tasks with ID-based
/// dependency sets. Tasks come back in draft order.
pub fn build_tasks(drafts: &[DraftTask], ids: &mut IdGenerator) -> Vec<Task> {
    let mut id_by_title: HashMap<&str, TaskId> = HashMap::new();
    let mut index_by_title: HashMap<&str, usize> = HashMap::new();

    let mut tasks: Vec<Task> = drafts
        .iter()
        .enumerate()
        .map(|(index, draft)| {
            let id = ids.next_id(&draft.title);
            id_by_title.insert(&draft.title, id.clone());
            index_by_title.insert(&draft.title, index);
            Task::from_draft(id, draft)
        })
        .collect();

    for draft in drafts {
        let Some(&index) = index_by_title.get(draft.title.as_str()) else {
            continue;
        };
        let own_id = tasks[index].id.clone();

        let mut resolved = Vec::new();
        let mut seen = HashSet::new();
        for title in &draft.depends_on_titles {
            let Some(dep_id) = id_by_title.get(title.as_str()) else {
                continue;
            };
            if *dep_id == own_id {
                continue;
            }
            if seen.insert(dep_id.clone()) {
                resolved.push(dep_id.clone());
            }
        }

        tasks[index].depends_on = resolved;
    }

    tasks
}

/// Result of a topological pass: the completed prefix plus any nodes stuck
/// in cycles
#[derive(Debug, Default, PartialEq)]
pub struct TopoOrder {
    /// Nodes in dependency-before-dependent order
    pub order: Vec<TaskId>,

    /// Nodes excluded from the order because they sit on a cycle
    pub cyclic: Vec<TaskId>,
}

impl TopoOrder {
    /// Returns true if every node made it into the order
    pub fn is_complete(&self) -> bool {
        self.cyclic.is_empty()
    }
}

/// A dependency graph over task IDs
#[derive(Debug, Default)]
pub struct DependencyGraph {
    /// The underlying directed graph; edges run dependency -> dependent
    graph: DiGraph<TaskId, ()>,

    /// Map from TaskId to node index
    node_map: HashMap<TaskId, NodeIndex>,
}

impl DependencyGraph {
    /// Creates an empty dependency graph
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_map: HashMap::new(),
        }
    }

    /// Builds a graph from resolved tasks. Cycles are allowed here; they are
    /// detected and repaired by the caller via [`DependencyGraph::topo_order`]
    /// and [`DependencyGraph::clear_dependencies`].
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let mut graph = Self::new();

        let tasks: Vec<_> = tasks.into_iter().collect();
        for task in &tasks {
            graph.add_task(task.id.clone());
        }
        for task in &tasks {
            for dep_id in &task.depends_on {
                graph.add_dependency(&task.id, dep_id);
            }
        }

        graph
    }

    /// Adds a task to the graph
    pub fn add_task(&mut self, task_id: TaskId) {
        if !self.node_map.contains_key(&task_id) {
            let idx = self.graph.add_node(task_id.clone());
            self.node_map.insert(task_id, idx);
        }
    }

    /// Adds a dependency edge: `task` depends on `depends_on`. Unknown
    /// endpoints and self-references are ignored.
    pub fn add_dependency(&mut self, task: &TaskId, depends_on: &TaskId) {
        if task == depends_on {
            return;
        }
        let (Some(&task_idx), Some(&dep_idx)) =
            (self.node_map.get(task), self.node_map.get(depends_on))
        else {
            return;
        };

        self.graph.add_edge(dep_idx, task_idx, ());
    }

    /// Returns the direct dependencies of a task
    pub fn dependencies(&self, task_id: &TaskId) -> Vec<TaskId> {
        let Some(&idx) = self.node_map.get(task_id) else {
            return vec![];
        };

        self.graph
            .neighbors_directed(idx, Direction::Incoming)
            .filter_map(|n| self.graph.node_weight(n).cloned())
            .collect()
    }

    /// Returns the direct dependents of a task (tasks that depend on it)
    pub fn dependents(&self, task_id: &TaskId) -> Vec<TaskId> {
        let Some(&idx) = self.node_map.get(task_id) else {
            return vec![];
        };

        self.graph
            .neighbors_directed(idx, Direction::Outgoing)
            .filter_map(|n| self.graph.node_weight(n).cloned())
            .collect()
    }

    /// Severs every dependency edge of a task, leaving the node in place.
    /// Used by cycle repair.
    pub fn clear_dependencies(&mut self, task_id: &TaskId) {
        let Some(&idx) = self.node_map.get(task_id) else {
            return;
        };

        // Edge indices shift on removal, so take them one at a time
        while let Some(edge) = self
            .graph
            .edges_directed(idx, Direction::Incoming)
            .next()
            .map(|e| e.id())
        {
            self.graph.remove_edge(edge);
        }
    }

    /// Computes a topological order with Kahn's algorithm. In-degree counts
    /// a node's dependencies, so the queue seeds on tasks with none; nodes
    /// left over after the queue drains sit on a cycle. Queue seeding and
    /// the residue follow node insertion order, keeping the result stable.
    pub fn topo_order(&self) -> TopoOrder {
        let mut indegree: HashMap<NodeIndex, usize> = self
            .graph
            .node_indices()
            .map(|idx| {
                let count = self.graph.edges_directed(idx, Direction::Incoming).count();
                (idx, count)
            })
            .collect();

        let mut queue: VecDeque<NodeIndex> = self
            .graph
            .node_indices()
            .filter(|idx| indegree.get(idx) == Some(&0))
            .collect();

        let mut ordered = Vec::with_capacity(self.graph.node_count());
        while let Some(idx) = queue.pop_front() {
            ordered.push(idx);
            for dependent in self.graph.neighbors_directed(idx, Direction::Outgoing) {
                if let Some(count) = indegree.get_mut(&dependent) {
                    *count -= 1;
                    if *count == 0 {
                        queue.push_back(dependent);
                    }
                }
            }
        }

        let placed: HashSet<NodeIndex> = ordered.iter().copied().collect();
        let order = ordered
            .iter()
            .filter_map(|idx| self.graph.node_weight(*idx).cloned())
            .collect();
        let cyclic = self
            .graph
            .node_indices()
            .filter(|idx| !placed.contains(idx))
            .filter_map(|idx| self.graph.node_weight(idx).cloned())
            .collect();

        TopoOrder { order, cyclic }
    }

    /// Returns true if the graph contains the task
    pub fn contains(&self, task_id: &TaskId) -> bool {
        self.node_map.contains_key(task_id)
    }

    /// Returns the number of tasks in the graph
    pub fn len(&self) -> usize {
        self.node_map.len()
    }

    /// Returns true if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.node_map.is_empty()
    }
}
