//! The traversal driver: depth-first or breadth-first, pre- or post-order.

use std::cmp::Reverse;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::graph::{Datasource, Path};
use crate::types::{
    Connection, Edge, ItemOrder, Order, Strategy, TraversalOptions, TraverseError,
    TraverseResult, Uniqueness, UniquenessOptions, Vertex,
};

use super::{
    Directives, Expander, Filter, OutboundExpander, TraversalContext, UniquenessTracker,
    VisitAllFilter, Visitor,
};

/// Counters reported at the end of a traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TraversalStats {
    /// Vertices handed to the visitor.
    pub visited: usize,
    /// Items processed (filtered and possibly expanded).
    pub iterations: usize,
}

/// Builder for a [`Traverser`].
pub struct TraverserBuilder<'a> {
    datasource: &'a dyn Datasource,
    options: TraversalOptions,
    expander: Option<Box<dyn Expander + 'a>>,
    filter: Option<Box<dyn Filter + 'a>>,
}

impl<'a> TraverserBuilder<'a> {
    /// Replace all options at once.
    pub fn options(mut self, options: TraversalOptions) -> Self {
        self.options = options;
        self
    }

    /// Depth-first (default) or breadth-first.
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.options.strategy = strategy;
        self
    }

    /// Pre-order (default) or post-order visits.
    pub fn order(mut self, order: Order) -> Self {
        self.options.order = order;
        self
    }

    /// Take expanded neighbors forward (default) or backward.
    pub fn item_order(mut self, item_order: ItemOrder) -> Self {
        self.options.item_order = item_order;
        self
    }

    /// Uniqueness for vertices and edges. Both default to [`Uniqueness::None`].
    pub fn uniqueness(mut self, vertices: Uniqueness, edges: Uniqueness) -> Self {
        self.options.uniqueness = UniquenessOptions::new(vertices, edges);
        self
    }

    /// Hide vertices shallower than `depth` from the visitor.
    pub fn min_depth(mut self, depth: usize) -> Self {
        self.options.min_depth = Some(depth);
        self
    }

    /// Do not go deeper than `depth`.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = Some(depth);
        self
    }

    /// Abort with [`TraverseError::TooManyIterations`] past `limit` processed items.
    pub fn max_iterations(mut self, limit: usize) -> Self {
        self.options.max_iterations = limit;
        self
    }

    /// Labels for labeled expanders.
    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Attribute patterns for [`IncludeMatchingAttributesFilter`](super::IncludeMatchingAttributesFilter).
    pub fn matching_attributes(mut self, patterns: Vec<Map<String, Value>>) -> Self {
        self.options.matching_attributes = patterns;
        self
    }

    /// Add a caller-specific parameter readable through the context.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.params.insert(key.into(), value.into());
        self
    }

    /// Neighbor source. Defaults to [`OutboundExpander`].
    pub fn expander(mut self, expander: impl Expander + 'a) -> Self {
        self.expander = Some(Box::new(expander));
        self
    }

    /// Like [`TraverserBuilder::expander`] for an already boxed expander.
    pub fn boxed_expander(mut self, expander: Box<dyn Expander + 'a>) -> Self {
        self.expander = Some(expander);
        self
    }

    /// Visit/expand decision. Defaults to [`VisitAllFilter`]; use a
    /// [`FilterChain`](super::FilterChain) to combine several.
    pub fn filter(mut self, filter: impl Filter + 'a) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    /// Validate the datasource and freeze the configuration.
    pub fn build(self) -> TraverseResult<Traverser<'a>> {
        self.datasource.validate()?;
        Ok(Traverser {
            context: TraversalContext::new(self.options),
            datasource: self.datasource,
            expander: self.expander.unwrap_or_else(|| Box::new(OutboundExpander)),
            filter: self.filter.unwrap_or_else(|| Box::new(VisitAllFilter)),
        })
    }
}

/// Walks a graph from a start vertex and hands visited vertices to a visitor.
///
/// A traverser is immutable once built. Every call to [`Traverser::traverse`]
/// gets its own path and uniqueness state, so one traverser may be reused,
/// including from inside a visitor of another traversal.
pub struct Traverser<'a> {
    context: TraversalContext,
    datasource: &'a dyn Datasource,
    expander: Box<dyn Expander + 'a>,
    filter: Box<dyn Filter + 'a>,
}

/// Mutable state of one traversal run.
struct Run<'v, V: ?Sized> {
    visitor: &'v mut V,
    uniqueness: UniquenessTracker,
    stats: TraversalStats,
}

/// One depth-first stack entry: the neighbors still to enter.
struct Frame {
    pending: std::vec::IntoIter<Connection>,
    visit_after: bool,
}

/// One breadth-first arena entry; `link` is the parent index and the edge from it.
struct QueuedItem {
    vertex: Vertex,
    link: Option<(usize, Edge)>,
    depth: usize,
    visit: bool,
}

impl<'a> Traverser<'a> {
    /// Start configuring a traverser over `datasource`.
    pub fn builder(datasource: &'a dyn Datasource) -> TraverserBuilder<'a> {
        TraverserBuilder {
            datasource,
            options: TraversalOptions::default(),
            expander: None,
            filter: None,
        }
    }

    /// The read-only context passed to callbacks.
    pub fn context(&self) -> &TraversalContext {
        &self.context
    }

    /// Traverse from `start`, invoking `visitor` for each visited vertex.
    pub fn traverse<V>(&self, visitor: &mut V, start: &Vertex) -> TraverseResult<TraversalStats>
    where
        V: Visitor + ?Sized,
    {
        log::debug!(
            "Starting {} {} traversal from {}",
            self.context.strategy(),
            self.context.order(),
            start.id
        );

        let mut uniqueness = UniquenessTracker::new(self.context.uniqueness());
        uniqueness.mark_start(start);
        let mut run = Run {
            visitor,
            uniqueness,
            stats: TraversalStats::default(),
        };

        match self.context.strategy() {
            Strategy::DepthFirst => self.depth_first(&mut run, start)?,
            Strategy::BreadthFirst => self.breadth_first(&mut run, start)?,
        }

        log::debug!(
            "Traversal from {} finished: {} visited, {} iterations",
            start.id,
            run.stats.visited,
            run.stats.iterations
        );
        Ok(run.stats)
    }

    /// Resolve `start_id` through the datasource, then traverse from it.
    pub fn traverse_from<V>(&self, visitor: &mut V, start_id: &str) -> TraverseResult<TraversalStats>
    where
        V: Visitor + ?Sized,
    {
        let start = self
            .datasource
            .vertex(start_id)?
            .ok_or_else(|| TraverseError::VertexNotFound(start_id.to_string()))?;
        self.traverse(visitor, &start)
    }

    fn depth_first<V: Visitor + ?Sized>(
        &self,
        run: &mut Run<'_, V>,
        start: &Vertex,
    ) -> TraverseResult<()> {
        let mut path = Path::new(start.clone());
        let mut stack = vec![self.enter(run, &path)?];

        loop {
            let next = match stack.last_mut() {
                Some(frame) => frame.pending.next(),
                None => break,
            };
            match next {
                Some(connection) => {
                    if !run
                        .uniqueness
                        .admit(&path, &connection.edge, &connection.vertex)
                    {
                        continue;
                    }
                    path.push(connection.edge, connection.vertex);
                    let frame = self.enter(run, &path)?;
                    stack.push(frame);
                }
                None => {
                    let visit_after = stack.pop().map_or(false, |frame| frame.visit_after);
                    if visit_after {
                        self.visit(run, &path)?;
                    }
                    path.pop();
                }
            }
        }

        Ok(())
    }

    /// Process the vertex at the end of `path`: filter, pre-order visit, expand.
    fn enter<V: Visitor + ?Sized>(&self, run: &mut Run<'_, V>, path: &Path) -> TraverseResult<Frame> {
        self.tick(run)?;
        let directives = self.evaluate(path)?;
        let post_order = self.context.order() == Order::PostOrder;

        if directives.visit() && !post_order {
            self.visit(run, path)?;
        }
        let pending = if directives.expand() {
            self.neighbors(path, self.context.item_order())?
        } else {
            Vec::new()
        };

        Ok(Frame {
            pending: pending.into_iter(),
            visit_after: directives.visit() && post_order,
        })
    }

    // Post-order discovers exactly like pre-order, then visits the collected
    // items deepest level first, in discovery order within a level.
    fn breadth_first<V: Visitor + ?Sized>(
        &self,
        run: &mut Run<'_, V>,
        start: &Vertex,
    ) -> TraverseResult<()> {
        let post_order = self.context.order() == Order::PostOrder;
        let item_order = self.context.item_order();

        let mut items = vec![QueuedItem {
            vertex: start.clone(),
            link: None,
            depth: 0,
            visit: false,
        }];
        let mut index = 0;

        while index < items.len() {
            let path = {
                let item = &items[index];
                match &item.link {
                    None => Path::new(item.vertex.clone()),
                    Some((parent, edge)) => {
                        let parent_path = Self::rebuild_path(&items, *parent);
                        if !run.uniqueness.admit(&parent_path, edge, &item.vertex) {
                            index += 1;
                            continue;
                        }
                        parent_path.extended(edge.clone(), item.vertex.clone())
                    }
                }
            };

            self.tick(run)?;
            let directives = self.evaluate(&path)?;
            if directives.visit() {
                if post_order {
                    items[index].visit = true;
                } else {
                    self.visit(run, &path)?;
                }
            }
            if directives.expand() {
                let depth = items[index].depth + 1;
                for connection in self.neighbors(&path, item_order)? {
                    items.push(QueuedItem {
                        vertex: connection.vertex,
                        link: Some((index, connection.edge)),
                        depth,
                        visit: false,
                    });
                }
            }
            index += 1;
        }

        if post_order {
            let mut collected: Vec<usize> = (0..items.len()).filter(|&i| items[i].visit).collect();
            // Stable, so discovery order survives within each level.
            collected.sort_by_key(|&i| Reverse(items[i].depth));
            for index in collected {
                let path = Self::rebuild_path(&items, index);
                self.visit(run, &path)?;
            }
        }

        Ok(())
    }

    fn rebuild_path(items: &[QueuedItem], index: usize) -> Path {
        let mut chain = vec![index];
        let mut current = index;
        while let Some((parent, _)) = &items[current].link {
            chain.push(*parent);
            current = *parent;
        }

        let mut steps = chain.into_iter().rev();
        let root = steps.next().unwrap_or(index);
        let mut path = Path::new(items[root].vertex.clone());
        for step in steps {
            if let Some((_, edge)) = &items[step].link {
                path.push(edge.clone(), items[step].vertex.clone());
            }
        }
        path
    }

    /// User filter combined with the depth bounds from the options.
    fn evaluate(&self, path: &Path) -> TraverseResult<Directives> {
        let mut directives = self
            .filter
            .filter(&self.context, path.last_vertex(), path)?;
        let depth = path.depth();

        if let Some(min) = self.context.min_depth() {
            if depth < min {
                directives |= Directives::EXCLUDE;
            }
        }
        if let Some(max) = self.context.max_depth() {
            if depth >= max {
                directives |= Directives::PRUNE;
            }
            if depth > max {
                directives |= Directives::EXCLUDE;
            }
        }
        Ok(directives)
    }

    fn neighbors(&self, path: &Path, item_order: ItemOrder) -> TraverseResult<Vec<Connection>> {
        let mut connections =
            self.expander
                .expand(&self.context, self.datasource, path.last_vertex(), path)?;
        if item_order == ItemOrder::Backward {
            connections.reverse();
        }
        Ok(connections)
    }

    fn visit<V: Visitor + ?Sized>(&self, run: &mut Run<'_, V>, path: &Path) -> TraverseResult<()> {
        let vertex = path.last_vertex();
        log::trace!("Visiting {} at depth {}", vertex.id, path.depth());
        run.visitor.visit(&self.context, vertex, path)?;
        run.stats.visited += 1;
        Ok(())
    }

    fn tick<V: ?Sized>(&self, run: &mut Run<'_, V>) -> TraverseResult<()> {
        run.stats.iterations += 1;
        let limit = self.context.max_iterations();
        if run.stats.iterations > limit {
            return Err(TraverseError::TooManyIterations(limit));
        }
        Ok(())
    }
}
