//! Filters decide, per vertex, whether it is visited and whether it is expanded.

use std::collections::HashSet;
use std::ops::{BitOr, BitOrAssign};

use serde_json::{Map, Value};

use crate::graph::Path;
use crate::types::{TraverseResult, Vertex, ID_ATTRIBUTE};

use super::TraversalContext;

/// Independent exclude/prune flags returned by a filter.
///
/// `exclude` hides the vertex from the visitor, `prune` stops expansion below
/// it. Both may be set at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Directives {
    /// Do not hand the vertex to the visitor.
    pub exclude: bool,
    /// Do not expand the vertex's neighbors.
    pub prune: bool,
}

impl Directives {
    /// Visit and expand.
    pub const NONE: Self = Self {
        exclude: false,
        prune: false,
    };
    /// Expand but do not visit.
    pub const EXCLUDE: Self = Self {
        exclude: true,
        prune: false,
    };
    /// Visit but do not expand.
    pub const PRUNE: Self = Self {
        exclude: false,
        prune: true,
    };
    /// Neither visit nor expand.
    pub const EXCLUDE_AND_PRUNE: Self = Self {
        exclude: true,
        prune: true,
    };

    /// True if the vertex goes to the visitor.
    pub fn visit(self) -> bool {
        !self.exclude
    }

    /// True if the vertex's neighbors are expanded.
    pub fn expand(self) -> bool {
        !self.prune
    }
}

impl BitOr for Directives {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            exclude: self.exclude || rhs.exclude,
            prune: self.prune || rhs.prune,
        }
    }
}

impl BitOrAssign for Directives {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

/// Decides the [`Directives`] for a vertex reached by `path`.
pub trait Filter {
    fn filter(
        &self,
        ctx: &TraversalContext,
        vertex: &Vertex,
        path: &Path,
    ) -> TraverseResult<Directives>;
}

impl<F> Filter for F
where
    F: Fn(&TraversalContext, &Vertex, &Path) -> TraverseResult<Directives>,
{
    fn filter(
        &self,
        ctx: &TraversalContext,
        vertex: &Vertex,
        path: &Path,
    ) -> TraverseResult<Directives> {
        self(ctx, vertex, path)
    }
}

/// Several filters combined by OR-ing their directives.
///
/// Every member is evaluated; a flag raised by any member sticks.
#[derive(Default)]
pub struct FilterChain<'a> {
    filters: Vec<Box<dyn Filter + 'a>>,
}

impl<'a> FilterChain<'a> {
    /// Create an empty chain. An empty chain visits everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a filter (builder style).
    pub fn with(mut self, filter: impl Filter + 'a) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Append a filter.
    pub fn push(&mut self, filter: impl Filter + 'a) {
        self.filters.push(Box::new(filter));
    }

    /// Number of filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// True if the chain holds no filters.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Filter for FilterChain<'_> {
    fn filter(
        &self,
        ctx: &TraversalContext,
        vertex: &Vertex,
        path: &Path,
    ) -> TraverseResult<Directives> {
        let mut directives = Directives::NONE;
        for filter in &self.filters {
            directives |= filter.filter(ctx, vertex, path)?;
        }
        Ok(directives)
    }
}

/// Visits and expands every vertex.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisitAllFilter;

impl Filter for VisitAllFilter {
    fn filter(&self, _: &TraversalContext, _: &Vertex, _: &Path) -> TraverseResult<Directives> {
        Ok(Directives::NONE)
    }
}

/// Excludes vertices shallower than the context's `min_depth`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinDepthFilter;

impl Filter for MinDepthFilter {
    fn filter(
        &self,
        ctx: &TraversalContext,
        _: &Vertex,
        path: &Path,
    ) -> TraverseResult<Directives> {
        match ctx.min_depth() {
            Some(min) if path.depth() < min => Ok(Directives::EXCLUDE),
            _ => Ok(Directives::NONE),
        }
    }
}

/// Prunes at the context's `max_depth` and excludes anything deeper.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxDepthFilter;

impl Filter for MaxDepthFilter {
    fn filter(
        &self,
        ctx: &TraversalContext,
        _: &Vertex,
        path: &Path,
    ) -> TraverseResult<Directives> {
        let depth = path.depth();
        match ctx.max_depth() {
            Some(max) if depth > max => Ok(Directives::EXCLUDE_AND_PRUNE),
            Some(max) if depth == max => Ok(Directives::PRUNE),
            _ => Ok(Directives::NONE),
        }
    }
}

/// Visits only vertices matching one of the context's attribute patterns.
///
/// A pattern matches when every key in it equals the vertex attribute of the
/// same name; the `_id` key compares against the vertex ID. Empty patterns
/// and missing vertices never match. Non-matching vertices are still expanded.
#[derive(Debug, Clone, Copy, Default)]
pub struct IncludeMatchingAttributesFilter;

impl IncludeMatchingAttributesFilter {
    /// True if `vertex` matches `pattern`.
    pub fn matches(vertex: &Vertex, pattern: &Map<String, Value>) -> bool {
        if vertex.is_missing() || pattern.is_empty() {
            return false;
        }
        pattern.iter().all(|(key, expected)| {
            if key == ID_ATTRIBUTE {
                expected.as_str() == Some(vertex.id.as_str())
            } else {
                vertex.attribute(key) == Some(expected)
            }
        })
    }
}

impl Filter for IncludeMatchingAttributesFilter {
    fn filter(
        &self,
        ctx: &TraversalContext,
        vertex: &Vertex,
        _: &Path,
    ) -> TraverseResult<Directives> {
        let include = ctx
            .matching_attributes()
            .iter()
            .any(|pattern| Self::matches(vertex, pattern));
        if include {
            Ok(Directives::NONE)
        } else {
            Ok(Directives::EXCLUDE)
        }
    }
}

/// Excludes the listed vertex IDs.
#[derive(Debug, Clone, Default)]
pub struct ExcludeVerticesFilter {
    ids: HashSet<String>,
}

impl ExcludeVerticesFilter {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }
}

impl Filter for ExcludeVerticesFilter {
    fn filter(&self, _: &TraversalContext, vertex: &Vertex, _: &Path) -> TraverseResult<Directives> {
        if self.ids.contains(&vertex.id) {
            Ok(Directives::EXCLUDE)
        } else {
            Ok(Directives::NONE)
        }
    }
}

/// Prunes the listed vertex IDs.
#[derive(Debug, Clone, Default)]
pub struct PruneVerticesFilter {
    ids: HashSet<String>,
}

impl PruneVerticesFilter {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }
}

impl Filter for PruneVerticesFilter {
    fn filter(&self, _: &TraversalContext, vertex: &Vertex, _: &Path) -> TraverseResult<Directives> {
        if self.ids.contains(&vertex.id) {
            Ok(Directives::PRUNE)
        } else {
            Ok(Directives::NONE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Edge, TraversalOptions, TraverseError};
    use serde_json::json;

    fn path_of_depth(depth: usize) -> Path {
        let mut path = Path::new(Vertex::new("v0"));
        for i in 1..=depth {
            let from = format!("v{}", i - 1);
            let to = format!("v{}", i);
            path.push(Edge::connect(from, to.clone()), Vertex::new(to));
        }
        path
    }

    fn ctx_with(options: TraversalOptions) -> TraversalContext {
        TraversalContext::new(options)
    }

    #[test]
    fn directives_union() {
        assert_eq!(Directives::EXCLUDE | Directives::PRUNE, Directives::EXCLUDE_AND_PRUNE);
        assert_eq!(Directives::NONE | Directives::NONE, Directives::NONE);
        assert!(Directives::PRUNE.visit());
        assert!(!Directives::PRUNE.expand());
        assert!(!Directives::EXCLUDE.visit());
        assert!(Directives::EXCLUDE.expand());
    }

    #[test]
    fn depth_filters() {
        let ctx = ctx_with(TraversalOptions {
            min_depth: Some(1),
            max_depth: Some(2),
            ..Default::default()
        });
        let v = Vertex::new("x");

        assert_eq!(MinDepthFilter.filter(&ctx, &v, &path_of_depth(0)).unwrap(), Directives::EXCLUDE);
        assert_eq!(MinDepthFilter.filter(&ctx, &v, &path_of_depth(1)).unwrap(), Directives::NONE);

        assert_eq!(MaxDepthFilter.filter(&ctx, &v, &path_of_depth(1)).unwrap(), Directives::NONE);
        assert_eq!(MaxDepthFilter.filter(&ctx, &v, &path_of_depth(2)).unwrap(), Directives::PRUNE);
        assert_eq!(
            MaxDepthFilter.filter(&ctx, &v, &path_of_depth(3)).unwrap(),
            Directives::EXCLUDE_AND_PRUNE
        );

        let unbounded = TraversalContext::default();
        assert_eq!(MaxDepthFilter.filter(&unbounded, &v, &path_of_depth(9)).unwrap(), Directives::NONE);
    }

    #[test]
    fn chain_combines_without_short_circuit() {
        let excluder = |_: &TraversalContext, v: &Vertex, _: &Path| -> TraverseResult<Directives> {
            Ok(if v.id == "a" { Directives::EXCLUDE } else { Directives::NONE })
        };
        let pruner = |_: &TraversalContext, v: &Vertex, _: &Path| -> TraverseResult<Directives> {
            Ok(if v.id == "a" { Directives::PRUNE } else { Directives::NONE })
        };
        let chain = FilterChain::new().with(excluder).with(VisitAllFilter).with(pruner);
        let ctx = TraversalContext::default();
        let path = path_of_depth(0);

        assert_eq!(chain.len(), 3);
        assert_eq!(
            chain.filter(&ctx, &Vertex::new("a"), &path).unwrap(),
            Directives::EXCLUDE_AND_PRUNE
        );
        assert_eq!(chain.filter(&ctx, &Vertex::new("b"), &path).unwrap(), Directives::NONE);
    }

    #[test]
    fn chain_propagates_errors() {
        let failing = |_: &TraversalContext, _: &Vertex, _: &Path| -> TraverseResult<Directives> {
            Err(TraverseError::abort("boom"))
        };
        let chain = FilterChain::new().with(VisitAllFilter).with(failing);
        let result = chain.filter(&TraversalContext::default(), &Vertex::new("a"), &path_of_depth(0));
        assert!(matches!(result, Err(TraverseError::Aborted(_))));
    }

    #[test]
    fn matching_attributes() {
        let patterns = vec![
            json!({"name": "Alice"}).as_object().unwrap().clone(),
            json!({"name": "Diana", "key": "FAIL"}).as_object().unwrap().clone(),
            json!({"_id": "people/Bob"}).as_object().unwrap().clone(),
        ];
        let ctx = ctx_with(TraversalOptions {
            matching_attributes: patterns,
            ..Default::default()
        });
        let path = path_of_depth(0);
        let check = |v: Vertex| IncludeMatchingAttributesFilter.filter(&ctx, &v, &path).unwrap();

        assert_eq!(check(Vertex::new("people/Alice").attr("name", "Alice")), Directives::NONE);
        assert_eq!(check(Vertex::new("people/Bob").attr("name", "Bob")), Directives::NONE);
        assert_eq!(check(Vertex::new("people/Diana").attr("name", "Diana")), Directives::EXCLUDE);
        assert_eq!(check(Vertex::missing("people/Bob")), Directives::EXCLUDE);
        assert!(!IncludeMatchingAttributesFilter::matches(&Vertex::new("a"), &Map::new()));
    }

    #[test]
    fn id_set_filters() {
        let ctx = TraversalContext::default();
        let path = path_of_depth(0);
        let exclude = ExcludeVerticesFilter::new(["a"]);
        let prune = PruneVerticesFilter::new(vec!["b".to_string()]);

        assert_eq!(exclude.filter(&ctx, &Vertex::new("a"), &path).unwrap(), Directives::EXCLUDE);
        assert_eq!(exclude.filter(&ctx, &Vertex::new("b"), &path).unwrap(), Directives::NONE);
        assert_eq!(prune.filter(&ctx, &Vertex::new("b"), &path).unwrap(), Directives::PRUNE);
    }
}
