//! Cost-to-goal estimates for A*.
//!
//! A* only returns a cost-minimal path when the heuristic never overestimates
//! the remaining cost. [`AbsoluteDifference`] satisfies that only on graphs
//! whose edge costs dominate the identifier distance they span; the caller is
//! responsible for that guarantee. With an inadmissible heuristic the search
//! still terminates, but the returned path may be suboptimal.

/// Estimate of the remaining cost from `node` to `goal`.
pub trait Heuristic<N> {
    fn estimate(&self, node: &N, goal: &N) -> f64;
}

impl<N, F> Heuristic<N> for F
where
    F: Fn(&N, &N) -> f64,
{
    fn estimate(&self, node: &N, goal: &N) -> f64 {
        self(node, goal)
    }
}

/// Always zero. A* with this heuristic behaves like Dijkstra's algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHeuristic;

impl<N> Heuristic<N> for NoHeuristic {
    fn estimate(&self, _node: &N, _goal: &N) -> f64 {
        0.0
    }
}

/// `|goal - node|` over numeric node identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbsoluteDifference;

macro_rules! impl_absolute_difference {
    ($($ty:ty),*) => {
        $(
            impl Heuristic<$ty> for AbsoluteDifference {
                fn estimate(&self, node: &$ty, goal: &$ty) -> f64 {
                    (*goal as f64 - *node as f64).abs()
                }
            }
        )*
    };
}

impl_absolute_difference!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
