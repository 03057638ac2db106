//! Graph generators for Prim property-based tests.
//!
//! Every generator is driven by a seeded [`SmallRng`], so a proptest seed or
//! an rstest case pins the exact graph. Vertex ids are 1-based and the start
//! vertex is drawn uniformly from the whole graph.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{InputEdge, Weight};

use super::types::{PrimFixture, WeightDistribution};

/// Minimum vertex count for most generated graphs.
const MIN_VERTICES: usize = 2;
/// Maximum vertex count for most generated graphs.
const MAX_VERTICES: usize = 64;
/// Maximum vertex count for dense graphs.
const DENSE_MAX_VERTICES: usize = 32;

/// Generates fixtures covering every weight distribution.
pub(super) fn prim_fixture_strategy() -> impl Strategy<Value = PrimFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> PrimFixture {
    let (vertex_count, edges) = match distribution {
        WeightDistribution::Unique => generate_probabilistic_graph(
            rng,
            MAX_VERTICES,
            (0.2, 0.6),
            |r| r.gen_range(1..=1_000_000),
        ),
        WeightDistribution::ManyIdentical => generate_identical_weights(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => generate_probabilistic_graph(
            rng,
            DENSE_MAX_VERTICES,
            (0.7, 0.95),
            |r| r.gen_range(1..=1_000),
        ),
        WeightDistribution::Disconnected => generate_disconnected(rng),
        WeightDistribution::Multigraph => generate_multigraph(rng),
    };
    let start = rng.gen_range(1..=vertex_count);

    PrimFixture {
        vertex_count,
        edges,
        start,
        distribution,
    }
}

/// Adds each vertex pair with a probability drawn from `edge_prob_range`.
fn generate_probabilistic_graph(
    rng: &mut SmallRng,
    max_vertices: usize,
    edge_prob_range: (f64, f64),
    mut weight_generator: impl FnMut(&mut SmallRng) -> Weight,
) -> (usize, Vec<InputEdge>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=max_vertices);
    let edge_probability: f64 = rng.gen_range(edge_prob_range.0..=edge_prob_range.1);
    let mut edges = Vec::new();

    for (source, target) in all_pairs(1, vertex_count) {
        if rng.gen_bool(edge_probability) {
            let weight = weight_generator(rng);
            edges.push(InputEdge::new(source, target, weight));
        }
    }

    if edges.is_empty() {
        let weight = weight_generator(rng);
        edges.push(InputEdge::new(1, 2, weight));
    }
    (vertex_count, edges)
}

fn generate_identical_weights(rng: &mut SmallRng) -> (usize, Vec<InputEdge>) {
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<Weight> = (0..pool_size).map(|_| rng.gen_range(1..=10)).collect();
    generate_probabilistic_graph(rng, MAX_VERTICES, (0.3, 0.7), move |r| {
        pool[r.gen_range(0..pool.len())]
    })
}

/// Builds a random spanning path, then sprinkles extra edges on top.
fn generate_sparse(rng: &mut SmallRng) -> (usize, Vec<InputEdge>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut order: Vec<usize> = (1..=vertex_count).collect();
    shuffle(&mut order, rng);

    let mut edges: Vec<InputEdge> = order
        .windows(2)
        .map(|pair| InputEdge::new(pair[0], pair[1], rng.gen_range(1..=100)))
        .collect();

    let extra = rng.gen_range(vertex_count / 2..=vertex_count);
    for _ in 0..extra {
        let source = rng.gen_range(1..=vertex_count);
        let target = rng.gen_range(1..=vertex_count);
        if source != target {
            edges.push(InputEdge::new(source, target, rng.gen_range(1..=100)));
        }
    }
    (vertex_count, edges)
}

/// Lays out 2 to 5 components side by side; singletons are allowed.
fn generate_disconnected(rng: &mut SmallRng) -> (usize, Vec<InputEdge>) {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=5))
        .map(|_| rng.gen_range(1..=12))
        .collect();
    let mut edges = Vec::new();
    let mut offset = 1;

    for &size in &sizes {
        let edge_probability: f64 = rng.gen_range(0.3..=0.8);
        let before = edges.len();
        for (source, target) in all_pairs(offset, size) {
            if rng.gen_bool(edge_probability) {
                edges.push(InputEdge::new(source, target, rng.gen_range(1..=100)));
            }
        }
        if size >= 2 && edges.len() == before {
            edges.push(InputEdge::new(offset, offset + 1, rng.gen_range(1..=100)));
        }
        offset += size;
    }
    (sizes.iter().sum(), edges)
}

/// Random endpoints with replacement, so duplicates and self-loops appear.
fn generate_multigraph(rng: &mut SmallRng) -> (usize, Vec<InputEdge>) {
    let vertex_count = rng.gen_range(1..=24);
    let edge_count = rng.gen_range(0..=vertex_count * 3);
    let mut edges = Vec::with_capacity(edge_count);

    for _ in 0..edge_count {
        let source = rng.gen_range(1..=vertex_count);
        let target = if rng.gen_bool(0.1) {
            source
        } else {
            rng.gen_range(1..=vertex_count)
        };
        let weight = rng.gen_range(-50..=50);
        edges.push(InputEdge::new(source, target, weight));
        if rng.gen_bool(0.2) {
            edges.push(InputEdge::new(target, source, weight));
        }
    }
    (vertex_count, edges)
}

/// Returns every unordered pair `(offset + i, offset + j)` with `i < j < size`.
fn all_pairs(offset: usize, size: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..size {
        for j in (i + 1)..size {
            pairs.push((offset + i, offset + j));
        }
    }
    pairs
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle(slice: &mut [usize], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

// Weighted by hand: equal weights and multigraphs are the interesting cases.
impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
            3 => Just(Self::Multigraph),
        ]
    }
}
