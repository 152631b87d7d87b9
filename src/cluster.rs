//! Greedy agreement clustering over perspectives
//!
//! Groups perspectives whose texts are close enough to a cluster's seed.
//! This is deliberately seed-based, not transitive: a perspective joins a
//! cluster when it matches the cluster's *first* member, so later members
//! need not be pairwise similar to each other. Rewriting this with
//! union-find style transitive clustering would silently change output.

use indexmap::IndexMap;

use crate::similarity::similarity;

/// Partition perspectives into similarity clusters.
///
/// Returns `(clusters, major_opinion)` where every input name appears in
/// exactly one cluster and `major_opinion` is the largest cluster, ties
/// resolving to the earliest formed. Cluster order follows the order each
/// seed was first seen; member order within a cluster is scan order.
///
/// A perspective joins the current cluster when its similarity to the seed
/// text strictly exceeds `threshold`. An empty mapping yields `([], [])`.
pub fn cluster_perspectives(
    perspectives: &IndexMap<String, String>,
    threshold: f64,
) -> (Vec<Vec<String>>, Vec<String>) {
    let names: Vec<&String> = perspectives.keys().collect();
    let texts: Vec<&String> = perspectives.values().collect();
    let n = names.len();

    let mut clusters: Vec<Vec<String>> = Vec::new();
    let mut used = vec![false; n];

    for i in 0..n {
        if used[i] {
            continue;
        }

        let mut cluster = vec![names[i].clone()];
        used[i] = true;

        for j in (i + 1)..n {
            if used[j] {
                continue;
            }

            if similarity(texts[i], texts[j]) > threshold {
                cluster.push(names[j].clone());
                used[j] = true;
            }
        }

        clusters.push(cluster);
    }

    // Largest cluster wins; strict comparison keeps the earliest formed on ties
    let mut major_opinion: Vec<String> = Vec::new();
    for cluster in &clusters {
        if cluster.len() > major_opinion.len() {
            major_opinion = cluster.clone();
        }
    }

    (clusters, major_opinion)
}
