/// Enumerate every index pair `(i, j)` with `i < j` over `0..n`, in
/// lexicographic order: (0,1),(0,2),...,(0,n-1),(1,2),...,(n-2,n-1).
pub fn pair_indices(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
}

/// Number of unordered pairs over `n` labels: n*(n-1)/2.
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Map the index-pair enumeration onto population labels, preserving the
/// list order. Labels are opaque; duplicates in the list yield duplicate
/// pairs.
pub fn population_pairs(labels: &[String]) -> impl Iterator<Item = (&str, &str)> + '_ {
    pair_indices(labels.len()).map(move |(i, j)| (labels[i].as_str(), labels[j].as_str()))
}
