/// Lexicographic iterator over all `K`-element index subsets of `0..n`.
///
/// Used for the C(n,5) best-hand search (n = 5, 6 or 7) and for the
/// C(n,2) card pairs of exhaustive enumeration.
#[derive(Debug, Clone)]
pub(crate) struct Combinations<const K: usize> {
    indices: [usize; K],
    n: usize,
    done: bool,
}

impl<const K: usize> Combinations<K> {
    pub(crate) fn new(n: usize) -> Self {
        Self { indices: std::array::from_fn(|i| i), n, done: K > n || K == 0 }
    }
}

impl<const K: usize> Iterator for Combinations<K> {
    type Item = [usize; K];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.indices;

        // Rightmost index that can still move, then reset everything to its right
        let mut i = K - 1;
        loop {
            if self.indices[i] < self.n - (K - i) {
                self.indices[i] += 1;
                for j in (i + 1)..K {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
        }

        Some(result)
    }
}

/// C(n, k) for the small sizes used here.
pub(crate) const fn choose(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let mut acc = 1;
    let mut i = 0;
    while i < k {
        acc = acc * (n - i) / (i + 1);
        i += 1;
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn counts_match_binomials() {
        assert_eq!(Combinations::<5>::new(5).count(), 1);
        assert_eq!(Combinations::<5>::new(6).count(), 6);
        assert_eq!(Combinations::<5>::new(7).count(), 21);
        assert_eq!(Combinations::<2>::new(47).count(), 1081);
        assert_eq!(Combinations::<2>::new(45).count(), choose(45, 2));
        assert_eq!(choose(52, 5), 2_598_960);
    }

    #[test]
    fn too_few_elements_yields_nothing() {
        assert_eq!(Combinations::<5>::new(4).count(), 0);
    }

    #[test]
    fn subsets_are_strictly_increasing_and_unique() {
        let mut seen = HashSet::new();
        for combo in Combinations::<5>::new(7) {
            assert!(combo.windows(2).all(|w| w[0] < w[1]));
            assert!(combo.iter().all(|&i| i < 7));
            assert!(seen.insert(combo), "Duplicate: {combo:?}");
        }
    }

    #[test]
    fn order_is_lexicographic() {
        let combos: Vec<[usize; 2]> = Combinations::<2>::new(4).collect();
        assert_eq!(combos, vec![[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]]);
        let first_last: Vec<[usize; 5]> = Combinations::<5>::new(7).collect();
        assert_eq!(first_last[0], [0, 1, 2, 3, 4]);
        assert_eq!(first_last[20], [2, 3, 4, 5, 6]);
    }
}
