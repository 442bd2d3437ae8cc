//! Lazy k-combination enumeration.

/// Iterator over every k-element combination of a pool, each emitted exactly
/// once in the pool's order (index-lexicographic).
///
/// Combinations are unordered: `{A, B}` and `{B, A}` are the same combination
/// and appear once. Recreating the iterator over the same pool replays the
/// same sequence, and the iterator itself is `Clone` for mid-stream restarts.
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    pool: &'a [T],
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl<'a, T: Clone> Combinations<'a, T> {
    pub fn new(pool: &'a [T], k: usize) -> Self {
        Self {
            pool,
            indices: (0..k).collect(),
            started: false,
            // k = 0 still yields the single empty combination.
            done: k > pool.len(),
        }
    }

    fn emit(&self) -> Vec<T> {
        self.indices.iter().map(|&i| self.pool[i].clone()).collect()
    }
}

impl<'a, T: Clone> Iterator for Combinations<'a, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.emit());
        }

        // Advance the rightmost index that still has headroom, then reset
        // everything to its right to the tightest ascending run.
        let k = self.indices.len();
        let n = self.pool.len();
        let mut i = k;
        loop {
            if i == 0 {
                self.done = true;
                return None;
            }
            i -= 1;
            if self.indices[i] < n - k + i {
                break;
            }
        }
        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(self.emit())
    }
}
