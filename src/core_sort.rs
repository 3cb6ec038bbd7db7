use crate::compare::compare_keys;
use crate::config::{SortConfig, Strategy};
use crate::error::{SortError, SortResult};
use crate::key::{derive_key, SortKey};
use parking_lot::Mutex;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

/// Inputs at least this long are keyed and sorted on the rayon pool
const PARALLEL_THRESHOLD: usize = 8192;

/// Sort engine over an in-memory sequence of lines
pub struct CoreSort<'a> {
    config: &'a SortConfig,
}

impl<'a> CoreSort<'a> {
    pub fn new(config: &'a SortConfig) -> Self {
        Self { config }
    }

    /// Reorder `lines` by the configured column and key mode.
    ///
    /// On error `lines` keeps its original order.
    pub fn sort<T>(&self, lines: &mut [T]) -> SortResult<()>
    where
        T: AsRef<str> + Sync,
    {
        self.config.validate()?;

        if self.config.debug {
            eprintln!(
                "sort: strategy={} mode={} keys={} column={} reverse={} trim={}",
                self.config.strategy,
                self.config.mode,
                if self.config.mode.is_integral() { "integer" } else { "text" },
                self.config.column,
                self.config.reverse,
                self.config.trim_trailing_blanks
            );
            eprintln!("sort: lines={} parallel={}", lines.len(), self.use_parallel(lines.len()));
        }

        // Nothing gets compared, but a bad lone line must still fail
        if lines.len() < 2 {
            for line in lines.iter() {
                derive_key(line.as_ref(), self.config)?;
            }
            return Ok(());
        }

        let order = match self.config.strategy {
            Strategy::Precomputed => self.precomputed_order(lines)?,
            Strategy::Lazy => self.lazy_order(lines)?,
        };

        apply_permutation(lines, order);
        Ok(())
    }

    fn use_parallel(&self, len: usize) -> bool {
        len >= PARALLEL_THRESHOLD && num_cpus::get() > 1
    }

    /// Derive every key up front, then sort positions by key
    fn precomputed_order<T>(&self, lines: &[T]) -> SortResult<Vec<usize>>
    where
        T: AsRef<str> + Sync,
    {
        let config = self.config;
        let parallel = self.use_parallel(lines.len());

        // Collected in input order so the reported error is the first bad line
        let keys: Vec<SortKey<'_>> = if parallel {
            let derived: Vec<SortResult<SortKey<'_>>> = lines
                .par_iter()
                .map(|line| derive_key(line.as_ref(), config))
                .collect();
            derived.into_iter().collect::<SortResult<Vec<_>>>()?
        } else {
            lines
                .iter()
                .map(|line| derive_key(line.as_ref(), config))
                .collect::<SortResult<Vec<_>>>()?
        };

        let mut order: Vec<usize> = (0..lines.len()).collect();
        let by_key = |a: &usize, b: &usize| compare_keys(&keys[*a], &keys[*b], config);
        if parallel {
            order.par_sort_by(by_key);
        } else {
            order.sort_by(by_key);
        }

        Ok(order)
    }

    /// Derive both keys inside every comparison.
    ///
    /// The comparator cannot return an error, so the first failure is latched
    /// and every later comparison reports `Equal`. Once tripped, the reported
    /// error is the first bad line in input order, not the first one the sort
    /// happened to visit.
    fn lazy_order<T>(&self, lines: &[T]) -> SortResult<Vec<usize>>
    where
        T: AsRef<str> + Sync,
    {
        let config = self.config;
        let latch = ErrorLatch::new();
        let mut order: Vec<usize> = (0..lines.len()).collect();

        // rayon regardless of size: its merge sort survives the comparator
        // turning inconsistent after the latch trips, std's sort may panic
        order.par_sort_by(|&a, &b| {
            if latch.is_set() {
                return Ordering::Equal;
            }
            let key_a = match derive_key(lines[a].as_ref(), config) {
                Ok(key) => key,
                Err(err) => {
                    latch.record(err);
                    return Ordering::Equal;
                }
            };
            let key_b = match derive_key(lines[b].as_ref(), config) {
                Ok(key) => key,
                Err(err) => {
                    latch.record(err);
                    return Ordering::Equal;
                }
            };
            compare_keys(&key_a, &key_b, config)
        });

        if latch.is_set() {
            for line in lines {
                derive_key(line.as_ref(), config)?;
            }
            latch.into_result()?;
        }
        Ok(order)
    }
}

/// Sort `lines` in place under `config`
pub fn sort_lines<T>(lines: &mut [T], config: &SortConfig) -> SortResult<()>
where
    T: AsRef<str> + Sync,
{
    CoreSort::new(config).sort(lines)
}

/// First-error-wins slot shared by comparator invocations
#[derive(Debug, Default)]
pub struct ErrorLatch {
    tripped: AtomicBool,
    first: Mutex<Option<SortError>>,
}

impl ErrorLatch {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_set(&self) -> bool {
        self.tripped.load(AtomicOrdering::Acquire)
    }

    /// Keep `err` unless an earlier error was already recorded
    pub fn record(&self, err: SortError) {
        let mut slot = self.first.lock();
        if slot.is_none() {
            *slot = Some(err);
        }
        self.tripped.store(true, AtomicOrdering::Release);
    }

    pub fn into_result(self) -> SortResult<()> {
        match self.first.into_inner() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Move `lines[order[i]]` to position `i` by following permutation cycles
fn apply_permutation<T>(lines: &mut [T], order: Vec<usize>) {
    let mut placed = vec![false; order.len()];

    for start in 0..order.len() {
        if placed[start] {
            continue;
        }
        let mut current = start;
        loop {
            placed[current] = true;
            let next = order[current];
            if next == start {
                break;
            }
            lines.swap(current, next);
            current = next;
        }
    }
}
