use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use std::hash::Hash;

/// Picks up to `count` distinct items, preferring ones absent from `used`.
///
/// Fresh items from `pool` are taken first in uniformly shuffled order. If
/// they run out, the remainder is drawn from `fallback_pool` (or `pool` when
/// none is given), shuffled, and may include items from `used`. Items never
/// repeat within one result. If even the fallback cannot reach `count`, the
/// result is simply shorter.
pub fn pick_non_used<T, R>(
    pool: &[T],
    used: &HashSet<T>,
    count: usize,
    fallback_pool: Option<&[T]>,
    rng: &mut R,
) -> Vec<T>
where
    T: Clone + Eq + Hash,
    R: Rng + ?Sized,
{
    let mut chosen: Vec<T> = Vec::with_capacity(count);
    let mut seen: HashSet<&T> = HashSet::with_capacity(count);

    let mut fresh: Vec<&T> = pool.iter().filter(|item| !used.contains(*item)).collect();
    fresh.shuffle(rng);
    for item in fresh {
        if chosen.len() == count {
            break;
        }
        if seen.insert(item) {
            chosen.push(item.clone());
        }
    }

    if chosen.len() < count {
        let source = fallback_pool.unwrap_or(pool);
        let mut repeats: Vec<&T> = source.iter().filter(|item| !seen.contains(*item)).collect();
        repeats.shuffle(rng);
        log::debug!(
            "Only {} fresh item(s) for {} slot(s); drawing from {} fallback candidate(s)",
            chosen.len(),
            count,
            repeats.len()
        );
        for item in repeats {
            if chosen.len() == count {
                break;
            }
            if seen.insert(item) {
                chosen.push(item.clone());
            }
        }
    }

    chosen
}
