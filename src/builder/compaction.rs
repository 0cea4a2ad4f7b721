/*!
# Compaction

Turns the pending, unsorted neighbor lists of a builder into the sorted, duplicate-free arrays
the list representations rely on. Every list is compacted independently in `O(d log d)`:

1. sort the list,
2. walk it once, merging runs of equal neighbors,
3. truncate it to the merged length.

For networks, neighbor and weight are packed into one `u64` key (neighbor in the high bits) so
that sorting the keys sorts by neighbor without a separate weight array. Weights of merged
entries are summed; a sum that does not fit into a [`Weight`] fails with
[`GraphError::WeightOverflow`] instead of wrapping. Residual capacities of flow networks are
merged with [`compact_capacities`], which caps the sum instead.
*/

use std::convert::Infallible;

use crate::{
    error::{GraphError, Result},
    utils::{
        packing::{pack_weighted, unpack_high, unpack_weighted},
        SlicedBuffer,
    },
    vertex::Vertex,
    Weight,
};

/// Sorts `neighbors` and removes duplicates in place
pub(crate) fn compact_neighbors(mut neighbors: Vec<u32>) -> Vec<u32> {
    neighbors.sort_unstable();
    neighbors.dedup();
    neighbors
}

/// Sorts the packed `(neighbor, weight)` keys of the vertex at `tail` and merges equal neighbors
/// in place by summing their weights.
pub(crate) fn compact_weighted(tail: usize, keys: Vec<u64>) -> Result<Vec<u64>> {
    merge_runs(keys, |neighbor, sum| {
        Weight::try_from(sum).map_err(|_| GraphError::WeightOverflow {
            from: Vertex::from_index(tail),
            to: Vertex::new(neighbor),
        })
    })
}

/// Like [`compact_weighted`] for non-negative capacities, but a sum above [`Weight::MAX`] is
/// capped instead of failing.
pub(crate) fn compact_capacities(keys: Vec<u64>) -> Vec<u64> {
    let merged = merge_runs::<Infallible, _>(keys, |_, sum| Ok(sum.min(Weight::MAX as i64) as Weight));
    match merged {
        Ok(keys) => keys,
        Err(never) => match never {},
    }
}

/// Sorts `keys` and replaces every run of equal neighbors by one key whose weight is `narrow`
/// applied to the `i64` sum of the run
fn merge_runs<E, F>(mut keys: Vec<u64>, mut narrow: F) -> std::result::Result<Vec<u64>, E>
where
    F: FnMut(u32, i64) -> std::result::Result<Weight, E>,
{
    keys.sort_unstable();

    let mut len = 0;
    let mut i = 0;
    while i < keys.len() {
        let (neighbor, weight) = unpack_weighted(keys[i]);
        let mut sum = weight as i64;
        i += 1;

        while i < keys.len() && unpack_high(keys[i]) == neighbor {
            sum += unpack_weighted(keys[i]).1 as i64;
            i += 1;
        }

        keys[len] = pack_weighted(neighbor, narrow(neighbor, sum)?);
        len += 1;
    }

    keys.truncate(len);
    Ok(keys)
}

/// Splits compacted key lists into neighbor slices and an aligned weight vector
pub(crate) fn split_weighted(lists: &[Vec<u64>]) -> (SlicedBuffer<u32>, Vec<Weight>) {
    let nbs = SlicedBuffer::from_slices(lists.iter().map(|keys| keys.iter().map(|&k| unpack_high(k))));
    let weights = lists
        .iter()
        .flatten()
        .map(|&k| unpack_weighted(k).1)
        .collect();
    (nbs, weights)
}
