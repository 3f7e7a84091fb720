// Aggregation engine: cluster-wide totals and per-key group totals over entity collections.
// Pure folds; absent numeric attributes contribute 0 and empty input is never an error.

use std::collections::{BTreeMap, HashMap};

use crate::models::{AggregateGroup, Entity, Field, GroupKey, Totals};

/// Sums each requested field across `entities`. Repeated fields are counted once.
pub fn reduce_totals<'a, I>(entities: I, fields: &[Field]) -> Totals
where
    I: IntoIterator<Item = &'a Entity>,
{
    let mut totals: BTreeMap<Field, f64> = fields.iter().map(|f| (*f, 0.0)).collect();
    let mut count = 0usize;
    for entity in entities {
        count += 1;
        for (field, total) in totals.iter_mut() {
            *total += field.value(entity);
        }
    }
    Totals { count, totals }
}

/// Partitions `entities` by `key_fn` and reduces each partition.
/// Groups come out in first-seen order of their key.
pub fn group_by<F>(entities: &[Entity], key_fn: F, fields: &[Field]) -> Vec<AggregateGroup>
where
    F: Fn(&Entity) -> GroupKey,
{
    let mut index: HashMap<GroupKey, usize> = HashMap::new();
    let mut buckets: Vec<(GroupKey, Vec<usize>)> = Vec::new();
    for (pos, entity) in entities.iter().enumerate() {
        let key = key_fn(entity);
        match index.get(&key) {
            Some(&slot) => buckets[slot].1.push(pos),
            None => {
                index.insert(key.clone(), buckets.len());
                buckets.push((key, vec![pos]));
            }
        }
    }

    buckets
        .into_iter()
        .map(|(key, members)| {
            let totals = reduce_totals(members.iter().map(|&i| &entities[i]), fields);
            AggregateGroup {
                key,
                totals,
                members,
            }
        })
        .collect()
}

/// Key function grouping containers by image; missing or blank images go to `GroupKey::Unknown`.
pub fn by_image(entity: &Entity) -> GroupKey {
    GroupKey::from_attr(entity.image_key())
}
