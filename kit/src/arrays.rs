// Sequence helpers. Every function borrows its input and returns a new Vec.
use crate::collation::locale_compare;
use chrono::{NaiveDate, NaiveDateTime};
use rand::Rng;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::hash::Hash;

/// Splits `seq` into consecutive groups of at most `size` elements.
///
/// A `size` of zero yields the whole sequence as a single group.
pub fn chunk<T: Clone>(seq: &[T], size: usize) -> Vec<Vec<T>> {
    if seq.is_empty() {
        return Vec::new();
    }
    if size == 0 {
        return vec![seq.to_vec()];
    }
    seq.chunks(size).map(<[T]>::to_vec).collect()
}

/// Removes duplicates, keeping the first occurrence of each value.
///
/// Needs `Hash`; floats go through [`unique_by_eq`].
pub fn unique<T: Eq + Hash + Clone>(seq: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(seq.len());
    seq.iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// [`unique`] for values that only implement `PartialEq`. Quadratic.
///
/// `NaN` never equals itself, so every `NaN` is kept.
pub fn unique_by_eq<T: PartialEq + Clone>(seq: &[T]) -> Vec<T> {
    let mut kept: Vec<T> = Vec::with_capacity(seq.len());
    for item in seq {
        if !kept.contains(item) {
            kept.push(item.clone());
        }
    }
    kept
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Ordering used by [`sort_by`] for an extracted field.
///
/// Strings compare with pt-BR collation, numbers and other scalars by their
/// natural order. Floats that cannot be compared (NaN) count as ties.
pub trait SortKey {
    fn compare(&self, other: &Self) -> Ordering;
}

macro_rules! natural_sort_key {
    ($($ty:ty),* $(,)?) => {
        $(impl SortKey for $ty {
            fn compare(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }
        })*
    };
}

natural_sort_key!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, NaiveDate,
    NaiveDateTime,
);

impl SortKey for f32 {
    fn compare(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

impl SortKey for f64 {
    fn compare(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

impl SortKey for str {
    fn compare(&self, other: &Self) -> Ordering {
        locale_compare(self, other)
    }
}

impl SortKey for String {
    fn compare(&self, other: &Self) -> Ordering {
        locale_compare(self, other)
    }
}

impl<K: SortKey + ?Sized> SortKey for &K {
    fn compare(&self, other: &Self) -> Ordering {
        (**self).compare(*other)
    }
}

// Missing values sort first in ascending order.
impl<K: SortKey> SortKey for Option<K> {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Some(a), Some(b)) => a.compare(b),
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
        }
    }
}

/// Stable sort of a copy of `seq` by the field `key` extracts.
///
/// Elements with equal keys keep their input order in both directions.
pub fn sort_by<T, K, F>(seq: &[T], key: F, direction: SortDirection) -> Vec<T>
where
    T: Clone,
    K: SortKey,
    F: Fn(&T) -> K,
{
    let mut sorted = seq.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = key(a).compare(&key(b));
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}

/// Buckets elements by the string form of the field `key` extracts.
///
/// Buckets are listed in the order their key first appears; each bucket keeps
/// the input order of its elements.
pub fn group_by<T, K, F>(seq: &[T], key: F) -> Vec<(String, Vec<T>)>
where
    T: Clone,
    K: Display,
    F: Fn(&T) -> K,
{
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<T>)> = Vec::new();

    for item in seq {
        let group_key = key(item).to_string();
        match positions.get(&group_key) {
            Some(&index) => groups[index].1.push(item.clone()),
            None => {
                positions.insert(group_key.clone(), groups.len());
                groups.push((group_key, vec![item.clone()]));
            }
        }
    }
    groups
}

/// An element of a sequence that may itself hold a nested sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nested<T> {
    Item(T),
    List(Vec<Nested<T>>),
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Nested::Item(value)
    }
}

/// Flattens one level of nesting. Lists inside lists are kept as lists.
pub fn flatten<T: Clone>(seq: &[Nested<T>]) -> Vec<Nested<T>> {
    let mut flat = Vec::with_capacity(seq.len());
    for element in seq {
        match element {
            Nested::Item(_) => flat.push(element.clone()),
            Nested::List(inner) => flat.extend(inner.iter().cloned()),
        }
    }
    flat
}

/// Elements of the first sequence that appear in every other sequence.
///
/// Needs `Hash`; floats go through [`intersection_by_eq`].
pub fn intersection<T: Eq + Hash + Clone>(seqs: &[&[T]]) -> Vec<T> {
    let Some((first, rest)) = seqs.split_first() else {
        return Vec::new();
    };
    let others: Vec<HashSet<&T>> = rest.iter().map(|s| s.iter().collect()).collect();
    first
        .iter()
        .filter(|item| others.iter().all(|set| set.contains(item)))
        .cloned()
        .collect()
}

/// [`intersection`] for values that only implement `PartialEq`.
pub fn intersection_by_eq<T: PartialEq + Clone>(seqs: &[&[T]]) -> Vec<T> {
    let Some((first, rest)) = seqs.split_first() else {
        return Vec::new();
    };
    first
        .iter()
        .filter(|item| rest.iter().all(|other| other.contains(*item)))
        .cloned()
        .collect()
}

/// Elements of `seq` that are not present in `exclude`.
///
/// Needs `Hash`; floats go through [`difference_by_eq`].
pub fn difference<T: Eq + Hash + Clone>(seq: &[T], exclude: &[T]) -> Vec<T> {
    let excluded: HashSet<&T> = exclude.iter().collect();
    seq.iter()
        .filter(|item| !excluded.contains(item))
        .cloned()
        .collect()
}

/// [`difference`] for values that only implement `PartialEq`.
pub fn difference_by_eq<T: PartialEq + Clone>(seq: &[T], exclude: &[T]) -> Vec<T> {
    seq.iter()
        .filter(|item| !exclude.contains(*item))
        .cloned()
        .collect()
}

/// Returns a uniformly random permutation of `seq` drawn from the thread RNG.
pub fn shuffle<T: Clone>(seq: &[T]) -> Vec<T> {
    shuffle_with(seq, &mut rand::rng())
}

/// Fisher-Yates shuffle of a copy of `seq` using the given generator.
pub fn shuffle_with<T: Clone, R: Rng + ?Sized>(seq: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = seq.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.random_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}

/// Splits `seq` into the elements matching `predicate` and the rest.
pub fn partition<T, P>(seq: &[T], predicate: P) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    seq.iter().cloned().partition(|item| predicate(item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Debug, Clone, PartialEq)]
    struct Person {
        name: String,
        city: String,
        age: u32,
        score: f64,
    }

    fn person(name: &str, city: &str, age: u32, score: f64) -> Person {
        Person { name: name.to_string(), city: city.to_string(), age, score }
    }

    fn people() -> Vec<Person> {
        vec![
            person("Érica", "Recife", 31, 7.5),
            person("bruno", "São Paulo", 25, 9.0),
            person("Ana", "Recife", 25, 6.0),
            person("Carlos", "Curitiba", 40, 9.0),
        ]
    }

    fn names(list: &[Person]) -> Vec<&str> {
        list.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_chunk_even_and_remainder() {
        assert_eq!(chunk(&[1, 2, 3, 4, 5], 2), vec![vec![1, 2], vec![3, 4], vec![5]]);
        assert_eq!(chunk(&[1, 2, 3, 4], 2), vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_chunk_zero_size_returns_single_group() {
        assert_eq!(chunk(&[1, 2, 3], 0), vec![vec![1, 2, 3]]);
    }

    #[test]
    fn test_chunk_empty_input() {
        let empty: [i32; 0] = [];
        assert!(chunk(&empty, 3).is_empty());
        assert!(chunk(&empty, 0).is_empty());
    }

    #[test]
    fn test_unique_keeps_first_occurrence() {
        assert_eq!(unique(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
        assert_eq!(unique(&["a", "b", "a"]), vec!["a", "b"]);
    }

    #[test]
    fn test_unique_by_eq_handles_floats() {
        assert_eq!(unique_by_eq(&[1.5, 2.0, 1.5, 0.1 + 0.2, 2.0]), vec![1.5, 2.0, 0.1 + 0.2]);
        let with_nan = unique_by_eq(&[f64::NAN, 1.0, f64::NAN]);
        assert_eq!(with_nan.len(), 3);
    }

    #[test]
    fn test_sort_by_string_uses_locale_order() {
        let sorted = sort_by(&people(), |p| p.name.clone(), SortDirection::Asc);
        assert_eq!(names(&sorted), vec!["Ana", "bruno", "Carlos", "Érica"]);
    }

    #[test]
    fn test_sort_by_number_descending_keeps_ties_stable() {
        let sorted = sort_by(&people(), |p| p.score, SortDirection::Desc);
        assert_eq!(names(&sorted), vec!["bruno", "Carlos", "Érica", "Ana"]);
    }

    #[test]
    fn test_sort_by_ascending_is_stable() {
        let sorted = sort_by(&people(), |p| p.age, SortDirection::default());
        assert_eq!(names(&sorted), vec!["bruno", "Ana", "Érica", "Carlos"]);
    }

    #[test]
    fn test_sort_by_does_not_mutate_input() {
        let input = people();
        let _ = sort_by(&input, |p| p.age, SortDirection::Asc);
        assert_eq!(input, people());
    }

    #[test]
    fn test_sort_by_optional_field() {
        let values = vec![Some(3), None, Some(1)];
        assert_eq!(sort_by(&values, |v| *v, SortDirection::Asc), vec![None, Some(1), Some(3)]);
    }

    #[test]
    fn test_group_by_preserves_order() {
        let groups = group_by(&people(), |p| p.city.clone());
        let keys: Vec<&str> = groups.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["Recife", "São Paulo", "Curitiba"]);
        assert_eq!(names(&groups[0].1), vec!["Érica", "Ana"]);
    }

    #[test]
    fn test_group_by_stringifies_numbers() {
        let groups = group_by(&people(), |p| p.age);
        assert_eq!(groups[1].0, "25");
        assert_eq!(names(&groups[1].1), vec!["bruno", "Ana"]);
    }

    #[test]
    fn test_flatten_one_level_only() {
        let input = vec![
            Nested::Item(1),
            Nested::List(vec![Nested::Item(2), Nested::List(vec![Nested::Item(3)])]),
            Nested::Item(4),
        ];
        assert_eq!(
            flatten(&input),
            vec![
                Nested::Item(1),
                Nested::Item(2),
                Nested::List(vec![Nested::Item(3)]),
                Nested::Item(4),
            ]
        );
    }

    #[test]
    fn test_intersection() {
        let a = [1, 2, 3, 4, 2];
        let b = [2, 4, 6];
        let c = [4, 2];
        assert_eq!(intersection(&[&a[..], &b[..], &c[..]]), vec![2, 4, 2]);
        assert_eq!(intersection(&[&a[..]]), a.to_vec());
    }

    #[test]
    fn test_intersection_no_inputs() {
        let none: [&[i32]; 0] = [];
        assert!(intersection(&none).is_empty());
    }

    #[test]
    fn test_difference() {
        assert_eq!(difference(&[1, 2, 3, 4, 2], &[2, 5]), vec![1, 3, 4]);
        assert_eq!(difference(&["x", "y"], &[]), vec!["x", "y"]);
    }

    #[test]
    fn test_float_intersection_and_difference() {
        let a = [0.5, 1.25, 2.0, 0.5];
        let b = [2.0, 0.5];
        assert_eq!(intersection_by_eq(&[&a[..], &b[..]]), vec![0.5, 2.0, 0.5]);
        assert_eq!(difference_by_eq(&a, &b), vec![1.25]);
        let none: [&[f64]; 0] = [];
        assert!(intersection_by_eq(&none).is_empty());
    }

    #[test]
    fn test_shuffle_with_seed_is_permutation() {
        let input: Vec<u32> = (0..50).collect();
        let mut rng = StdRng::seed_from_u64(7);
        let shuffled = shuffle_with(&input, &mut rng);
        assert_eq!(shuffled.len(), input.len());
        let mut sorted = shuffled.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, input);
    }

    #[test]
    fn test_shuffle_with_same_seed_is_reproducible() {
        let input = ["a", "b", "c", "d", "e"];
        let first = shuffle_with(&input, &mut StdRng::seed_from_u64(42));
        let second = shuffle_with(&input, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_shuffle_reaches_every_permutation() {
        let input = [1, 2, 3];
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = HashSet::new();
        for _ in 0..600 {
            seen.insert(shuffle_with(&input, &mut rng));
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_shuffle_small_inputs() {
        let empty: [i32; 0] = [];
        assert!(shuffle(&empty).is_empty());
        assert_eq!(shuffle(&[9]), vec![9]);
    }

    #[test]
    fn test_partition() {
        let (even, odd) = partition(&[1, 2, 3, 4, 5, 6], |n| n % 2 == 0);
        assert_eq!(even, vec![2, 4, 6]);
        assert_eq!(odd, vec![1, 3, 5]);
    }
}
