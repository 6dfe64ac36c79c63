//! Ограниченный выбор top-K.
//!
//! Селектор держит не более `take` элементов в [`MinHeap`], минимум которой
//! и есть самый слабый из удерживаемых. Каждый новый элемент сравнивается
//! только с этим минимумом: `O(n log k)` по времени и `O(k)` по памяти на
//! поток из `n` элементов. Каждый вызов независим, состояние между вызовами
//! не сохраняется.

mod heap;

pub use heap::MinHeap;
use tracing::debug;

use crate::person::Person;

/// Верхняя граница начальной аллокации кучи. Большие `take` тоже работают,
/// куча просто растёт по мере поступления записей.
const MAX_PREALLOCATED: usize = 4096;

/// Возвращает `take` элементов с наибольшими ключами, начиная с наибольшего.
///
/// Новый элемент вытесняет текущий минимум только при строго большем ключе,
/// поэтому из равных на границе остаётся пришедший раньше. При `take == 0`
/// вход не читается вовсе.
///
/// # Пример
///
/// ```
/// use people::select::select_top_by_key;
///
/// let words = ["kiwi", "banana", "fig", "cherries", "apple"];
/// let longest = select_top_by_key(words, 2, |w| w.len());
/// assert_eq!(longest, vec!["cherries", "banana"]);
/// ```
pub fn select_top_by_key<T, K, I, F>(items: I, take: usize, mut key: F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    K: Ord,
    F: FnMut(&T) -> K,
{
    if take == 0 {
        return Vec::new();
    }

    let mut heap = MinHeap::with_capacity(take.min(MAX_PREALLOCATED));
    for item in items {
        offer(&mut heap, take, key(&item), item);
    }
    drain_descending(heap)
}

/// Вариант [`select_top_by_key`] для источника с ошибками.
///
/// Останавливается на первом `Err` из источника и возвращает его; уже
/// выбранное отбрасывается.
pub fn try_select_top_by_key<T, E, K, I, F>(items: I, take: usize, mut key: F) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = Result<T, E>>,
    K: Ord,
    F: FnMut(&T) -> K,
{
    if take == 0 {
        return Ok(Vec::new());
    }

    let mut heap = MinHeap::with_capacity(take.min(MAX_PREALLOCATED));
    for item in items {
        let item = item?;
        offer(&mut heap, take, key(&item), item);
    }
    Ok(drain_descending(heap))
}

/// Возвращает `take` самых молодых людей, начиная с самого молодого.
///
/// # Пример
///
/// ```
/// use jiff::civil::date;
/// use people::{person::Person, select::youngest};
///
/// let people = vec![
///     Person::new("A", "A", date(1980, 1, 1)).unwrap(),
///     Person::new("B", "B", date(2000, 1, 1)).unwrap(),
///     Person::new("C", "C", date(1990, 1, 1)).unwrap(),
///     Person::new("D", "D", date(2010, 1, 1)).unwrap(),
///     Person::new("E", "E", date(1995, 1, 1)).unwrap(),
/// ];
///
/// let top = youngest(people, 2);
/// let names: Vec<_> = top.iter().map(|p| p.first_name()).collect();
/// assert_eq!(names, vec!["D", "B"]);
/// ```
pub fn youngest<I>(people: I, take: usize) -> Vec<Person>
where
    I: IntoIterator<Item = Person>,
{
    let top = select_top_by_key(people, take, Person::date_of_birth);
    debug!(take, selected = top.len(), "selection finished");
    top
}

/// Возвращает `take` самых молодых людей из источника с ошибками.
///
/// Точка входа для [`PersonReader`](crate::reader::PersonReader):
/// некорректные строки до селектора не доходят, а ошибка чтения источника
/// прерывает проход.
///
/// # Ошибки
///
/// Пробрасывает первую ошибку из `people`.
pub fn try_youngest<I, E>(people: I, take: usize) -> Result<Vec<Person>, E>
where
    I: IntoIterator<Item = Result<Person, E>>,
{
    let top = try_select_top_by_key(people, take, Person::date_of_birth)?;
    debug!(take, selected = top.len(), "selection finished");
    Ok(top)
}

fn offer<K: Ord, T>(heap: &mut MinHeap<K, T>, take: usize, key: K, item: T) {
    if heap.len() < take {
        heap.push(key, item);
    } else if heap.peek_min().is_some_and(|(min, _)| key > *min) {
        heap.replace_min(key, item);
    }
}

fn drain_descending<K: Ord, T>(heap: MinHeap<K, T>) -> Vec<T> {
    let mut items: Vec<T> = heap.into_sorted_vec().into_iter().map(|(_, item)| item).collect();
    items.reverse();
    items
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, io};

    use jiff::civil::{Date, date};
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;

    fn person(name: &str, dob: Date) -> Person {
        Person::new(name, name, dob).unwrap()
    }

    fn sample() -> Vec<Person> {
        vec![
            person("A", date(1980, 1, 1)),
            person("B", date(2000, 1, 1)),
            person("C", date(1990, 1, 1)),
            person("D", date(2010, 1, 1)),
            person("E", date(1995, 1, 1)),
        ]
    }

    fn names(people: &[Person]) -> Vec<&str> {
        people.iter().map(Person::first_name).collect()
    }

    fn random_people(rng: &mut StdRng, n: usize) -> Vec<Person> {
        let start = date(1950, 1, 1);
        (0..n)
            .map(|i| {
                let offset = jiff::Span::new().days(rng.random_range(0..3650));
                let dob = start.checked_add(offset).unwrap();
                Person::new(format!("P{i}"), "X", dob).unwrap()
            })
            .collect()
    }

    #[test]
    fn returns_top_two_youngest_first() {
        let top = youngest(sample(), 2);
        assert_eq!(names(&top), vec!["D", "B"]);
        assert_eq!(top[0].date_of_birth(), date(2010, 1, 1));
        assert_eq!(top[1].date_of_birth(), date(2000, 1, 1));
    }

    #[test]
    fn take_larger_than_input_returns_all_sorted() {
        let people = vec![person("A", date(1990, 1, 1)), person("B", date(1992, 1, 1))];
        let top = youngest(people, 5);
        assert_eq!(names(&top), vec!["B", "A"]);
    }

    #[test]
    fn take_zero_is_empty_and_consumes_nothing() {
        let pulled = Cell::new(0);
        let source = sample().into_iter().inspect(|_| pulled.set(pulled.get() + 1));
        assert!(youngest(source, 0).is_empty());
        assert_eq!(pulled.get(), 0);
    }

    #[test]
    fn empty_input() {
        assert!(youngest(Vec::new(), 3).is_empty());
    }

    #[test]
    fn boundary_tie_keeps_first_arrival() {
        let people = vec![
            person("Old", date(1990, 1, 1)),
            person("Young", date(2000, 1, 1)),
            person("Late", date(1990, 1, 1)),
        ];
        let top = youngest(people, 2);
        assert_eq!(names(&top), vec!["Young", "Old"]);
    }

    #[test]
    fn duplicates_are_ranked_independently() {
        let twin = person("Twin", date(2001, 1, 1));
        let people = vec![twin.clone(), person("Other", date(1999, 1, 1)), twin.clone()];
        let top = youngest(people, 2);
        assert_eq!(top, vec![twin.clone(), twin]);
    }

    #[test]
    fn running_twice_gives_identical_results() {
        let mut rng = StdRng::seed_from_u64(11);
        let people = random_people(&mut rng, 500);
        assert_eq!(youngest(people.clone(), 25), youngest(people, 25));
    }

    #[test]
    fn matches_full_sort_on_random_input() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..40 {
            let n = rng.random_range(0..300);
            let take = rng.random_range(0..40);
            let people = random_people(&mut rng, n);

            let top = youngest(people.clone(), take);

            let mut expected: Vec<Date> = people.iter().map(Person::date_of_birth).collect();
            expected.sort_unstable_by(|a, b| b.cmp(a));
            expected.truncate(take);

            let got: Vec<Date> = top.iter().map(Person::date_of_birth).collect();
            assert_eq!(got, expected, "n={n} take={take}");
            assert_eq!(top.len(), take.min(n));
            assert!(top.iter().all(|p| people.contains(p)));
        }
    }

    #[test]
    fn partial_prefix_is_a_valid_pass() {
        let mut source = sample().into_iter();
        let top = youngest(source.by_ref().take(3), 2);
        assert_eq!(names(&top), vec!["B", "C"]);
        assert_eq!(source.count(), 2);
    }

    #[test]
    fn try_youngest_propagates_source_error() {
        let source: Vec<Result<Person, io::Error>> = vec![
            Ok(person("A", date(1980, 1, 1))),
            Err(io::Error::other("disk gone")),
            Ok(person("B", date(2000, 1, 1))),
        ];
        let err = try_youngest(source, 2).unwrap_err();
        assert_eq!(err.to_string(), "disk gone");
    }

    #[test]
    fn try_youngest_on_clean_source() {
        let source = sample().into_iter().map(Ok::<_, io::Error>);
        let top = try_youngest(source, 3).unwrap();
        assert_eq!(names(&top), vec!["D", "B", "E"]);
    }

    #[test]
    fn generic_selection_by_key() {
        let top = select_top_by_key(vec![3, 9, 1, 7, 5], 3, |n| *n);
        assert_eq!(top, vec![9, 7, 5]);

        let smallest = select_top_by_key(vec![3, 9, 1, 7, 5], 2, |n| std::cmp::Reverse(*n));
        assert_eq!(smallest, vec![1, 3]);
    }
}
