//! Бинарная min-куча на массиве.

/// Бинарная min-куча пар `(key, value)`, упорядоченных по `key`.
///
/// Элементы хранятся в одном `Vec` с неявной раскладкой: потомки индекса `i`
/// находятся в `2i + 1` и `2i + 2`. Сравнивается только ключ, значениям
/// порядок не нужен. Порядок среди равных ключей не определён.
///
/// # Пример
///
/// ```
/// use people::select::MinHeap;
///
/// let mut heap = MinHeap::with_capacity(4);
/// heap.push(30, "c");
/// heap.push(10, "a");
/// heap.push(20, "b");
///
/// assert_eq!(heap.peek_min(), Some((&10, &"a")));
/// assert_eq!(heap.pop_min(), Some((10, "a")));
/// assert_eq!(heap.pop_min(), Some((20, "b")));
/// assert_eq!(heap.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MinHeap<K, V> {
    entries: Vec<(K, V)>,
}

impl<K: Ord, V> MinHeap<K, V> {
    #[must_use]
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Создаёт пустую кучу, вмещающую `capacity` элементов без реаллокации.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: Vec::with_capacity(capacity) }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Вставляет элемент за `O(log n)`.
    pub fn push(&mut self, key: K, value: V) {
        self.entries.push((key, value));
        self.sift_up(self.entries.len() - 1);
    }

    /// Возвращает элемент с наименьшим ключом, не удаляя его.
    #[must_use]
    pub fn peek_min(&self) -> Option<(&K, &V)> {
        self.entries.first().map(|(k, v)| (k, v))
    }

    /// Удаляет и возвращает элемент с наименьшим ключом за `O(log n)`.
    pub fn pop_min(&mut self) -> Option<(K, V)> {
        if self.entries.is_empty() {
            return None;
        }
        let min = self.entries.swap_remove(0);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some(min)
    }

    /// Заменяет минимум новым элементом и возвращает старый минимум.
    ///
    /// То же, что `pop_min` и затем `push`, но с одним просеиванием.
    pub fn replace_min(&mut self, key: K, value: V) -> Option<(K, V)> {
        if self.entries.is_empty() {
            self.entries.push((key, value));
            return None;
        }
        let old = std::mem::replace(&mut self.entries[0], (key, value));
        self.sift_down(0);
        Some(old)
    }

    /// Опустошает кучу в порядке возрастания ключей.
    #[must_use]
    pub fn into_sorted_vec(mut self) -> Vec<(K, V)> {
        let mut sorted = Vec::with_capacity(self.entries.len());
        while let Some(entry) = self.pop_min() {
            sorted.push(entry);
        }
        sorted
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.entries[idx].0 >= self.entries[parent].0 {
                break;
            }
            self.entries.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut smallest = idx;

            if left < len && self.entries[left].0 < self.entries[smallest].0 {
                smallest = left;
            }
            if right < len && self.entries[right].0 < self.entries[smallest].0 {
                smallest = right;
            }
            if smallest == idx {
                break;
            }
            self.entries.swap(idx, smallest);
            idx = smallest;
        }
    }
}

impl<K: Ord, V> Default for MinHeap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
