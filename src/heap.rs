use std::cmp::Reverse;
use std::mem;

/// A `(key, value)` entry stored in the heap. Ordered by `key` alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Node<K, V> {
    #[inline]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

#[derive(Clone, Default, Debug)]
pub struct MaxHeap<K: Ord, V> {
    nodes: Vec<Node<K, V>>,
}

pub type MinHeap<K, V> = MaxHeap<Reverse<K>, V>;

impl<K: Ord, V> MaxHeap<K, V> {
    /// O(1)
    #[inline]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// O(1)
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// O(1)
    #[inline]
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// O(1)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// O(1)
    #[inline]
    pub fn max(&self) -> Option<&Node<K, V>> {
        self.nodes.first()
    }

    /// O(1)
    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    /// O(log n)
    pub fn insert(&mut self, key: K, value: V) {
        self.nodes.push(Node::new(key, value));
        self.sift_up(self.size() - 1);
    }

    /// O(log n)
    pub fn extract_max(&mut self) -> Option<Node<K, V>> {
        let mut res = self.nodes.pop()?;
        if let Some(root) = self.nodes.first_mut() {
            res = mem::replace(root, res);
            self.sift_down(0);
        }

        Some(res)
    }

    /// O(n)
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// O(log n)
    fn sift_up(&mut self, mut node: usize) {
        while node != 0 {
            let parent = (node - 1) / 2;

            if self.nodes[parent].key < self.nodes[node].key {
                self.nodes.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
    }

    /// O(log n)
    fn sift_down(&mut self, mut node: usize) {
        loop {
            let left = 2 * node + 1;
            let right = left + 1;

            if right < self.size() {
                // equal keys select the right child
                let max = if self.nodes[right].key < self.nodes[left].key {
                    left
                } else {
                    right
                };

                if self.nodes[node].key < self.nodes[max].key {
                    self.nodes.swap(node, max);
                    node = max;
                } else {
                    break;
                }
            } else {
                if right == self.size() && self.nodes[node].key < self.nodes[left].key {
                    self.nodes.swap(node, left);
                }
                break;
            }
        }
    }
}
