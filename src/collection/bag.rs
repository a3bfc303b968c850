//! 背包（无序多重集合）
//!
//! 只支持插入与遍历。遍历顺序与插入顺序一致。

use super::arena::{Chain, NodeArena};
use std::fmt;

/// 基于单链表的多重集合
#[derive(Clone)]
pub struct Bag<E> {
    nodes: NodeArena<E>,
    /// 链表头
    first: Option<usize>,
    /// 链表尾
    last: Option<usize>,
}

impl<E> Bag<E> {
    /// 创建空背包
    pub fn new() -> Self {
        Self {
            nodes: NodeArena::new(),
            first: None,
            last: None,
        }
    }

    /// 添加元素，O(1)
    pub fn add(&mut self, item: E) {
        let idx = self.nodes.alloc(item);
        match self.last {
            Some(last) => self.nodes.link(last, idx),
            None => self.first = Some(idx),
        }
        self.last = Some(idx);
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// 元素个数
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// 按插入顺序遍历
    pub fn iter(&self) -> Iter<'_, E> {
        Iter {
            inner: self.nodes.chain(self.first),
        }
    }
}

impl<E> Default for Bag<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Bag 的借用迭代器
#[derive(Clone)]
pub struct Iter<'a, E> {
    inner: Chain<'a, E>,
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, E> IntoIterator for &'a Bag<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E> FromIterator<E> for Bag<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut bag = Bag::new();
        bag.extend(iter);
        bag
    }
}

impl<E> Extend<E> for Bag<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for Bag<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<E: fmt::Display> fmt::Display for Bag<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::write_spaced(f, self.iter())
    }
}
