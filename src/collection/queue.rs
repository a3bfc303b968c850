//! 先进先出队列

use super::arena::{Chain, NodeArena};
use std::fmt;

/// 基于单链表的 FIFO 队列
#[derive(Clone)]
pub struct Queue<E> {
    nodes: NodeArena<E>,
    /// 队首
    first: Option<usize>,
    /// 队尾
    last: Option<usize>,
}

impl<E> Queue<E> {
    /// 创建空队列
    pub fn new() -> Self {
        Self {
            nodes: NodeArena::new(),
            first: None,
            last: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// 元素个数
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// 队首元素（不移除）
    pub fn peek(&self) -> Option<&E> {
        let (item, _) = self.nodes.get(self.first?)?;
        Some(item)
    }

    /// 入队，O(1)
    pub fn enqueue(&mut self, item: E) {
        let idx = self.nodes.alloc(item);
        match self.last {
            Some(last) => self.nodes.link(last, idx),
            None => self.first = Some(idx),
        }
        self.last = Some(idx);
    }

    /// 出队：移除并返回最早入队的元素
    pub fn dequeue(&mut self) -> Option<E> {
        let (item, next) = self.nodes.free(self.first?)?;
        self.first = next;
        if self.first.is_none() {
            self.last = None;
            // 队列清空后归还全部槽位
            self.nodes.clear();
        }
        Some(item)
    }

    /// 按 FIFO 顺序遍历，不修改队列
    pub fn iter(&self) -> Iter<'_, E> {
        Iter {
            inner: self.nodes.chain(self.first),
        }
    }
}

impl<E> Default for Queue<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Queue 的借用迭代器
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

impl<'a, E> IntoIterator for &'a Queue<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// 按 FIFO 顺序消耗队列
pub struct IntoIter<E>(Queue<E>);

impl<E> Iterator for IntoIter<E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        self.0.dequeue()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<E> ExactSizeIterator for IntoIter<E> {}

impl<E> IntoIterator for Queue<E> {
    type Item = E;
    type IntoIter = IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<E> FromIterator<E> for Queue<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

impl<E> Extend<E> for Queue<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for Queue<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<E: fmt::Display> fmt::Display for Queue<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::write_spaced(f, self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_fifo() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek(), Some(&1));
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        // 遍历不改变队列
        assert_eq!(queue.len(), 3);

        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.dequeue(), Some(2));
        queue.enqueue(4);
        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.dequeue(), Some(4));
        assert_eq!(queue.dequeue(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_queue_empty() {
        let mut queue: Queue<String> = Queue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.peek(), None);
        assert_eq!(queue.dequeue(), None);
        assert_eq!(queue.iter().count(), 0);
    }

    #[test]
    fn test_queue_interleaved() {
        let mut queue = Queue::new();
        let mut expected = std::collections::VecDeque::new();
        for i in 0..100 {
            queue.enqueue(i);
            expected.push_back(i);
            if i % 3 == 0 {
                assert_eq!(queue.dequeue(), expected.pop_front());
            }
            assert_eq!(queue.len(), expected.len());
            assert_eq!(queue.peek(), expected.front());
        }
        let drained: Vec<_> = queue.into_iter().collect();
        assert_eq!(drained, expected.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_queue_clones_are_independent() {
        let mut a: Queue<i32> = (0..3).collect();
        let b = a.clone();
        assert_eq!(a.dequeue(), Some(0));
        assert_eq!(b.len(), 3);
        assert_eq!(b.peek(), Some(&0));
        assert_eq!(a.to_string(), "1 2");
        assert_eq!(b.to_string(), "0 1 2");
    }
}
