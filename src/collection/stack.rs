//! 后进先出栈
//!
//! 节点以 `Box` 单向链接，每个节点只由其前驱拥有。

use std::fmt;

struct Node<E> {
    item: E,
    next: Option<Box<Node<E>>>,
}

/// 基于单链表的 LIFO 栈
pub struct Stack<E> {
    /// 栈顶
    first: Option<Box<Node<E>>>,
    len: usize,
}

impl<E> Stack<E> {
    /// 创建空栈
    pub fn new() -> Self {
        Self {
            first: None,
            len: 0,
        }
    }

    /// 压栈，O(1)
    pub fn push(&mut self, item: E) {
        let next = self.first.take();
        self.first = Some(Box::new(Node { item, next }));
        self.len += 1;
    }

    /// 弹出最近压入的元素
    pub fn pop(&mut self) -> Option<E> {
        let node = self.first.take()?;
        let Node { item, next } = *node;
        self.first = next;
        self.len -= 1;
        Some(item)
    }

    /// 栈顶元素（不移除）
    pub fn peek(&self) -> Option<&E> {
        self.first.as_deref().map(|node| &node.item)
    }

    pub fn peek_mut(&mut self) -> Option<&mut E> {
        self.first.as_deref_mut().map(|node| &mut node.item)
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// 元素个数
    pub fn len(&self) -> usize {
        self.len
    }

    /// 按 LIFO 顺序遍历
    pub fn iter(&self) -> Iter<'_, E> {
        Iter {
            current: self.first.as_deref(),
            remaining: self.len,
        }
    }
}

impl<E> Drop for Stack<E> {
    fn drop(&mut self) {
        // 逐个拆链，避免长链递归析构
        let mut current = self.first.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

impl<E> Default for Stack<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone> Clone for Stack<E> {
    fn clone(&self) -> Self {
        let mut items: Vec<&E> = self.iter().collect();
        let mut stack = Stack::new();
        while let Some(item) = items.pop() {
            stack.push(item.clone());
        }
        stack
    }
}

/// Stack 的借用迭代器
pub struct Iter<'a, E> {
    current: Option<&'a Node<E>>,
    remaining: usize,
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<E> ExactSizeIterator for Iter<'_, E> {}

impl<'a, E> IntoIterator for &'a Stack<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// 按 LIFO 顺序消耗栈
pub struct IntoIter<E>(Stack<E>);

impl<E> Iterator for IntoIter<E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        self.0.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<E> ExactSizeIterator for IntoIter<E> {}

impl<E> IntoIterator for Stack<E> {
    type Item = E;
    type IntoIter = IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<E> FromIterator<E> for Stack<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

impl<E> Extend<E> for Stack<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for Stack<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<E: fmt::Display> fmt::Display for Stack<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::write_spaced(f, self.iter())
    }
}
