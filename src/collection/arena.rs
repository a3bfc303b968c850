//! 节点槽位池
//!
//! Bag 与 Queue 的单链表节点存放在一个 `Vec` 中，通过下标链接。
//! 被移除的槽位进入空闲链表，之后的插入优先复用。

use std::mem;

/// 槽位
#[derive(Debug, Clone)]
enum Slot<E> {
    /// 已占用：载荷与后继节点下标
    Occupied { item: E, next: Option<usize> },
    /// 空闲：下一个空闲槽位下标
    Free(Option<usize>),
}

/// 单链表节点池
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<E> {
    slots: Vec<Slot<E>>,
    free_head: Option<usize>,
    len: usize,
}

impl<E> NodeArena<E> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    /// 已占用槽位数
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// 槽位总数（含空闲）
    #[cfg(test)]
    pub(crate) fn capacity_used(&self) -> usize {
        self.slots.len()
    }

    /// 分配一个无后继的新节点，返回其下标
    pub(crate) fn alloc(&mut self, item: E) -> usize {
        self.len += 1;
        let node = Slot::Occupied { item, next: None };
        match self.free_head {
            Some(idx) => {
                let old = mem::replace(&mut self.slots[idx], node);
                self.free_head = match old {
                    Slot::Free(next_free) => next_free,
                    Slot::Occupied { .. } => unreachable!("空闲链表指向已占用槽位"),
                };
                idx
            }
            None => {
                self.slots.push(node);
                self.slots.len() - 1
            }
        }
    }

    /// 释放节点，返回其载荷与后继
    pub(crate) fn free(&mut self, idx: usize) -> Option<(E, Option<usize>)> {
        match self.slots.get(idx) {
            Some(Slot::Occupied { .. }) => {}
            _ => return None,
        }
        let old = mem::replace(&mut self.slots[idx], Slot::Free(self.free_head));
        self.free_head = Some(idx);
        self.len -= 1;
        match old {
            Slot::Occupied { item, next } => Some((item, next)),
            Slot::Free(_) => None,
        }
    }

    /// 设置节点后继
    pub(crate) fn link(&mut self, idx: usize, to: usize) {
        if let Some(Slot::Occupied { next, .. }) = self.slots.get_mut(idx) {
            *next = Some(to);
        }
    }

    /// 读取节点载荷与后继
    pub(crate) fn get(&self, idx: usize) -> Option<(&E, Option<usize>)> {
        match self.slots.get(idx)? {
            Slot::Occupied { item, next } => Some((item, *next)),
            Slot::Free(_) => None,
        }
    }

    /// 遍历从 `head` 开始的链
    pub(crate) fn chain(&self, head: Option<usize>) -> Chain<'_, E> {
        Chain {
            arena: self,
            current: head,
            remaining: self.len,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.len = 0;
    }
}

/// 沿链表下标前进的借用迭代器
#[derive(Debug)]
pub(crate) struct Chain<'a, E> {
    arena: &'a NodeArena<E>,
    current: Option<usize>,
    remaining: usize,
}

impl<'a, E> Clone for Chain<'a, E> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            current: self.current,
            remaining: self.remaining,
        }
    }
}

impl<'a, E> Iterator for Chain<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.current?;
        let (item, next) = self.arena.get(idx)?;
        self.current = next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.current.is_none() {
            (0, Some(0))
        } else {
            (1, Some(self.remaining))
        }
    }
}
