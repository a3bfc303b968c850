//! 链式容器模块
//!
//! 图的邻接表、BFS 前沿与路径回溯所用的三种单链表容器

mod arena;
mod bag;
mod queue;
mod stack;

pub use bag::Bag;
pub use queue::Queue;
pub use stack::Stack;

pub mod iter {
    //! 各容器的迭代器类型
    pub use super::bag::Iter as BagIter;
    pub use super::queue::{IntoIter as QueueIntoIter, Iter as QueueIter};
    pub use super::stack::{IntoIter as StackIntoIter, Iter as StackIter};
}

use std::fmt;

/// 以空格分隔输出元素
fn write_spaced<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = T>,
) -> fmt::Result {
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}
