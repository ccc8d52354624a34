mod arena;
mod handle;
mod iter;
mod node;
mod order_statistic;
mod raw_wbtree;
mod rebuild;
mod shape;
mod size;

pub(crate) use iter::RawIter;
pub(crate) use raw_wbtree::RawWBTree;
