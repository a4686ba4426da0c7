pub mod addressable_heap;
pub mod block_list;

pub use addressable_heap::AddressableHeap;
pub use block_list::BlockList;
