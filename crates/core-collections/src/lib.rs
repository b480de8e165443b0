//! Ordered containers underpinning diagnostic retention and tokenization.
//!
//! Three pieces, leaf-first:
//! * [`GrowArray`]: index-addressable sequence with orthogonal
//!   force/no-force write and grow/no-grow capacity controls. The same
//!   structure serves as a fixed-layout record (fields addressed by known
//!   index, overwrite-protected) and as an append-only token list.
//! * [`tokens`]: delimiter-set split of a string into a `GrowArray<String>`
//!   and inclusive-range join back into a delimited string.
//! * [`BoundedQueue`]: capacity-limited FIFO. Overflow is rejected, never
//!   evicted; the rejected element is handed back to the caller.

pub mod grow_array;
pub mod queue;
pub mod tokens;

pub use grow_array::{ArrayError, GrowArray};
pub use queue::{BoundedQueue, DEFAULT_MAX_NODES, QueueFull};
pub use tokens::TokenError;
