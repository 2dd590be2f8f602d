//! Repository modules adding store operations to `BoardService`.

pub mod status;
