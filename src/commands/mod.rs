pub type CmdResult<T> = headerfix::Result<(T, i32)>;

pub mod rewrite;
