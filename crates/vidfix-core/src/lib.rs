pub mod canonical;
pub mod logging;
pub mod rewrite;
pub mod sync;
