#![allow(ambiguous_glob_reexports)]

pub mod claim_and_distribute;
pub mod create_splitter;
pub mod deposit_tokens;
pub mod update_splitter;
pub mod withdraw_share;

pub use claim_and_distribute::*;
pub use create_splitter::*;
pub use deposit_tokens::*;
pub use update_splitter::*;
pub use withdraw_share::*;
