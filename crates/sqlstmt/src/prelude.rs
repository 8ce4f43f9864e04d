//! Convenient imports for typical `sqlstmt` usage.
//!
//! ```
//! use sqlstmt::prelude::*;
//! ```

pub use crate::{
    BuilderConfig, RestatementPolicy, SqlBuilder, StatementKind, StmtError, StmtResult,
    delete_from, insert_into, select, select_distinct, update,
};
