//! Statement model module

mod create_table;

pub use create_table::{
    CreateTableStatement, ForeignKeyConstraint, PrimaryKeyConstraint, UniqueConstraint,
};
