pub mod add;
pub mod ask;
pub mod autocomplete;
pub mod delete;
pub mod dispatch;
pub mod history;
pub mod list;
pub mod logs;
pub mod order;
pub mod search;
pub mod shared;
pub mod suggest;
pub mod update;
pub mod upsert;
