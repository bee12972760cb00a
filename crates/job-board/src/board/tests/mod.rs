mod common;

mod query;
