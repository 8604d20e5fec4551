mod aggregation;
mod common;
mod explanation;
