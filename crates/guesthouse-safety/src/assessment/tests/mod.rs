mod baseline;
mod common;
