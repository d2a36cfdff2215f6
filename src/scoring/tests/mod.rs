mod common;

mod aggregate;
mod recommend;
mod vector;
