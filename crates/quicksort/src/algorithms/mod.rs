pub mod common;
pub mod quick_sort_par;
pub mod quick_sort_seq;
