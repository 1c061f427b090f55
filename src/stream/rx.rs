pub mod combine_latest;
