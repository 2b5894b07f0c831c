pub mod account_metric;
