mod config;
mod rate_limit;
