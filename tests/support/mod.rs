#![allow(dead_code)]

pub mod rectime_env;
