mod common;
mod quick;
mod scoring;
