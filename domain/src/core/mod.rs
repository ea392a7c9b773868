//! Core domain primitives

pub mod city;

pub use city::CityName;
