//! Transit network router.
//!
//! Models a transit network as a multigraph of stations joined by line
//! edges, and answers "how do I get from A to B": the shortest path edge by
//! edge, and the same route with each uninterrupted ride on a line merged
//! into one leg.

pub mod dataset;
pub mod domain;
pub mod network;
pub mod web;
