//! Colony Mind - decision core for an autonomous mining colony

pub mod actions;
pub mod agent;
pub mod behavior;
pub mod core;
pub mod production;
pub mod roles;
pub mod world;
