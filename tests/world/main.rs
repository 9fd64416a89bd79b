//! Integration tests for Layer 2: World
//!
//! Tests for items, bags, directions, and rooms linked by exits.

mod bags;
mod rooms;
