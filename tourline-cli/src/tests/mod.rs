//! Unit tests for the tourline CLI.

use super::*;

mod helpers;
mod plan_unit;
