//! Tests for the parser module

use super::*;
use crate::tests::init_test_logger;
