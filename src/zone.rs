// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module defines the `ZoneType` enum, which names the physical
//! quantity a zone groups connections by.

use std::fmt::Display;

/// The kind of zone a connection can belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoneType {
    FlowRate,
    Pressure,
    Temperature,
}

impl Display for ZoneType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZoneType::FlowRate => write!(f, "FlowRate"),
            ZoneType::Pressure => write!(f, "Pressure"),
            ZoneType::Temperature => write!(f, "Temperature"),
        }
    }
}
