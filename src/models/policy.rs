//! Scheduling policy selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SimError;

/// Non-preemptive CPU scheduling discipline. Selected once per run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchedulingPolicy {
    /// First-Come-First-Served: arrival order, single pass, no retries.
    #[default]
    Fcfs,
    /// Shortest-Job-First: shortest burst among arrived processes,
    /// gated on memory availability.
    Sjf,
}

impl SchedulingPolicy {
    /// Both policies, in menu order.
    pub const ALL: [Self; 2] = [Self::Fcfs, Self::Sjf];

    /// Canonical name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
        }
    }
}

impl fmt::Display for SchedulingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchedulingPolicy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fcfs" | "fifo" | "first-come-first-served" | "1" => Ok(Self::Fcfs),
            "sjf" | "spt" | "shortest-job-first" | "2" => Ok(Self::Sjf),
            _ => Err(SimError::UnknownPolicy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parse_aliases() {
        assert_eq!("FCFS".parse::<SchedulingPolicy>().unwrap(), SchedulingPolicy::Fcfs);
        assert_eq!("fifo".parse::<SchedulingPolicy>().unwrap(), SchedulingPolicy::Fcfs);
        assert_eq!(" sjf ".parse::<SchedulingPolicy>().unwrap(), SchedulingPolicy::Sjf);
        assert!(matches!(
            "rr".parse::<SchedulingPolicy>(),
            Err(SimError::UnknownPolicy(_))
        ));
    }

    #[test]
    fn test_policy_roundtrip_name() {
        for policy in SchedulingPolicy::ALL {
            assert_eq!(policy.as_str().parse::<SchedulingPolicy>().unwrap(), policy);
        }
    }
}
