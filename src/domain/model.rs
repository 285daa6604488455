use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// Remainder-zero test, so negative evens are even and `-3 % 2 == -1` is odd.
    pub fn of(value: i32) -> Self {
        if value % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

/// Even/odd counters. Only ever incremented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub even: usize,
    pub odd: usize,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, value: i32) -> Parity {
        let parity = Parity::of(value);
        match parity {
            Parity::Even => self.even += 1,
            Parity::Odd => self.odd += 1,
        }
        parity
    }

    pub fn from_values<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a i32>,
    {
        let mut tally = Self::new();
        for &value in values {
            tally.record(value);
        }
        tally
    }

    pub fn total(&self) -> usize {
        self.even + self.odd
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepAction {
    Emit,
    Skip,
    Break,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    pub cursor: u32,
    pub action: StepAction,
}

/// Every cursor value the loop visited, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoopTrace {
    pub steps: Vec<TraceStep>,
}

impl LoopTrace {
    pub fn digits(&self) -> String {
        self.steps
            .iter()
            .filter(|step| step.action == StepAction::Emit)
            .map(|step| step.cursor.to_string())
            .collect()
    }

    pub fn skipped(&self) -> Vec<u32> {
        self.steps
            .iter()
            .filter(|step| step.action == StepAction::Skip)
            .map(|step| step.cursor)
            .collect()
    }

    pub fn broke_early(&self) -> bool {
        self.steps
            .iter()
            .any(|step| step.action == StepAction::Break)
    }
}
