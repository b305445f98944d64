use serde::{Deserialize, Serialize};
use std::fs;

use shufl_core::{sequence, Shuffler};

use crate::combinatorics;
use crate::distribution::Distribution;
use crate::Result;

/// A permutation class and how many trials produced it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ClassCount {
    pub permutation: String,
    pub count: u64,
}

/// Outcome of a uniformity run.
///
/// Only observed classes are checked against the thresholds; classes that
/// never came up are counted in `unobserved_classes` instead.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UniformityReport {
    pub algorithm: String,
    pub input: String,
    pub sequence_length: usize,
    pub permutation_classes: u64,
    pub iterations: u64,
    pub expected_count: u64,
    pub low_threshold: f64,
    pub high_threshold: f64,
    pub observed_classes: usize,
    pub unobserved_classes: u64,
    pub largest_class: Option<ClassCount>,
    pub overrepresented: Vec<ClassCount>,
    pub underrepresented: Vec<ClassCount>,
}

impl UniformityReport {
    pub fn passed(&self) -> bool {
        self.overrepresented.is_empty() && self.underrepresented.is_empty()
    }

    pub fn as_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn as_json_file(&self, path: &str) -> Result<()> {
        let json_string = self.as_json_string()?;
        fs::write(path, json_string)?;
        Ok(())
    }
}

/// Drives repeated shuffles through one shuffler instance and checks every
/// observed permutation class against margin thresholds around the expected
/// count.
///
/// The trial budget is the multiple of `n!` nearest to `target_iterations`,
/// so the expected count per class is exact. A target far below `n!` rounds
/// down to zero trials and the run passes vacuously. Input tokens are
/// assumed distinct; duplicates merge permutation classes and skew the
/// per-class counts.
pub struct UniformityValidator {
    target_iterations: u32,
    low_error_margin: f64,
    high_error_margin: f64,
}

impl UniformityValidator {
    pub fn new(target_iterations: u32, low_error_margin: f64, high_error_margin: f64) -> Self {
        Self {
            target_iterations,
            low_error_margin,
            high_error_margin,
        }
    }

    pub fn run(&self, shuffler: &mut dyn Shuffler, input: &[String]) -> Result<UniformityReport> {
        let classes = combinatorics::permutation_count(input.len())?;
        let iterations =
            combinatorics::closest_divisible(self.target_iterations as i64, classes as i64) as u64;
        let expected = iterations / classes;
        let low_threshold = expected as f64 * (1.0 - self.low_error_margin);
        let high_threshold = expected as f64 * (1.0 + self.high_error_margin);

        log::debug!(
            "running {} {} trials over {} permutation classes",
            iterations,
            shuffler.name(),
            classes
        );

        let mut distribution = Distribution::new();
        for _ in 0..iterations {
            let mut items = input.to_vec();
            shuffler.shuffle(&mut items)?;
            distribution.record(&items);
        }

        let mut overrepresented: Vec<ClassCount> = Vec::new();
        let mut underrepresented: Vec<ClassCount> = Vec::new();
        for (permutation, &count) in distribution.counts() {
            if (count as f64) > high_threshold {
                overrepresented.push(ClassCount {
                    permutation: permutation.clone(),
                    count,
                });
            } else if (count as f64) < low_threshold {
                underrepresented.push(ClassCount {
                    permutation: permutation.clone(),
                    count,
                });
            }
        }
        overrepresented.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.permutation.cmp(&b.permutation))
        });
        underrepresented.sort_by(|a, b| {
            a.count
                .cmp(&b.count)
                .then_with(|| a.permutation.cmp(&b.permutation))
        });

        if !overrepresented.is_empty() || !underrepresented.is_empty() {
            log::warn!(
                "{} failed the uniformity check: {} classes out of bounds",
                shuffler.name(),
                overrepresented.len() + underrepresented.len()
            );
        }

        let largest_class = distribution
            .largest_class()
            .map(|(permutation, count)| ClassCount {
                permutation: permutation.to_string(),
                count,
            });

        Ok(UniformityReport {
            algorithm: shuffler.name().to_string(),
            input: sequence::to_dasherized(input),
            sequence_length: input.len(),
            permutation_classes: classes,
            iterations,
            expected_count: expected,
            low_threshold,
            high_threshold,
            observed_classes: distribution.distinct(),
            unobserved_classes: classes - distribution.distinct() as u64,
            largest_class,
            overrepresented,
            underrepresented,
        })
    }
}
