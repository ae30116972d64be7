use std::fmt;
use std::time::Instant;

use tracing::{debug, info};

use crate::config::RunConfig;
use crate::error::Result;
use crate::format::General;
use crate::rng::XorShift32;
use crate::{buffon, circle, coprime};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Method {
    /// Points in a quarter circle
    Circle,
    /// Coprime integer pairs
    Coprime,
    /// Buffon's needle
    Buffon,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Circle, Method::Coprime, Method::Buffon];

    /// Runs this method's experiment, advancing `rng`.
    pub fn count(self, trials: u32, rng: &mut XorShift32) -> u64 {
        match self {
            Method::Circle => circle::estimate_circle(trials, rng),
            Method::Coprime => coprime::estimate_coprime(trials, rng),
            Method::Buffon => buffon::estimate_buffon(trials, rng),
        }
    }

    pub fn pi_from_ratio(self, p: f64) -> f64 {
        match self {
            Method::Circle => circle::pi_from_ratio(p),
            Method::Coprime => coprime::pi_from_ratio(p),
            Method::Buffon => buffon::pi_from_ratio(p),
        }
    }

    fn heading(self) -> &'static str {
        match self {
            Method::Circle => {
                "Method 1: Quarter-circle inside unit square (integer arithmetic, no floats)"
            }
            Method::Coprime => "Method 2: Probability that two integers are coprime (gcd==1)",
            Method::Buffon => "Method 3: Buffon's needle (l=1, t=1)",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Circle => "circle",
            Method::Coprime => "coprime",
            Method::Buffon => "buffon",
        })
    }
}

pub fn hit_ratio(count: u64, trials: u32) -> f64 {
    count as f64 / f64::from(trials)
}

/// Result of one method at one sample size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Estimate {
    pub method: Method,
    pub trials: u32,
    pub count: u64,
    pub probability: f64,
    pub pi: f64,
}

impl Estimate {
    pub fn new(method: Method, trials: u32, count: u64) -> Self {
        let probability = hit_ratio(count, trials);
        Self {
            method,
            trials,
            count,
            probability,
            pi: method.pi_from_ratio(probability),
        }
    }
}

/// Estimates grouped by method, in run order.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub seed: u32,
    pub sections: Vec<(Method, Vec<Estimate>)>,
}

impl Report {
    pub fn estimates(&self) -> impl Iterator<Item = &Estimate> {
        self.sections.iter().flat_map(|(_, rows)| rows.iter())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (method, rows) in &self.sections {
            writeln!(f, "{}", method.heading())?;
            for e in rows {
                match method {
                    Method::Circle => writeln!(
                        f,
                        "  N={:>6}  hits={:>8}  pi_est={}",
                        e.trials,
                        e.count,
                        General(e.pi)
                    )?,
                    Method::Coprime => writeln!(
                        f,
                        "  N={:>6}  coprime={:>6}  p={}  pi_est={}",
                        e.trials,
                        e.count,
                        General(e.probability),
                        General(e.pi)
                    )?,
                    Method::Buffon => writeln!(
                        f,
                        "  N={:>6}  crosses={:>6}  p={}  pi_est={}",
                        e.trials,
                        e.count,
                        General(e.probability),
                        General(e.pi)
                    )?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Runs every configured method over every trial count on a single engine.
///
/// The engine is never reseeded between calls: each method continues from
/// the state the previous one left behind.
pub fn run(config: &RunConfig) -> Result<Report> {
    config.validate()?;

    let mut rng = XorShift32::new(config.seed);
    info!(
        seed = config.seed,
        trials = ?config.trials,
        methods = ?config.methods,
        "Starting estimation run"
    );

    let mut sections = Vec::with_capacity(config.methods.len());
    for &method in &config.methods {
        let start = Instant::now();
        let mut rows = Vec::with_capacity(config.trials.len());
        for &trials in &config.trials {
            let estimate = Estimate::new(method, trials, method.count(trials, &mut rng));
            debug!(
                %method,
                trials,
                count = estimate.count,
                pi = estimate.pi,
                deviation = (std::f64::consts::PI - estimate.pi).abs(),
                "Estimate complete"
            );
            rows.push(estimate);
        }
        info!("{} finished in {}ms", method, start.elapsed().as_millis());
        sections.push((method, rows));
    }

    Ok(Report {
        seed: config.seed,
        sections,
    })
}
