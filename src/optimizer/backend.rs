use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use good_lp::{
    constraint, default_solver, variable, Expression, ProblemVariables, ResolutionError, Solution,
    SolverModel, Variable,
};
use thiserror::Error;
use tracing::debug;

use crate::optimizer::goal::Sense;

/// One decision variable of a model.
#[derive(Debug, Clone)]
pub struct VariableSpec {
    pub lower: f64,
    pub upper: f64,
    pub binary: bool,
    /// Coefficient of this variable in the objective.
    pub objective_weight: f64,
}

/// A linear expression bounded on either or both sides.
///
/// `terms` holds `(variable index, coefficient)` pairs.
#[derive(Debug, Clone)]
pub struct RangeConstraint {
    pub terms: Vec<(usize, f64)>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// A complete model, built fresh per optimization call.
#[derive(Debug, Clone)]
pub struct ModelSpec {
    pub sense: Sense,
    pub variables: Vec<VariableSpec>,
    pub constraints: Vec<RangeConstraint>,
}

/// Outcome of a solve: either an optimal assignment or proven infeasibility.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveOutcome {
    Optimal(Vec<f64>),
    Infeasible,
}

/// Infrastructure failure, distinct from infeasibility.
#[derive(Debug, Error)]
pub enum SolverFailure {
    #[error("solver did not finish within {0:?}")]
    Timeout(Duration),

    #[error("solver error: {0}")]
    Backend(String),
}

/// A linear/integer programming backend.
///
/// Any backend can be substituted without touching the model formulations.
pub trait LpBackend {
    fn solve(&self, model: &ModelSpec) -> Result<SolveOutcome, SolverFailure>;
}

/// Backend over the bundled pure-Rust `microlp` solver, via `good_lp`.
///
/// Reentrant, so concurrent calls need no serialization.
#[derive(Debug, Clone, Copy, Default)]
pub struct MicroLpBackend;

impl LpBackend for MicroLpBackend {
    fn solve(&self, model: &ModelSpec) -> Result<SolveOutcome, SolverFailure> {
        let mut problem = ProblemVariables::new();
        let vars: Vec<Variable> = model
            .variables
            .iter()
            .map(|spec| {
                let definition = if spec.binary {
                    variable().binary()
                } else {
                    variable().min(spec.lower).max(spec.upper)
                };
                problem.add(definition)
            })
            .collect();

        let objective: Expression = model
            .variables
            .iter()
            .zip(&vars)
            .map(|(spec, var)| spec.objective_weight * *var)
            .sum();

        let mut solver = match model.sense {
            Sense::Maximize => problem.maximise(objective).using(default_solver),
            Sense::Minimize => problem.minimise(objective).using(default_solver),
        };

        for range in &model.constraints {
            let expr: Expression = range
                .terms
                .iter()
                .map(|(index, coeff)| *coeff * vars[*index])
                .sum();

            match (range.min, range.max) {
                (Some(min), Some(max)) if min == max => {
                    solver = solver.with(constraint::eq(expr, min));
                }
                (min, max) => {
                    if let Some(min) = min {
                        solver = solver.with(constraint::geq(expr.clone(), min));
                    }
                    if let Some(max) = max {
                        solver = solver.with(constraint::leq(expr, max));
                    }
                }
            }
        }

        match solver.solve() {
            Ok(solution) => {
                let values = vars.iter().map(|var| solution.value(*var)).collect();
                Ok(SolveOutcome::Optimal(values))
            }
            Err(ResolutionError::Infeasible) => Ok(SolveOutcome::Infeasible),
            Err(other) => Err(SolverFailure::Backend(other.to_string())),
        }
    }
}

/// Run a backend on a worker thread and bound the wait.
///
/// A timeout is an infrastructure failure, not infeasibility; the worker is
/// abandoned and its late result discarded.
pub fn solve_with_timeout<B>(
    backend: B,
    model: ModelSpec,
    timeout: Duration,
) -> Result<SolveOutcome, SolverFailure>
where
    B: LpBackend + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(backend.solve(&model));
    });

    match rx.recv_timeout(timeout) {
        Ok(outcome) => outcome,
        Err(mpsc::RecvTimeoutError::Timeout) => {
            debug!(?timeout, "solver timed out");
            Err(SolverFailure::Timeout(timeout))
        }
        Err(mpsc::RecvTimeoutError::Disconnected) => Err(SolverFailure::Backend(
            "solver thread exited without a result".to_string(),
        )),
    }
}
