use crate::core::evaluator::Evaluator;
use crate::domain::model::{Evaluation, OutputFormat};
use crate::domain::ports::{ConfigProvider, Console};
use crate::utils::error::{CalcError, Result};

#[derive(Debug)]
pub enum Outcome {
    Success(Evaluation),
    Failure(CalcError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

/// One prompt, one line of input, one line of output.
pub struct CalcSession<C: Console, P: ConfigProvider> {
    console: C,
    config: P,
    evaluator: Evaluator,
}

impl<C: Console, P: ConfigProvider> CalcSession<C, P> {
    pub fn new(console: C, config: P) -> Self {
        Self {
            console,
            config,
            evaluator: Evaluator::new(),
        }
    }

    /// Prompts and reads the expression from the console. End of input is
    /// treated as an empty expression.
    pub fn run(&mut self) -> Result<Outcome> {
        self.console.write_line(self.config.prompt())?;

        let line = self.console.read_line()?.unwrap_or_default();
        tracing::debug!("Read input line: {:?}", line);

        self.run_expression(&line)
    }

    /// Evaluates an expression supplied up front, without prompting.
    pub fn run_expression(&mut self, expression: &str) -> Result<Outcome> {
        let outcome = match self.evaluator.evaluate_detailed(expression) {
            Ok(evaluation) => {
                tracing::info!("Evaluated {:?} -> {}", evaluation.expression, evaluation.result);
                Outcome::Success(evaluation)
            }
            Err(e) if e.is_evaluation_error() => {
                tracing::info!("Evaluation failed: {} (Category: {:?})", e, e.category());
                tracing::debug!("Suggestion: {}", e.recovery_suggestion());
                Outcome::Failure(e)
            }
            Err(e) => return Err(e),
        };

        let line = self.render(expression, &outcome)?;
        self.console.write_line(&line)?;
        Ok(outcome)
    }

    fn render(&self, expression: &str, outcome: &Outcome) -> Result<String> {
        let line = match (self.config.output_format(), outcome) {
            (OutputFormat::Text, Outcome::Success(evaluation)) => {
                format!("{} {}", self.config.result_label(), evaluation.result)
            }
            (OutputFormat::Text, Outcome::Failure(e)) => {
                format!("{} {}", self.config.error_label(), e)
            }
            (OutputFormat::Json, Outcome::Success(evaluation)) => serde_json::to_string(evaluation)?,
            (OutputFormat::Json, Outcome::Failure(e)) => serde_json::to_string(&serde_json::json!({
                "expression": expression.trim(),
                "error": e.to_string(),
                "kind": e.kind(),
            }))?,
        };
        Ok(line)
    }

    pub fn into_console(self) -> C {
        self.console
    }
}
