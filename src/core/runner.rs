use crate::app::Demo;
use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub const BANNER: &str = "***** Issues with Non-Generic Collections *****";

/// Which demos run, in which order, and whether the program pauses at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    pub demos: Vec<Demo>,
    pub wait_for_input: bool,
}

impl Default for RunPlan {
    fn default() -> Self {
        Self {
            demos: Demo::DEFAULT.to_vec(),
            wait_for_input: true,
        }
    }
}

impl RunPlan {
    /// Precedence for the demo list: `all`, then explicit demos, then the
    /// file, then the default set. `no_wait` always wins over the file.
    pub fn resolve(all: bool, demos: &[Demo], file: Option<&TomlConfig>, no_wait: bool) -> Self {
        let mut plan = Self::default();

        if all {
            plan.demos = Demo::ALL.to_vec();
        } else if !demos.is_empty() {
            plan.demos = demos.to_vec();
        } else if let Some(file_demos) = file.and_then(|f| f.run.demos.as_ref()) {
            plan.demos = file_demos.clone();
        }

        if let Some(wait) = file.and_then(|f| f.run.wait_for_input) {
            plan.wait_for_input = wait;
        }
        if no_wait {
            plan.wait_for_input = false;
        }

        plan
    }
}

pub struct DemoRunner {
    plan: RunPlan,
}

impl DemoRunner {
    pub fn new(plan: RunPlan) -> Self {
        Self { plan }
    }

    pub fn plan(&self) -> &RunPlan {
        &self.plan
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        tracing::info!("Running {} demo(s)", self.plan.demos.len());

        writeln!(out, "{}", BANNER)?;
        writeln!(out)?;

        for (index, demo) in self.plan.demos.iter().enumerate() {
            if index > 0 {
                writeln!(out)?;
            }
            demo.run(out)?;
        }

        out.flush()?;
        Ok(())
    }

    /// Blocks until one line (or end of input) arrives.
    pub fn wait_for_input<R: BufRead>(&self, mut input: R) -> Result<()> {
        if !self.plan.wait_for_input {
            return Ok(());
        }
        tracing::debug!("Waiting for a line on standard input");
        let mut line = String::new();
        input.read_line(&mut line)?;
        Ok(())
    }
}
