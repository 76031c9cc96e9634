//! Optional industry-analysis prose from an external text generator.
//!
//! The generator only ever sees a prompt and only ever returns prose; the
//! numbers and the decision are produced elsewhere and are never rewritten.

use crate::types::input::ProjectInput;
use std::io::{ErrorKind, Read, Write};
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, warn};

pub const UNAVAILABLE: &str = "（行业分析暂不可用）";

#[derive(Error, Debug)]
pub enum PolishError {
    #[error("no text generator configured")]
    NotConfigured,

    #[error("text generator failed: {0}")]
    Failed(String),

    #[error("text generator returned empty output")]
    Empty,
}

pub trait NarrativePolisher {
    fn polish(&self, prompt: &str) -> Result<String, PolishError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailablePolisher;

impl NarrativePolisher for UnavailablePolisher {
    fn polish(&self, _prompt: &str) -> Result<String, PolishError> {
        Err(PolishError::NotConfigured)
    }
}

/// Runs a local program with the prompt on stdin and takes its stdout as
/// the prose. The program is killed once `timeout` elapses.
#[derive(Debug, Clone)]
pub struct CommandPolisher {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandPolisher {
    pub fn new(command_line: &str, timeout: Duration) -> Option<Self> {
        let mut words = command_line.split_whitespace().map(str::to_string);
        let program = words.next()?;
        Some(Self {
            program,
            args: words.collect(),
            timeout,
        })
    }
}

impl NarrativePolisher for CommandPolisher {
    fn polish(&self, prompt: &str) -> Result<String, PolishError> {
        debug!(program = %self.program, "requesting industry analysis");
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| PolishError::Failed(format!("{}: {e}", self.program)))?;

        // stdout is drained while the child runs; a full pipe would stall it.
        let reader = child.stdout.take().map(|mut stdout| {
            thread::spawn(move || {
                let mut output = String::new();
                stdout.read_to_string(&mut output).map(|_| output)
            })
        });

        if let Some(mut stdin) = child.stdin.take() {
            // A generator that exits without reading its prompt closes the pipe early.
            let written = stdin
                .write_all(prompt.as_bytes())
                .or_else(|e| match e.kind() {
                    ErrorKind::BrokenPipe => Ok(()),
                    _ => Err(e),
                });
            if let Err(e) = written {
                reap(&mut child);
                return Err(PolishError::Failed(e.to_string()));
            }
        }

        let deadline = Instant::now() + self.timeout;
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) if Instant::now() >= deadline => {
                    reap(&mut child);
                    return Err(PolishError::Failed(format!(
                        "timed out after {}s",
                        self.timeout.as_secs()
                    )));
                }
                Ok(None) => thread::sleep(Duration::from_millis(50)),
                Err(e) => {
                    reap(&mut child);
                    return Err(PolishError::Failed(e.to_string()));
                }
            }
        };

        let output = match reader.map(|handle| handle.join()) {
            Some(Ok(Ok(output))) => output,
            Some(Ok(Err(e))) => return Err(PolishError::Failed(e.to_string())),
            Some(Err(_)) => {
                return Err(PolishError::Failed("stdout reader panicked".to_string()))
            }
            None => String::new(),
        };
        if !status.success() {
            return Err(PolishError::Failed(format!("exited with {status}")));
        }
        if output.trim().is_empty() {
            return Err(PolishError::Empty);
        }
        Ok(output)
    }
}

fn reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

pub fn industry_prompt(input: &ProjectInput) -> String {
    let mut prompt = format!(
        "请用两到三句话分析“{}”行业当前发展态势（行业趋势：{}），并说明“{}”项目落地园区的产业意义。",
        input.industry.label(),
        input.industry_trend.label(),
        input.project_name
    );
    if !input.chain_segment_fill.trim().is_empty() {
        prompt.push_str(&format!(
            "重点关注其对园区产业链“{}”环节的补链作用。",
            input.chain_segment_fill
        ));
    }
    prompt.push_str("不要给出任何数字或审批结论。");
    prompt
}

pub fn industry_analysis(input: &ProjectInput, polisher: &dyn NarrativePolisher) -> String {
    let prompt = industry_prompt(input);
    match polisher.polish(&prompt) {
        Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
        Ok(_) => {
            warn!(error = %PolishError::Empty, "industry analysis unavailable");
            UNAVAILABLE.to_string()
        }
        Err(PolishError::NotConfigured) => {
            debug!("no text generator configured; using placeholder");
            UNAVAILABLE.to_string()
        }
        Err(error) => {
            warn!(%error, "industry analysis unavailable");
            UNAVAILABLE.to_string()
        }
    }
}
