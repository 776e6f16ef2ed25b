use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::process::{ChildStdin, ChildStdout, Command, Stdio};

use quoridor::Request;
use serde::Deserialize;
use tracing::trace;

use crate::recording::Recorder;

/// Launch configuration for one seat client, loaded from a JSON file.
#[derive(Clone, Debug, Deserialize)]
pub struct ClientConfig {
    /// Display name used in logs and the series summary.
    pub nick: String,
    /// The client executable followed by its arguments.
    pub command: Vec<String>,
}

impl ClientConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// A running seat-client subprocess. Requests go to its stdin, one JSON
/// value per line; responses come back on its stdout the same way.
pub struct SeatClient {
    pub nick: String,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
    // A re-usable buffer for IO.
    // Should always be empty before and after perform_request().
    buf: String,
}

impl SeatClient {
    pub fn from_config(config: &ClientConfig) -> anyhow::Result<Self> {
        let (executable, args) = config
            .command
            .split_first()
            .ok_or_else(|| anyhow::anyhow!("Seat '{}' has an empty command", config.nick))?;
        let child_proc = Command::new(executable)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()?;

        Ok(Self {
            nick: config.nick.clone(),
            stdin: child_proc.stdin.expect("Could not access stdin"),
            stdout: BufReader::new(child_proc.stdout.expect("Could not access stdout")),
            buf: String::new(),
        })
    }

    pub fn perform_request<T: serde::de::DeserializeOwned + std::fmt::Debug>(
        &mut self,
        recorder: &mut Option<Recorder>,
        req: &Request,
    ) -> anyhow::Result<T> {
        let mut req_json = serde_json::to_string(req)?;
        trace!(name: "Sending request", seat = &self.nick, request = %req_json);
        req_json.push('\n');
        self.stdin.write_all(req_json.as_bytes())?;
        self.stdin.flush()?;
        self.buf.clear();
        let _ = self.stdout.read_line(&mut self.buf)?;
        let serialized_response = self.buf.trim_end();
        let response = serde_json::from_str::<T>(serialized_response)?;
        trace!(name: "Received response", seat = &self.nick, response = %serialized_response);

        if let Some(recorder) = recorder {
            recorder.store_exchange(&self.nick, req_json.trim_end(), serialized_response)?;
        }
        Ok(response)
    }
}
