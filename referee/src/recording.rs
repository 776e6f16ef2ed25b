use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use serde::Serialize;
use serde_json::value::RawValue;

/// Collects the request/response exchanges of one match and writes them
/// out as a JSON transcript, one file per match.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
    exchanges: Vec<Exchange>,
}

#[derive(Serialize)]
struct Exchange {
    seat: String,
    request: Box<RawValue>,
    response: Box<RawValue>,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            num: 1,
            directory,
            exchanges: Vec::new(),
        })
    }

    /// Stores one exchange. Both strings must hold a single JSON value,
    /// which they do because they come straight off the wire; `RawValue`
    /// embeds them in the transcript without re-escaping.
    pub fn store_exchange(
        &mut self,
        seat: &str,
        request: &str,
        response: &str,
    ) -> anyhow::Result<()> {
        self.exchanges.push(Exchange {
            seat: String::from(seat),
            request: RawValue::from_string(String::from(request))?,
            response: RawValue::from_string(String::from(response))?,
        });
        Ok(())
    }

    pub fn write_match_recording(&mut self) -> anyhow::Result<()> {
        let filepath = self.directory.join(format!("match_{:0>6}.json", self.num));
        let writer = BufWriter::new(File::create(filepath)?);
        serde_json::to_writer_pretty(writer, &std::mem::take(&mut self.exchanges))?;
        self.num += 1;
        Ok(())
    }
}
