// src/models.rs
use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;

/// Outcome of compiling and running a snippet on the backend.
///
/// A compile failure is reported here, not as a call error: `errors` carries
/// the compiler output and `events` is empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RunResult {
    /// Compiler or runtime error text; empty when the snippet ran cleanly.
    pub errors: String,
    /// Program output in chronological order. The backend sends `null` when
    /// a run produced no output, which decodes to an empty vec.
    #[serde(default, deserialize_with = "null_to_empty")]
    pub events: Vec<RunEvent>,
    pub is_test: bool,
    /// Process exit code.
    pub status: i32,
    pub test_failed: bool,
}

impl RunResult {
    /// Replays the captured output events in order, waiting out each event's
    /// delay before handing it to `emit`.
    pub async fn replay<F>(&self, mut emit: F)
    where
        F: FnMut(&RunEvent),
    {
        for event in &self.events {
            if !event.delay.is_zero() {
                tokio::time::sleep(event.delay).await;
            }
            emit(event);
        }
    }
}

/// One chunk of program output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RunEvent {
    pub message: String,
    /// Output stream the chunk belongs to, e.g. "stdout" or "stderr".
    pub kind: String,
    /// Pause before displaying this chunk, relative to the previous event.
    /// Carried on the wire as integer nanoseconds.
    #[serde(with = "duration_nanos")]
    pub delay: Duration,
}

/// Outcome of formatting a snippet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FormatResult {
    /// Reformatted source; not meaningful when `error` is non-empty.
    pub body: String,
    pub error: String,
}

/// Toolchain identification reported by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VersionResult {
    pub version: String,
    pub release: String,
    pub name: String,
}

fn null_to_empty<'de, D>(deserializer: D) -> Result<Vec<RunEvent>, D::Error>
where
    D: Deserializer<'de>,
{
    let events = Option::<Vec<RunEvent>>::deserialize(deserializer)?;
    Ok(events.unwrap_or_default())
}

/// The backend encodes event delays as integer nanoseconds.
mod duration_nanos {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(delay: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(delay.as_nanos() as u64)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let nanos = u64::deserialize(deserializer)?;
        Ok(Duration::from_nanos(nanos))
    }
}
