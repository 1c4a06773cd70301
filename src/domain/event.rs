use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Activity kinds the formatter knows about. Anything else is kept verbatim
/// in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Push,
    Watch,
    Fork,
    Create,
    Delete,
    PullRequest,
    Release,
    Issue,
    Other(String),
}

impl EventKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Push => "PushEvent",
            Self::Watch => "WatchEvent",
            Self::Fork => "ForkEvent",
            Self::Create => "CreateEvent",
            Self::Delete => "DeleteEvent",
            Self::PullRequest => "PullRequestEvent",
            Self::Release => "ReleaseEvent",
            Self::Issue => "IssueEvent",
            Self::Other(tag) => tag,
        }
    }

    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "PushEvent" => Self::Push,
            "WatchEvent" => Self::Watch,
            "ForkEvent" => Self::Fork,
            "CreateEvent" => Self::Create,
            "DeleteEvent" => Self::Delete,
            "PullRequestEvent" => Self::PullRequest,
            "ReleaseEvent" => Self::Release,
            "IssueEvent" => Self::Issue,
            other => Self::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for EventKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EventKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Repo {
    #[serde(default)]
    pub name: String,
}

/// One record from the public events feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: EventKind,
    #[serde(default, deserialize_with = "object_or_empty")]
    pub payload: Map<String, Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub repo: Repo,
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
impl Event {
    pub fn new(kind: EventKind, repo_name: &str) -> Self {
        Self {
            kind,
            payload: Map::new(),
            repo: Repo {
                name: repo_name.to_string(),
            },
            created_at: None,
        }
    }

    pub fn with_payload(mut self, payload: Value) -> Self {
        if let Value::Object(map) = payload {
            self.payload = map;
        }
        self
    }
}

// A non-object payload carries nothing the formatter can read.
fn object_or_empty<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}

// Only `--timestamps` reads this, so a bad value must not sink the feed.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let ts = match Value::deserialize(deserializer)? {
        Value::String(s) => DateTime::parse_from_rfc3339(&s)
            .ok()
            .map(|ts| ts.with_timezone(&Utc)),
        _ => None,
    };
    Ok(ts)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
