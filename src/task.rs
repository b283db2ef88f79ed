use crate::errors::{ReconError, Result};
use crate::interpolate::reconstruct_secret;
use crate::radix::{check_base, decode, encode, parse_base};
use rug::Integer;
use serde::{Serialize, Deserialize};
use std::{collections::{BTreeMap, BTreeSet},
          convert::TryFrom,
          fs::File,
          io::Read,
          path::Path,
};
use tracing::{debug, error};

/// Task descriptor as it appears on disk: a `keys` record next to one record
/// per point, keyed by the decimal x-coordinate.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawTask {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keys: Option<Keys>,
    #[serde(flatten)]
    pub points: BTreeMap<String, RawPoint>,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct Keys {
    pub n: usize,
    pub k: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawPoint {
    pub base: RawBase,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawBase {
    Number(i64),
    Text(String),
}

impl RawBase {
    pub fn parse(&self) -> Result<u32> {
        match self {
            RawBase::Number(b) => match u32::try_from(*b) {
                Ok(b) => check_base(b),
                Err(_) => Err(ReconError::InvalidBase(b.to_string())),
            },
            RawBase::Text(s) => parse_base(s),
        }
    }
}

/// A decoded point, keeping the encoding it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub x: Integer,
    pub y: Integer,
    pub base: u32,
    pub raw: String,
}

impl Point {
    pub fn decode(x: Integer, base: u32, raw: &str) -> Result<Point> {
        let y = decode(raw, base)?;
        Ok(Point { x, y, base, raw: raw.to_string() })
    }

    pub fn encode(x: Integer, y: Integer, base: u32) -> Result<Point> {
        let raw = encode(&y, base)?;
        Ok(Point { x, y, base, raw })
    }

    /// Point with a plain decimal encoding; `y` may be negative.
    pub fn from_xy(x: i64, y: i64) -> Point {
        Point { x: Integer::from(x), y: Integer::from(y), base: 10, raw: y.to_string() }
    }
}

/// A validated point set: `1 <= k <= n`, at least `k` points, pairwise
/// distinct x-coordinates. `n` is informational and not compared with the
/// number of points.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub n: usize,
    pub k: usize,
    pub points: Vec<Point>,
}

impl Task {
    pub fn new(n: usize, k: usize, points: Vec<Point>) -> Result<Task> {
        if k == 0 || k > n {
            error!("task rejected, k = {} is outside 1..={}", k, n);
            return Err(ReconError::InvalidThreshold { k, n });
        }
        if points.len() < k {
            error!("task rejected, {} points for k = {}", points.len(), k);
            return Err(ReconError::InsufficientPoints { k, available: points.len() });
        }
        let mut seen = BTreeSet::new();
        for p in &points {
            if !seen.insert(&p.x) {
                error!("task rejected, x = {} appears twice", p.x);
                return Err(ReconError::DuplicateCoordinate(p.x.to_string()));
            }
        }
        Ok(Task { n, k, points })
    }

    pub fn from_raw(raw: RawTask) -> Result<Task> {
        let keys = raw.keys.ok_or(ReconError::MissingKeys)?;
        let mut points = Vec::with_capacity(raw.points.len());
        for (key, rp) in &raw.points {
            let x = key
                .trim()
                .parse::<Integer>()
                .map_err(|_| ReconError::InvalidCoordinate(key.clone()))?;
            let base = rp.base.parse()?;
            points.push(Point::decode(x, base, &rp.value)?);
        }
        debug!("parsed {} points, n = {}, k = {}", points.len(), keys.n, keys.k);
        Task::new(keys.n, keys.k, points)
    }

    pub fn to_raw(&self) -> RawTask {
        let points = self
            .points
            .iter()
            .map(|p| (p.x.to_string(),
                      RawPoint { base: RawBase::Text(p.base.to_string()),
                                 value: p.raw.clone() }))
            .collect();
        RawTask { keys: Some(Keys { n: self.n, k: self.k }), points }
    }

    pub fn from_toml_str(s: &str) -> Result<Task> {
        let raw: RawTask = toml::from_str(s)?;
        Task::from_raw(raw)
    }

    pub fn from_json_str(s: &str) -> Result<Task> {
        let raw: RawTask = serde_json::from_str(s)?;
        Task::from_raw(raw)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(&self.to_raw())?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_raw())?)
    }

    /// The constant term of the polynomial through the `k` smallest-x points.
    pub fn reconstruct(&self) -> Result<Integer> {
        reconstruct_secret(&self.points, self.k)
    }
}

/// Loads a task descriptor, as JSON if the file ends in `.json` and as TOML
/// otherwise.
pub fn get_task<P: AsRef<Path>>(filename: P) -> Result<Task> {
    let path = filename.as_ref();
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Task::from_json_str(&contents),
        _ => Task::from_toml_str(&contents),
    }
}
