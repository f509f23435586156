//! Reading/writing traced curves and metric histories in CSV format.
pub use csv::Error;
use csv::{ReaderBuilder, Writer};
use serde::{de::DeserializeOwned, Serialize};
use std::io::Cursor;

/// Dump a traced curve or metric history to a headerless CSV string.
pub fn dump_csv<S>(samples: &[S]) -> Result<String, Box<dyn std::error::Error>>
where
    S: Serialize,
{
    let mut w = Writer::from_writer(Vec::new());
    samples.iter().try_for_each(|s| w.serialize(s))?;
    Ok(String::from_utf8(w.into_inner()?)?)
}

/// Parse a headerless CSV string back into samples.
pub fn parse_csv<D>(s: &str) -> Result<Vec<D>, Error>
where
    D: DeserializeOwned,
{
    ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .from_reader(Cursor::new(s))
        .deserialize()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Point;
    use crate::metric::MetricPoint;

    #[test]
    fn trace_round_trip() {
        let curve = vec![Point::new(1., 2.), Point::new(-3.5, 0.25)];
        let s = dump_csv(&curve).unwrap();
        assert_eq!(parse_csv::<Point>(&s).unwrap(), curve);
    }

    #[test]
    fn history_round_trip() {
        let history = vec![MetricPoint { angle: 0.5, value: 330. }];
        let s = dump_csv(&history).unwrap();
        assert_eq!(parse_csv::<MetricPoint>(&s).unwrap(), history);
    }

    #[test]
    fn comments_are_skipped() {
        let parsed = parse_csv::<Point>("# traced curve\n1.0,2.0\n").unwrap();
        assert_eq!(parsed, vec![Point::new(1., 2.)]);
    }
}
