//! JPL Horizons ephemeris client
//!
//! Fetches a single state vector (km, km/s) per body using the Horizons
//! JSON API in `VECTORS` mode. The response wraps a plain-text report in a
//! `result` field; the numbers live between the `$$SOE` and `$$EOE` markers.

use log::debug;
use serde::Deserialize;

use crate::catalog::error::{CatalogError, CatalogResult};
use crate::catalog::EphemerisSource;
use crate::simulation::states::NVec3;

pub const HORIZONS_URL: &str = "https://ssd.jpl.nasa.gov/api/horizons.api";

#[derive(Debug, Deserialize)]
struct HorizonsResponse {
    result: Option<String>,
}

pub struct HorizonsClient {
    client: reqwest::blocking::Client,
    base_url: String,
    start_time: String, // window start, YYYY-MM-DD
    stop_time: String, // window stop, one step after start
}

impl HorizonsClient {
    pub fn new() -> Self {
        Self::with_epoch("2026-02-01", "2026-02-02")
    }

    /// Query vectors for a one-step window `[start, stop]`
    pub fn with_epoch(start: &str, stop: &str) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: HORIZONS_URL.to_string(),
            start_time: start.to_string(),
            stop_time: stop.to_string(),
        }
    }

    fn fetch_report(&self, body_id: &str, center: &str) -> CatalogResult<String> {
        let command = format!("'{}'", body_id);
        let center = format!("'{}'", center);
        let params = [
            ("format", "json"),
            ("COMMAND", command.as_str()),
            ("EPHEM_TYPE", "VECTORS"),
            ("CENTER", center.as_str()),
            ("START_TIME", self.start_time.as_str()),
            ("STOP_TIME", self.stop_time.as_str()),
            ("STEP_SIZE", "1d"),
            ("OUT_UNITS", "KM-S"),
            ("VEC_TABLE", "2"),
            ("VEC_LABELS", "NO"),
        ];

        let response = self
            .client
            .get(&self.base_url)
            .query(&params)
            .send()
            .map_err(|e| CatalogError::Retrieval(format!("request for body {} failed: {}", body_id, e)))?;

        if !response.status().is_success() {
            return Err(CatalogError::Retrieval(format!(
                "horizons returned status {} for body {}",
                response.status(),
                body_id
            )));
        }

        let body = response
            .text()
            .map_err(|e| CatalogError::Retrieval(format!("reading response for body {} failed: {}", body_id, e)))?;

        report_from_json(&body).map_err(|e| CatalogError::Format(format!("body {}: {}", body_id, e)))
    }
}

impl Default for HorizonsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl EphemerisSource for HorizonsClient {
    fn state_vector(&self, body_id: &str, center: &str) -> CatalogResult<(NVec3, NVec3)> {
        debug!("horizons: body {} center {}", body_id, center);
        let report = self.fetch_report(body_id, center)?;
        parse_vectors(&report)
            .map_err(|e| CatalogError::Format(format!("body {}: {}", body_id, e)))
    }
}

/// Unwrap the plain-text report from a Horizons JSON response
fn report_from_json(body: &str) -> Result<String, String> {
    let data: HorizonsResponse =
        serde_json::from_str(body).map_err(|e| format!("undecodable response: {}", e))?;
    data.result.ok_or_else(|| "response has no result".to_string())
}

/// `[+-]?d+.d+E[+-]d+`
fn is_sci(tok: &str) -> bool {
    let tok = tok.strip_prefix(['+', '-']).unwrap_or(tok);
    let Some((mantissa, exponent)) = tok.split_once('E') else {
        return false;
    };
    let Some((int, frac)) = mantissa.split_once('.') else {
        return false;
    };
    let Some(exp_digits) = exponent.strip_prefix(['+', '-']) else {
        return false;
    };

    let digits = |s: &str| !s.is_empty() && s.bytes().all(|c| c.is_ascii_digit());
    digits(int) && digits(frac) && digits(exp_digits)
}

/// Extract `(position, velocity)` from the first record of a Horizons
/// vector report
pub fn parse_vectors(report: &str) -> Result<(NVec3, NVec3), String> {
    let start = report
        .find("$$SOE")
        .ok_or_else(|| "no $$SOE marker in report".to_string())?
        + "$$SOE".len();
    let len = report[start..]
        .find("$$EOE")
        .ok_or_else(|| "no $$EOE marker in report".to_string())?;
    let block = &report[start..start + len];

    let numbers: Vec<f64> = block
        .split(|c: char| c.is_whitespace() || c == '=' || c == ',')
        .filter(|tok| is_sci(tok))
        .take(6)
        .map(|tok| tok.parse::<f64>().map_err(|e| format!("bad number {}: {}", tok, e)))
        .collect::<Result<_, _>>()?;

    if numbers.len() < 6 {
        return Err(format!("expected 6 vector components, found {}", numbers.len()));
    }

    Ok((
        NVec3::new(numbers[0], numbers[1], numbers[2]),
        NVec3::new(numbers[3], numbers[4], numbers[5]),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = "\
*******************************************************************************
Ephemeris / API_USER
$$SOE
2461072.500000000 = A.D. 2026-Feb-01 00:00:00.0000 TDB
 -1.024733611578455E+08  1.045211452183117E+08 -4.507163617420099E+03
 -2.152043853862614E+01 -2.071127391485913E+01  1.548913270493282E-03
2461073.500000000 = A.D. 2026-Feb-02 00:00:00.0000 TDB
 -1.043211789412378E+08  1.027123156721837E+08 -4.372837410912223E+03
 -2.124211890123401E+01 -2.104123781290313E+01  1.563321120011922E-03
$$EOE
*******************************************************************************
";

    #[test]
    fn parses_first_record() {
        let (x, v) = parse_vectors(REPORT).unwrap();
        assert_eq!(x, NVec3::new(-1.024733611578455E+08, 1.045211452183117E+08, -4.507163617420099E+03));
        assert_eq!(v, NVec3::new(-2.152043853862614E+01, -2.071127391485913E+01, 1.548913270493282E-03));
    }

    #[test]
    fn labelled_components_are_accepted() {
        let report = "$$SOE\n X =-1.5E+08 Y = 2.0E+07 Z = 0.0E+00\n VX= 1.0E+00 VY=-3.0E+01 VZ= 1.0E-03\n$$EOE";
        let (x, v) = parse_vectors(report).unwrap();
        assert_eq!(x, NVec3::new(-1.5e8, 2.0e7, 0.0));
        assert_eq!(v, NVec3::new(1.0, -30.0, 1.0e-3));
    }

    #[test]
    fn report_is_unwrapped_from_json() {
        let body = serde_json::json!({ "signature": { "version": "1.2" }, "result": REPORT }).to_string();
        let report = report_from_json(&body).unwrap();
        assert_eq!(report, REPORT);
        assert!(parse_vectors(&report).is_ok());
    }

    #[test]
    fn json_without_result_fails() {
        assert!(report_from_json(r#"{ "error": "No matches found." }"#).is_err());
        assert!(report_from_json("<html>busy</html>").is_err());
    }

    #[test]
    fn missing_markers_fail() {
        assert!(parse_vectors("no data here").is_err());
        assert!(parse_vectors("$$SOE 1.0E+00 2.0E+00").is_err());
    }

    #[test]
    fn short_block_fails() {
        let report = "$$SOE\n 1.0E+00 2.0E+00 3.0E+00\n 4.0E+00\n$$EOE";
        assert!(parse_vectors(report).is_err());
    }

    #[test]
    fn julian_dates_are_not_components() {
        assert!(!is_sci("2461072.500000000"));
        assert!(!is_sci("TDB"));
        assert!(is_sci("+1.0E-03"));
    }
}
