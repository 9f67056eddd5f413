//! JSON bodies returned by the HTTP API.

use crate::pipeline::AnalysisReport;
use doccheck_domain::{Contradiction, DocumentKeywordMap};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// Name reported by the health endpoint
pub const SERVICE_NAME: &str = "Smart Doc Checker";

/// Timestamp format of `analysis_time`
const ANALYSIS_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A JSON object whose keys keep insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ordered<V>(pub Vec<(String, V)>);

impl<V: Serialize> Serialize for Ordered<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl From<&DocumentKeywordMap> for Ordered<String> {
    fn from(keywords: &DocumentKeywordMap) -> Self {
        Ordered(
            keywords
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

/// One contradiction as rendered in the response
#[derive(Debug, Clone, Serialize)]
pub struct ContradictionView {
    /// Conflicting keyword
    pub keyword: String,
    /// Document id → value
    pub documents: Ordered<String>,
    /// Distinct values in first-seen order
    pub values: Vec<String>,
    /// "high" or "medium"
    pub severity: String,
}

impl From<Contradiction> for ContradictionView {
    fn from(c: Contradiction) -> Self {
        Self {
            keyword: c.keyword,
            documents: Ordered(c.documents),
            values: c.values,
            severity: c.severity.as_str().to_string(),
        }
    }
}

/// Successful `POST /upload` body
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResponse {
    /// Always "success"
    pub status: String,
    /// Number of files analyzed
    pub files_processed: usize,
    /// Document id → keyword → value
    pub documents: Ordered<Ordered<String>>,
    /// Detected contradictions
    pub contradictions: Vec<ContradictionView>,
    /// Local completion time, `YYYY-MM-DD HH:MM:SS`
    pub analysis_time: String,
}

impl From<AnalysisReport> for AnalysisResponse {
    fn from(report: AnalysisReport) -> Self {
        let documents = report
            .documents
            .iter()
            .map(|(id, keywords)| (id.to_string(), Ordered::from(keywords)))
            .collect();

        Self {
            status: "success".to_string(),
            files_processed: report.files_processed,
            documents: Ordered(documents),
            contradictions: report
                .contradictions
                .into_iter()
                .map(ContradictionView::from)
                .collect(),
            analysis_time: report
                .completed_at
                .format(ANALYSIS_TIME_FORMAT)
                .to_string(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
    /// Service name
    pub service: String,
}

impl HealthCheckResponse {
    /// The fixed healthy response
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
        }
    }
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use doccheck_domain::{CorpusKeywordMap, Severity};

    #[test]
    fn test_ordered_keeps_insertion_order() {
        let ordered = Ordered(vec![
            ("zeta".to_string(), 1),
            ("alpha".to_string(), 2),
        ]);
        assert_eq!(serde_json::to_string(&ordered).unwrap(), r#"{"zeta":1,"alpha":2}"#);
    }

    #[test]
    fn test_contradiction_view() {
        let contradiction = Contradiction::new(
            "budget",
            vec![
                ("b.txt".to_string(), "$7000".to_string()),
                ("a.txt".to_string(), "$5000".to_string()),
            ],
            Severity::High,
        );
        let json = serde_json::to_string(&ContradictionView::from(contradiction)).unwrap();
        assert_eq!(
            json,
            r#"{"keyword":"budget","documents":{"b.txt":"$7000","a.txt":"$5000"},"values":["$7000","$5000"],"severity":"high"}"#
        );
    }

    #[test]
    fn test_analysis_response_from_report() {
        let mut documents = CorpusKeywordMap::new();
        documents.insert("z.txt", [("goal", "ship")].into_iter().collect::<DocumentKeywordMap>());
        documents.insert("a.txt", DocumentKeywordMap::new());

        let report = AnalysisReport {
            files_processed: 2,
            documents,
            contradictions: Vec::new(),
            completed_at: Local.with_ymd_and_hms(2024, 3, 1, 9, 5, 7).unwrap(),
        };

        let json = serde_json::to_string(&AnalysisResponse::from(report)).unwrap();
        assert_eq!(
            json,
            r#"{"status":"success","files_processed":2,"documents":{"z.txt":{"goal":"ship"},"a.txt":{}},"contradictions":[],"analysis_time":"2024-03-01 09:05:07"}"#
        );
    }

    #[test]
    fn test_health_response() {
        let json = serde_json::to_string(&HealthCheckResponse::healthy()).unwrap();
        assert_eq!(json, r#"{"status":"healthy","service":"Smart Doc Checker"}"#);
    }
}
