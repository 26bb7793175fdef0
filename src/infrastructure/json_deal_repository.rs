use crate::domain::{entities::Deal, repositories::DealRepository, DealError};
use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Reads deals from a JSON document shaped either as `{ "deals": [...] }` or
/// as a bare array of deal records.
pub struct JsonDealRepository {
    path: PathBuf,
}

impl JsonDealRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse_deals(&self, content: &str) -> Result<Vec<Deal>, DealError> {
        let document: Value = serde_json::from_str(content).map_err(|source| DealError::Parse {
            path: self.path.clone(),
            source,
        })?;

        let records = match document {
            Value::Array(records) => records,
            Value::Object(mut object) => match object.remove("deals") {
                Some(Value::Array(records)) => records,
                _ => {
                    return Err(DealError::UnexpectedShape {
                        path: self.path.clone(),
                    });
                }
            },
            _ => {
                return Err(DealError::UnexpectedShape {
                    path: self.path.clone(),
                });
            }
        };

        records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                serde_json::from_value(record)
                    .map_err(|source| DealError::MalformedDeal { index, source })
            })
            .collect()
    }
}

#[async_trait]
impl DealRepository for JsonDealRepository {
    async fn load_deals(&self) -> Result<Vec<Deal>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| DealError::Io {
                path: self.path.clone(),
                source,
            })?;

        let deals = self.parse_deals(&content)?;
        tracing::info!("Loaded {} deals from {}", deals.len(), self.path.display());
        Ok(deals)
    }
}

#[cfg(test)]
#[path = "json_deal_repository_test.rs"]
mod tests;
