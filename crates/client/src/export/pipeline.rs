//! Export execution: fetch, filename negotiation, local save.

use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use finchboard_shared::ApiError;
use finchboard_shared::config::ApiConfig;
use thiserror::Error;

use super::filters::ExportFilters;
use super::guard::{ExportGuard, ExportState};
use crate::client::check_status;

/// Exportable resource kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    /// One row per transaction.
    Transactions,
    /// One row per transaction split (detailed view).
    TransactionSplits,
    /// One row per budget category with totals.
    BudgetSummary,
}

impl ExportKind {
    /// Endpoint path for the kind.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Transactions => "/api/exports/transactions/csv",
            Self::TransactionSplits => "/api/exports/transactions/splits/csv",
            Self::BudgetSummary => "/api/exports/budgets/csv",
        }
    }

    /// Filename used when the server does not suggest one.
    #[must_use]
    pub const fn default_filename(self) -> &'static str {
        match self {
            Self::Transactions => "transactions.csv",
            Self::TransactionSplits => "transaction_splits.csv",
            Self::BudgetSummary => "budget_summary.csv",
        }
    }

    /// Short label for logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Transactions => "transactions",
            Self::TransactionSplits => "transaction splits",
            Self::BudgetSummary => "budget summary",
        }
    }
}

impl std::str::FromStr for ExportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "transactions" => Ok(Self::Transactions),
            "splits" => Ok(Self::TransactionSplits),
            "budgets" => Ok(Self::BudgetSummary),
            _ => Err(format!("Unknown export kind: {s}")),
        }
    }
}

/// Errors from the export pipeline.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Fetching the CSV from the server failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The payload could not be written to disk.
    #[error("Failed to save export: {0}")]
    Save(#[from] std::io::Error),
}

/// Raw CSV payload as fetched from the server.
#[derive(Debug, Clone)]
pub struct ExportPayload {
    /// The CSV bytes.
    pub bytes: Bytes,
    /// Raw `Content-Disposition` header value, if present.
    pub content_disposition: Option<String>,
}

/// A completed export on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedExport {
    /// Where the file was written.
    pub path: PathBuf,
    /// Payload size in bytes.
    pub bytes_written: usize,
}

/// Transport seam between the pipeline and the HTTP layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExportTransport: Send + Sync {
    /// Fetches the CSV payload for a kind and filter set.
    async fn fetch_csv(
        &self,
        kind: ExportKind,
        filters: &ExportFilters,
        token: &str,
    ) -> Result<ExportPayload, ApiError>;
}

/// Production transport over reqwest.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    http: reqwest::Client,
}

impl HttpTransport {
    /// Builds a transport from API configuration.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Network` if the HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }
}

#[async_trait]
impl ExportTransport for HttpTransport {
    async fn fetch_csv(
        &self,
        kind: ExportKind,
        filters: &ExportFilters,
        token: &str,
    ) -> Result<ExportPayload, ApiError> {
        let url = format!("{}{}", self.base_url, kind.path());
        let response = self
            .http
            .get(&url)
            .query(&filters.to_query())
            .bearer_auth(token)
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let response = check_status(response).await?;
        let content_disposition = response
            .headers()
            .get(reqwest::header::CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let bytes = response
            .bytes()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Ok(ExportPayload {
            bytes,
            content_disposition,
        })
    }
}

/// Runs exports for one control, at most one at a time.
#[derive(Debug)]
pub struct Exporter<T: ExportTransport> {
    transport: T,
    token: Option<String>,
    output_dir: PathBuf,
    guard: ExportGuard,
}

impl<T: ExportTransport> Exporter<T> {
    /// Creates an exporter saving into `output_dir`.
    pub fn new(transport: T, token: Option<String>, output_dir: PathBuf) -> Self {
        Self {
            transport,
            token,
            output_dir,
            guard: ExportGuard::new(),
        }
    }

    /// Current guard state for this control.
    #[must_use]
    pub fn state(&self) -> ExportState {
        self.guard.state()
    }

    /// Runs one export.
    ///
    /// Returns `Ok(None)` without any side effect when an export is
    /// already in flight on this control. A missing credential fails
    /// before any network activity. The guard slot is released exactly
    /// once on every path, including save failures.
    pub async fn run(
        &self,
        kind: ExportKind,
        filters: &ExportFilters,
    ) -> Result<Option<SavedExport>, ExportError> {
        let Some(permit) = self.guard.try_begin() else {
            tracing::debug!(kind = kind.label(), "export already in flight, ignoring");
            return Ok(None);
        };

        let Some(token) = self.token.as_deref() else {
            permit.fail();
            return Err(ExportError::Api(ApiError::Unauthenticated));
        };

        let payload = match self.transport.fetch_csv(kind, filters, token).await {
            Ok(payload) => payload,
            Err(err) => {
                permit.fail();
                return Err(err.into());
            }
        };

        let filename = filename_from_disposition(payload.content_disposition.as_deref())
            .unwrap_or_else(|| kind.default_filename().to_string());

        match self.save(&filename, &payload.bytes).await {
            Ok(saved) => {
                tracing::info!(kind = kind.label(), path = %saved.path.display(), "export saved");
                permit.complete();
                Ok(Some(saved))
            }
            Err(err) => {
                permit.fail();
                Err(ExportError::Save(err))
            }
        }
    }

    async fn save(&self, filename: &str, bytes: &Bytes) -> std::io::Result<SavedExport> {
        tokio::fs::create_dir_all(&self.output_dir).await?;
        let path = self.output_dir.join(filename);
        tokio::fs::write(&path, bytes).await?;
        Ok(SavedExport {
            path,
            bytes_written: bytes.len(),
        })
    }
}

/// Extracts the suggested filename from a `Content-Disposition` value.
///
/// Quotes are stripped; names that are empty or would escape the output
/// directory are rejected so the caller falls back to the per-kind
/// default.
fn filename_from_disposition(header: Option<&str>) -> Option<String> {
    let (_, raw) = header?.split_once("filename=")?;
    let name = raw
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .trim_matches('"')
        .trim();
    if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
        return None;
    }
    Some(name.to_string())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use tokio::sync::Notify;

    use super::*;

    fn payload(body: &str, disposition: Option<&str>) -> ExportPayload {
        ExportPayload {
            bytes: Bytes::copy_from_slice(body.as_bytes()),
            content_disposition: disposition.map(str::to_string),
        }
    }

    #[test]
    fn test_kind_paths_and_defaults() {
        assert_eq!(
            ExportKind::Transactions.path(),
            "/api/exports/transactions/csv"
        );
        assert_eq!(
            ExportKind::TransactionSplits.path(),
            "/api/exports/transactions/splits/csv"
        );
        assert_eq!(ExportKind::BudgetSummary.path(), "/api/exports/budgets/csv");
        assert_eq!(
            ExportKind::TransactionSplits.default_filename(),
            "transaction_splits.csv"
        );
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!(
            "transactions".parse::<ExportKind>().unwrap(),
            ExportKind::Transactions
        );
        assert_eq!(
            "splits".parse::<ExportKind>().unwrap(),
            ExportKind::TransactionSplits
        );
        assert_eq!(
            "budgets".parse::<ExportKind>().unwrap(),
            ExportKind::BudgetSummary
        );
        assert!("pdf".parse::<ExportKind>().is_err());
    }

    #[test]
    fn test_filename_from_disposition() {
        assert_eq!(
            filename_from_disposition(Some(r#"attachment; filename="transactions_2026.csv""#)),
            Some("transactions_2026.csv".to_string())
        );
        assert_eq!(
            filename_from_disposition(Some("attachment; filename=plain.csv")),
            Some("plain.csv".to_string())
        );
        assert_eq!(filename_from_disposition(Some("attachment")), None);
        assert_eq!(filename_from_disposition(None), None);
    }

    #[test]
    fn test_filename_escaping_names_rejected() {
        assert_eq!(
            filename_from_disposition(Some(r#"attachment; filename="../../etc/passwd""#)),
            None
        );
        assert_eq!(
            filename_from_disposition(Some(r#"attachment; filename="a/b.csv""#)),
            None
        );
        assert_eq!(
            filename_from_disposition(Some(r#"attachment; filename="""#)),
            None
        );
    }

    #[tokio::test]
    async fn test_unauthenticated_never_touches_network() {
        let mut transport = MockExportTransport::new();
        transport.expect_fetch_csv().times(0);
        let exporter = Exporter::new(transport, None, std::env::temp_dir());

        let result = exporter
            .run(ExportKind::Transactions, &ExportFilters::default())
            .await;
        assert!(matches!(
            result,
            Err(ExportError::Api(ApiError::Unauthenticated))
        ));
        assert_eq!(exporter.state(), ExportState::Failed);
    }

    #[tokio::test]
    async fn test_successful_export_saves_server_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut transport = MockExportTransport::new();
        transport.expect_fetch_csv().times(1).returning(|_, _, _| {
            Ok(payload(
                "id,amount\n1,100\n",
                Some(r#"attachment; filename="transactions_2026-01_2026-06.csv""#),
            ))
        });
        let exporter = Exporter::new(
            transport,
            Some("token-123".to_string()),
            dir.path().to_path_buf(),
        );

        let saved = exporter
            .run(ExportKind::Transactions, &ExportFilters::default())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            saved.path,
            dir.path().join("transactions_2026-01_2026-06.csv")
        );
        assert_eq!(
            std::fs::read_to_string(&saved.path).unwrap(),
            "id,amount\n1,100\n"
        );
        assert_eq!(exporter.state(), ExportState::Done);
    }

    #[tokio::test]
    async fn test_missing_header_falls_back_to_default_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut transport = MockExportTransport::new();
        transport
            .expect_fetch_csv()
            .times(1)
            .returning(|_, _, _| Ok(payload("a,b\n", None)));
        let exporter = Exporter::new(
            transport,
            Some("token-123".to_string()),
            dir.path().to_path_buf(),
        );

        let saved = exporter
            .run(ExportKind::BudgetSummary, &ExportFilters::default())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(saved.path, dir.path().join("budget_summary.csv"));
    }

    #[tokio::test]
    async fn test_server_rejection_carries_diagnostic() {
        let mut transport = MockExportTransport::new();
        transport.expect_fetch_csv().times(1).returning(|_, _, _| {
            Err(ApiError::ServerRejected {
                status: 500,
                detail: "export worker crashed".to_string(),
            })
        });
        let exporter = Exporter::new(
            transport,
            Some("token-123".to_string()),
            std::env::temp_dir(),
        );

        let err = exporter
            .run(ExportKind::Transactions, &ExportFilters::default())
            .await
            .unwrap_err();
        match err {
            ExportError::Api(ApiError::ServerRejected { status, detail }) => {
                assert_eq!(status, 500);
                assert_eq!(detail, "export worker crashed");
            }
            other => panic!("expected ServerRejected, got {other:?}"),
        }
        assert_eq!(exporter.state(), ExportState::Failed);
    }

    /// Transport that blocks inside the fetch until released, for
    /// exercising the single-flight guard.
    struct StallingTransport {
        entered: Arc<Notify>,
        release: Arc<Notify>,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl ExportTransport for StallingTransport {
        async fn fetch_csv(
            &self,
            _kind: ExportKind,
            _filters: &ExportFilters,
            _token: &str,
        ) -> Result<ExportPayload, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.entered.notify_one();
            self.release.notified().await;
            Ok(payload("a,b\n1,2\n", None))
        }
    }

    #[tokio::test]
    async fn test_second_invocation_is_noop_while_first_pending() {
        let dir = tempfile::tempdir().unwrap();
        let entered = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let exporter = Arc::new(Exporter::new(
            StallingTransport {
                entered: Arc::clone(&entered),
                release: Arc::clone(&release),
                calls: Arc::clone(&calls),
            },
            Some("token-123".to_string()),
            dir.path().to_path_buf(),
        ));

        let first = tokio::spawn({
            let exporter = Arc::clone(&exporter);
            async move {
                exporter
                    .run(ExportKind::Transactions, &ExportFilters::default())
                    .await
            }
        });
        entered.notified().await;
        assert_eq!(exporter.state(), ExportState::InFlight);

        // Second click while the first is pending: no-op, no second fetch.
        let second = exporter
            .run(ExportKind::Transactions, &ExportFilters::default())
            .await
            .unwrap();
        assert!(second.is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        release.notify_one();
        let saved = first.await.unwrap().unwrap().unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
        assert_eq!(saved.bytes_written, 8);
    }
}
