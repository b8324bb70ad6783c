//! `Dashboard` — catalog + store + optional cache behind one report surface.

use std::sync::Arc;

use tracing::{info, warn};

use foodshare_core::config::CacheConfig;
use foodshare_core::errors::error_code::FoodshareErrorCode;
use foodshare_core::traits::IReportStore;
use foodshare_core::types::TabularResult;

use crate::batch::{BatchReport, ReportOutcome};
use crate::cache::QueryCache;
use crate::catalog::{Catalog, ReportDef};
use crate::errors::ReportError;
use crate::render::{render_named, Rendered};

pub struct Dashboard<S: IReportStore> {
    store: S,
    catalog: Catalog,
    cache: Option<QueryCache>,
}

impl<S: IReportStore> Dashboard<S> {
    /// Standard catalog, no cache.
    pub fn new(store: S) -> Self {
        Self {
            store,
            catalog: Catalog::standard(),
            cache: None,
        }
    }

    /// Standard catalog, cache per `[cache]` settings.
    pub fn from_config(store: S, config: &CacheConfig) -> Self {
        let dashboard = Self::new(store);
        if config.effective_enabled() {
            dashboard.with_cache(QueryCache::new(config.effective_max_entries()))
        } else {
            dashboard
        }
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_cache(mut self, cache: QueryCache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Raw result of one report.
    pub fn run(&self, report_id: &str) -> Result<Arc<TabularResult>, ReportError> {
        let report = self.catalog.resolve(report_id)?;
        self.run_def(report)
    }

    pub fn render(&self, report_id: &str) -> Result<Rendered, ReportError> {
        self.render_with_filename(report_id, None)
    }

    pub fn render_with_filename(
        &self,
        report_id: &str,
        filename: Option<&str>,
    ) -> Result<Rendered, ReportError> {
        let report = self.catalog.resolve(report_id)?;
        let result = self.run_def(report)?;
        render_named(report.id, &result, filename)
    }

    /// Render every catalog report. One report failing does not stop the rest.
    pub fn render_all(&self) -> BatchReport {
        let outcomes: Vec<ReportOutcome> = self
            .catalog
            .iter()
            .map(|report| {
                let result = self
                    .run_def(report)
                    .and_then(|rows| render_named(report.id, &rows, None));
                if let Err(e) = &result {
                    warn!(report = report.id, code = e.error_code(), error = %e, "report failed");
                }
                ReportOutcome {
                    report_id: report.id,
                    result,
                }
            })
            .collect();

        let batch = BatchReport { outcomes };
        info!(
            succeeded = batch.succeeded(),
            failed = batch.failed(),
            "rendered all reports"
        );
        batch
    }

    /// Drop every cached result so the next render re-reads the store.
    pub fn refresh(&self) {
        if let Some(cache) = &self.cache {
            cache.invalidate_all();
            info!("report cache cleared");
        }
    }

    fn run_def(&self, report: &ReportDef) -> Result<Arc<TabularResult>, ReportError> {
        let load = || self.store.run_query(report.sql);
        let result = match &self.cache {
            Some(cache) => cache.get_or_load(report.sql, load),
            None => load().map(Arc::new),
        };
        result.map_err(|e| ReportError::store(report.id, e))
    }
}
